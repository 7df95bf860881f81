use std::error::Error;
use std::io::Write;

use clap::{Args, Parser};

use crate::commands;
use crate::config::{ConfigPaths, DEFAULT_BUNDLE_URL};
use crate::editor::Editor;
use crate::error::{TrefError, TrefResult};

pub const USAGE: &str = "Usage: tref <toolname> [--read|--edit|--add|--delete]";

const EXAMPLES: &str = "\
Examples:
  tref git --read       # View cheat sheet for git
  tref curl --edit      # Edit cheat sheet for curl
  tref make --add       # Create a new cheat sheet for make
  tref ls --delete      # Delete cheat sheet for ls
  tref --list           # List available cheat sheets
  tref --reset          # Replace all cheat sheets with the defaults";

#[derive(Parser, Debug)]
#[command(
    name = "tref",
    author,
    version,
    about = "Terminal cheat-sheet manager",
    override_usage = "tref <toolname> [--read|--edit|--add|--delete]\n       tref [--list|--reset|--help]",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Tool whose cheat sheet to operate on
    pub tool: Option<String>,

    #[command(flatten)]
    pub mode: ModeFlags,

    /// Replace all cheat sheets with the default bundle
    #[arg(long, visible_alias = "get-default", conflicts_with_all = ["tool", "list", "ModeFlags"])]
    pub reset: bool,

    /// Fetch the bundle from this URL instead of the default one
    #[arg(long, value_name = "URL", requires = "reset")]
    pub url: Option<String>,

    /// List available cheat sheets
    #[arg(long, conflicts_with_all = ["tool", "ModeFlags"])]
    pub list: bool,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct ModeFlags {
    /// Read an existing cheat sheet (default)
    #[arg(long)]
    pub read: bool,

    /// Edit an existing cheat sheet
    #[arg(long)]
    pub edit: bool,

    /// Create a new cheat sheet
    #[arg(long)]
    pub add: bool,

    /// Delete an existing cheat sheet
    #[arg(long)]
    pub delete: bool,
}

/// One command per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Read(String),
    Edit(String),
    Add(String),
    Delete(String),
    List,
    Reset { url: String },
}

impl Cli {
    /// Resolves the parsed flags into a single action without touching the filesystem.
    pub fn action(&self) -> TrefResult<Action> {
        if self.reset {
            let url = self
                .url
                .clone()
                .unwrap_or_else(|| DEFAULT_BUNDLE_URL.to_string());
            return Ok(Action::Reset { url });
        }
        if self.list {
            return Ok(Action::List);
        }

        let no_mode = !(self.mode.read || self.mode.edit || self.mode.add || self.mode.delete);
        let tool = match &self.tool {
            Some(tool) => tool.clone(),
            None if no_mode => return Err(TrefError::UsageError(USAGE.to_string())),
            None => String::new(),
        };

        let action = if self.mode.edit {
            Action::Edit(tool)
        } else if self.mode.add {
            Action::Add(tool)
        } else if self.mode.delete {
            Action::Delete(tool)
        } else {
            Action::Read(tool)
        };
        Ok(action)
    }
}

/// What a command needs from the outside world.
pub struct Context<'a> {
    pub paths: &'a dyn ConfigPaths,
    pub editor: &'a Editor,
}

pub fn dispatch(action: &Action, ctx: &Context, out: &mut dyn Write) -> TrefResult<()> {
    log::debug!("Dispatching {:?}", action);
    match action {
        Action::Read(name) => commands::read::read_sheet(name, ctx.paths, out),
        Action::Edit(name) => commands::edit::edit_sheet(name, ctx.paths, ctx.editor),
        Action::Add(name) => commands::add::add_sheet(name, ctx.paths, ctx.editor),
        Action::Delete(name) => commands::delete::delete_sheet(name, ctx.paths, out),
        Action::List => commands::list::list_sheets(ctx.paths, out),
        Action::Reset { url } => commands::reset::reset_sheets(url, ctx.paths, out),
    }
}

/// Runs a parsed invocation and writes any error to `out`. Returns the exit code.
pub fn execute(cli: &Cli, ctx: &Context, out: &mut dyn Write) -> u8 {
    let result = cli.action().and_then(|action| dispatch(&action, ctx, out));
    match result {
        Ok(()) => 0,
        Err(e) => {
            log::debug!("Command failed: {:?}", e);
            report_error(&e, out);
            1
        }
    }
}

/// Exit code for a failed parse: help and version are successes, anything else is a usage error.
pub fn clap_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Prints the error and each of its sources.
pub fn report_error(err: &TrefError, out: &mut dyn Write) {
    let _ = match err {
        TrefError::UsageError(msg) => writeln!(out, "{}", msg),
        _ => writeln!(out, "Error: {}", err),
    };
    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(out, "  caused by: {}", cause);
        source = cause.source();
    }
}
