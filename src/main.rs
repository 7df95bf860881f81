use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use tref::cli::{self, Cli, Context};
use tref::config::SystemConfigPaths;
use tref::editor::Editor;

fn init_logger(verbose: u8) {
    // Set log level based on verbosity; RUST_LOG still wins when set
    let log_level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .parse_env("RUST_LOG")
        .init();
    log::debug!("Logger initialized at {} level", log_level);
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = write!(io::stdout(), "{}", e.render());
            return ExitCode::from(cli::clap_exit_code(&e));
        }
    };

    init_logger(cli.verbose);

    let paths = SystemConfigPaths;
    let editor = Editor::from_env();
    log::debug!("Using editor: {}", editor.program());
    let ctx = Context {
        paths: &paths,
        editor: &editor,
    };

    let mut stdout = io::stdout();
    let code = cli::execute(&cli, &ctx, &mut stdout);
    let _ = stdout.flush();
    ExitCode::from(code)
}
