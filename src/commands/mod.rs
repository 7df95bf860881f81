pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod read;
pub mod reset;

use crate::error::{TrefError, TrefResult};

/// Rejects an empty tool name before anything touches the filesystem.
pub(crate) fn require_name<'a>(name: &'a str, verb: &str) -> TrefResult<&'a str> {
    if name.trim().is_empty() {
        return Err(TrefError::UsageError(format!(
            "Please provide a tool name to {}.",
            verb
        )));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name("git", "read").unwrap(), "git");
        match require_name("", "delete") {
            Err(TrefError::UsageError(msg)) => {
                assert_eq!(msg, "Please provide a tool name to delete.")
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(require_name("   ", "add").is_err());
    }
}
