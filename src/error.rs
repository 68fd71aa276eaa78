use thiserror::Error;
use tracing::{error, warn};

use crate::shortcuts::ChordParseError;

/// Domain-specific errors for shortcut tables and resolution.
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("command '{0}' is defined more than once")]
    DuplicateCommand(String),

    #[error("no keymap registered for context '{0}'")]
    UnknownContext(String),

    #[error("invalid chord: {0}")]
    Parse(#[from] ChordParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShortcutError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller can carry on.
///
/// # Examples
///
/// ```ignore
/// use purr_shortcuts::error::ResultExt;
///
/// let config = read_config().warn_on_err().unwrap_or_default();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_converts_into_shortcut_error() {
        let err: ShortcutError = ChordParseError::MissingKey.into();
        assert!(matches!(err, ShortcutError::Parse(ChordParseError::MissingKey)));
        assert_eq!(err.to_string(), "invalid chord: chord has no key, only modifiers");
    }

    #[test]
    fn log_err_passes_ok_through() {
        let ok: std::result::Result<u8, ShortcutError> = Ok(3);
        assert_eq!(ok.log_err(), Some(3));

        let err: std::result::Result<u8, ShortcutError> =
            Err(ShortcutError::UnknownContext("patch".into()));
        assert_eq!(err.warn_on_err(), None);
    }
}
