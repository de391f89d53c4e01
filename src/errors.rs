//! Errors handling

use std::fmt;

/// Why a run stopped without completing its dispatch.
///
/// Every variant is terminal: the binary logs it and exits with a non-zero
/// status. A run that is skipped (not under Actions, not an `issues` event)
/// is not an error.
#[derive(Debug)]
pub enum RunError {
    /// The event payload could not be located, read or decoded.
    Decode(anyhow::Error),
    /// `GITHUB_TOKEN` is empty.
    MissingToken,
    /// The configuration is present but malformed.
    InvalidConfig(String),
    /// An action the bot refuses to handle.
    UnexpectedAction(String),
    /// A GitHub API call failed.
    Api(anyhow::Error),
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Decode(e) | RunError::Api(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Decode(e) => write!(f, "Failed getting issue information: {e:#}"),
            RunError::MissingToken => f.write_str(
                "Token was not provided, please define the Github action 'with' \
                 'github-token' as '${{ secrets.GITHUB_TOKEN }}'",
            ),
            RunError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
            RunError::UnexpectedAction(action) => write!(f, "Unexpected issue action {action}"),
            RunError::Api(e) => write!(f, "Failed commenting: {e:#}"),
        }
    }
}

impl RunError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
