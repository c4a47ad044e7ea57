//! Outcome of a front end's setup flow.

use crate::ConfigError;
use derive_more::{Display, Error};

/// Why a setup flow produced no [`MatchConfig`](crate::MatchConfig).
///
/// `Invalid` is recoverable: show the message and ask again. `Cancelled`
/// ends the match attempt without creating any match state.
#[derive(Debug, Clone, Display, Error)]
pub enum SetupError {
    /// The entered values failed validation.
    #[display("{}", _0)]
    Invalid(ConfigError),
    /// The user abandoned setup.
    #[display("Game setup was cancelled.")]
    Cancelled,
}

impl SetupError {
    /// Returns true if the user walked away from setup.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SetupError::Cancelled)
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Invalid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchConfig;

    #[test]
    fn test_invalid_config_converts() {
        let result: Result<MatchConfig, SetupError> =
            MatchConfig::new(" ", "Ben", 3).map_err(SetupError::from);
        let err = result.unwrap_err();
        assert!(!err.is_cancelled());
        assert!(err.to_string().contains("Player names cannot be empty."));
    }

    #[test]
    fn test_cancelled_message() {
        let err = SetupError::Cancelled;
        assert!(err.is_cancelled());
        assert_eq!(err.to_string(), "Game setup was cancelled.");
    }
}
