//! Exit codes for the CLI

use mergelog_core::MergelogError;

/// General error
pub const ERROR: u8 = 1;

/// Configuration error
pub const CONFIG_ERROR: u8 = 2;

/// Validation error
pub const VALIDATION_ERROR: u8 = 5;

/// A command finished after reporting its own failure
#[derive(Debug, thiserror::Error)]
#[error("command failed with exit code {code}")]
pub struct CommandExit {
    /// Process exit code
    pub code: u8,
}

impl CommandExit {
    /// Exit with the given code
    pub fn new(code: u8) -> Self {
        Self { code }
    }
}

/// Exit code for an error returned by a command
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    if let Some(exit) = err.downcast_ref::<CommandExit>() {
        return exit.code;
    }
    match err.downcast_ref::<MergelogError>() {
        Some(MergelogError::Config(_)) => CONFIG_ERROR,
        _ => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergelog_core::ConfigError;

    #[test]
    fn test_command_exit_code() {
        let err = anyhow::Error::new(CommandExit::new(VALIDATION_ERROR));
        assert_eq!(exit_code_for(&err), VALIDATION_ERROR);
    }

    #[test]
    fn test_config_error_code() {
        let err = anyhow::Error::new(MergelogError::from(ConfigError::NotFound(
            "mergelog.yaml".into(),
        )));
        assert_eq!(exit_code_for(&err), CONFIG_ERROR);
    }

    #[test]
    fn test_other_error_code() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("boom")), ERROR);
    }
}
