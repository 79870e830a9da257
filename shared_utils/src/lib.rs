//! Small helpers shared across workspace crates.

use thiserror::Error;

/// Errors related to application configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Reads an environment variable, returning a structured error if it's missing.
///
/// This is a thin wrapper around `std::env::var` that provides a more
/// ergonomic and specific error type for missing variables.
pub fn get_env_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, falling back to `default` when unset.
pub fn env_var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_var_yields_structured_error() {
        let err = get_env_var("SHARED_UTILS_DOES_NOT_EXIST").unwrap_err();
        assert!(err.to_string().contains("SHARED_UTILS_DOES_NOT_EXIST"));
    }

    #[test]
    fn fallback_applies_when_unset() {
        assert_eq!(env_var_or("SHARED_UTILS_DOES_NOT_EXIST", "x.db"), "x.db");
    }
}
