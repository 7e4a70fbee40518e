/// Errors from the query layer, with their CLI exit codes.
use thiserror::Error;

use crate::api::ApiError;

/// Everything that can end a command early.
#[derive(Debug, Error)]
pub enum RickyError {
    /// `--filter` was not of the form `key=value`.
    #[error("Malformed filter '{input}': expected key=value, for example species=Robot")]
    MalformedFilter {
        /// The raw argument as given.
        input: String,
    },

    /// A command that needs `--filter` was run without one.
    #[error("Please provide a filter, for example --filter species=Robot")]
    MissingFilter,

    /// Fetching from the upstream API failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RickyError {
    /// Return the CLI exit code for this error.
    ///
    /// 2 for usage problems (matching clap's own usage errors), 1 for fetch failures.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MalformedFilter { .. }
            | Self::MissingFilter
            | Self::Api(ApiError::InvalidBaseUrl { .. }) => 2,
            Self::Api(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_exit_2() {
        assert_eq!(RickyError::MissingFilter.exit_code(), 2);
        let malformed = RickyError::MalformedFilter {
            input: "species".to_owned(),
        };
        assert_eq!(malformed.exit_code(), 2);
    }

    #[test]
    fn test_fetch_errors_exit_1() {
        let err = RickyError::from(ApiError::Status {
            url: "https://example.com/api/character/?page=1".to_owned(),
            status: 502,
        });
        assert_eq!(err.exit_code(), 1);
    }
}
