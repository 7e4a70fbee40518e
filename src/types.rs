/// Shared output types handed from commands to the output layer.
///
/// Commands never format anything themselves; they return a [`Report`] and
/// `cli::output` decides how it looks.
use serde::{Deserialize, Serialize};

use crate::api::{Character, Episode, Location};

/// The structured result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Characters(Vec<Character>),
    Locations(Vec<Location>),
    Episodes(Vec<Episode>),
    /// A bare number: `--count`, or the `appearances` aggregate.
    Count(usize),
}

/// JSON shape of a [`Report::Count`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountOutput {
    pub count: usize,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `RickyError`.
    #[must_use]
    pub fn from_error(err: &crate::universe::RickyError) -> Self {
        use crate::api::ApiError;
        use crate::universe::RickyError;
        let code = match err {
            RickyError::MalformedFilter { .. } => "malformed_filter",
            RickyError::MissingFilter => "missing_filter",
            RickyError::Api(ApiError::InvalidBaseUrl { .. }) => "invalid_base_url",
            RickyError::Api(ApiError::Client(_)) => "client_error",
            RickyError::Api(ApiError::Transport { .. }) => "transport_error",
            RickyError::Api(ApiError::Status { .. }) => "status_error",
            RickyError::Api(ApiError::Decode { .. }) => "decode_error",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}
