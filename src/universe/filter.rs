/// Parsing of the single `key=value` filter expression.
use std::fmt;
use std::str::FromStr;

use super::errors::RickyError;

/// One query parameter forwarded to the listing endpoint.
///
/// The key is not checked against known fields; an unknown key is simply
/// whatever the upstream makes of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub key: String,
    pub value: String,
}

impl Filter {
    /// Split `raw` on the first `=`. Both halves are kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RickyError::MalformedFilter` if there is no `=` or the key is empty.
    pub fn parse(raw: &str) -> Result<Self, RickyError> {
        match raw.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_owned(),
                value: value.to_owned(),
            }),
            _ => Err(RickyError::MalformedFilter {
                input: raw.to_owned(),
            }),
        }
    }

    /// Parse an optional raw argument; `None` means unfiltered.
    ///
    /// # Errors
    ///
    /// Propagates `RickyError::MalformedFilter` from [`Filter::parse`].
    pub fn parse_opt(raw: Option<&str>) -> Result<Option<Self>, RickyError> {
        raw.map(Self::parse).transpose()
    }
}

impl FromStr for Filter {
    type Err = RickyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
