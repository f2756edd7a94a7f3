//! Error types

use figment::providers::{Format, Toml};
use std::{collections::HashSet, error::Error, fmt};

/// The message prefix used when the config could not be extracted from the figment
pub const FAILED_TO_EXTRACT_CONFIG_MSG: &str = "failed to extract rpc-filter config:";

/// Errors raised while building or encoding a filter request
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// An empty string was given where an address is required.
    #[error("an address is required, got an empty string")]
    EmptyAddress,
    /// The given text is not a 20-byte hex address.
    #[error("invalid address `{input}`: {reason}")]
    InvalidAddress { input: String, reason: String },
    /// The given text is neither a block number nor a block tag.
    #[error("invalid block selector `{input}`: {reason}")]
    InvalidBlock { input: String, reason: String },
    /// The given text is not a 32-byte hex topic.
    #[error("invalid topic `{input}`: {reason}")]
    InvalidTopic { input: String, reason: String },
    /// The single-address encoding was requested for a filter that doesn't hold exactly one
    /// address.
    #[error("single-address encoding requires exactly one address, got {0}")]
    AddressCount(usize),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ExtractConfigError),
}

/// Represents a failed attempt to extract [`FilterConfig`](crate::FilterConfig) from a `Figment`
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfigError {
    /// error thrown when extracting the config
    pub(crate) error: figment::Error,
}

impl ExtractConfigError {
    /// Wraps the figment error
    pub fn new(error: figment::Error) -> Self {
        Self { error }
    }
}

impl fmt::Display for ExtractConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut unique = HashSet::with_capacity(self.error.count());
        writeln!(f, "{FAILED_TO_EXTRACT_CONFIG_MSG}")?;
        for err in self.error.clone() {
            let from_toml =
                err.metadata.as_ref().is_some_and(|meta| meta.name.contains(Toml::NAME));
            let msg = if from_toml { format!("toml error: {err}") } else { err.to_string() };
            if unique.insert(msg.clone()) {
                writeln!(f, "{msg}")?;
            }
        }
        Ok(())
    }
}

impl Error for ExtractConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Error::source(&self.error)
    }
}
