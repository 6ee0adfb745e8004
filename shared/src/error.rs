//! Errors raised while wiring the page.

use thiserror::Error;

/// Failure to set up the interactions for a page.
#[derive(Debug, Error)]
pub enum SetupError {
    /// A required element (the navbar) is not in the markup.
    #[error("required element `#{0}` is missing from the page")]
    MissingElement(String),
    /// The config document is not valid JSON for [`crate::SiteConfig`].
    #[error("invalid site config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    /// A numeric setting is negative, infinite or otherwise unusable.
    #[error("config field `{field}` has unusable value {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
