//! Domain Error Types
//!
//! Pure tracking-domain errors that don't depend on infrastructure.

use thiserror::Error;

/// Tracking-domain errors.
///
/// These represent client mistakes and invariant violations. They are
/// independent of the web/infrastructure layer.
///
/// `UnknownOrMismatchedClick` deliberately carries no detail: the same error
/// covers "token never registered" and "token registered under a different
/// affiliate", so callers cannot enumerate other affiliates' tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackError {
    /// One or more required request parameters are missing or empty
    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    /// A numeric id parameter did not parse
    #[error("Invalid {field}: must be a numeric id")]
    InvalidId { field: &'static str },

    /// No affiliate with the given id
    #[error("Invalid affiliate_id")]
    UnknownAffiliate,

    /// No campaign with the given id
    #[error("Invalid campaign_id")]
    UnknownCampaign,

    /// No click with the given token for the given affiliate
    #[error("Invalid click_id or click does not belong to this affiliate")]
    UnknownOrMismatchedClick,

    /// The (affiliate, campaign, token) triple was already registered
    #[error("Click already registered for this affiliate and campaign")]
    DuplicateClick,

    /// A conversion already references this click
    #[error("Conversion already exists for this click")]
    DuplicateConversion,

    /// Amount failed to parse or violated the amount rules
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency failed the 3-letter format check
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),
}

impl TrackError {
    /// Check if this error means the caller retried or raced an earlier write.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateClick | Self::DuplicateConversion)
    }
}
