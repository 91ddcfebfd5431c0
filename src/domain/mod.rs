//! Domain module
//!
//! Core domain types and validation rules.

pub mod amount;
pub mod currency;
pub mod error;
pub mod ids;

pub use amount::{Amount, AmountError};
pub use currency::{Currency, CurrencyError};
pub use error::TrackError;
pub use ids::{AffiliateId, CampaignId};
