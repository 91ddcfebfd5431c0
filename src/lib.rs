//! affiliateTrack Library
//!
//! Server-to-server affiliate attribution tracking: clicks are registered
//! against affiliate + campaign pairs, advertiser postbacks are matched back
//! to their originating click, and per-affiliate summaries are aggregated on
//! demand.

pub mod api;
pub mod domain;
pub mod handlers;
pub mod reporting;
pub mod store;

pub mod config;
pub mod db;
mod error;

pub use config::Config;
pub use domain::{AffiliateId, Amount, AmountError, CampaignId, Currency, CurrencyError, TrackError};
pub use error::{AppError, AppResult};
