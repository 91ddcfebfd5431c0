//! Persisted entities
//!
//! Row types for the four tracking tables plus the joined shapes the
//! reporting queries produce. All rows are create-only: nothing here is
//! mutated or deleted once written.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// An affiliate, created at provisioning time and immutable thereafter.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Affiliate {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A campaign, same lifecycle as an affiliate.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Campaign {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A tracked click. `click_id` is the externally minted token; `id` is the
/// internal identity conversions reference.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Click {
    pub id: i32,
    pub affiliate_id: i32,
    pub campaign_id: i32,
    pub click_id: String,
    pub created_at: DateTime<Utc>,
}

/// A conversion attributed to exactly one click.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Conversion {
    pub id: i32,
    pub click_id: i32,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

/// A click annotated with its campaign's display name (summary view).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ClickWithCampaign {
    pub id: i32,
    pub affiliate_id: i32,
    pub campaign_id: i32,
    pub click_id: String,
    pub campaign_name: String,
    pub created_at: DateTime<Utc>,
}

/// A conversion annotated with its originating click's external token
/// (summary view).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConversionWithToken {
    pub id: i32,
    pub click_id: i32,
    pub original_click_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}
