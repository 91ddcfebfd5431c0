//! Summary Service
//!
//! Computes per-affiliate attribution summaries by joining clicks, campaigns
//! and conversions. A pure read; the two underlying queries are not required
//! to be snapshot-consistent with each other.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use crate::domain::AffiliateId;
use crate::error::AppResult;
use crate::store::{ClickWithCampaign, ConversionWithToken, EntityStore};

/// Per-affiliate attribution summary. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct AffiliateSummary {
    pub affiliate_id: AffiliateId,
    pub clicks: Vec<ClickWithCampaign>,
    pub conversions: Vec<ConversionWithToken>,
    pub total_clicks: usize,
    pub total_conversions: usize,
    pub total_revenue: Decimal,
}

/// Read-side service for attribution summaries
#[derive(Debug, Clone)]
pub struct SummaryService {
    store: EntityStore,
}

impl SummaryService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: EntityStore::new(pool),
        }
    }

    /// Compute the summary for an affiliate.
    ///
    /// An unknown affiliate id yields an empty summary with zero totals,
    /// not an error; this mirrors a reporting view, not a strict lookup.
    pub async fn affiliate_summary(&self, affiliate_id: AffiliateId) -> AppResult<AffiliateSummary> {
        let clicks = self.store.clicks_for_affiliate(affiliate_id).await?;
        let conversions = self.store.conversions_for_affiliate(affiliate_id).await?;

        Ok(summarize(affiliate_id, clicks, conversions))
    }
}

/// Reduce the two fetched sequences into a summary.
///
/// Pure function over its inputs so the totals logic is testable without a
/// store. Revenue is an exact Decimal sum, currency-agnostic.
pub fn summarize(
    affiliate_id: AffiliateId,
    clicks: Vec<ClickWithCampaign>,
    conversions: Vec<ConversionWithToken>,
) -> AffiliateSummary {
    let total_revenue: Decimal = conversions.iter().map(|conv| conv.amount).sum();

    AffiliateSummary {
        affiliate_id,
        total_clicks: clicks.len(),
        total_conversions: conversions.len(),
        total_revenue,
        clicks,
        conversions,
    }
}
