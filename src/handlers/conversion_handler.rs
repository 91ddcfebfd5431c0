//! Conversion Matcher
//!
//! Validates a postback and records a conversion against a previously
//! registered click, enforcing at most one conversion per click.

use sqlx::PgPool;

use crate::domain::{AffiliateId, Amount, Currency, TrackError};
use crate::error::AppResult;
use crate::store::{Conversion, EntityStore};

use super::RecordConversionCommand;

/// Handler for conversion postbacks.
///
/// The click is matched by (external token, affiliate id) rather than by
/// internal id, which keeps the advertiser-facing contract decoupled from
/// internal identifiers and blocks cross-affiliate conversion injection.
pub struct ConversionMatcher {
    store: EntityStore,
}

impl ConversionMatcher {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: EntityStore::new(pool),
        }
    }

    /// Execute the record-conversion command
    pub async fn execute(&self, command: RecordConversionCommand) -> AppResult<Conversion> {
        let (affiliate_raw, token, amount_raw, currency_raw) = command.validated()?;

        let affiliate_id: AffiliateId = affiliate_raw.parse().map_err(|_| TrackError::InvalidId {
            field: "affiliate_id",
        })?;

        let amount: Amount = amount_raw
            .parse()
            .map_err(|e: crate::domain::AmountError| TrackError::InvalidAmount(e.to_string()))?;

        let currency: Currency = currency_raw
            .parse()
            .map_err(|e: crate::domain::CurrencyError| TrackError::InvalidCurrency(e.to_string()))?;

        let click = self
            .store
            .find_click(token, affiliate_id)
            .await?
            .ok_or(TrackError::UnknownOrMismatchedClick)?;

        // Early error for the common retry case; the conversions.click_id
        // unique constraint is what actually holds under concurrent postbacks
        if self.store.conversion_exists_for_click(click.id).await? {
            return Err(TrackError::DuplicateConversion.into());
        }

        let conversion = self
            .store
            .insert_conversion(click.id, &amount, &currency)
            .await?;

        tracing::info!(
            affiliate_id = %affiliate_id,
            token = %token,
            amount = %amount,
            currency = %currency,
            "Conversion recorded"
        );

        Ok(conversion)
    }
}
