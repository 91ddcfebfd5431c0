//! Entity Store
//!
//! Relational access layer over affiliates, campaigns, clicks and
//! conversions. The store exclusively owns persisted rows; components hold no
//! state across calls and coordinate only through the database's
//! transactional guarantees.
//!
//! Both uniqueness invariants live here as database constraints:
//! `clicks(affiliate_id, campaign_id, click_id)` and `conversions(click_id)`.
//! Concurrent duplicate writes therefore yield exactly one success, with the
//! losers surfacing as `DuplicateClick` / `DuplicateConversion`.

pub mod entities;

use sqlx::PgPool;

use crate::domain::{AffiliateId, Amount, CampaignId, Currency, TrackError};
use crate::error::AppResult;

pub use entities::{
    Affiliate, Campaign, Click, ClickWithCampaign, Conversion, ConversionWithToken,
};

/// Access handle over the tracking tables.
///
/// Holds the process-wide connection pool; acquired at startup and passed
/// into each component constructor.
#[derive(Debug, Clone)]
pub struct EntityStore {
    pool: PgPool,
}

impl EntityStore {
    /// Create a new EntityStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check whether an affiliate with this id exists.
    pub async fn affiliate_exists(&self, id: AffiliateId) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM affiliates WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Check whether a campaign with this id exists.
    pub async fn campaign_exists(&self, id: CampaignId) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM campaigns WHERE id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a click row.
    ///
    /// The unique constraint on (affiliate_id, campaign_id, click_id)
    /// arbitrates concurrent registrations of the same triple; a violation
    /// surfaces as `DuplicateClick` with no row written.
    pub async fn insert_click(
        &self,
        affiliate_id: AffiliateId,
        campaign_id: CampaignId,
        token: &str,
    ) -> AppResult<Click> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO clicks (affiliate_id, campaign_id, click_id, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, affiliate_id, campaign_id, click_id, created_at
            "#,
        )
        .bind(affiliate_id.value())
        .bind(campaign_id.value())
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                TrackError::DuplicateClick.into()
            }
            other => crate::error::AppError::from(other),
        })?;

        Ok(click)
    }

    /// Find the click whose external token and owning affiliate both match.
    ///
    /// The affiliate binding is part of the lookup on purpose: a token
    /// registered under a different affiliate is indistinguishable from a
    /// token that was never registered. The same token can exist under
    /// several campaigns of one affiliate; the earliest click wins.
    pub async fn find_click(
        &self,
        token: &str,
        affiliate_id: AffiliateId,
    ) -> AppResult<Option<Click>> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            SELECT id, affiliate_id, campaign_id, click_id, created_at
            FROM clicks
            WHERE click_id = $1 AND affiliate_id = $2
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(token)
        .bind(affiliate_id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(click)
    }

    /// Check whether a conversion already references this click.
    ///
    /// Fast-path check only; the unique constraint on conversions.click_id is
    /// the actual guarantee under concurrent postbacks.
    pub async fn conversion_exists_for_click(&self, click_pk: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM conversions WHERE click_id = $1)")
                .bind(click_pk)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    /// Insert a conversion row referencing a click's internal id.
    ///
    /// A unique violation on conversions.click_id means a concurrent postback
    /// won the race; it surfaces as `DuplicateConversion` with no row written.
    pub async fn insert_conversion(
        &self,
        click_pk: i32,
        amount: &Amount,
        currency: &Currency,
    ) -> AppResult<Conversion> {
        let conversion = sqlx::query_as::<_, Conversion>(
            r#"
            INSERT INTO conversions (click_id, amount, currency, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, click_id, amount, currency, created_at
            "#,
        )
        .bind(click_pk)
        .bind(amount.value())
        .bind(currency.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                TrackError::DuplicateConversion.into()
            }
            other => crate::error::AppError::from(other),
        })?;

        Ok(conversion)
    }

    /// List all affiliates, ordered by id.
    pub async fn list_affiliates(&self) -> AppResult<Vec<Affiliate>> {
        let affiliates = sqlx::query_as::<_, Affiliate>(
            "SELECT id, name, created_at FROM affiliates ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(affiliates)
    }

    /// List all campaigns, ordered by id.
    pub async fn list_campaigns(&self) -> AppResult<Vec<Campaign>> {
        let campaigns =
            sqlx::query_as::<_, Campaign>("SELECT id, name, created_at FROM campaigns ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(campaigns)
    }

    /// All clicks for an affiliate, newest first, joined with campaign names.
    pub async fn clicks_for_affiliate(
        &self,
        affiliate_id: AffiliateId,
    ) -> AppResult<Vec<ClickWithCampaign>> {
        let clicks = sqlx::query_as::<_, ClickWithCampaign>(
            r#"
            SELECT c.id, c.affiliate_id, c.campaign_id, c.click_id,
                   camp.name AS campaign_name, c.created_at
            FROM clicks c
            JOIN campaigns camp ON c.campaign_id = camp.id
            WHERE c.affiliate_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(affiliate_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(clicks)
    }

    /// All conversions attributed to an affiliate's clicks, newest first,
    /// joined with each click's external token.
    pub async fn conversions_for_affiliate(
        &self,
        affiliate_id: AffiliateId,
    ) -> AppResult<Vec<ConversionWithToken>> {
        let conversions = sqlx::query_as::<_, ConversionWithToken>(
            r#"
            SELECT conv.id, conv.click_id, c.click_id AS original_click_id,
                   conv.amount, conv.currency, conv.created_at
            FROM conversions conv
            JOIN clicks c ON conv.click_id = c.id
            WHERE c.affiliate_id = $1
            ORDER BY conv.created_at DESC
            "#,
        )
        .bind(affiliate_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(conversions)
    }
}
