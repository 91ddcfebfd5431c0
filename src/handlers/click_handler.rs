//! Click Registrar
//!
//! Validates and records a click against an affiliate + campaign pair.

use sqlx::PgPool;

use crate::domain::{AffiliateId, CampaignId, TrackError};
use crate::error::AppResult;
use crate::store::{Click, EntityStore};

use super::RegisterClickCommand;

/// Handler for click registration.
///
/// Registration is not idempotent-by-return: re-registering the same
/// (affiliate, campaign, token) triple is a `DuplicateClick` error, never a
/// silent success. One click token maps to exactly one tracked event.
pub struct ClickRegistrar {
    store: EntityStore,
}

impl ClickRegistrar {
    pub fn new(pool: PgPool) -> Self {
        Self {
            store: EntityStore::new(pool),
        }
    }

    /// Execute the register-click command
    pub async fn execute(&self, command: RegisterClickCommand) -> AppResult<Click> {
        let (affiliate_raw, campaign_raw, token) = command.validated()?;

        let affiliate_id: AffiliateId = affiliate_raw.parse().map_err(|_| TrackError::InvalidId {
            field: "affiliate_id",
        })?;
        let campaign_id: CampaignId = campaign_raw.parse().map_err(|_| TrackError::InvalidId {
            field: "campaign_id",
        })?;

        // Referential checks, affiliate first
        if !self.store.affiliate_exists(affiliate_id).await? {
            return Err(TrackError::UnknownAffiliate.into());
        }
        if !self.store.campaign_exists(campaign_id).await? {
            return Err(TrackError::UnknownCampaign.into());
        }

        let click = self
            .store
            .insert_click(affiliate_id, campaign_id, token)
            .await?;

        tracing::info!(
            affiliate_id = %affiliate_id,
            campaign_id = %campaign_id,
            token = %token,
            "Click registered"
        );

        Ok(click)
    }
}
