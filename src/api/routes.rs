//! API Routes
//!
//! HTTP endpoint definitions. The two write endpoints are GET by design:
//! clicks arrive from ad redirects and conversions from advertiser postback
//! URLs, both plain query-string links.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::domain::{AffiliateId, TrackError};
use crate::error::{AppError, ReadError};
use crate::handlers::{
    ClickRegistrar, ConversionMatcher, RecordConversionCommand, RegisterClickCommand,
};
use crate::reporting::{AffiliateSummary, SummaryService};
use crate::store::{Affiliate, Campaign, Click, Conversion, EntityStore};

// =========================================================================
// Request/Response types
// =========================================================================

/// Query parameters for click registration. All optional at the type level so
/// missing parameters surface as the domain's validation error, not as a
/// framework rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterClickParams {
    #[serde(default)]
    pub affiliate_id: Option<String>,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub click_id: Option<String>,
}

/// Query parameters for conversion postbacks.
#[derive(Debug, Deserialize)]
pub struct PostbackParams {
    #[serde(default)]
    pub affiliate_id: Option<String>,
    #[serde(default)]
    pub click_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Response envelope for the two write endpoints.
#[derive(Debug, Serialize)]
pub struct TrackResponse<T> {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> TrackResponse<T> {
    fn success(message: &str, data: T) -> Self {
        Self {
            status: "success",
            message: message.to_string(),
            data: Some(data),
        }
    }
}

/// Liveness probe payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<PgPool> {
    Router::new()
        // Ingestion endpoints
        .route("/click", get(register_click))
        .route("/postback", get(record_conversion))
        // Read endpoints
        .route("/api/affiliates", get(list_affiliates))
        .route("/api/campaigns", get(list_campaigns))
        .route("/api/affiliate/:affiliate_id", get(affiliate_summary))
        // Liveness probe
        .route("/health", get(health))
}

// =========================================================================
// GET /click
// =========================================================================

/// Register a click from an ad redirect
async fn register_click(
    State(pool): State<PgPool>,
    Query(params): Query<RegisterClickParams>,
) -> Result<Json<TrackResponse<Click>>, AppError> {
    let handler = ClickRegistrar::new(pool);

    let command =
        RegisterClickCommand::new(params.affiliate_id, params.campaign_id, params.click_id);

    let click = handler.execute(command).await?;

    Ok(Json(TrackResponse::success(
        "Click tracked successfully",
        click,
    )))
}

// =========================================================================
// GET /postback
// =========================================================================

/// Record a conversion from an advertiser postback
async fn record_conversion(
    State(pool): State<PgPool>,
    Query(params): Query<PostbackParams>,
) -> Result<Json<TrackResponse<Conversion>>, AppError> {
    let handler = ConversionMatcher::new(pool);

    let command = RecordConversionCommand::new(
        params.affiliate_id,
        params.click_id,
        params.amount,
        params.currency,
    );

    let conversion = handler.execute(command).await?;

    Ok(Json(TrackResponse::success(
        "Conversion tracked successfully",
        conversion,
    )))
}

// =========================================================================
// GET /api/affiliates
// =========================================================================

/// List all affiliates
async fn list_affiliates(State(pool): State<PgPool>) -> Result<Json<Vec<Affiliate>>, ReadError> {
    let store = EntityStore::new(pool);
    let affiliates = store.list_affiliates().await?;

    Ok(Json(affiliates))
}

// =========================================================================
// GET /api/campaigns
// =========================================================================

/// List all campaigns
async fn list_campaigns(State(pool): State<PgPool>) -> Result<Json<Vec<Campaign>>, ReadError> {
    let store = EntityStore::new(pool);
    let campaigns = store.list_campaigns().await?;

    Ok(Json(campaigns))
}

// =========================================================================
// GET /api/affiliate/:affiliate_id
// =========================================================================

/// Get the attribution summary for one affiliate.
///
/// An unknown id returns an empty summary with zero totals rather than 404.
async fn affiliate_summary(
    State(pool): State<PgPool>,
    Path(affiliate_id): Path<String>,
) -> Result<Json<AffiliateSummary>, ReadError> {
    let affiliate_id: AffiliateId = affiliate_id.parse().map_err(|_| TrackError::InvalidId {
        field: "affiliate_id",
    })?;

    let service = SummaryService::new(pool);
    let summary = service.affiliate_summary(affiliate_id).await?;

    Ok(Json(summary))
}

// =========================================================================
// GET /health
// =========================================================================

/// Liveness probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
    })
}
