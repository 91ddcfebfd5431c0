//! Command definitions
//!
//! Commands carry raw wire input into the handlers. Fields stay untyped
//! (`Option<String>`) so presence and format validation are part of the
//! handler contract, not the HTTP layer's.

use serde::{Deserialize, Serialize};

use crate::domain::TrackError;

/// Command to register a click against an affiliate + campaign pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterClickCommand {
    /// Affiliate id as received on the wire
    pub affiliate_id: Option<String>,
    /// Campaign id as received on the wire
    pub campaign_id: Option<String>,
    /// Externally minted tracking token
    pub click_id: Option<String>,
}

impl RegisterClickCommand {
    pub fn new(
        affiliate_id: Option<String>,
        campaign_id: Option<String>,
        click_id: Option<String>,
    ) -> Self {
        Self {
            affiliate_id,
            campaign_id,
            click_id,
        }
    }

    /// Check all three parameters are present and non-empty, returning their
    /// raw values.
    pub(crate) fn validated(&self) -> Result<(&str, &str, &str), TrackError> {
        let mut missing = Vec::new();
        let affiliate = nonempty(&self.affiliate_id, "affiliate_id", &mut missing);
        let campaign = nonempty(&self.campaign_id, "campaign_id", &mut missing);
        let token = nonempty(&self.click_id, "click_id", &mut missing);

        match (affiliate, campaign, token) {
            (Some(a), Some(c), Some(t)) => Ok((a, c, t)),
            _ => Err(TrackError::MissingParameters(missing.join(", "))),
        }
    }
}

/// Command to record a conversion reported by an advertiser postback
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordConversionCommand {
    /// Affiliate id as received on the wire
    pub affiliate_id: Option<String>,
    /// External click token carried through from the original click
    pub click_id: Option<String>,
    /// Amount as string for precise decimal parsing
    pub amount: Option<String>,
    /// Three-letter currency code
    pub currency: Option<String>,
}

impl RecordConversionCommand {
    pub fn new(
        affiliate_id: Option<String>,
        click_id: Option<String>,
        amount: Option<String>,
        currency: Option<String>,
    ) -> Self {
        Self {
            affiliate_id,
            click_id,
            amount,
            currency,
        }
    }

    /// Check all four parameters are present and non-empty, returning their
    /// raw values.
    pub(crate) fn validated(&self) -> Result<(&str, &str, &str, &str), TrackError> {
        let mut missing = Vec::new();
        let affiliate = nonempty(&self.affiliate_id, "affiliate_id", &mut missing);
        let token = nonempty(&self.click_id, "click_id", &mut missing);
        let amount = nonempty(&self.amount, "amount", &mut missing);
        let currency = nonempty(&self.currency, "currency", &mut missing);

        match (affiliate, token, amount, currency) {
            (Some(a), Some(t), Some(m), Some(c)) => Ok((a, t, m, c)),
            _ => Err(TrackError::MissingParameters(missing.join(", "))),
        }
    }
}

/// Record the field name when a value is absent or blank.
fn nonempty<'a>(
    value: &'a Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}
