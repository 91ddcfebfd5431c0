//! Entity Store Integration Tests
//!
//! Verify the database-level constraints directly, including the paths the
//! HTTP handlers' fast-path checks would normally short-circuit.

use serial_test::serial;

use affiliate_track::store::EntityStore;
use affiliate_track::{AffiliateId, Amount, AppError, CampaignId, Currency, TrackError};

mod common;

#[tokio::test]
#[serial]
async fn test_click_triple_uniqueness_is_store_enforced() {
    let Some(pool) = common::try_setup_test_db().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let store = EntityStore::new(pool);

    let affiliate = AffiliateId::new(1);
    let campaign = CampaignId::new(1);

    store
        .insert_click(affiliate, campaign, "tok")
        .await
        .expect("first insert should succeed");

    let err = store
        .insert_click(affiliate, campaign, "tok")
        .await
        .expect_err("second insert of the same triple must fail");
    assert!(matches!(err, AppError::Track(TrackError::DuplicateClick)));

    // Different affiliate, same token: a distinct triple, so it inserts
    store
        .insert_click(AffiliateId::new(2), campaign, "tok")
        .await
        .expect("distinct triple should insert");
}

#[tokio::test]
#[serial]
async fn test_concurrent_click_registrations_yield_one_winner() {
    let Some(pool) = common::try_setup_test_db().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let store = EntityStore::new(pool);

    let affiliate = AffiliateId::new(1);
    let campaign = CampaignId::new(1);

    let (a, b) = tokio::join!(
        store.insert_click(affiliate, campaign, "race"),
        store.insert_click(affiliate, campaign, "race"),
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1, "exactly one registration must win");
}

#[tokio::test]
#[serial]
async fn test_conversion_uniqueness_holds_without_app_level_check() {
    let Some(pool) = common::try_setup_test_db().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let store = EntityStore::new(pool);

    let click = store
        .insert_click(AffiliateId::new(1), CampaignId::new(1), "tok")
        .await
        .unwrap();

    let amount: Amount = "19.99".parse().unwrap();
    let currency: Currency = "USD".parse().unwrap();

    // Insert directly, bypassing the matcher's exists check both times. The
    // unique constraint on conversions.click_id must still reject the second.
    store
        .insert_conversion(click.id, &amount, &currency)
        .await
        .expect("first conversion should succeed");

    let err = store
        .insert_conversion(click.id, &amount, &currency)
        .await
        .expect_err("second conversion for the same click must fail");
    assert!(matches!(
        err,
        AppError::Track(TrackError::DuplicateConversion)
    ));
}

#[tokio::test]
#[serial]
async fn test_find_click_binds_token_to_affiliate() {
    let Some(pool) = common::try_setup_test_db().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let store = EntityStore::new(pool);

    store
        .insert_click(AffiliateId::new(1), CampaignId::new(1), "tok")
        .await
        .unwrap();

    let found = store.find_click("tok", AffiliateId::new(1)).await.unwrap();
    assert!(found.is_some());

    // Same token queried under another affiliate looks unregistered
    let found = store.find_click("tok", AffiliateId::new(2)).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
#[serial]
async fn test_existence_checks() {
    let Some(pool) = common::try_setup_test_db().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };
    let store = EntityStore::new(pool);

    assert!(store.affiliate_exists(AffiliateId::new(1)).await.unwrap());
    assert!(!store.affiliate_exists(AffiliateId::new(999)).await.unwrap());
    assert!(store.campaign_exists(CampaignId::new(2)).await.unwrap());
    assert!(!store.campaign_exists(CampaignId::new(999)).await.unwrap());
}
