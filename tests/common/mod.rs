//! Common test utilities

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Setup test database - provision schema, truncate tables and seed fixed
/// affiliates/campaigns.
///
/// Returns None when DATABASE_URL is not set, so DB-backed tests skip
/// instead of failing on machines without Postgres.
pub async fn try_setup_test_db() -> Option<PgPool> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL").ok()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to DB");

    affiliate_track::db::setup_schema(&pool)
        .await
        .expect("Failed to provision schema");

    // Clean up DB for fresh state
    sqlx::query(
        "TRUNCATE TABLE conversions, clicks, affiliates, campaigns RESTART IDENTITY CASCADE",
    )
    .execute(&pool)
    .await
    .expect("Failed to clean up DB");

    // Seed deterministic fixtures with fixed ids
    sqlx::query(
        r#"
        INSERT INTO affiliates (id, name) VALUES
            (1, 'TechGuru Marketing'),
            (2, 'Digital Dynamo')
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to seed affiliates");

    sqlx::query(
        r#"
        INSERT INTO campaigns (id, name) VALUES
            (1, 'Summer Sale 2024'),
            (2, 'Black Friday Blitz')
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to seed campaigns");

    Some(pool)
}
