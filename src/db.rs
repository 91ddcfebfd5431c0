//! Database module
//!
//! Schema provisioning and seeding. Tables are created on startup if absent;
//! sample affiliates and campaigns are seeded only into an empty database.

use sqlx::PgPool;

/// Simple connectivity check
pub async fn verify_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Create the tracking tables if they don't exist.
///
/// Both uniqueness invariants are declared here: the click triple and the
/// one-conversion-per-click constraint on conversions.click_id.
pub async fn setup_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS affiliates (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS campaigns (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clicks (
            id SERIAL PRIMARY KEY,
            affiliate_id INTEGER NOT NULL REFERENCES affiliates(id),
            campaign_id INTEGER NOT NULL REFERENCES campaigns(id),
            click_id VARCHAR(255) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            UNIQUE(affiliate_id, campaign_id, click_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS conversions (
            id SERIAL PRIMARY KEY,
            click_id INTEGER NOT NULL UNIQUE REFERENCES clicks(id),
            amount DECIMAL(10,2) NOT NULL,
            currency VARCHAR(3) NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema provisioned");

    seed_if_empty(pool).await?;

    Ok(())
}

/// Seed sample affiliates and campaigns when the database is empty.
async fn seed_if_empty(pool: &PgPool) -> Result<(), sqlx::Error> {
    let affiliate_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM affiliates")
        .fetch_one(pool)
        .await?;

    if affiliate_count > 0 {
        tracing::debug!("Database already contains affiliates, skipping seeding");
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO affiliates (name) VALUES
            ('TechGuru Marketing'),
            ('Digital Dynamo'),
            ('Growth Masters'),
            ('Lead Legends')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO campaigns (name) VALUES
            ('Summer Sale 2024'),
            ('Black Friday Blitz'),
            ('Holiday Special'),
            ('New Year Launch'),
            ('Spring Collection')
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded sample affiliates and campaigns");

    Ok(())
}
