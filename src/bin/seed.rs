//! Reference-data seeder.
//!
//! Loads the partner and category rows the classification flow resolves
//! against. Safe to re-run: rows are upserted by their unique name.
//!
//! ```text
//! seed
//! seed --reset
//! ```

use clap::Parser;
use simpleask::configuration::get_configuration;
use simpleask::db;
use simpleask::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Parser, Debug)]
#[command(name = "seed", version, about = "Seed partner and category reference data")]
struct Cli {
    /// Delete existing partners and categories before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("simpleask-seed".into(), "info".into());
    init_subscriber(subscriber);

    let cli = Cli::parse();
    let settings = get_configuration().map_err(|err| anyhow::anyhow!(err))?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&settings.database.connection_string())
        .await?;

    if cli.reset {
        reset(&pool).await?;
    }

    seed(&pool).await.map_err(|err| anyhow::anyhow!(err))?;

    tracing::info!("Seeding complete");
    Ok(())
}

async fn reset(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::warn!("Resetting partner and category tables");
    sqlx::query("UPDATE question SET category_id = NULL, partner_id = NULL")
        .execute(pool)
        .await?;
    sqlx::query("DELETE FROM category").execute(pool).await?;
    sqlx::query("DELETE FROM partner").execute(pool).await?;
    Ok(())
}

async fn seed(pool: &PgPool) -> Result<(), String> {
    let pfizer = db::partner::upsert(pool, "Pfizer", "http://localhost:8080/ads/pfizer.html").await?;
    db::partner::upsert(pool, "Genentech", "https://ads.genentech.example/tag.html").await?;
    db::partner::upsert(pool, "GSK", "https://ads.gsk.example/tag.html").await?;
    let eli_lilly =
        db::partner::upsert(pool, "Eli Lilly", "http://localhost:8080/ads/eli_lilly.html").await?;

    db::category::upsert(pool, "Cancer", Some(pfizer.id)).await?;
    db::category::upsert(pool, "Diabetes", Some(eli_lilly.id)).await?;

    tracing::info!("Seeded 4 partners and 2 categories");
    Ok(())
}
