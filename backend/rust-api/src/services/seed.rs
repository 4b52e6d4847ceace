use anyhow::{Context, Result};
use sqlx::SqlitePool;

const STOCK_TRIVIA: &str = include_str!("../../seeds/trivia.sql");

/// Loads the stock categories and questions when the categories table is
/// empty. Returns whether anything was inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await
        .context("Failed to count categories")?;

    if existing > 0 {
        tracing::debug!("Database already holds {} categories, seed skipped", existing);
        return Ok(false);
    }

    tracing::info!("Seeding stock trivia categories and questions");

    let mut tx = pool.begin().await.context("Failed to open seed transaction")?;
    sqlx::raw_sql(STOCK_TRIVIA)
        .execute(&mut *tx)
        .await
        .context("Failed to insert stock trivia data")?;
    tx.commit().await.context("Failed to commit seed data")?;

    Ok(true)
}
