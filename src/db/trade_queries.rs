use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Trade, UpdateTrade};

pub async fn insert(pool: &PgPool, input: Trade) -> Result<Trade, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "INSERT INTO trades (id, portfolio_id, ticker, entry_price, exit_price, quantity, date, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
         RETURNING id, portfolio_id, ticker, entry_price, exit_price, quantity, date, created_at",
    )
    .bind(input.id)
    .bind(input.portfolio_id)
    .bind(input.ticker)
    .bind(input.entry_price)
    .bind(input.exit_price)
    .bind(input.quantity)
    .bind(input.date)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "SELECT id, portfolio_id, ticker, entry_price, exit_price, quantity, date, created_at
         FROM trades
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

// Ordered by trade date so listings and charts are deterministic;
// created_at breaks same-day ties.
pub async fn fetch_all(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "SELECT id, portfolio_id, ticker, entry_price, exit_price, quantity, date, created_at
         FROM trades
         WHERE portfolio_id = $1
         ORDER BY date ASC, created_at ASC",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdateTrade,
) -> Result<Option<Trade>, sqlx::Error> {
    sqlx::query_as::<_, Trade>(
        "UPDATE trades
         SET ticker = $2, entry_price = $3, exit_price = $4, quantity = $5, date = $6
         WHERE id = $1
         RETURNING id, portfolio_id, ticker, entry_price, exit_price, quantity, date, created_at",
    )
    .bind(id)
    .bind(input.ticker)
    .bind(input.entry_price)
    .bind(input.exit_price)
    .bind(input.quantity)
    .bind(input.date)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM trades WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
