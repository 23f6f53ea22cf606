use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{Portfolio, UpdatePortfolio};

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, initial_value, created_at
         FROM portfolios
         ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "SELECT id, name, initial_value, created_at
         FROM portfolios
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(pool: &PgPool, input: Portfolio) -> Result<Portfolio, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "INSERT INTO portfolios (id, name, initial_value, created_at)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, initial_value, created_at",
    )
    .bind(input.id)
    .bind(input.name)
    .bind(input.initial_value)
    .bind(input.created_at)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<Option<Portfolio>, sqlx::Error> {
    sqlx::query_as::<_, Portfolio>(
        "UPDATE portfolios
         SET name = $2, initial_value = $3
         WHERE id = $1
         RETURNING id, name, initial_value, created_at",
    )
    .bind(id)
    .bind(input.name)
    .bind(input.initial_value)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolios WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM portfolios WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
}
