use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{AnalyticsResponse, SeriesMeta};
use crate::services::pnl;

// Derived view over raw trades. Nothing here is cached or persisted; every
// call recomputes from whatever the gateway currently holds.
pub async fn get_analytics(pool: &PgPool, portfolio_id: Uuid) -> Result<AnalyticsResponse, AppError> {
    let portfolio = db::portfolio_queries::fetch_one(pool, portfolio_id)
        .await?
        .ok_or(AppError::NotFound)?;
    let trades = db::trade_queries::fetch_all(pool, portfolio_id).await?;

    let series = pnl::cumulative_series(&trades, portfolio.initial_value);
    let metrics = pnl::portfolio_metrics(portfolio.initial_value, &trades);

    let meta = SeriesMeta {
        points: series.len(),
        start: series.first().map(|p| p.date),
        end: series.last().map(|p| p.date),
    };

    Ok(AnalyticsResponse {
        series,
        total_pnl: metrics.total_pnl,
        total_value: metrics.total_value,
        meta,
    })
}
