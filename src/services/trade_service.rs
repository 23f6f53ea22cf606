use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreateTrade, Trade, UpdateTrade};

// Degenerate trades are rejected at the boundary: the P&L core itself is
// total over its inputs and never validates.
fn validate_trade(
    ticker: &str,
    entry_price: f64,
    exit_price: f64,
    quantity: i32,
) -> Result<(), AppError> {
    if ticker.trim().is_empty() {
        return Err(AppError::Validation("Ticker cannot be empty".into()));
    }
    if !entry_price.is_finite() || !exit_price.is_finite() {
        return Err(AppError::Validation("Prices must be finite numbers".into()));
    }
    if quantity < 1 {
        return Err(AppError::Validation("Quantity must be at least 1".into()));
    }
    Ok(())
}

pub async fn create(pool: &PgPool, input: CreateTrade) -> Result<Trade, AppError> {
    validate_trade(&input.ticker, input.entry_price, input.exit_price, input.quantity)?;

    // ensure portfolio exists
    let exists = db::portfolio_queries::exists(pool, input.portfolio_id).await?;
    if !exists {
        return Err(AppError::NotFound);
    }

    let CreateTrade {
        portfolio_id,
        ticker,
        entry_price,
        exit_price,
        quantity,
        date,
    } = input;
    let trade = db::trade_queries::insert(
        pool,
        Trade::new(portfolio_id, ticker, entry_price, exit_price, quantity, date),
    )
    .await?;
    Ok(trade)
}

pub async fn list(pool: &PgPool, portfolio_id: Uuid) -> Result<Vec<Trade>, AppError> {
    let trades = db::trade_queries::fetch_all(pool, portfolio_id).await?;
    Ok(trades)
}

pub(crate) async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<Trade, AppError> {
    db::trade_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound)
}

pub async fn update(pool: &PgPool, id: Uuid, input: UpdateTrade) -> Result<Trade, AppError> {
    validate_trade(&input.ticker, input.entry_price, input.exit_price, input.quantity)?;
    db::trade_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound)
}

pub(crate) async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::trade_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}
