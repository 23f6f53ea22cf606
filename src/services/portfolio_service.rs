use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::{CreatePortfolio, Portfolio, PortfolioWithTrades, UpdatePortfolio};

pub async fn create(pool: &PgPool, input: CreatePortfolio) -> Result<Portfolio, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Portfolio name cannot be empty".into()));
    }
    // Missing initial value means starting from zero.
    let initial_value = input.initial_value.unwrap_or(0.0);
    if !initial_value.is_finite() || initial_value < 0.0 {
        return Err(AppError::Validation(
            "Initial value must be a non-negative number".into(),
        ));
    }
    let portfolio = db::portfolio_queries::insert(pool, Portfolio::new(input.name, initial_value))
        .await?;
    Ok(portfolio)
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: UpdatePortfolio,
) -> Result<Portfolio, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::Validation("Portfolio name cannot be empty".into()));
    }
    if !input.initial_value.is_finite() || input.initial_value < 0.0 {
        return Err(AppError::Validation(
            "Initial value must be a non-negative number".into(),
        ));
    }
    let portfolio = db::portfolio_queries::update(pool, id, input)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(portfolio)
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<Portfolio>, AppError> {
    let portfolios = db::portfolio_queries::fetch_all(pool).await?;
    Ok(portfolios)
}

// The detail view carries the portfolio's trades, as the dashboard consumes
// both together.
pub(crate) async fn fetch_one(pool: &PgPool, id: Uuid) -> Result<PortfolioWithTrades, AppError> {
    let portfolio = db::portfolio_queries::fetch_one(pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    let trades = db::trade_queries::fetch_all(pool, id).await?;
    Ok(PortfolioWithTrades { portfolio, trades })
}

// Trades go with the portfolio via ON DELETE CASCADE.
pub(crate) async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    match db::portfolio_queries::delete(pool, id).await {
        Ok(0) => Err(AppError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}
