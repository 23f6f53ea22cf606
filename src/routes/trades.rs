use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CreateTrade, Trade, UpdateTrade};
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trade).get(list_trades))
        .route("/:id", get(get_trade))
        .route("/:id", put(update_trade))
        .route("/:id", delete(delete_trade))
}

#[derive(Debug, Deserialize)]
struct TradeListQuery {
    portfolio_id: Uuid,
}

pub async fn create_trade(
    State(state): State<AppState>,
    Json(data): Json<CreateTrade>,
) -> Result<(StatusCode, Json<Trade>), AppError> {
    info!(
        "POST /trades - Creating trade for portfolio {}",
        data.portfolio_id
    );
    let trade = services::trade_service::create(&state.pool, data)
        .await
        .map_err(|e| {
            error!("Failed to create trade: {}", e);
            e
        })?;
    Ok((StatusCode::CREATED, Json(trade)))
}

async fn list_trades(
    State(state): State<AppState>,
    Query(params): Query<TradeListQuery>,
) -> Result<Json<Vec<Trade>>, AppError> {
    info!(
        "GET /trades?portfolio_id={} - Listing trades",
        params.portfolio_id
    );
    let trades = services::trade_service::list(&state.pool, params.portfolio_id)
        .await
        .map_err(|e| {
            error!(
                "Failed to list trades for portfolio {}: {}",
                params.portfolio_id, e
            );
            e
        })?;
    Ok(Json(trades))
}

pub async fn get_trade(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trade>, AppError> {
    info!("GET /trades/{} - Fetching trade", id);
    let trade = services::trade_service::fetch_one(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to fetch trade {}: {}", id, e);
            e
        })?;
    Ok(Json(trade))
}

pub async fn update_trade(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(input): Json<UpdateTrade>,
) -> Result<Json<Trade>, AppError> {
    info!("PUT /trades/{} - Updating trade", id);
    let updated = services::trade_service::update(&state.pool, id, input)
        .await
        .map_err(|e| {
            error!("Failed to update trade {}: {}", id, e);
            e
        })?;
    Ok(Json(updated))
}

pub async fn delete_trade(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!("DELETE /trades/{} - Deleting trade", id);
    services::trade_service::delete(&state.pool, id)
        .await
        .map_err(|e| {
            error!("Failed to delete trade {}: {}", id, e);
            e
        })?;
    Ok(StatusCode::NO_CONTENT)
}
