use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::trade::Trade;

// Represents a named pot of capital that trades are logged against.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Portfolio {
    pub id: uuid::Uuid,
    pub name: String,
    pub initial_value: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatePortfolio {
    pub name: String,
    pub initial_value: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePortfolio {
    pub name: String,
    pub initial_value: f64,
}

// Detail payload: the portfolio together with its trades.
#[derive(Debug, Serialize)]
pub struct PortfolioWithTrades {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub trades: Vec<Trade>,
}

impl Portfolio {
    pub(crate) fn new(name: String, initial_value: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name,
            initial_value,
            created_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_detail_payload_flattens_portfolio_fields() {
        let portfolio = Portfolio::new("Retirement".to_string(), 1000.0);
        let trade = Trade::new(
            portfolio.id,
            "AAPL".to_string(),
            100.0,
            150.0,
            10,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        );
        let detail = PortfolioWithTrades {
            portfolio,
            trades: vec![trade],
        };

        let value = serde_json::to_value(&detail).unwrap();
        // Portfolio fields sit at the top level, next to the trades array.
        assert_eq!(value["name"], "Retirement");
        assert_eq!(value["initial_value"], 1000.0);
        assert_eq!(value["trades"][0]["ticker"], "AAPL");
        assert_eq!(value["trades"][0]["date"], "2024-01-05");
    }
}
