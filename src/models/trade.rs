use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A closed round trip on a single instrument. P&L is never stored; it is
// derived from entry/exit price and quantity on every read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trade {
    pub id: uuid::Uuid,
    pub portfolio_id: uuid::Uuid,
    pub ticker: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: i32,
    // Calendar date of the trade event, not the record-creation time.
    // Used only as an ordering key for the cumulative series.
    pub date: NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTrade {
    pub portfolio_id: uuid::Uuid,
    pub ticker: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTrade {
    pub ticker: String,
    pub entry_price: f64,
    pub exit_price: f64,
    pub quantity: i32,
    pub date: NaiveDate,
}

impl Trade {
    pub(crate) fn new(
        portfolio_id: uuid::Uuid,
        ticker: String,
        entry_price: f64,
        exit_price: f64,
        quantity: i32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            portfolio_id,
            ticker,
            entry_price,
            exit_price,
            quantity,
            date,
            created_at: chrono::Utc::now(),
        }
    }
}
