/// Store behavior tests
///
/// Covers the contracts the HTTP layer relies on:
/// - portfolio listings are ordered by creation time, newest first
/// - trade listings are ordered by trade date, ascending
/// - deleting a portfolio removes its trades from subsequent listings
///
/// NOTE: These tests validate the store contracts against an in-memory
/// stand-in. Full integration tests against a live database require a
/// running Postgres instance.
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
struct PortfolioRecord {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
struct TradeRecord {
    id: Uuid,
    portfolio_id: Uuid,
    ticker: String,
    date: NaiveDate,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct InMemoryStore {
    portfolios: HashMap<Uuid, PortfolioRecord>,
    trades: HashMap<Uuid, TradeRecord>,
}

impl InMemoryStore {
    fn create_portfolio(&mut self, name: &str, created_at: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        self.portfolios.insert(
            id,
            PortfolioRecord {
                id,
                name: name.to_string(),
                created_at,
            },
        );
        id
    }

    // ORDER BY created_at DESC
    fn list_portfolios(&self) -> Vec<PortfolioRecord> {
        let mut all: Vec<PortfolioRecord> = self.portfolios.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all
    }

    fn create_trade(
        &mut self,
        portfolio_id: Uuid,
        ticker: &str,
        date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Option<Uuid> {
        if !self.portfolios.contains_key(&portfolio_id) {
            return None;
        }
        let id = Uuid::new_v4();
        self.trades.insert(
            id,
            TradeRecord {
                id,
                portfolio_id,
                ticker: ticker.to_string(),
                date,
                created_at,
            },
        );
        Some(id)
    }

    // ORDER BY date ASC, created_at ASC
    fn list_trades(&self, portfolio_id: Uuid) -> Vec<TradeRecord> {
        let mut owned: Vec<TradeRecord> = self
            .trades
            .values()
            .filter(|t| t.portfolio_id == portfolio_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| (a.date, a.created_at).cmp(&(b.date, b.created_at)));
        owned
    }

    // DELETE with ON DELETE CASCADE semantics
    fn delete_portfolio(&mut self, id: Uuid) -> bool {
        if self.portfolios.remove(&id).is_none() {
            return false;
        }
        self.trades.retain(|_, t| t.portfolio_id != id);
        true
    }
}

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_portfolio_listing_newest_first() {
    let mut store = InMemoryStore::default();
    store.create_portfolio("Oldest", ts(100));
    store.create_portfolio("Newest", ts(300));
    store.create_portfolio("Middle", ts(200));

    let names: Vec<String> = store
        .list_portfolios()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[test]
fn test_trade_listing_date_ascending() {
    let mut store = InMemoryStore::default();
    let portfolio = store.create_portfolio("Swing trades", ts(0));

    store
        .create_trade(portfolio, "MSFT", day(2024, 1, 5), ts(10))
        .unwrap();
    store
        .create_trade(portfolio, "AAPL", day(2024, 1, 1), ts(20))
        .unwrap();
    // Same date as the MSFT trade but created later.
    store
        .create_trade(portfolio, "NVDA", day(2024, 1, 5), ts(30))
        .unwrap();

    let tickers: Vec<String> = store
        .list_trades(portfolio)
        .into_iter()
        .map(|t| t.ticker)
        .collect();
    assert_eq!(tickers, vec!["AAPL", "MSFT", "NVDA"]);
}

#[test]
fn test_trade_requires_existing_portfolio() {
    let mut store = InMemoryStore::default();
    let orphan = store.create_trade(Uuid::new_v4(), "AAPL", day(2024, 1, 1), ts(0));
    assert!(orphan.is_none());
}

#[test]
fn test_cascade_delete_removes_trades() {
    let mut store = InMemoryStore::default();
    let doomed = store.create_portfolio("Doomed", ts(0));
    let survivor = store.create_portfolio("Survivor", ts(1));

    let doomed_trade = store
        .create_trade(doomed, "AAPL", day(2024, 1, 1), ts(10))
        .unwrap();
    store
        .create_trade(survivor, "MSFT", day(2024, 1, 2), ts(20))
        .unwrap();

    assert!(store.delete_portfolio(doomed));

    assert!(store.list_trades(doomed).is_empty());
    assert!(!store.trades.contains_key(&doomed_trade));
    assert!(store.list_portfolios().iter().all(|p| p.id != doomed));

    // The other portfolio's trades are untouched.
    let remaining = store.list_trades(survivor);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].ticker, "MSFT");
    assert_ne!(remaining[0].id, doomed_trade);
}

#[test]
fn test_delete_missing_portfolio_reports_not_found() {
    let mut store = InMemoryStore::default();
    assert!(!store.delete_portfolio(Uuid::new_v4()));
}
