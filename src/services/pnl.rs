use crate::models::{PortfolioMetrics, SeriesPoint, Trade};

/// Per-trade profit and loss: `(exit_price - entry_price) * quantity`.
///
/// Total over all inputs: a zero quantity yields 0 regardless of prices, a
/// negative difference is a loss. Non-finite prices propagate per IEEE-754;
/// the request layer rejects them before they reach the store.
pub fn trade_pnl(trade: &Trade) -> f64 {
    (trade.exit_price - trade.entry_price) * trade.quantity as f64
}

/// Running portfolio value after each trade, in date order.
///
/// The input order carries no meaning, so trades are sorted by date before
/// accumulating. The sort is stable: same-day trades keep their incoming
/// relative order, so repeated calls chart identically.
///
/// One output point per input trade; an empty slice yields an empty series
/// (the presentation layer renders a placeholder for that case).
pub fn cumulative_series(trades: &[Trade], initial_value: f64) -> Vec<SeriesPoint> {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by_key(|t| t.date);

    ordered
        .into_iter()
        .scan(initial_value, |running, trade| {
            *running += trade_pnl(trade);
            Some(SeriesPoint {
                date: trade.date,
                value: *running,
            })
        })
        .collect()
}

/// Aggregate P&L and current value for a portfolio.
///
/// With no trades this is `{ 0, initial_value }`.
pub fn portfolio_metrics(initial_value: f64, trades: &[Trade]) -> PortfolioMetrics {
    let total_pnl: f64 = trades.iter().map(trade_pnl).sum();
    PortfolioMetrics {
        total_pnl,
        total_value: initial_value + total_pnl,
    }
}
