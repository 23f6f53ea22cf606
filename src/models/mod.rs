mod analytics;
mod portfolio;
mod trade;

pub use analytics::{AnalyticsResponse, PortfolioMetrics, SeriesMeta, SeriesPoint};
pub use portfolio::{CreatePortfolio, Portfolio, PortfolioWithTrades, UpdatePortfolio};
pub use trade::{CreateTrade, Trade, UpdateTrade};
