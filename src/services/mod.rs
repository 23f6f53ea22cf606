pub mod analytics_service;
pub mod pnl;
pub mod portfolio_service;
pub mod trade_service;
