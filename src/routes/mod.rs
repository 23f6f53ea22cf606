pub(crate) mod analytics;
pub(crate) mod health;
pub(crate) mod portfolios;
pub(crate) mod trades;
