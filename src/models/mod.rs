mod exchange;
mod stock_info;
mod weekly_bar;

pub use exchange::Exchange;
pub use stock_info::StockInfo;
pub use weekly_bar::WeeklyBar;

use std::collections::HashMap;

/// Weekly time series for a single ticker, ascending by trade date
pub type WeeklySeries = Vec<WeeklyBar>;

/// Metadata plus weekly history for one qualifying ticker
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TickerDataset {
    pub info: StockInfo,
    pub weekly: WeeklySeries,
}

/// Final output collection (ts_code -> metadata + rows)
pub type Dataset = HashMap<String, TickerDataset>;
