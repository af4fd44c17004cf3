pub mod cli;
pub mod commands;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, Result};
pub use models::{Dataset, Exchange, StockInfo, TickerDataset, WeeklyBar};
pub use services::build_dataset;
