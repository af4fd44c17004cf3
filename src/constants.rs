//! Qualification thresholds and store layout constants.

/// File name of the SQLite store holding `weekly_qfq` and `stock_info`.
pub const DB_FILE_NAME: &str = "stock-data.sqlite";

/// Minimum number of weekly rows a ticker must have to qualify.
pub const MIN_WEEKLY_ROWS: i64 = 240;

/// Maximum number of dataset entries shown by the console preview.
pub const PREVIEW_LIMIT: usize = 3;
