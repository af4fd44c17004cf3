use serde::{Deserialize, Serialize};

/// One weekly observation for one ticker, as stored in the `weekly_qfq` table.
///
/// `trade_date` is a fixed-width `YYYYMMDD` string, so lexical ordering
/// matches chronological ordering. Rows are immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyBar {
    /// Ticker identifier, e.g. "600000.SH"
    pub ts_code: String,

    /// Trading date of the weekly bar (YYYYMMDD)
    pub trade_date: String,

    /// Period end date (YYYYMMDD)
    pub end_date: Option<String>,

    /// Bar frequency marker ("week")
    pub freq: Option<String>,

    /// Raw (unadjusted) opening price
    pub open: f64,

    /// Raw highest price
    pub high: f64,

    /// Raw lowest price
    pub low: f64,

    /// Raw closing price
    pub close: f64,

    /// Previous period's close
    pub pre_close: Option<f64>,

    /// Forward-adjusted (qfq) opening price
    pub open_qfq: f64,

    /// Forward-adjusted highest price
    pub high_qfq: f64,

    /// Forward-adjusted lowest price
    pub low_qfq: f64,

    /// Forward-adjusted closing price
    pub close_qfq: f64,

    /// Backward-adjusted (hfq) opening price
    pub open_hfq: f64,

    /// Backward-adjusted highest price
    pub high_hfq: f64,

    /// Backward-adjusted lowest price
    pub low_hfq: f64,

    /// Backward-adjusted closing price
    pub close_hfq: f64,

    /// Trading volume
    pub vol: f64,

    /// Trading amount
    pub amount: f64,

    /// Absolute price change versus previous close
    pub change: Option<f64>,

    /// Percentage price change versus previous close
    pub pct_chg: Option<f64>,

    /// True when the bar was synthesized to fill a trading suspension
    pub is_suspension_fill: bool,
}
