use serde::{Deserialize, Serialize};

use super::Exchange;

/// Descriptive metadata for a ticker, from the `stock_info` table,
/// plus the exchange derived from the ts_code suffix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockInfo {
    /// Ticker identifier, e.g. "000001.SZ"
    pub ts_code: String,

    /// Numeric symbol without the exchange suffix
    pub symbol: Option<String>,

    /// Display name
    pub name: Option<String>,

    /// Listing region
    pub area: Option<String>,

    /// Industry classification
    pub industry: Option<String>,

    /// Phonetic spelling key of the name
    pub cnspell: Option<String>,

    /// Market segment (main board, GEM, ...)
    pub market: Option<String>,

    /// Listing date (YYYYMMDD)
    pub list_date: Option<String>,

    /// Controlling entity name
    pub act_name: Option<String>,

    /// Controlling entity type
    pub act_ent_type: Option<String>,

    /// Exchange derived from the ts_code suffix
    pub exchange: Exchange,
}

impl StockInfo {
    /// Minimal record for a ticker with no surviving metadata row.
    ///
    /// Carries only the identifier and a freshly classified exchange, so the
    /// join step never drops a ticker that has weekly rows.
    pub fn placeholder(ts_code: impl Into<String>) -> Self {
        let ts_code = ts_code.into();
        let exchange = Exchange::from_ts_code(&ts_code);
        Self {
            ts_code,
            symbol: None,
            name: None,
            area: None,
            industry: None,
            cnspell: None,
            market: None,
            list_date: None,
            act_name: None,
            act_ent_type: None,
            exchange,
        }
    }
}
