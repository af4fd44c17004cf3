use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange a ticker trades on, derived from the ts_code suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// Shanghai Stock Exchange (".SH" suffix)
    Shanghai,
    /// Shenzhen Stock Exchange (".SZ" suffix)
    Shenzhen,
    /// Anything else, including codes without a suffix
    Unknown,
}

impl Exchange {
    /// Classify a ts_code by the suffix after its last "." (case-insensitive).
    ///
    /// Total: codes without a "." map to `Unknown`.
    pub fn from_ts_code(ts_code: &str) -> Self {
        let suffix = match ts_code.rsplit_once('.') {
            Some((_, suffix)) => suffix.to_ascii_uppercase(),
            None => return Exchange::Unknown,
        };
        match suffix.as_str() {
            "SH" => Exchange::Shanghai,
            "SZ" => Exchange::Shenzhen,
            _ => Exchange::Unknown,
        }
    }

    /// Human-readable exchange label
    pub fn label(&self) -> &'static str {
        match self {
            Exchange::Shanghai => "Shanghai Exchange",
            Exchange::Shenzhen => "Shenzhen Exchange",
            Exchange::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
