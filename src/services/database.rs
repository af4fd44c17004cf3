use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::MIN_WEEKLY_ROWS;
use crate::error::{AppError, Result};
use crate::models::{Exchange, StockInfo, WeeklyBar};

/// Read-only handle on the SQLite store holding `weekly_qfq` and `stock_info`.
///
/// The store is an input file produced elsewhere; this type never creates
/// tables or writes rows.
#[derive(Debug)]
pub struct WeeklyStore {
    pool: SqlitePool,
    database_path: PathBuf,
}

/// Qualifying query over `weekly_qfq`:
/// rows joined to a non-ST `stock_info` name, restricted to tickers with at
/// least `MIN_WEEKLY_ROWS` bars whose own latest trade date equals the global
/// latest trade date. trade_date is fixed-width text, so MAX() and the final
/// ORDER BY are chronological.
const WEEKLY_ROWS_QUERY: &str = r#"
    WITH filtered AS (
        SELECT w.*
        FROM weekly_qfq AS w
        JOIN stock_info AS si ON w.ts_code = si.ts_code
        WHERE INSTR(UPPER(si.name), 'ST') = 0
    ),
    global_max AS (
        SELECT MAX(trade_date) AS max_trade_date
        FROM filtered
    ),
    qualified AS (
        SELECT ts_code
        FROM filtered
        GROUP BY ts_code
        HAVING COUNT(*) >= ?1
           AND MAX(trade_date) = (SELECT max_trade_date FROM global_max)
    )
    SELECT
        ts_code, trade_date, end_date, freq,
        open, high, low, close, pre_close,
        open_qfq, high_qfq, low_qfq, close_qfq,
        open_hfq, high_hfq, low_hfq, close_hfq,
        vol, amount, change, pct_chg, is_suspension_fill
    FROM filtered
    WHERE ts_code IN (SELECT ts_code FROM qualified)
    ORDER BY ts_code ASC, trade_date ASC
"#;

impl WeeklyStore {
    /// Open the store read-only, failing fast when the file is absent.
    pub async fn open(database_path: impl AsRef<Path>) -> Result<Self> {
        let database_path = database_path.as_ref().to_path_buf();

        if !database_path.is_file() {
            return Err(AppError::NotFound(format!(
                "SQLite database not found at {}",
                database_path.display()
            )));
        }

        info!("Opening SQLite store at: {:?}", database_path);

        let connect_options = SqliteConnectOptions::new()
            .filename(&database_path)
            .read_only(true);

        let pool = SqlitePool::connect_with(connect_options).await?;
        Ok(Self {
            pool,
            database_path,
        })
    }

    /// Path this store was opened from.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// Fetch qualifying weekly rows grouped by ts_code.
    ///
    /// Rows arrive ordered by ts_code then trade_date ascending, so each
    /// group preserves chronological order.
    pub async fn fetch_weekly_rows(&self) -> Result<HashMap<String, Vec<WeeklyBar>>> {
        let rows = sqlx::query(WEEKLY_ROWS_QUERY)
            .bind(MIN_WEEKLY_ROWS)
            .fetch_all(&self.pool)
            .await?;

        let mut grouped: HashMap<String, Vec<WeeklyBar>> = HashMap::new();
        for row in rows {
            let bar = row_to_weekly_bar(&row)?;
            grouped.entry(bar.ts_code.clone()).or_default().push(bar);
        }

        info!("Fetched weekly rows for {} qualifying tickers", grouped.len());
        Ok(grouped)
    }

    /// Fetch metadata for the given ts_codes, excluding ST names.
    ///
    /// This ST predicate is applied again here, independently of the one in
    /// the weekly row query; a ticker filtered out at this stage still keeps
    /// its rows and later receives placeholder metadata. An empty input
    /// returns an empty map without executing a query.
    pub async fn fetch_stock_info(&self, ts_codes: &[String]) -> Result<HashMap<String, StockInfo>> {
        if ts_codes.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; ts_codes.len()].join(",");
        let query_sql = format!(
            r#"
            SELECT
                ts_code, symbol, name, area, industry,
                cnspell, market, list_date, act_name, act_ent_type
            FROM stock_info
            WHERE ts_code IN ({placeholders})
              AND INSTR(UPPER(name), 'ST') = 0
            "#
        );

        let mut query = sqlx::query(&query_sql);
        for ts_code in ts_codes {
            query = query.bind(ts_code);
        }

        let rows = query.fetch_all(&self.pool).await?;

        let mut info_map = HashMap::new();
        for row in rows {
            let info = row_to_stock_info(&row)?;
            info_map.insert(info.ts_code.clone(), info);
        }
        Ok(info_map)
    }

    /// Close the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("SQLite store closed");
    }
}

fn row_to_weekly_bar(row: &SqliteRow) -> Result<WeeklyBar> {
    Ok(WeeklyBar {
        ts_code: row.try_get("ts_code")?,
        trade_date: row.try_get("trade_date")?,
        end_date: row.try_get("end_date")?,
        freq: row.try_get("freq")?,
        open: row.try_get("open")?,
        high: row.try_get("high")?,
        low: row.try_get("low")?,
        close: row.try_get("close")?,
        pre_close: row.try_get("pre_close")?,
        open_qfq: row.try_get("open_qfq")?,
        high_qfq: row.try_get("high_qfq")?,
        low_qfq: row.try_get("low_qfq")?,
        close_qfq: row.try_get("close_qfq")?,
        open_hfq: row.try_get("open_hfq")?,
        high_hfq: row.try_get("high_hfq")?,
        low_hfq: row.try_get("low_hfq")?,
        close_hfq: row.try_get("close_hfq")?,
        vol: row.try_get("vol")?,
        amount: row.try_get("amount")?,
        change: row.try_get("change")?,
        pct_chg: row.try_get("pct_chg")?,
        is_suspension_fill: row.try_get::<i64, _>("is_suspension_fill")? != 0,
    })
}

fn row_to_stock_info(row: &SqliteRow) -> Result<StockInfo> {
    let ts_code: String = row.try_get("ts_code")?;
    let exchange = Exchange::from_ts_code(&ts_code);
    Ok(StockInfo {
        ts_code,
        symbol: row.try_get("symbol")?,
        name: row.try_get("name")?,
        area: row.try_get("area")?,
        industry: row.try_get("industry")?,
        cnspell: row.try_get("cnspell")?,
        market: row.try_get("market")?,
        list_date: row.try_get("list_date")?,
        act_name: row.try_get("act_name")?,
        act_ent_type: row.try_get("act_ent_type")?,
        exchange,
    })
}
