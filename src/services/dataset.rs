use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::{Dataset, StockInfo, TickerDataset, WeeklyBar};
use crate::services::database::WeeklyStore;

/// Pair each row-bearing ticker with its metadata, or a placeholder when the
/// metadata row is missing or was filtered out. Every ticker present in
/// `weekly_rows` appears exactly once in the output.
pub fn assemble_dataset(
    weekly_rows: HashMap<String, Vec<WeeklyBar>>,
    mut info_map: HashMap<String, StockInfo>,
) -> Dataset {
    weekly_rows
        .into_iter()
        .map(|(ts_code, weekly)| {
            let info = info_map
                .remove(&ts_code)
                .unwrap_or_else(|| StockInfo::placeholder(&ts_code));
            (ts_code, TickerDataset { info, weekly })
        })
        .collect()
}

/// Build the full dataset from the store at `database_path`.
///
/// Fails before connecting if the file is absent. The store is closed on all
/// exit paths, including query errors.
pub async fn build_dataset(database_path: impl AsRef<Path>) -> Result<Dataset> {
    let store = WeeklyStore::open(database_path).await?;
    let result = build_from_store(&store).await;
    store.close().await;
    result
}

async fn build_from_store(store: &WeeklyStore) -> Result<Dataset> {
    let weekly_rows = store.fetch_weekly_rows().await?;

    let ts_codes: Vec<String> = weekly_rows.keys().cloned().collect();
    let info_map = store.fetch_stock_info(&ts_codes).await?;

    let dataset = assemble_dataset(weekly_rows, info_map);
    info!("Assembled dataset with {} tickers", dataset.len());
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exchange;
    use crate::services::database::fixtures::{
        create_store, insert_stock_info, insert_weekly_bars,
    };
    use tempfile::tempdir;

    const LATEST: &str = "20240216";

    fn bar(ts_code: &str, trade_date: &str) -> WeeklyBar {
        WeeklyBar {
            ts_code: ts_code.to_string(),
            trade_date: trade_date.to_string(),
            end_date: Some(trade_date.to_string()),
            freq: Some("week".to_string()),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
            pre_close: Some(10.0),
            open_qfq: 10.0,
            high_qfq: 11.0,
            low_qfq: 9.0,
            close_qfq: 10.5,
            open_hfq: 20.0,
            high_hfq: 22.0,
            low_hfq: 18.0,
            close_hfq: 21.0,
            vol: 1000.0,
            amount: 10500.0,
            change: Some(0.5),
            pct_chg: Some(5.0),
            is_suspension_fill: false,
        }
    }

    #[test]
    fn assemble_pairs_rows_with_metadata() {
        let mut weekly_rows = HashMap::new();
        weekly_rows.insert("600000.SH".to_string(), vec![bar("600000.SH", LATEST)]);

        let mut info_map = HashMap::new();
        let mut info = StockInfo::placeholder("600000.SH");
        info.name = Some("Pudong Bank".to_string());
        info_map.insert("600000.SH".to_string(), info);

        let dataset = assemble_dataset(weekly_rows, info_map);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset["600000.SH"].info.name.as_deref(), Some("Pudong Bank"));
        assert_eq!(dataset["600000.SH"].weekly.len(), 1);
    }

    #[test]
    fn assemble_substitutes_placeholder_when_metadata_missing() {
        // e.g. the metadata row was dropped by the ST filter in the info query
        let mut weekly_rows = HashMap::new();
        weekly_rows.insert("000001.SZ".to_string(), vec![bar("000001.SZ", LATEST)]);

        let dataset = assemble_dataset(weekly_rows, HashMap::new());
        assert_eq!(dataset.len(), 1);
        let info = &dataset["000001.SZ"].info;
        assert_eq!(info.ts_code, "000001.SZ");
        assert_eq!(info.exchange, Exchange::Shenzhen);
        assert!(info.name.is_none());
    }

    #[test]
    fn assemble_keeps_every_row_bearing_ticker_once() {
        let mut weekly_rows = HashMap::new();
        weekly_rows.insert("600000.SH".to_string(), vec![bar("600000.SH", LATEST)]);
        weekly_rows.insert("000001.SZ".to_string(), vec![bar("000001.SZ", LATEST)]);

        let mut info_map = HashMap::new();
        info_map.insert(
            "600000.SH".to_string(),
            StockInfo::placeholder("600000.SH"),
        );
        // stray metadata for a ticker without rows must not create an entry
        info_map.insert(
            "600519.SH".to_string(),
            StockInfo::placeholder("600519.SH"),
        );

        let dataset = assemble_dataset(weekly_rows, info_map);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.contains_key("600000.SH"));
        assert!(dataset.contains_key("000001.SZ"));
        assert!(!dataset.contains_key("600519.SH"));
    }

    #[tokio::test]
    async fn build_dataset_end_to_end() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("stock-data.sqlite");
        let pool = create_store(&db_path).await;

        insert_stock_info(&pool, "600000.SH", "Pudong Bank", "Banking").await;
        insert_weekly_bars(&pool, "600000.SH", 240, LATEST).await;
        pool.close().await;

        let dataset = build_dataset(&db_path).await.unwrap();

        assert_eq!(dataset.len(), 1);
        let entry = &dataset["600000.SH"];
        assert_eq!(entry.info.name.as_deref(), Some("Pudong Bank"));
        assert_eq!(entry.info.exchange, Exchange::Shanghai);
        assert_eq!(entry.weekly.len(), 240);
        assert_eq!(entry.weekly.last().unwrap().trade_date, LATEST);
    }

    #[tokio::test]
    async fn build_dataset_empty_store_is_empty() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("stock-data.sqlite");
        create_store(&db_path).await.close().await;

        let dataset = build_dataset(&db_path).await.unwrap();
        assert!(dataset.is_empty());
    }

    #[tokio::test]
    async fn build_dataset_missing_file_errors_with_path() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("nowhere.sqlite");

        let err = build_dataset(&db_path).await.unwrap_err();
        assert!(err.to_string().contains("nowhere.sqlite"));
    }
}
