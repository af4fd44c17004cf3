use std::path::PathBuf;

use crate::constants::{DB_FILE_NAME, PREVIEW_LIMIT};
use crate::models::Dataset;
use crate::services::build_dataset;

pub fn run(database: Option<PathBuf>) {
    let database_path = database.unwrap_or_else(default_database_path);

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    let result = runtime.block_on(build_dataset(&database_path));

    match result {
        Ok(dataset) => print!("{}", render_preview(&dataset)),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// The store ships alongside the binary: stock-data.sqlite two directories
/// above the executable, mirroring the repository layout it is produced in.
fn default_database_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(|dir| dir.parent())
                .map(|root| root.join(DB_FILE_NAME))
        })
        .unwrap_or_else(|| PathBuf::from(DB_FILE_NAME))
}

/// Render the preview: a header line, then up to `PREVIEW_LIMIT` entries in
/// ascending ts_code order. Missing metadata fields print as "unknown".
fn render_preview(dataset: &Dataset) -> String {
    let mut out = format!("Sample preview (up to {} tickers):\n", PREVIEW_LIMIT);

    let mut ts_codes: Vec<&String> = dataset.keys().collect();
    ts_codes.sort();

    for ts_code in ts_codes.into_iter().take(PREVIEW_LIMIT) {
        let entry = &dataset[ts_code];
        let info = &entry.info;
        let weekly = &entry.weekly;

        out.push_str(&format!("ts_code: {}\n", ts_code));
        out.push_str(&format!(
            "  name: {} exchange: {}\n",
            info.name.as_deref().unwrap_or("unknown"),
            info.exchange
        ));
        out.push_str(&format!(
            "  industry: {} list_date: {}\n",
            info.industry.as_deref().unwrap_or("unknown"),
            info.list_date.as_deref().unwrap_or("unknown")
        ));
        if let (Some(first), Some(last)) = (weekly.first(), weekly.last()) {
            out.push_str(&format!(
                "  weekly bars: {} first trade date: {} last trade date: {}\n",
                weekly.len(),
                first.trade_date,
                last.trade_date
            ));
        }
        out.push_str(&"-".repeat(40));
        out.push('\n');
    }

    out
}
