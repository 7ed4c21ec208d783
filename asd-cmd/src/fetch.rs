//! Download the dataset CSV to disk.

use asd_sales::fetch::fetch_dataset;
use asd_sales::record::SalesRecord;
use chrono::Local;
use log::info;
use std::path::Path;

/// Fetch the dataset from `url`, validate it, and write it to `output`.
pub async fn run_fetch(output: &str, url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    let started = Local::now();
    let dataset = fetch_dataset(&client, url).await?;

    if let Some(parent) = Path::new(output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, &dataset.body)?;

    let span = SalesRecord::year_span(&dataset.records);
    info!(
        "Fetched {} records ({:?} years) in {} ms. Output: {}",
        dataset.records.len(),
        span,
        (Local::now() - started).num_milliseconds(),
        output
    );
    Ok(())
}
