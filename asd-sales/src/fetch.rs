//! Download the dataset CSV over HTTP.

use crate::record::SalesRecord;
use anyhow::Context;
use reqwest::Client;

/// A downloaded dataset: the CSV as served, and its parsed rows.
#[derive(Debug, Clone)]
pub struct FetchedDataset {
    pub body: String,
    pub records: Vec<SalesRecord>,
}

/// Fetch the dataset from `url` and confirm it parses as sales records.
pub async fn fetch_dataset(client: &Client, url: &str) -> anyhow::Result<FetchedDataset> {
    log::info!("[ASD] fetch: Requesting {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("dataset request to {} returned {}", url, status);
    }

    let body = response.text().await.context("failed to read dataset body")?;
    let dataset = validate_body(url, body)?;
    log::info!(
        "[ASD] fetch: Received {} bytes, {} records",
        dataset.body.len(),
        dataset.records.len()
    );
    Ok(dataset)
}

/// Parse a downloaded body, rejecting malformed or empty datasets.
pub fn validate_body(url: &str, body: String) -> anyhow::Result<FetchedDataset> {
    let records = SalesRecord::parse_csv(&body).context("downloaded dataset is malformed")?;
    if records.is_empty() {
        anyhow::bail!("downloaded dataset from {} has no rows", url);
    }
    Ok(FetchedDataset { body, records })
}
