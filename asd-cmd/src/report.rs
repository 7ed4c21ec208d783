//! Run one dashboard selection against a CSV on disk.

use anyhow::Context;
use asd_db::Database;
use asd_report::handle_selection;
use asd_sales::selection::Selection;
use log::info;

/// Load `csv_path`, apply the selection, and return the render result as JSON.
///
/// An unknown report label or out-of-range year yields `{"kind":"empty"}`,
/// the same as the dashboard showing no charts.
pub fn run_report(
    csv_path: &str,
    statistics: Option<&str>,
    year: Option<i32>,
    pretty: bool,
) -> anyhow::Result<String> {
    let csv_data = std::fs::read_to_string(csv_path)
        .with_context(|| format!("failed to read dataset {}", csv_path))?;
    report_from_csv(&csv_data, statistics, year, pretty)
}

pub fn report_from_csv(
    csv_data: &str,
    statistics: Option<&str>,
    year: Option<i32>,
    pretty: bool,
) -> anyhow::Result<String> {
    let db = Database::new()?;
    let count = db.load_sales(csv_data)?;
    if count == 0 {
        anyhow::bail!("dataset has no rows");
    }

    let selection = Selection::from_inputs(statistics, year);
    if statistics.is_some() && selection.report.is_none() {
        info!("Unrecognised report type {:?}; nothing to render", statistics);
    }
    let result = handle_selection(&db, &selection)?;
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}
