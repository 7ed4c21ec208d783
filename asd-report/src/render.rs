//! Entry point the dashboard calls whenever either dropdown changes.

use crate::aggregate::aggregate;
use crate::chart::{to_chart_specs, ChartSpec};
use asd_db::Database;
use asd_sales::selection::Selection;
use serde::Serialize;

/// What the dashboard should show: nothing, or two rows of two charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum RenderResult {
    Empty,
    Charts([[ChartSpec; 2]; 2]),
}

impl RenderResult {
    pub fn is_empty(&self) -> bool {
        matches!(self, RenderResult::Empty)
    }

    /// All charts in display order, row by row.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSpec> {
        let rows: &[[ChartSpec; 2]] = match self {
            RenderResult::Empty => &[],
            RenderResult::Charts(rows) => rows,
        };
        rows.iter().flatten()
    }

    fn from_specs(specs: Vec<ChartSpec>) -> Self {
        match <[ChartSpec; 4]>::try_from(specs) {
            Ok([a, b, c, d]) => RenderResult::Charts([[a, b], [c, d]]),
            Err(_) => RenderResult::Empty,
        }
    }
}

/// Recompute the charts for a new selection.
///
/// Incomplete or unrecognised selections are not errors; they render nothing.
/// Only a failing query against the loaded dataset is reported as `Err`.
pub fn handle_selection(db: &Database, selection: &Selection) -> anyhow::Result<RenderResult> {
    let tables = aggregate(db, selection)?;
    let result = RenderResult::from_specs(to_chart_specs(tables, selection));
    log::info!(
        "[ASD] render: {:?} -> {}",
        selection,
        if result.is_empty() { "no charts" } else { "4 charts" }
    );
    Ok(result)
}
