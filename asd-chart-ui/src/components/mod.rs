//! Reusable Dioxus RSX components for the sales dashboard.

mod chart_grid;
mod dataset_status;
mod report_selector;
mod year_selector;

pub use chart_grid::{slot_position, ChartGrid, CHART_IDS};
pub use dataset_status::{recovery_hint, DatasetError, DatasetLoading};
pub use report_selector::ReportSelector;
pub use year_selector::YearSelector;
