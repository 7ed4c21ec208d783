//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use asd_db::Database;
use asd_sales::selection::{ReportKind, Selection};
use dioxus::prelude::*;

/// Shared state for the sales dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until the CSV has been loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Value of the statistics dropdown
    pub report: Signal<Option<ReportKind>>,
    /// Value of the year dropdown
    pub year: Signal<Option<i32>>,
}

impl AppState {
    /// Create a new AppState with nothing selected.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            report: Signal::new(None),
            year: Signal::new(None),
        }
    }

    /// Current dropdown values as a selection. Reading subscribes the caller
    /// to both dropdown signals.
    pub fn selection(&self) -> Selection {
        Selection {
            report: (self.report)(),
            year: (self.year)(),
        }
    }
}
