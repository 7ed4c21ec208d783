//! Automobile Sales Statistics Dashboard
//!
//! Two dropdowns (report type, year) drive four D3.js charts of the
//! historical automobile sales dataset.
//!
//! Data flow:
//! 1. `build.rs` copies `historical_automobile_sales.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded once into an in-memory SQLite database.
//! 4. Whenever either dropdown changes, `handle_selection` recomputes the
//!    charts and each one is re-rendered into its slot of the 2x2 grid.

use asd_chart_ui::components::{
    ChartGrid, DatasetError, DatasetLoading, ReportSelector, YearSelector, CHART_IDS,
};
use asd_chart_ui::js_bridge;
use asd_chart_ui::state::AppState;
use asd_db::Database;
use asd_report::{handle_selection, RenderResult};
use asd_sales::{APP_TITLE, DASHBOARD_HEADING};
use dioxus::prelude::*;

/// Sales dataset, embedded at compile time.
const SALES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/historical_automobile_sales.csv"));

const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("sales-dashboard-root"))
        .launch(App);
}

/// Load the embedded CSV. An empty or malformed dataset is fatal for the app.
fn load_dataset() -> Result<(Database, usize), String> {
    let db = Database::new().map_err(|e| format!("Database initialization failed: {}", e))?;
    db.load_sales(SALES_CSV)
        .map_err(|e| format!("Failed to load sales data: {:#}", e))?;
    let count = db
        .record_count()
        .map_err(|e| format!("Failed to count sales data: {:#}", e))?;
    if count == 0 {
        return Err("The embedded dataset contains no sales records.".to_string());
    }
    Ok((db, count))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        match load_dataset() {
            Ok((db, count)) => {
                web_sys::console::log_1(
                    &format!("[ASD] dashboard: dataset loaded ({} records)", count).into(),
                );
                state.db.set(Some(db));
            }
            Err(msg) => {
                log::error!("{}", msg);
                state.error_msg.set(Some(msg));
            }
        }
        state.loading.set(false);
        js_bridge::init_charts();
    });

    // ─── Effect 2: Recompute charts on every selection change ───
    // Re-runs whenever loading, db, report or year change.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let selection = state.selection();
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };

        let result = match handle_selection(&db, &selection) {
            Ok(result) => result,
            Err(e) => {
                log::error!("[ASD] dashboard: selection {:?} failed: {:#}", selection, e);
                RenderResult::Empty
            }
        };

        match &result {
            RenderResult::Empty => {
                for id in CHART_IDS {
                    js_bridge::destroy_chart(id);
                }
            }
            RenderResult::Charts(_) => {
                js_bridge::begin_render_batch();
                for (id, spec) in CHART_IDS.iter().zip(result.charts()) {
                    js_bridge::render_chart(id, spec);
                }
            }
        }
    });

    let has_charts = state.db.read().is_some();

    // ─── Render ───
    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Script { src: D3_SRC }
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; color: #503D36; font-size: 24px;",
                "{DASHBOARD_HEADING}"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                DatasetError { message: err.clone() }
            }

            if *state.loading.read() {
                DatasetLoading {}
            } else {
                ReportSelector {}
                YearSelector {}
                if has_charts {
                    ChartGrid {}
                }
            }
        }
    }
}
