//! Dropdown for choosing the report type.

use crate::state::AppState;
use asd_sales::selection::ReportKind;
use dioxus::prelude::*;

/// Statistics dropdown. An empty value means no report is chosen.
#[component]
pub fn ReportSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.report)();

    let on_change = move |evt: Event<FormData>| {
        let report = ReportKind::from_label(&evt.value());
        log::info!("[ASD] report selection changed: {:?}", report);
        state.report.set(report);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "dropdown-statistics",
                style: "font-weight: bold; margin-right: 8px;",
                "Select Statistics:"
            }
            select {
                id: "dropdown-statistics",
                style: "width: 80%; font-size: 20px;",
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select a report type"
                }
                for kind in ReportKind::ALL {
                    option {
                        value: kind.label(),
                        selected: selected == Some(kind),
                        {kind.label()}
                    }
                }
            }
        }
    }
}
