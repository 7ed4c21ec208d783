//! Dropdown for choosing the report year.

use crate::state::AppState;
use asd_sales::selection::{year_control_enabled, YEARS};
use dioxus::prelude::*;

/// Year dropdown, disabled unless the yearly report is selected.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.year)();
    let enabled = year_control_enabled((state.report)());

    let on_change = move |evt: Event<FormData>| {
        let year = evt
            .value()
            .parse::<i32>()
            .ok()
            .filter(|y| YEARS.contains(y));
        state.year.set(year);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            select {
                id: "select-year",
                style: "width: 80%; font-size: 20px;",
                disabled: !enabled,
                onchange: on_change,
                option {
                    value: "",
                    selected: selected.is_none(),
                    "Select Year"
                }
                for year in YEARS {
                    option {
                        value: "{year}",
                        selected: selected == Some(year),
                        "{year}"
                    }
                }
            }
        }
    }
}
