//! What the dashboard shows before the dataset is usable.

use asd_sales::DATASET_FILE;
use dioxus::prelude::*;

/// How to get a usable dataset into the dashboard build.
pub fn recovery_hint() -> String {
    format!(
        "Run `asd-cli fetch -o {}` from the workspace root, then rebuild the dashboard.",
        DATASET_FILE
    )
}

/// Shown while the embedded CSV is loaded into the database.
#[component]
pub fn DatasetLoading() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Loading historical automobile sales..."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DatasetErrorProps {
    pub message: String,
}

/// Fatal load failure: the dashboard has no data and no charts to offer.
#[component]
pub fn DatasetError(props: DatasetErrorProps) -> Element {
    let hint = recovery_hint();
    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "The sales dataset could not be loaded." }
            p { style: "margin: 6px 0;", "{props.message}" }
            p { style: "margin: 6px 0 0; color: #503D36;", "{hint}" }
        }
    }
}
