//! Core types for the historical automobile sales dataset.
//!
//! - `record`: one CSV row as a typed [`record::SalesRecord`]
//! - `month`: calendar month parsing and ordering
//! - `selection`: the user's report kind and year choice
//! - `error`: field-level parse errors
//! - `fetch` (feature `api`): download the dataset over HTTP

pub mod error;
pub mod month;
pub mod record;
pub mod selection;

#[cfg(feature = "api")]
pub mod fetch;

/// Location of the published dataset.
pub const DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBMDeveloperSkillsNetwork-DV0101EN-SkillsNetwork/Data%20Files/historical_automobile_sales.csv";

/// Browser tab title for the dashboard.
pub const APP_TITLE: &str = "Automobile Statistics Dashboard";

/// Page heading for the dashboard.
pub const DASHBOARD_HEADING: &str = "Automobile Sales Statistics Dashboard";

/// Workspace-relative path the CLI fetches into and the dashboard embeds.
pub const DATASET_FILE: &str = "fixtures/historical_automobile_sales.csv";
