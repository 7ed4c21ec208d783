//! User selection driving the dashboard: which report, and for which year.

use serde::Serialize;
use std::ops::RangeInclusive;

/// Years offered by the year dropdown.
pub const YEARS: RangeInclusive<i32> = 1980..=2023;

/// Top-level report category chosen from the statistics dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReportKind {
    Yearly,
    RecessionPeriod,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Yearly, ReportKind::RecessionPeriod];

    /// Dropdown label, which is also the value the dropdown reports.
    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Yearly => "Yearly Statistics",
            ReportKind::RecessionPeriod => "Recession Period Statistics",
        }
    }

    /// Map a dropdown value back to a report kind. Unknown values yield `None`.
    pub fn from_label(value: &str) -> Option<ReportKind> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.label() == value.trim())
    }
}

/// The pair of filters the user has chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub report: Option<ReportKind>,
    pub year: Option<i32>,
}

impl Selection {
    /// Build a selection from raw dropdown values.
    ///
    /// An unrecognised report label and a year outside [`YEARS`] both
    /// collapse to "not chosen".
    pub fn from_inputs(report: Option<&str>, year: Option<i32>) -> Self {
        Selection {
            report: report.and_then(ReportKind::from_label),
            year: year.filter(|y| YEARS.contains(y)),
        }
    }

    pub fn recession() -> Self {
        Selection {
            report: Some(ReportKind::RecessionPeriod),
            year: None,
        }
    }

    pub fn yearly(year: i32) -> Self {
        Selection::from_inputs(Some(ReportKind::Yearly.label()), Some(year))
    }
}

/// The year control is enabled only for the yearly report.
pub fn year_control_enabled(report: Option<ReportKind>) -> bool {
    report == Some(ReportKind::Yearly)
}
