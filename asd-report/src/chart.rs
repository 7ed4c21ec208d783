//! Which chart draws each derived table.
//!
//! | # | Recession period                               | Yearly                          |
//! |---|------------------------------------------------|---------------------------------|
//! | 1 | Line, Year vs sales                            | Line, Year vs sales             |
//! | 2 | Bar, Year vs sales, colored by vehicle type    | Line, Month vs sales            |
//! | 3 | Pie, advertising by vehicle type               | Bar, Month vs sales, colored by vehicle type |
//! | 4 | Bar, vehicle type vs sales, colored by unemployment rate | Pie, advertising by vehicle type |

use asd_db::models::{DerivedTable, Field};
use asd_sales::selection::{ReportKind, Selection};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x: Field,
    pub y: Field,
    pub data: DerivedTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x: Field,
    pub y: Field,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Field>,
    /// Axis/legend captions that replace the raw column name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<Field, String>,
    pub data: DerivedTable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    /// Field giving each slice's size
    pub values: Field,
    /// Field naming each slice
    pub names: Field,
    pub data: DerivedTable,
}

/// A declarative description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Line(LineChart),
    Bar(BarChart),
    Pie(PieChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Line(c) => &c.title,
            ChartSpec::Bar(c) => &c.title,
            ChartSpec::Pie(c) => &c.title,
        }
    }

    pub fn data(&self) -> &DerivedTable {
        match self {
            ChartSpec::Line(c) => &c.data,
            ChartSpec::Bar(c) => &c.data,
            ChartSpec::Pie(c) => &c.data,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ChartSpec::Line(_) => "line",
            ChartSpec::Bar(_) => "bar",
            ChartSpec::Pie(_) => "pie",
        }
    }
}

fn line(title: impl Into<String>, x: Field, data: DerivedTable) -> ChartSpec {
    ChartSpec::Line(LineChart {
        title: title.into(),
        x,
        y: Field::AutomobileSales,
        data,
    })
}

fn bar(
    title: impl Into<String>,
    x: Field,
    color: Field,
    labels: BTreeMap<Field, String>,
    data: DerivedTable,
) -> ChartSpec {
    ChartSpec::Bar(BarChart {
        title: title.into(),
        x,
        y: Field::AutomobileSales,
        color: Some(color),
        labels,
        data,
    })
}

fn pie(title: impl Into<String>, data: DerivedTable) -> ChartSpec {
    ChartSpec::Pie(PieChart {
        title: title.into(),
        values: Field::AdvertisingExpenditure,
        names: Field::VehicleType,
        data,
    })
}

/// Pair each derived table with its chart, positionally.
///
/// Returns no charts unless the selection is complete and exactly four
/// tables are supplied.
pub fn to_chart_specs(tables: Vec<DerivedTable>, selection: &Selection) -> Vec<ChartSpec> {
    let Ok([t1, t2, t3, t4]) = <[DerivedTable; 4]>::try_from(tables) else {
        return Vec::new();
    };

    match (selection.report, selection.year) {
        (Some(ReportKind::RecessionPeriod), _) => {
            let unemployment_labels = BTreeMap::from([
                (Field::UnemploymentRate, "Unemployment Rate".to_string()),
                (Field::AutomobileSales, "Average Automobile Sales".to_string()),
            ]);
            vec![
                line("Average Automobile Sales During Recession Period", Field::Year, t1),
                bar(
                    "Average Automobile Sales by Vehicle Type During Recession",
                    Field::Year,
                    Field::VehicleType,
                    BTreeMap::new(),
                    t2,
                ),
                pie("Advertising Expenditure Share by Vehicle Type During Recession", t3),
                bar(
                    "Effect of Unemployment Rate on Vehicle Type and Sales",
                    Field::VehicleType,
                    Field::UnemploymentRate,
                    unemployment_labels,
                    t4,
                ),
            ]
        }
        (Some(ReportKind::Yearly), Some(year)) => vec![
            line("Yearly Automobile Sales", Field::Year, t1),
            line("Average Monthly Automobile Sales", Field::Month, t2),
            bar(
                format!("Average Vehicles Sold by Vehicle Type in {}", year),
                Field::Month,
                Field::VehicleType,
                BTreeMap::new(),
                t3,
            ),
            pie(format!("Advertising Expenditure by Vehicle Type in {}", year), t4),
        ],
        _ => Vec::new(),
    }
}
