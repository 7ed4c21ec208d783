//! Query inputs and results for grouped aggregates.
//!
//! A [`GroupQuery`] names a row filter, the fields to group by, and one
//! [`Measure`]. Running it produces a [`DerivedTable`], which serializes
//! to flat JSON records keyed by the dataset's column names so D3.js can
//! bind `x`, `y` and `color` by field name.

use asd_sales::record::columns;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A column of the `sales` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Field {
    #[serde(rename = "Year")]
    Year,
    #[serde(rename = "Month")]
    Month,
    #[serde(rename = "Recession")]
    Recession,
    #[serde(rename = "Vehicle_Type")]
    VehicleType,
    #[serde(rename = "Automobile_Sales")]
    AutomobileSales,
    #[serde(rename = "Advertising_Expenditure")]
    AdvertisingExpenditure,
    #[serde(rename = "unemployment_rate")]
    UnemploymentRate,
}

impl Field {
    /// Column name as spelled in the CSV header.
    pub fn column(&self) -> &'static str {
        match self {
            Field::Year => columns::YEAR,
            Field::Month => columns::MONTH,
            Field::Recession => columns::RECESSION,
            Field::VehicleType => columns::VEHICLE_TYPE,
            Field::AutomobileSales => columns::AUTOMOBILE_SALES,
            Field::AdvertisingExpenditure => columns::ADVERTISING_EXPENDITURE,
            Field::UnemploymentRate => columns::UNEMPLOYMENT_RATE,
        }
    }

    pub(crate) fn sql_column(&self) -> &'static str {
        match self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Recession => "recession",
            Field::VehicleType => "vehicle_type",
            Field::AutomobileSales => "automobile_sales",
            Field::AdvertisingExpenditure => "advertising_expenditure",
            Field::UnemploymentRate => "unemployment_rate",
        }
    }

    /// Measure fields are only ever aggregated, never grouped on.
    pub fn is_measure(&self) -> bool {
        matches!(self, Field::AutomobileSales | Field::AdvertisingExpenditure)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// The aggregate computed per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Measure {
    /// Mean of `Automobile_Sales`
    MeanAutomobileSales,
    /// Sum of `Advertising_Expenditure`
    TotalAdvertisingExpenditure,
}

impl Measure {
    /// The field the aggregate is computed over (and reported under).
    pub fn field(&self) -> Field {
        match self {
            Measure::MeanAutomobileSales => Field::AutomobileSales,
            Measure::TotalAdvertisingExpenditure => Field::AdvertisingExpenditure,
        }
    }

    pub(crate) fn sql_expr(&self) -> &'static str {
        match self {
            Measure::MeanAutomobileSales => "AVG(automobile_sales)",
            Measure::TotalAdvertisingExpenditure => "SUM(advertising_expenditure)",
        }
    }
}

/// Which rows take part in an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    /// Rows where `Recession == 1`
    Recession,
    /// Rows where `Year` equals the given year
    Year(i32),
}

/// A grouped aggregate to run against the `sales` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupQuery {
    pub filter: Filter,
    pub group_by: Vec<Field>,
    pub measure: Measure,
}

impl GroupQuery {
    pub fn new(filter: Filter, group_by: Vec<Field>, measure: Measure) -> Self {
        Self {
            filter,
            group_by,
            measure,
        }
    }
}

/// One grouping key value.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl KeyValue {
    fn to_json(&self) -> Value {
        match self {
            KeyValue::Int(v) => Value::from(*v),
            KeyValue::Real(v) => Value::from(*v),
            KeyValue::Text(v) => Value::from(v.as_str()),
        }
    }
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyValue::Int(v) => write!(f, "{}", v),
            KeyValue::Real(v) => write!(f, "{}", v),
            KeyValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for KeyValue {
    fn from(v: i64) -> Self {
        KeyValue::Int(v)
    }
}

impl From<f64> for KeyValue {
    fn from(v: f64) -> Self {
        KeyValue::Real(v)
    }
}

impl From<&str> for KeyValue {
    fn from(v: &str) -> Self {
        KeyValue::Text(v.to_string())
    }
}

/// One group: its key values (parallel to `DerivedTable::group_by`) and the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    pub keys: Vec<KeyValue>,
    pub value: f64,
}

/// The result of a grouped aggregate, ordered by group keys ascending.
///
/// Empty when no row passed the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedTable {
    pub group_by: Vec<Field>,
    pub measure: Measure,
    pub rows: Vec<GroupRow>,
}

impl DerivedTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Aggregate for the group whose keys equal `keys`.
    pub fn value_for(&self, keys: &[KeyValue]) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.keys.as_slice() == keys)
            .map(|row| row.value)
    }

    /// Sum of the aggregate over every group.
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.value).sum()
    }

    /// Flat records such as `{"Year": 2008, "Automobile_Sales": 150.0}`.
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                let mut record = Map::new();
                for (field, key) in self.group_by.iter().zip(&row.keys) {
                    record.insert(field.column().to_string(), key.to_json());
                }
                record.insert(
                    self.measure.field().column().to_string(),
                    Value::from(row.value),
                );
                record
            })
            .collect()
    }
}

impl Serialize for DerivedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> DerivedTable {
        DerivedTable {
            group_by: vec![Field::Year, Field::VehicleType],
            measure: Measure::MeanAutomobileSales,
            rows: vec![
                GroupRow {
                    keys: vec![KeyValue::Int(2008), "Car".into()],
                    value: 100.0,
                },
                GroupRow {
                    keys: vec![KeyValue::Int(2008), "Truck".into()],
                    value: 200.0,
                },
            ],
        }
    }

    #[test]
    fn only_sales_and_ad_spend_are_measures() {
        assert!(Field::AutomobileSales.is_measure());
        assert!(Field::AdvertisingExpenditure.is_measure());
        assert!(!Field::UnemploymentRate.is_measure());
        assert!(!Field::Year.is_measure());
        assert_eq!(Measure::MeanAutomobileSales.field(), Field::AutomobileSales);
        assert_eq!(
            Measure::TotalAdvertisingExpenditure.field(),
            Field::AdvertisingExpenditure
        );
    }

    #[test]
    fn table_serializes_as_flat_records() {
        let json = serde_json::to_value(sample_table()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"Year": 2008, "Vehicle_Type": "Car", "Automobile_Sales": 100.0},
                {"Year": 2008, "Vehicle_Type": "Truck", "Automobile_Sales": 200.0},
            ])
        );
    }

    #[test]
    fn field_serializes_as_column_name() {
        let json = serde_json::to_value(Field::UnemploymentRate).unwrap();
        assert_eq!(json, serde_json::json!("unemployment_rate"));
    }

    #[test]
    fn value_lookup_and_total() {
        let table = sample_table();
        assert_eq!(
            table.value_for(&[KeyValue::Int(2008), "Truck".into()]),
            Some(200.0)
        );
        assert_eq!(table.value_for(&[KeyValue::Int(2009), "Truck".into()]), None);
        assert!((table.total() - 300.0).abs() < 1e-9);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
