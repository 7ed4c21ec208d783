use crate::error::ParseError;
use crate::month::parse_month;
use anyhow::Context;
use chrono::Month;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

/// Column names used by the CSV header row.
pub mod columns {
    pub const YEAR: &str = "Year";
    pub const MONTH: &str = "Month";
    pub const RECESSION: &str = "Recession";
    pub const VEHICLE_TYPE: &str = "Vehicle_Type";
    pub const AUTOMOBILE_SALES: &str = "Automobile_Sales";
    pub const ADVERTISING_EXPENDITURE: &str = "Advertising_Expenditure";
    pub const UNEMPLOYMENT_RATE: &str = "unemployment_rate";

    /// Header row containing only the columns the dashboard reads.
    pub const HEADER: &str = "Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate";
}

/// One monthly observation from the historical automobile sales dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub year: i32,
    pub month: Month,
    /// True when the month falls inside a recession period
    pub recession: bool,
    pub vehicle_type: String,
    pub automobile_sales: f64,
    pub advertising_expenditure: f64,
    pub unemployment_rate: f64,
}

/// Row shape as it appears in the CSV. Columns not named here are ignored.
#[derive(Debug, Deserialize)]
struct RawSalesRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Month")]
    month: String,
    #[serde(rename = "Recession")]
    recession: String,
    #[serde(rename = "Vehicle_Type")]
    vehicle_type: String,
    #[serde(rename = "Automobile_Sales")]
    automobile_sales: f64,
    #[serde(rename = "Advertising_Expenditure")]
    advertising_expenditure: f64,
    #[serde(rename = "unemployment_rate")]
    unemployment_rate: f64,
}

impl TryFrom<RawSalesRow> for SalesRecord {
    type Error = ParseError;

    fn try_from(row: RawSalesRow) -> Result<Self, Self::Error> {
        let recession = match row.recession.trim() {
            "1" | "1.0" | "true" | "True" => true,
            "0" | "0.0" | "false" | "False" => false,
            other => return Err(ParseError::InvalidRecessionFlag(other.to_string())),
        };
        Ok(SalesRecord {
            year: row.year,
            month: parse_month(&row.month)?,
            recession,
            vehicle_type: row.vehicle_type.trim().to_string(),
            automobile_sales: row.automobile_sales,
            advertising_expenditure: row.advertising_expenditure,
            unemployment_rate: row.unemployment_rate,
        })
    }
}

impl SalesRecord {
    /// Parse a CSV string (with headers) into sales records.
    ///
    /// Any malformed row fails the whole parse; the dashboard cannot run
    /// on a partially loaded dataset.
    pub fn parse_csv(csv_data: &str) -> anyhow::Result<Vec<SalesRecord>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut records = Vec::new();
        for (idx, result) in rdr.deserialize::<RawSalesRow>().enumerate() {
            // +2: one for the header row, one for 1-based line numbers
            let line = idx + 2;
            let raw = result.with_context(|| format!("malformed sales row at line {}", line))?;
            let record = SalesRecord::try_from(raw)
                .with_context(|| format!("invalid sales row at line {}", line))?;
            records.push(record);
        }
        log::info!("[ASD] record: Parsed {} sales records", records.len());
        Ok(records)
    }

    /// Calendar ordinal of the month, 1 for January.
    pub fn month_ordinal(&self) -> u32 {
        self.month.number_from_month()
    }

    /// Earliest and latest year across the records.
    pub fn year_span(records: &[SalesRecord]) -> Option<(i32, i32)> {
        let min = records.iter().map(|r| r.year).min()?;
        let max = records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_columns_and_ignores_extras() {
        let csv = "\
Date,Year,Month,Recession,Consumer_Confidence,Advertising_Expenditure,unemployment_rate,Automobile_Sales,Vehicle_Type,City
1/31/1980,1980,Jan,1,108.24,1558,5.4,456.0,Supperminicar,Georgia
2/29/1980,1980,Feb,0,98.75,3048,4.8,555.9,Smallfamiliycar,New York
";
        let records = SalesRecord::parse_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 1980);
        assert_eq!(records[0].month, Month::January);
        assert!(records[0].recession);
        assert_eq!(records[0].vehicle_type, "Supperminicar");
        assert!((records[0].automobile_sales - 456.0).abs() < f64::EPSILON);
        assert!((records[0].advertising_expenditure - 1558.0).abs() < f64::EPSILON);
        assert!((records[0].unemployment_rate - 5.4).abs() < f64::EPSILON);
        assert!(!records[1].recession);
        assert_eq!(records[1].month, Month::February);
    }

    #[test]
    fn rejects_bad_recession_flag() {
        let csv = format!("{}\n1980,Jan,maybe,Sports,1,1,1\n", columns::HEADER);
        let err = SalesRecord::parse_csv(&csv).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "Year,Month\n1980,Jan\n";
        assert!(SalesRecord::parse_csv(csv).is_err());
    }

    #[test]
    fn header_only_csv_is_empty() {
        let records = SalesRecord::parse_csv(columns::HEADER).unwrap();
        assert!(records.is_empty());
        assert_eq!(SalesRecord::year_span(&records), None);
    }

    #[test]
    fn year_span_covers_all_records() {
        let csv = format!(
            "{}\n1995,Mar,0,Sports,1,1,1\n1981,Apr,1,Sports,1,1,1\n2003,May,0,Sports,1,1,1\n",
            columns::HEADER
        );
        let records = SalesRecord::parse_csv(&csv).unwrap();
        assert_eq!(SalesRecord::year_span(&records), Some((1981, 2003)));
    }
}
