//! Grouped tables behind each report.
//!
//! Recession report, all four tables over `Recession == 1` rows:
//! 1. mean sales by Year
//! 2. mean sales by (Year, Vehicle_Type)
//! 3. total advertising by Vehicle_Type
//! 4. mean sales by (unemployment_rate, Vehicle_Type)
//!
//! Yearly report for year `y`:
//! 1. mean sales by Year, whole dataset
//! 2. mean sales by Month, whole dataset
//! 3. mean sales by (Month, Vehicle_Type), rows of year `y`
//! 4. total advertising by Vehicle_Type, rows of year `y`
//!
//! Tables 1 and 2 of the yearly report show the trend across all years and
//! do not depend on `y`.

use asd_db::models::{DerivedTable, Field, Filter, GroupQuery, Measure};
use asd_db::Database;
use asd_sales::selection::{ReportKind, Selection};

/// The four queries for a selection, or `None` when the selection is incomplete.
pub fn plan(selection: &Selection) -> Option<[GroupQuery; 4]> {
    use Field::*;
    use Measure::*;

    match selection.report? {
        ReportKind::RecessionPeriod => {
            let f = Filter::Recession;
            Some([
                GroupQuery::new(f, vec![Year], MeanAutomobileSales),
                GroupQuery::new(f, vec![Year, VehicleType], MeanAutomobileSales),
                GroupQuery::new(f, vec![VehicleType], TotalAdvertisingExpenditure),
                GroupQuery::new(f, vec![UnemploymentRate, VehicleType], MeanAutomobileSales),
            ])
        }
        ReportKind::Yearly => {
            let year = Filter::Year(selection.year?);
            Some([
                GroupQuery::new(Filter::All, vec![Year], MeanAutomobileSales),
                GroupQuery::new(Filter::All, vec![Month], MeanAutomobileSales),
                GroupQuery::new(year, vec![Month, VehicleType], MeanAutomobileSales),
                GroupQuery::new(year, vec![VehicleType], TotalAdvertisingExpenditure),
            ])
        }
    }
}

/// Compute the derived tables for a selection.
///
/// Exactly four tables for a complete selection, none otherwise. A table
/// whose filter matches no rows is returned empty rather than dropped.
pub fn aggregate(db: &Database, selection: &Selection) -> anyhow::Result<Vec<DerivedTable>> {
    let Some(queries) = plan(selection) else {
        log::info!("[ASD] aggregate: Incomplete selection {:?}, nothing to compute", selection);
        return Ok(Vec::new());
    };
    queries.iter().map(|q| db.query_grouped(q)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{db_from, sales_db, SALES_CSV};
    use asd_db::models::KeyValue;
    use asd_sales::record::SalesRecord;
    use asd_sales::selection::YEARS;
    use std::collections::HashSet;

    fn records() -> Vec<SalesRecord> {
        SalesRecord::parse_csv(SALES_CSV).unwrap()
    }

    fn assert_tables_close(a: &[DerivedTable], b: &[DerivedTable]) {
        assert_eq!(a.len(), b.len());
        for (ta, tb) in a.iter().zip(b) {
            assert_eq!(ta.group_by, tb.group_by);
            assert_eq!(ta.measure, tb.measure);
            assert_eq!(ta.len(), tb.len());
            for (ra, rb) in ta.rows.iter().zip(&tb.rows) {
                assert_eq!(ra.keys, rb.keys);
                assert!((ra.value - rb.value).abs() < 1e-9, "{} vs {}", ra.value, rb.value);
            }
        }
    }

    #[test]
    fn recession_scenario_means_and_sums() {
        let db = db_from(
            "\
Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate
2008,Jan,1,Car,100,50,7.0
2008,Jan,1,Truck,200,30,7.0
",
        );
        let tables = aggregate(&db, &Selection::recession()).unwrap();
        assert_eq!(tables.len(), 4);

        assert_eq!(tables[0].len(), 1);
        assert_eq!(tables[0].value_for(&[KeyValue::Int(2008)]), Some(150.0));

        assert_eq!(tables[2].len(), 2);
        assert_eq!(tables[2].value_for(&["Car".into()]), Some(50.0));
        assert_eq!(tables[2].value_for(&["Truck".into()]), Some(30.0));
    }

    #[test]
    fn recession_tables_skip_non_recession_rows() {
        let tables = aggregate(&sales_db(), &Selection::recession()).unwrap();
        let years: Vec<&KeyValue> = tables[0].rows.iter().map(|r| &r.keys[0]).collect();
        assert_eq!(years, [&KeyValue::Int(1981), &KeyValue::Int(2008)]);
        assert_eq!(
            tables[3].group_by,
            vec![Field::UnemploymentRate, Field::VehicleType]
        );
        assert_eq!(
            tables[3].value_for(&[KeyValue::Real(7.5), "Supperminicar".into()]),
            Some(410.5)
        );
    }

    #[test]
    fn recession_output_ignores_year() {
        let db = sales_db();
        let baseline = aggregate(&db, &Selection::recession()).unwrap();
        for year in [1980, 1981, 2008, 2023] {
            let selection = Selection {
                report: Some(ReportKind::RecessionPeriod),
                year: Some(year),
            };
            assert_eq!(aggregate(&db, &selection).unwrap(), baseline);
        }
    }

    #[test]
    fn recession_ad_spend_is_conserved_across_groups() {
        let tables = aggregate(&sales_db(), &Selection::recession()).unwrap();
        let expected: f64 = records()
            .iter()
            .filter(|r| r.recession)
            .map(|r| r.advertising_expenditure)
            .sum();
        assert!((tables[2].total() - expected).abs() < 1e-9);
    }

    #[test]
    fn yearly_tables_three_and_four_use_only_selected_year() {
        let db = sales_db();
        let records = records();
        for year in YEARS {
            let tables = aggregate(&db, &Selection::yearly(year)).unwrap();
            assert_eq!(tables.len(), 4);

            let in_year: Vec<&SalesRecord> = records.iter().filter(|r| r.year == year).collect();
            let groups: HashSet<(u32, &str)> = in_year
                .iter()
                .map(|r| (r.month_ordinal(), r.vehicle_type.as_str()))
                .collect();
            assert_eq!(tables[2].len(), groups.len(), "year {}", year);

            let ad_spend: f64 = in_year.iter().map(|r| r.advertising_expenditure).sum();
            assert!((tables[3].total() - ad_spend).abs() < 1e-9, "year {}", year);
        }
    }

    #[test]
    fn yearly_trend_tables_do_not_depend_on_year() {
        let db = sales_db();
        let baseline = aggregate(&db, &Selection::yearly(1980)).unwrap();
        for year in YEARS {
            let tables = aggregate(&db, &Selection::yearly(year)).unwrap();
            assert_eq!(tables[0], baseline[0], "year {}", year);
            assert_eq!(tables[1], baseline[1], "year {}", year);
        }
    }

    #[test]
    fn yearly_with_no_rows_for_year_keeps_trend_tables() {
        let db = sales_db();
        let tables = aggregate(&db, &Selection::yearly(2020)).unwrap();
        assert_eq!(tables.len(), 4);
        assert!(tables[2].is_empty());
        assert!(tables[3].is_empty());

        let by_year = db
            .query_grouped(&GroupQuery::new(
                Filter::All,
                vec![Field::Year],
                Measure::MeanAutomobileSales,
            ))
            .unwrap();
        assert_eq!(tables[0], by_year);
        assert_eq!(tables[0].len(), 3);
        assert_eq!(tables[1].len(), 7);
    }

    #[test]
    fn incomplete_selections_compute_nothing() {
        let db = sales_db();
        let yearly_without_year = Selection {
            report: Some(ReportKind::Yearly),
            year: None,
        };
        assert!(aggregate(&db, &yearly_without_year).unwrap().is_empty());
        assert!(aggregate(&db, &Selection::default()).unwrap().is_empty());
        assert!(aggregate(&db, &Selection::from_inputs(Some("Weekly"), Some(2008)))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn means_do_not_depend_on_row_order() {
        let mut lines: Vec<&str> = SALES_CSV.lines().collect();
        let header = lines.remove(0);
        lines.reverse();
        lines.rotate_left(5);
        let shuffled = format!("{}\n{}\n", header, lines.join("\n"));
        let other = db_from(&shuffled);
        let db = sales_db();

        for selection in [Selection::recession(), Selection::yearly(1985), Selection::yearly(2008)] {
            assert_tables_close(
                &aggregate(&db, &selection).unwrap(),
                &aggregate(&other, &selection).unwrap(),
            );
        }
    }

    #[test]
    fn grouping_keys_never_include_measures() {
        for selection in [Selection::recession(), Selection::yearly(2000)] {
            for query in plan(&selection).unwrap() {
                assert!(query.group_by.iter().all(|f| !f.is_measure()));
            }
        }
    }
}
