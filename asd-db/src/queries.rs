//! Grouped aggregate queries against the `sales` table.
//!
//! Every chart table is one `SELECT keys, AGG(measure) ... GROUP BY keys
//! ORDER BY keys` statement. Column names come from the closed [`Field`]
//! enum, so the SQL is assembled from static strings only; the year filter
//! is always a bound parameter.

use crate::models::{DerivedTable, Field, Filter, GroupQuery, GroupRow, KeyValue};
use crate::Database;
use asd_sales::month;
use rusqlite::{params_from_iter, Row};

impl Filter {
    /// `WHERE` clause and its bound parameters.
    fn where_clause(&self) -> (&'static str, Vec<i64>) {
        match self {
            Filter::All => ("", Vec::new()),
            Filter::Recession => ("WHERE recession = 1", Vec::new()),
            Filter::Year(year) => ("WHERE year = ?1", vec![i64::from(*year)]),
        }
    }
}

/// Read the group key in column `idx` according to the field's storage type.
fn read_key(row: &Row<'_>, idx: usize, field: Field) -> rusqlite::Result<KeyValue> {
    match field {
        Field::Year | Field::Recession => Ok(KeyValue::Int(row.get(idx)?)),
        Field::UnemploymentRate | Field::AutomobileSales | Field::AdvertisingExpenditure => {
            Ok(KeyValue::Real(row.get(idx)?))
        }
        Field::VehicleType => Ok(KeyValue::Text(row.get(idx)?)),
        Field::Month => {
            let ordinal: i64 = row.get(idx)?;
            u32::try_from(ordinal)
                .ok()
                .and_then(month::from_ordinal)
                .map(|m| KeyValue::Text(month::abbreviation(m).to_string()))
                .ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, ordinal))
        }
    }
}

impl Database {
    /// Run a grouped aggregate.
    ///
    /// Groups are ordered by the grouping fields ascending (months in
    /// calendar order). A filter that matches no rows yields an empty table.
    /// Grouping on a measure field, or on nothing, is rejected.
    pub fn query_grouped(&self, query: &GroupQuery) -> anyhow::Result<DerivedTable> {
        if query.group_by.is_empty() {
            anyhow::bail!("grouped query needs at least one grouping field");
        }
        if let Some(field) = query.group_by.iter().find(|f| f.is_measure()) {
            anyhow::bail!("cannot group by measure field {}", field);
        }

        let keys = query
            .group_by
            .iter()
            .map(|f| f.sql_column())
            .collect::<Vec<_>>()
            .join(", ");
        let (where_clause, bound) = query.filter.where_clause();
        let sql = format!(
            "SELECT {keys}, {agg} FROM sales {where_clause} GROUP BY {keys} ORDER BY {keys}",
            agg = query.measure.sql_expr(),
        );

        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(&sql)?;
        let key_count = query.group_by.len();
        let rows = stmt
            .query_map(params_from_iter(bound.iter()), |row| {
                let keys = query
                    .group_by
                    .iter()
                    .enumerate()
                    .map(|(idx, field)| read_key(row, idx, *field))
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                Ok(GroupRow {
                    keys,
                    value: row.get(key_count)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[ASD] query: {:?} by {:?} ({:?}) returned {} groups",
            query.measure,
            query.group_by,
            query.filter,
            rows.len()
        );
        Ok(DerivedTable {
            group_by: query.group_by.clone(),
            measure: query.measure,
            rows,
        })
    }

    /// Number of rows loaded.
    pub fn record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?;
        Ok(usize::try_from(count)?)
    }
}
