//! CSV loading for populating the in-memory SQLite database.
//!
//! Expected format (with headers), extra columns ignored:
//! `Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate`

use crate::Database;
use asd_sales::record::SalesRecord;
use rusqlite::params;

impl Database {
    /// Parse the sales CSV and insert every row.
    ///
    /// A malformed row aborts the load before anything is inserted.
    ///
    /// # Example CSV
    /// ```text
    /// Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate
    /// 1980,Jan,1,Supperminicar,456.0,1558,5.4
    /// ```
    pub fn load_sales(&self, csv_data: &str) -> anyhow::Result<usize> {
        let records = SalesRecord::parse_csv(csv_data)?;
        self.load_records(&records)
    }

    /// Insert already-parsed records in a single transaction.
    pub fn load_records(&self, records: &[SalesRecord]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let tx = conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO sales
                 (year, month, recession, vehicle_type, automobile_sales, advertising_expenditure, unemployment_rate)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.year,
                    r.month_ordinal(),
                    r.recession as i64,
                    r.vehicle_type,
                    r.automobile_sales,
                    r.advertising_expenditure,
                    r.unemployment_rate,
                ])?;
            }
        }
        tx.commit()?;
        log::info!("[ASD] loader: Loaded {} sales records", records.len());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const CSV: &str = "\
Date,Year,Month,Recession,Advertising_Expenditure,unemployment_rate,Automobile_Sales,Vehicle_Type,City
1/31/1980,1980,Jan,1,1558,5.4,456.0,Supperminicar,Georgia
2/29/1980,1980,Feb,1,3048,4.8,555.9,Supperminicar,New York
3/31/1980,1980,Mar,0,3137,3.4,620.0,Mediumfamilycar,New York
";

    #[test]
    fn load_sales_from_csv() {
        let db = Database::new().unwrap();
        let loaded = db.load_sales(CSV).unwrap();
        assert_eq!(loaded, 3);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let (month, recession): (i64, i64) = conn
            .query_row(
                "SELECT month, recession FROM sales WHERE vehicle_type = 'Mediumfamilycar'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(month, 3);
        assert_eq!(recession, 0);
    }

    #[test]
    fn malformed_csv_loads_nothing() {
        let db = Database::new().unwrap();
        let csv = "\
Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate
1980,Jan,1,Sports,100,10,5.0
1980,Nope,1,Sports,100,10,5.0
";
        assert!(db.load_sales(csv).is_err());
        assert_eq!(db.record_count().unwrap(), 0);
    }

    #[test]
    fn header_only_csv_loads_zero_rows() {
        let db = Database::new().unwrap();
        let loaded = db
            .load_sales("Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate\n")
            .unwrap();
        assert_eq!(loaded, 0);
    }
}
