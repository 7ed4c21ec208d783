//! SQL schema for the in-memory SQLite database.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `sales`, holds the seven columns the dashboard reads.
/// `month` is the calendar ordinal (1-12) so `ORDER BY month` is calendar order.
/// `recession` is stored as 0/1.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS sales (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL CHECK (month BETWEEN 1 AND 12),
        recession INTEGER NOT NULL CHECK (recession IN (0, 1)),
        vehicle_type TEXT NOT NULL,
        automobile_sales REAL NOT NULL,
        advertising_expenditure REAL NOT NULL,
        unemployment_rate REAL NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_sales_year ON sales(year);
    CREATE INDEX IF NOT EXISTS idx_sales_recession ON sales(recession);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_sales_table_and_indexes() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for (kind, name) in [
            ("table", "sales"),
            ("index", "idx_sales_year"),
            ("index", "idx_sales_recession"),
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = ?1 AND name = ?2",
                    [kind, name],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "{} '{}' should exist", kind, name);
        }
    }

    #[test]
    fn schema_rejects_out_of_range_month() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        let result = conn.execute(
            "INSERT INTO sales (year, month, recession, vehicle_type, automobile_sales, advertising_expenditure, unemployment_rate)
             VALUES (1980, 13, 0, 'Sports', 1.0, 1.0, 1.0)",
            [],
        );
        assert!(result.is_err(), "month 13 should violate the CHECK constraint");
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
