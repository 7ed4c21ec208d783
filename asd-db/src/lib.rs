//! In-memory SQLite database layer for the historical automobile sales dataset.
//!
//! The dataset is parsed from CSV once, inserted into an in-memory SQLite
//! database, and never written again. Every chart table is then a single
//! `GROUP BY` query with `AVG` or `SUM` against the `sales` table.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the dashboard crate,
//!   or from disk by the CLI
//! - Grouped queries return [`models::DerivedTable`], which serializes to a
//!   list of flat JSON records for D3.js
//!
//! # Usage
//!
//! ```rust
//! use asd_db::models::{Field, Filter, GroupQuery, Measure};
//! use asd_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_sales("Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate\n2008,Jan,1,Sports,120.5,900,6.1\n").unwrap();
//!
//! let query = GroupQuery::new(Filter::Recession, vec![Field::Year], Measure::MeanAutomobileSales);
//! let table = db.query_grouped(&query).unwrap();
//! assert_eq!(table.rows.len(), 1);
//! ```

pub mod schema;
mod loader;
mod queries;
pub mod models;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the sales dataset.
///
/// Cheaply cloneable (via `Rc`) so it can be shared across Dioxus
/// components in a single-threaded WASM environment.
///
/// # Example
///
/// ```rust
/// use asd_db::Database;
///
/// let db = Database::new().unwrap();
/// db.load_sales("Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate\n1980,Jan,1,Supperminicar,456,1558,5.4\n").unwrap();
/// assert_eq!(db.record_count().unwrap(), 1);
/// ```
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use [`Database::load_sales`]
    /// or [`Database::load_records`] to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
