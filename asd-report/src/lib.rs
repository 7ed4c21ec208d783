//! Turns a user [`Selection`](asd_sales::selection::Selection) into charts.
//!
//! - `aggregate`: which four grouped tables each report kind needs
//! - `chart`: which chart draws each table, with titles and field bindings
//! - `render`: the single entry point the dashboard calls on every change

pub mod aggregate;
pub mod chart;
pub mod render;

pub use aggregate::aggregate;
pub use chart::{to_chart_specs, ChartSpec};
pub use render::{handle_selection, RenderResult};

#[cfg(test)]
pub(crate) mod fixtures {
    use asd_db::Database;

    /// Three years of data: 1981 recession, 1985 expansion, 2008 mixed.
    pub const SALES_CSV: &str = "\
Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate
1981,Jan,1,Supperminicar,410.5,1200,7.5
1981,Jan,1,Sports,120.0,800,7.5
1981,Feb,1,Supperminicar,380.0,1100,7.8
1981,Jun,1,Executivecar,95.25,2400,7.8
1985,Jan,0,Supperminicar,640.0,2100,5.1
1985,Mar,0,Sports,210.0,1500,5.1
1985,Mar,0,Mediumfamilycar,530.5,1750,5.3
1985,Dec,0,Executivecar,150.0,2900,5.3
2008,Feb,0,Sports,180.0,1300,5.0
2008,Oct,1,Supperminicar,300.0,900,6.5
2008,Oct,1,Mediumfamilycar,260.0,1000,6.5
2008,Nov,1,Sports,90.0,600,6.8
";

    pub fn db_from(csv: &str) -> Database {
        let db = Database::new().unwrap();
        db.load_sales(csv).unwrap();
        db
    }

    pub fn sales_db() -> Database {
        db_from(SALES_CSV)
    }
}
