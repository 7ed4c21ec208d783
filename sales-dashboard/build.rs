use std::env;
use std::fs;
use std::path::Path;

/// Columns the dashboard reads; the fallback CSV carries only this header.
const HEADER: &str = "Year,Month,Recession,Vehicle_Type,Automobile_Sales,Advertising_Expenditure,unemployment_rate";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("historical_automobile_sales.csv");

    // The dataset is fetched with `asd-cli fetch -o fixtures/historical_automobile_sales.csv`.
    // Without it the app still builds and reports missing data at runtime.
    let src = Path::new("../fixtures/historical_automobile_sales.csv");
    if src.exists() {
        // Fail the build early if the fixture lacks a column the app needs.
        let mut rdr = csv::Reader::from_path(src).expect("Failed to open sales fixture");
        let headers = rdr.headers().expect("Failed to read sales fixture header").clone();
        for column in HEADER.split(',') {
            if !headers.iter().any(|h| h.trim() == column) {
                panic!("sales fixture is missing column {}", column);
            }
        }
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, format!("{}\n", HEADER)).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/historical_automobile_sales.csv");
}
