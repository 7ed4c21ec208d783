//! Command implementations for the ASD CLI.
//!
//! Provides subcommands for downloading the sales dataset and for running
//! a dashboard selection without a browser.

use clap::Subcommand;

pub mod fetch;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Download the historical automobile sales CSV
    Fetch {
        /// Output path for the dataset CSV
        #[arg(short = 'o', long, default_value = asd_sales::DATASET_FILE)]
        output: String,

        /// Dataset location
        #[arg(long, default_value = asd_sales::DATASET_URL)]
        url: String,
    },

    /// Compute the charts for a selection and print them as JSON
    Report {
        /// Path to the dataset CSV
        #[arg(short = 'c', long, default_value = asd_sales::DATASET_FILE)]
        csv: String,

        /// Report type: "Yearly Statistics" or "Recession Period Statistics"
        #[arg(short = 's', long)]
        statistics: Option<String>,

        /// Year for the yearly report (1980-2023)
        #[arg(short = 'y', long)]
        year: Option<i32>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { output, url } => fetch::run_fetch(&output, &url).await,
        Command::Report {
            csv,
            statistics,
            year,
            pretty,
        } => {
            let json = report::run_report(&csv, statistics.as_deref(), year, pretty)?;
            println!("{}", json);
            Ok(())
        }
    }
}
