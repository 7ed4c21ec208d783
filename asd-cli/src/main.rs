//! ASD CLI - fetch the automobile sales dataset and run dashboard reports headlessly.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "asd-cli",
    version,
    about = "Automobile sales dashboard toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: asd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    asd_cmd::run(cli.command).await
}
