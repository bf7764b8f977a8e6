use clap::Parser;
use dewetra_reconciler::cli::{Cli, run};
use dewetra_reconciler::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
