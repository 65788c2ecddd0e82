use trabalhista::cli;
use trabalhista::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    cli::Cli::run().await
}
