use anyhow::Result;
use tracing::error;

use users_seed::{config::Settings, dynamodb::DynamoDb, logging, writer};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let settings = Settings::from_env();

    let ddb = DynamoDb::connect(&settings).await?;
    let record = writer::write_demo_user(&ddb).await?;

    println!("PutItem successful: {}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
