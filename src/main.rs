//! Streams random gadget orders into DynamoDB until interrupted

use anyhow::Result;
use order_stream::prelude::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = StreamConfig::load()?;
    let table = DynamoDBOrderTable::from_config(&config).await;

    let shutdown = ShutdownToken::new();
    spawn_signal_listener(shutdown.clone());

    let mut stream = OrderStream::new(OrderGenerator::from_entropy(), table, &config);
    match stream.run(&shutdown).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!(error = %err, cause = %err.write_error(), "Order stream stopped");
            Ok(ExitCode::FAILURE)
        }
    }
}
