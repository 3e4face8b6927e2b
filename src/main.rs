use cnft_burner::{BurnPipeline, Config, Context, chain::RpcChainClient};
use solana_sdk::signature::read_keypair_file;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Loads configuration and the payer keypair, then runs the create, mint
/// and burn flow once. Any error is reported here and nowhere else.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    if let Err(e) = run(&config_path).await {
        error!("Burn demo failed: {:?}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(config_path: &str) -> anyhow::Result<()> {
    let config = Config::load(config_path)?;
    info!("Burn demo starting with config: {:?}", config);

    let payer = read_keypair_file(&config.rpc.keypair_path).map_err(|e| {
        anyhow::anyhow!("failed to read keypair {}: {}", config.rpc.keypair_path, e)
    })?;
    let client = RpcChainClient::new(&config.rpc.url, config.rpc.commitment_config());
    info!("Connected to {}", client.url());

    let ctx = Context::new(Arc::new(client), payer);
    let report = BurnPipeline::new(ctx, config).run().await?;

    if !report.is_complete() {
        for (index, e) in report.failed() {
            warn!("Burn transaction {} not confirmed: {}", index, e);
        }
        anyhow::bail!(
            "{} of {} burn transactions failed",
            report.failed().count(),
            report.outcomes.len()
        );
    }

    Ok(())
}
