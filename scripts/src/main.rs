use clap::Parser;
use mycar_scripts::{cli::Cli, constants::DEFAULT_LOG_FILTER, errors::ScriptError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), ScriptError> {
    let Cli {
        network,
        rpc_url,
        priv_keys,
        config_path,
        command,
    } = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    command
        .run(&network, &rpc_url, &priv_keys, &config_path)
        .await
}
