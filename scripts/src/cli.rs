//! Definitions of CLI arguments and commands for deploy scripts

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::{
    client::setup_client,
    commands::{deploy_contract, show_address},
    config::DeployConfig,
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIG_PATH, DEFAULT_CONTRACT_NAME, DEFAULT_NETWORK,
        DEFAULT_RPC_URL,
    },
    errors::ScriptError,
};

/// Deploy contracts and record their addresses in a config file
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the target network, used to key recorded addresses
    #[arg(short, long, env = "NETWORK", default_value = DEFAULT_NETWORK)]
    pub network: String,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Private keys to sign with, the first is the deployer.
    /// If none are given, the node's own accounts are used.
    #[arg(short, long = "priv-key", env = "PKEY", value_delimiter = ',')]
    pub priv_keys: Vec<String>,

    /// Path to the config file recording deployed addresses
    #[arg(short, long, env = "CONFIG_PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The commands supported by the deploy scripts
#[derive(Subcommand)]
pub enum Command {
    /// Deploy a contract and record its address
    Deploy(DeployArgs),
    /// Print the address recorded for a contract
    Address(AddressArgs),
}

impl Command {
    /// Runs the command against the config at `config_path`
    pub async fn run(
        self,
        network: &str,
        rpc_url: &str,
        priv_keys: &[String],
        config_path: &Path,
    ) -> Result<(), ScriptError> {
        let mut config = DeployConfig::load(config_path).await?;

        match self {
            Command::Deploy(args) => {
                let deployer = setup_client(priv_keys, rpc_url).await?;
                deploy_contract(
                    &mut config,
                    &deployer,
                    network,
                    &args.contract,
                    &args.artifacts_dir,
                )
                .await?;
            }
            Command::Address(args) => {
                println!("{}", show_address(&config, network, &args.contract)?);
            }
        }

        Ok(())
    }
}

/// Deploy a contract
#[derive(Args)]
pub struct DeployArgs {
    /// Name of the contract artifact to deploy
    #[arg(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Directory containing the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,
}

/// Look up a recorded contract address
#[derive(Args)]
pub struct AddressArgs {
    /// Name of the contract to look up
    #[arg(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mycar-scripts", "deploy"]).unwrap();

        assert_eq!(cli.network, "dev");
        assert_eq!(cli.rpc_url, "http://localhost:8545");
        assert!(cli.priv_keys.is_empty());
        assert_eq!(cli.config_path.to_str(), Some("config.json"));
        match cli.command {
            Command::Deploy(args) => {
                assert_eq!(args.contract, "MyCar");
                assert_eq!(args.artifacts_dir.to_str(), Some("artifacts"));
            }
            Command::Address(_) => panic!("expected deploy"),
        }
    }

    #[test]
    fn test_network_and_keys() {
        let cli = Cli::try_parse_from([
            "mycar-scripts",
            "--network",
            "sepolia",
            "--priv-key",
            "0x01,0x02",
            "address",
            "--contract",
            "Garage",
        ])
        .unwrap();

        assert_eq!(cli.network, "sepolia");
        assert_eq!(cli.priv_keys, vec!["0x01", "0x02"]);
        match cli.command {
            Command::Address(args) => assert_eq!(args.contract, "Garage"),
            Command::Deploy(_) => panic!("expected address"),
        }
    }
}
