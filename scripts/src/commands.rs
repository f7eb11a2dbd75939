//! Implementations of the deploy script commands

use std::path::Path;

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    artifacts::ContractArtifact,
    client::ContractDeployer,
    config::{deployment_key, DeployConfig},
    errors::ScriptError,
};

/// Deploys `contract` to `network` from the first available signer and
/// records its address in `config` under `<network>.<contract>`.
///
/// The config is persisted only after the deployment is confirmed. If
/// persisting fails the contract stays deployed but unrecorded on disk.
pub async fn deploy_contract(
    config: &mut DeployConfig,
    deployer: &impl ContractDeployer,
    network: &str,
    contract: &str,
    artifacts_dir: &Path,
) -> Result<Address, ScriptError> {
    let key = deployment_key(network, contract)?;

    let signer = deployer
        .signers()
        .await?
        .into_iter()
        .next()
        .ok_or(ScriptError::NoSigner)?;
    info!("deploy from address: {signer}");

    let artifact = ContractArtifact::load(artifacts_dir, contract).await?;
    let address = deployer.deploy(signer, &artifact).await?;
    info!("{contract} address: {address}");

    // Recorded in EIP-55 checksummed form
    config.set(&key, address.to_checksum(None))?;
    if let Err(e) = config.persist().await {
        warn!(
            "{contract} deployed at {address} but not recorded in {}",
            config.path().display()
        );
        return Err(e);
    }

    Ok(address)
}

/// Looks up the address recorded for `contract` on `network`
pub fn show_address(
    config: &DeployConfig,
    network: &str,
    contract: &str,
) -> Result<String, ScriptError> {
    let key = deployment_key(network, contract)?;
    config
        .get(&key)
        .map(str::to_string)
        .ok_or(ScriptError::MissingDeployment(key))
}
