//! The chain client used to look up signers and deploy contracts

use std::str::FromStr;

use alloy::{
    network::{EthereumWallet, ReceiptResponse, TransactionBuilder},
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{artifacts::ContractArtifact, errors::ScriptError};

/// The operations the deploy flow needs from a chain
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// The identities able to sign transactions, in order of preference
    async fn signers(&self) -> Result<Vec<Address>, ScriptError>;

    /// Deploys `artifact` from `from`, waiting for the creation transaction to
    /// be mined, and returns the address of the new contract
    async fn deploy(
        &self,
        from: Address,
        artifact: &ContractArtifact,
    ) -> Result<Address, ScriptError>;
}

/// A [`ContractDeployer`] talking JSON-RPC to a node
pub struct RpcDeployer {
    /// The provider, with a wallet attached if local keys were given
    provider: DynProvider,
    /// The addresses of the locally held keys
    local_signers: Vec<Address>,
}

/// Sets up the client with which to deploy contracts.
///
/// Transactions are signed with the given private keys. If none are given,
/// signing is left to the node's own accounts.
pub async fn setup_client(
    priv_keys: &[String],
    rpc_url: &str,
) -> Result<RpcDeployer, ScriptError> {
    let signers = priv_keys
        .iter()
        .map(|key| PrivateKeySigner::from_str(key))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    let local_signers = signers.iter().map(PrivateKeySigner::address).collect();

    let provider = match signers.split_first() {
        Some((first, rest)) => {
            let mut wallet = EthereumWallet::from(first.clone());
            for signer in rest {
                wallet.register_signer(signer.clone());
            }

            ProviderBuilder::new()
                .wallet(wallet)
                .connect(rpc_url)
                .await
                .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
                .erased()
        }
        None => ProviderBuilder::new()
            .connect(rpc_url)
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?
            .erased(),
    };

    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;
    debug!("Connected to {rpc_url} (chain ID {chain_id})");

    Ok(RpcDeployer {
        provider,
        local_signers,
    })
}

#[async_trait]
impl ContractDeployer for RpcDeployer {
    async fn signers(&self) -> Result<Vec<Address>, ScriptError> {
        if !self.local_signers.is_empty() {
            return Ok(self.local_signers.clone());
        }

        self.provider
            .get_accounts()
            .await
            .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
    }

    async fn deploy(
        &self,
        from: Address,
        artifact: &ContractArtifact,
    ) -> Result<Address, ScriptError> {
        let tx = TransactionRequest::default()
            .with_from(from)
            .with_deploy_code(artifact.bytecode.clone());

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        if !receipt.status() {
            return Err(ScriptError::ContractDeployment(format!(
                "transaction {:#x} reverted",
                receipt.transaction_hash()
            )));
        }

        receipt.contract_address().ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "no contract address in receipt of {:#x}",
                receipt.transaction_hash()
            ))
        })
    }
}
