//! Resolution of compiled contract artifacts by contract name

use std::path::{Path, PathBuf};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::{
    constants::{ARTIFACT_EXTENSION, CONTRACTS_PATH_SEGMENT, SOLIDITY_EXTENSION},
    errors::ScriptError,
};

/// A compiled contract, in the artifact format emitted by Hardhat
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// The name of the contract
    pub contract_name: String,
    /// The contract ABI
    pub abi: JsonAbi,
    /// The creation bytecode
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Finds and parses the artifact for `name` under `artifacts_dir`
    pub async fn load(artifacts_dir: impl AsRef<Path>, name: &str) -> Result<Self, ScriptError> {
        let artifacts_dir = artifacts_dir.as_ref();

        let mut artifact_path = None;
        for path in candidate_paths(artifacts_dir, name) {
            if fs::metadata(&path).await.is_ok_and(|meta| meta.is_file()) {
                artifact_path = Some(path);
                break;
            }
        }
        let artifact_path = artifact_path.ok_or_else(|| {
            ScriptError::ArtifactNotFound(format!("{} in {}", name, artifacts_dir.display()))
        })?;

        debug!("Loading artifact from {}", artifact_path.display());
        let contents = fs::read_to_string(&artifact_path)
            .await
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        Self::parse(&contents)
    }

    /// Parses an artifact, rejecting ones that cannot be deployed as-is
    pub fn parse(contents: &str) -> Result<Self, ScriptError> {
        let artifact: Self = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        // Abstract contracts & interfaces have no creation code
        if artifact.bytecode.is_empty() {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} has no bytecode",
                artifact.contract_name
            )));
        }

        // Contracts are deployed without constructor arguments
        if artifact
            .abi
            .constructor
            .as_ref()
            .is_some_and(|constructor| !constructor.inputs.is_empty())
        {
            return Err(ScriptError::ArtifactParsing(format!(
                "{} requires constructor arguments",
                artifact.contract_name
            )));
        }

        Ok(artifact)
    }
}

/// The locations searched for a contract's artifact, in order
fn candidate_paths(artifacts_dir: &Path, name: &str) -> Vec<PathBuf> {
    let source_dir = format!("{name}.{SOLIDITY_EXTENSION}");
    let file_name = format!("{name}.{ARTIFACT_EXTENSION}");

    vec![
        artifacts_dir
            .join(CONTRACTS_PATH_SEGMENT)
            .join(&source_dir)
            .join(&file_name),
        artifacts_dir.join(&source_dir).join(&file_name),
        artifacts_dir.join(&file_name),
    ]
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::ContractArtifact;
    use crate::errors::ScriptError;

    fn artifact_json(name: &str, bytecode: &str) -> String {
        json!({
            "_format": "hh-sol-artifact-1",
            "contractName": name,
            "sourceName": format!("contracts/{name}.sol"),
            "abi": [
                {
                    "inputs": [],
                    "name": "drive",
                    "outputs": [],
                    "stateMutability": "nonpayable",
                    "type": "function"
                }
            ],
            "bytecode": bytecode,
            "deployedBytecode": "0x",
            "linkReferences": {},
            "deployedLinkReferences": {}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_load_hardhat_layout() {
        let dir = tempdir().unwrap();
        let source_dir = dir.path().join("contracts").join("MyCar.sol");
        std::fs::create_dir_all(&source_dir).unwrap();
        std::fs::write(
            source_dir.join("MyCar.json"),
            artifact_json("MyCar", "0x6080604052"),
        )
        .unwrap();

        let artifact = ContractArtifact::load(dir.path(), "MyCar").await.unwrap();
        assert_eq!(artifact.contract_name, "MyCar");
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80, 0x60, 0x40, 0x52]);
        assert!(artifact.abi.function("drive").is_some());
    }

    #[tokio::test]
    async fn test_load_source_dir_layout() {
        let dir = tempdir().unwrap();
        let source_dir = dir.path().join("MyCar.sol");
        std::fs::create_dir_all(&source_dir).unwrap();
        std::fs::write(
            source_dir.join("MyCar.json"),
            artifact_json("MyCar", "0x6080"),
        )
        .unwrap();

        let artifact = ContractArtifact::load(dir.path(), "MyCar").await.unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x60, 0x80]);
    }

    #[tokio::test]
    async fn test_load_prefers_contracts_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("contracts").join("MyCar.sol");
        let shallow = dir.path().join("MyCar.sol");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(&shallow).unwrap();
        std::fs::write(nested.join("MyCar.json"), artifact_json("MyCar", "0x01")).unwrap();
        std::fs::write(shallow.join("MyCar.json"), artifact_json("MyCar", "0x02")).unwrap();

        let artifact = ContractArtifact::load(dir.path(), "MyCar").await.unwrap();
        assert_eq!(artifact.bytecode.to_vec(), vec![0x01]);
    }

    #[tokio::test]
    async fn test_load_flat_layout() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("MyCar.json"),
            artifact_json("MyCar", "0x6080"),
        )
        .unwrap();

        assert!(ContractArtifact::load(dir.path(), "MyCar").await.is_ok());
    }

    #[tokio::test]
    async fn test_load_missing() {
        let dir = tempdir().unwrap();

        let res = ContractArtifact::load(dir.path(), "MyCar").await;
        assert!(matches!(res, Err(ScriptError::ArtifactNotFound(_))));
    }

    #[test]
    fn test_parse_rejects_empty_bytecode() {
        let res = ContractArtifact::parse(&artifact_json("IMyCar", "0x"));
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }

    #[test]
    fn test_parse_rejects_constructor_args() {
        let contents = json!({
            "contractName": "MyCar",
            "abi": [
                {
                    "inputs": [{ "internalType": "uint256", "name": "speed", "type": "uint256" }],
                    "stateMutability": "nonpayable",
                    "type": "constructor"
                }
            ],
            "bytecode": "0x6080"
        })
        .to_string();

        let res = ContractArtifact::parse(&contents);
        assert!(matches!(res, Err(ScriptError::ArtifactParsing(_))));
    }
}
