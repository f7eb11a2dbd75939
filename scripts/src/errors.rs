//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading or parsing the config file
    ReadConfig(String),
    /// Error writing the config file
    WriteConfig(String),
    /// A dotted config key with an empty or malformed segment
    InvalidConfigKey(String),
    /// No artifact exists for the requested contract
    ArtifactNotFound(String),
    /// Error parsing a compilation artifact
    ArtifactParsing(String),
    /// Error initializing the RPC client
    ClientInitialization(String),
    /// The execution environment exposes no signer
    NoSigner,
    /// Error deploying a contract
    ContractDeployment(String),
    /// No address is recorded for the requested deployment
    MissingDeployment(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadConfig(s) => write!(f, "error reading config: {}", s),
            ScriptError::WriteConfig(s) => write!(f, "error writing config: {}", s),
            ScriptError::InvalidConfigKey(s) => write!(f, "invalid config key: {}", s),
            ScriptError::ArtifactNotFound(s) => write!(f, "artifact not found: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::NoSigner => write!(f, "no signer available"),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::MissingDeployment(s) => write!(f, "no deployment recorded at {}", s),
        }
    }
}

impl Error for ScriptError {}
