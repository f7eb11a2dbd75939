//! Constants used in the deploy scripts

/// The network name used when none is given
pub const DEFAULT_NETWORK: &str = "dev";

/// The contract deployed when none is given
pub const DEFAULT_CONTRACT_NAME: &str = "MyCar";

/// The RPC URL used when none is given, i.e. a local development node
pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";

/// The config file recording deployed addresses
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// The directory containing compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The tracing filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The separator between segments of a config key
pub const CONFIG_KEY_SEPARATOR: char = '.';

/// The subdirectory of the artifacts directory holding per-source artifacts
pub const CONTRACTS_PATH_SEGMENT: &str = "contracts";

/// The extension of a Solidity source file, used to name artifact directories
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The extension of an artifact file
pub const ARTIFACT_EXTENSION: &str = "json";
