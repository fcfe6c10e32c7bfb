//! Secret masking for echoed commands
//!
//! Deploy commands carry the signer key, the RPC provider key (as the last
//! path segment of the RPC URL) and the block explorer key on the command
//! line. Before a command is echoed, each literal secret is replaced with
//! the name of the variable it came from.

use crate::env::EnvReader;

/// Placeholder for the private key
pub const PRIVATE_KEY_LABEL: &str = "$PRIVATE_KEY";
/// Placeholder for the RPC provider key
pub const ALCHEMY_KEY_LABEL: &str = "$ALCHEMY_API_KEY";
/// Placeholder for the Etherscan key
pub const ETHERSCAN_KEY_LABEL: &str = "$ETHERSCAN_API_KEY";

/// Provider of the secrets a deploy command may contain
pub trait SecretSource {
    /// Signer private key
    fn private_key(&self) -> Option<&str>;
    /// RPC endpoint URL; its last path segment is treated as an API key
    fn rpc_url(&self) -> Option<&str>;
    /// Etherscan API key
    fn etherscan_api_key(&self) -> Option<&str>;
}

/// Plain secret holder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploySecrets {
    /// Signer private key
    pub private_key: Option<String>,
    /// RPC endpoint URL
    pub rpc_url: Option<String>,
    /// Etherscan API key
    pub etherscan_api_key: Option<String>,
}

impl DeploySecrets {
    /// Read `PRIVATE_KEY`, `RPC_URL` and `ETHERSCAN_API_KEY`.
    ///
    /// Empty values are treated as unset.
    pub fn from_env(env: &dyn EnvReader) -> Self {
        let read = |name: &str| env.var(name).filter(|v| !v.is_empty());
        Self {
            private_key: read("PRIVATE_KEY"),
            rpc_url: read("RPC_URL"),
            etherscan_api_key: read("ETHERSCAN_API_KEY"),
        }
    }
}

impl SecretSource for DeploySecrets {
    fn private_key(&self) -> Option<&str> {
        self.private_key.as_deref()
    }

    fn rpc_url(&self) -> Option<&str> {
        self.rpc_url.as_deref()
    }

    fn etherscan_api_key(&self) -> Option<&str> {
        self.etherscan_api_key.as_deref()
    }
}

/// Strategy that hides secrets in a rendered command line
pub trait SecretMasker {
    /// Return `line` with every secret from `secrets` hidden.
    fn mask(&self, line: &str, secrets: &dyn SecretSource) -> String;
}

/// Global literal substring replacement.
///
/// Not token aware: any text that happens to equal a secret is replaced as
/// well, including fragments of unrelated arguments.
///
/// One exception to plain replacement: an RPC URL ending in `/` has an
/// empty last segment, and that step is skipped rather than replacing the
/// empty string (which would insert the label between every character).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMasker;

impl SecretMasker for SubstringMasker {
    fn mask(&self, line: &str, secrets: &dyn SecretSource) -> String {
        let mut masked = line.to_string();

        if let Some(key) = secrets.private_key().filter(|k| !k.is_empty()) {
            masked = masked.replace(key, PRIVATE_KEY_LABEL);
        }

        if let Some(url) = secrets.rpc_url().filter(|u| !u.is_empty()) {
            let api_key = rpc_api_key(url);
            // An empty segment would match between every character
            if !api_key.is_empty() {
                masked = masked.replace(api_key, ALCHEMY_KEY_LABEL);
            }
        }

        if let Some(key) = secrets.etherscan_api_key().filter(|k| !k.is_empty()) {
            masked = masked.replace(key, ETHERSCAN_KEY_LABEL);
        }

        masked
    }
}

/// Last `/`-separated segment of an RPC URL (the whole URL if it has no `/`).
#[must_use]
pub fn rpc_api_key(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
