//! Read-only network/contract configuration shown on the page.
//!
//! # Responsibility
//! - Build `DAppConfig` from `NEXT_PUBLIC_*` environment values with
//!   documented fallbacks.
//! - Report every violated check without blocking the caller.
//!
//! # Invariants
//! - The config has no write path and never touches todo storage.
//! - Validation collects all failures; it never short-circuits.

use log::warn;

mod env;

pub use env::{env_bool, env_number, env_string};

/// Mainnet network id.
pub const MAINNET_NETWORK_ID: i64 = 1;
/// Polygon network id.
pub const POLYGON_NETWORK_ID: i64 = 137;

/// Named contract slots, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractName {
    Token,
    Nft,
    Staking,
    Governance,
    Reward,
    Vault,
    Factory,
    Router,
    Treasury,
    Multisig,
}

impl ContractName {
    pub const ALL: [ContractName; 10] = [
        Self::Token,
        Self::Nft,
        Self::Staking,
        Self::Governance,
        Self::Reward,
        Self::Vault,
        Self::Factory,
        Self::Router,
        Self::Treasury,
        Self::Multisig,
    ];

    /// Stable lower-case name used in messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Token => "token",
            Self::Nft => "nft",
            Self::Staking => "staking",
            Self::Governance => "governance",
            Self::Reward => "reward",
            Self::Vault => "vault",
            Self::Factory => "factory",
            Self::Router => "router",
            Self::Treasury => "treasury",
            Self::Multisig => "multisig",
        }
    }

    fn env_key(self) -> &'static str {
        match self {
            Self::Token => "NEXT_PUBLIC_TOKEN_CONTRACT",
            Self::Nft => "NEXT_PUBLIC_NFT_CONTRACT",
            Self::Staking => "NEXT_PUBLIC_STAKING_CONTRACT",
            Self::Governance => "NEXT_PUBLIC_GOVERNANCE_CONTRACT",
            Self::Reward => "NEXT_PUBLIC_REWARD_CONTRACT",
            Self::Vault => "NEXT_PUBLIC_VAULT_CONTRACT",
            Self::Factory => "NEXT_PUBLIC_FACTORY_CONTRACT",
            Self::Router => "NEXT_PUBLIC_ROUTER_CONTRACT",
            Self::Treasury => "NEXT_PUBLIC_TREASURY_CONTRACT",
            Self::Multisig => "NEXT_PUBLIC_MULTISIG_CONTRACT",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractAddresses {
    pub token: String,
    pub nft: String,
    pub staking: String,
    pub governance: String,
    pub reward: String,
    pub vault: String,
    pub factory: String,
    pub router: String,
    pub treasury: String,
    pub multisig: String,
}

impl ContractAddresses {
    pub fn get(&self, name: ContractName) -> &str {
        match name {
            ContractName::Token => &self.token,
            ContractName::Nft => &self.nft,
            ContractName::Staking => &self.staking,
            ContractName::Governance => &self.governance,
            ContractName::Reward => &self.reward,
            ContractName::Vault => &self.vault,
            ContractName::Factory => &self.factory,
            ContractName::Router => &self.router,
            ContractName::Treasury => &self.treasury,
            ContractName::Multisig => &self.multisig,
        }
    }

    /// `(name, address)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (ContractName, &str)> + '_ {
        ContractName::ALL.into_iter().map(|name| (name, self.get(name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub network_id: i64,
    pub chain_name: String,
    pub rpc_url: String,
    pub block_explorer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DAppConfig {
    pub app_name: String,
    pub app_version: String,
    pub network: NetworkConfig,
    pub contracts: ContractAddresses,
    pub subgraph_url: String,
    pub ipfs_gateway: String,
    pub enable_analytics: bool,
    pub enable_notifications: bool,
}

impl Default for DAppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DAppConfig {
    /// Reads the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = &lookup;
        let mut contracts = ContractAddresses::default();
        for name in ContractName::ALL {
            let value = env_string(lookup, name.env_key(), "");
            *contract_slot(&mut contracts, name) = value;
        }

        Self {
            app_name: env_string(lookup, "NEXT_PUBLIC_APP_NAME", "My dApp"),
            app_version: env_string(lookup, "NEXT_PUBLIC_APP_VERSION", "1.0.0"),
            network: NetworkConfig {
                network_id: env_number(lookup, "NEXT_PUBLIC_NETWORK_ID", MAINNET_NETWORK_ID),
                chain_name: env_string(lookup, "NEXT_PUBLIC_CHAIN_NAME", "Ethereum Mainnet"),
                rpc_url: env_string(
                    lookup,
                    "NEXT_PUBLIC_RPC_URL",
                    "https://mainnet.infura.io/v3/",
                ),
                block_explorer: env_string(
                    lookup,
                    "NEXT_PUBLIC_BLOCK_EXPLORER",
                    "https://etherscan.io",
                ),
            },
            contracts,
            subgraph_url: env_string(lookup, "NEXT_PUBLIC_SUBGRAPH_URL", ""),
            ipfs_gateway: env_string(lookup, "NEXT_PUBLIC_IPFS_GATEWAY", "https://ipfs.io/ipfs/"),
            enable_analytics: env_bool(lookup, "NEXT_PUBLIC_ENABLE_ANALYTICS", true),
            enable_notifications: env_bool(lookup, "NEXT_PUBLIC_ENABLE_NOTIFICATIONS", true),
        }
    }

    pub fn contract_address(&self, name: ContractName) -> &str {
        self.contracts.get(name)
    }

    /// `true` unless the network is mainnet or Polygon.
    pub fn is_testnet(&self) -> bool {
        !matches!(
            self.network.network_id,
            MAINNET_NETWORK_ID | POLYGON_NETWORK_ID
        )
    }

    /// Runs every check and collects human-readable failures.
    pub fn validate(&self) -> ConfigValidation {
        let mut errors = Vec::new();

        for (name, address) in self.contracts.entries() {
            if address.is_empty() {
                errors.push(format!("Missing contract address for: {}", name.as_str()));
            }
        }
        if self.network.rpc_url.is_empty() {
            errors.push("Missing RPC URL".to_string());
        }
        if self.network.network_id == 0 {
            errors.push("Invalid network ID".to_string());
        }

        if !errors.is_empty() {
            warn!(
                "event=config_validate module=config status=invalid error_count={}",
                errors.len()
            );
        }
        ConfigValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Outcome of `DAppConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

fn contract_slot(contracts: &mut ContractAddresses, name: ContractName) -> &mut String {
    match name {
        ContractName::Token => &mut contracts.token,
        ContractName::Nft => &mut contracts.nft,
        ContractName::Staking => &mut contracts.staking,
        ContractName::Governance => &mut contracts.governance,
        ContractName::Reward => &mut contracts.reward,
        ContractName::Vault => &mut contracts.vault,
        ContractName::Factory => &mut contracts.factory,
        ContractName::Router => &mut contracts.router,
        ContractName::Treasury => &mut contracts.treasury,
        ContractName::Multisig => &mut contracts.multisig,
    }
}
