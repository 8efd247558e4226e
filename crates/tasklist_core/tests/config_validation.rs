use std::collections::HashMap;
use tasklist_core::view::render_config_panel;
use tasklist_core::{ContractName, DAppConfig};

const CONTRACT_KEYS: [&str; 10] = [
    "NEXT_PUBLIC_TOKEN_CONTRACT",
    "NEXT_PUBLIC_NFT_CONTRACT",
    "NEXT_PUBLIC_STAKING_CONTRACT",
    "NEXT_PUBLIC_GOVERNANCE_CONTRACT",
    "NEXT_PUBLIC_REWARD_CONTRACT",
    "NEXT_PUBLIC_VAULT_CONTRACT",
    "NEXT_PUBLIC_FACTORY_CONTRACT",
    "NEXT_PUBLIC_ROUTER_CONTRACT",
    "NEXT_PUBLIC_TREASURY_CONTRACT",
    "NEXT_PUBLIC_MULTISIG_CONTRACT",
];

fn config_from(pairs: &[(&str, &str)]) -> DAppConfig {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    DAppConfig::from_lookup(|key| env.get(key).cloned())
}

fn all_contracts_set() -> Vec<(&'static str, &'static str)> {
    CONTRACT_KEYS.iter().map(|key| (*key, "0xabc")).collect()
}

#[test]
fn defaults_match_documented_fallbacks() {
    let config = DAppConfig::default();
    assert_eq!(config.app_name, "My dApp");
    assert_eq!(config.app_version, "1.0.0");
    assert_eq!(config.network.network_id, 1);
    assert_eq!(config.network.chain_name, "Ethereum Mainnet");
    assert_eq!(config.network.rpc_url, "https://mainnet.infura.io/v3/");
    assert_eq!(config.network.block_explorer, "https://etherscan.io");
    assert_eq!(config.subgraph_url, "");
    assert_eq!(config.ipfs_gateway, "https://ipfs.io/ipfs/");
    assert!(config.enable_analytics);
    assert!(config.enable_notifications);
    assert!(!config.is_testnet());
}

#[test]
fn default_config_flags_every_missing_contract() {
    let validation = DAppConfig::default().validate();
    assert!(!validation.is_valid);
    assert_eq!(validation.errors.len(), 10);
    assert_eq!(validation.errors[0], "Missing contract address for: token");
    assert_eq!(validation.errors[9], "Missing contract address for: multisig");
}

#[test]
fn fully_configured_environment_is_valid() {
    let mut pairs = all_contracts_set();
    pairs.push(("NEXT_PUBLIC_NETWORK_ID", "137"));
    let config = config_from(&pairs);

    let validation = config.validate();
    assert!(validation.is_valid, "{:?}", validation.errors);
    assert!(validation.errors.is_empty());
    assert_eq!(config.contract_address(ContractName::Vault), "0xabc");
    assert!(!config.is_testnet());
}

#[test]
fn missing_rpc_and_zero_network_are_reported_together() {
    let mut config = config_from(&all_contracts_set());
    config.network.rpc_url.clear();
    config.network.network_id = 0;

    let validation = config.validate();
    assert_eq!(
        validation.errors,
        vec!["Missing RPC URL".to_string(), "Invalid network ID".to_string()]
    );
}

#[test]
fn testnet_detection_uses_network_id() {
    let config = config_from(&[("NEXT_PUBLIC_NETWORK_ID", "11155111")]);
    assert!(config.is_testnet());
}

#[test]
fn config_panel_lists_values_and_warnings() {
    let config = config_from(&[("NEXT_PUBLIC_TOKEN_CONTRACT", "0xtoken")]);
    let panel = render_config_panel(&config);

    assert_eq!(panel.title, "My dApp v1.0.0");
    let token = panel.entries.iter().find(|e| e.label == "token").unwrap();
    assert_eq!(token.value, "0xtoken");
    let nft = panel.entries.iter().find(|e| e.label == "nft").unwrap();
    assert_eq!(nft.value, "(not set)");
    assert_eq!(panel.warnings.len(), 9);
}
