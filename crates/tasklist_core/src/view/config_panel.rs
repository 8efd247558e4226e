//! Read-only configuration panel and its warning banner.

use crate::config::DAppConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntryView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPanelView {
    pub title: String,
    pub entries: Vec<ConfigEntryView>,
    /// Validation failures; empty when the config is valid. Never blocks
    /// the rest of the page from rendering.
    pub warnings: Vec<String>,
}

pub fn render_config_panel(config: &DAppConfig) -> ConfigPanelView {
    let mut entries = vec![
        entry("Network ID", config.network.network_id.to_string()),
        entry("Chain", config.network.chain_name.clone()),
        entry("RPC URL", config.network.rpc_url.clone()),
        entry("Block explorer", config.network.block_explorer.clone()),
        entry("Testnet", config.is_testnet().to_string()),
    ];
    for (name, address) in config.contracts.entries() {
        let value = if address.is_empty() {
            "(not set)".to_string()
        } else {
            address.to_string()
        };
        entries.push(entry(name.as_str(), value));
    }
    entries.push(entry("Subgraph URL", config.subgraph_url.clone()));
    entries.push(entry("IPFS gateway", config.ipfs_gateway.clone()));
    entries.push(entry("Analytics", config.enable_analytics.to_string()));
    entries.push(entry(
        "Notifications",
        config.enable_notifications.to_string(),
    ));

    ConfigPanelView {
        title: format!("{} v{}", config.app_name, config.app_version),
        entries,
        warnings: config.validate().errors,
    }
}

fn entry(label: &str, value: String) -> ConfigEntryView {
    ConfigEntryView {
        label: label.to_string(),
        value,
    }
}
