use serde::{Deserialize, Serialize};

/// Cuenta tal como la expone el store interno del selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    pub account_id: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub public_key: Option<String>,
}

impl AccountState {
    pub fn new(account_id: impl Into<String>, active: bool) -> Self {
        Self {
            account_id: account_id.into(),
            active,
            public_key: None,
        }
    }
}

/// `selector.options.network`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub network_id: String,
    pub node_url: String,
    #[serde(default)]
    pub helper_url: Option<String>,
    #[serde(default)]
    pub explorer_url: Option<String>,
    #[serde(default)]
    pub indexer_url: Option<String>,
}

impl NetworkInfo {
    pub fn new(network_id: impl Into<String>, node_url: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            node_url: node_url.into(),
            helper_url: None,
            explorer_url: None,
            indexer_url: None,
        }
    }
}
