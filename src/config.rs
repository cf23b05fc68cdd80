// ============================================================================
// CONFIG - Red NEAR y contrato, resueltos en tiempo de compilación
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::WalletError;

/// Red NEAR soportada por el selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NetworkId {
    Testnet,
    Mainnet,
    Other(String),
}

impl NetworkId {
    pub fn as_str(&self) -> &str {
        match self {
            NetworkId::Testnet => "testnet",
            NetworkId::Mainnet => "mainnet",
            NetworkId::Other(id) => id,
        }
    }

    /// Nodo JSON-RPC público de la red
    pub fn default_node_url(&self) -> Option<&'static str> {
        match self {
            NetworkId::Testnet => Some("https://rpc.testnet.near.org"),
            NetworkId::Mainnet => Some("https://rpc.mainnet.near.org"),
            NetworkId::Other(_) => None,
        }
    }

    pub fn helper_url(&self) -> Option<&'static str> {
        match self {
            NetworkId::Testnet => Some("https://helper.testnet.near.org"),
            NetworkId::Mainnet => Some("https://helper.mainnet.near.org"),
            NetworkId::Other(_) => None,
        }
    }

    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            NetworkId::Testnet => Some("https://testnet.nearblocks.io"),
            NetworkId::Mainnet => Some("https://nearblocks.io"),
            NetworkId::Other(_) => None,
        }
    }

    pub fn indexer_url(&self) -> Option<&'static str> {
        match self {
            NetworkId::Testnet => Some("https://testnet-api.kitwallet.app"),
            NetworkId::Mainnet => Some("https://api.kitwallet.app"),
            NetworkId::Other(_) => None,
        }
    }
}

impl From<String> for NetworkId {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "testnet" => NetworkId::Testnet,
            "mainnet" => NetworkId::Mainnet,
            _ => NetworkId::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for NetworkId {
    fn from(value: &str) -> Self {
        NetworkId::from(value.to_string())
    }
}

impl From<NetworkId> for String {
    fn from(value: NetworkId) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entrada de configuración de red que consume el inicializador de sesión
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    pub network_id: NetworkId,
    /// Contrato para el que se solicita la access key en el login
    pub create_access_key_for: String,
    /// Nodo JSON-RPC alternativo (None = el de la red)
    pub node_url: Option<String>,
}

impl WalletConfig {
    pub fn new(network_id: impl Into<NetworkId>, create_access_key_for: impl Into<String>) -> Self {
        Self {
            network_id: network_id.into(),
            create_access_key_for: create_access_key_for.into(),
            node_url: None,
        }
    }

    pub fn with_node_url(mut self, node_url: impl Into<String>) -> Self {
        self.node_url = Some(node_url.into());
        self
    }

    /// Valor `network` que se pasa a `setupWalletSelector`, serializado a JSON.
    ///
    /// Sin nodo propio basta el id de la red; con nodo propio el selector
    /// necesita el objeto completo, así que el resto de URLs salen de la red.
    pub fn selector_network_json(&self) -> Result<String, WalletError> {
        let network: Value = match &self.node_url {
            None => json!(self.network_id.as_str()),
            Some(node_url) => json!({
                "networkId": self.network_id.as_str(),
                "nodeUrl": node_url,
                "helperUrl": self.network_id.helper_url().unwrap_or_default(),
                "explorerUrl": self.network_id.explorer_url().unwrap_or_default(),
                "indexerUrl": self.network_id.indexer_url().unwrap_or_default(),
            }),
        };
        Ok(serde_json::to_string(&network)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub network_id: NetworkId,
    pub contract_id: String,
    pub node_url: Option<String>,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            network_id: NetworkId::Testnet,
            contract_id: "project-factory.testnet".to_string(),
            node_url: None,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            network_id: option_env!("NEAR_NETWORK_ID")
                .map(NetworkId::from)
                .unwrap_or(defaults.network_id),
            contract_id: option_env!("NEAR_CONTRACT_ID")
                .map(str::to_string)
                .unwrap_or(defaults.contract_id),
            node_url: option_env!("NEAR_NODE_URL")
                .filter(|url| !url.trim().is_empty())
                .map(str::to_string),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn wallet_config(&self) -> WalletConfig {
        WalletConfig {
            network_id: self.network_id.clone(),
            create_access_key_for: self.contract_id.clone(),
            node_url: self.node_url.clone(),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática (inmutable)
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_id_parses_known_and_custom_ids() {
        assert_eq!(NetworkId::from("testnet"), NetworkId::Testnet);
        assert_eq!(NetworkId::from(" MAINNET "), NetworkId::Mainnet);
        assert_eq!(NetworkId::from("localnet"), NetworkId::Other("localnet".into()));
        assert_eq!(NetworkId::Other("localnet".into()).default_node_url(), None);
        assert_eq!(
            NetworkId::Mainnet.default_node_url(),
            Some("https://rpc.mainnet.near.org")
        );
    }

    #[test]
    fn network_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&NetworkId::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
        let parsed: NetworkId = serde_json::from_str("\"mainnet\"").unwrap();
        assert_eq!(parsed, NetworkId::Mainnet);
    }

    #[test]
    fn selector_network_is_the_bare_id_without_override() {
        let config = WalletConfig::new("testnet", "factory.testnet");
        assert_eq!(config.selector_network_json().unwrap(), "\"testnet\"");
    }

    #[test]
    fn selector_network_is_a_full_object_with_node_override() {
        let config = WalletConfig::new("testnet", "factory.testnet")
            .with_node_url("https://rpc.example.org");
        let value: Value = serde_json::from_str(&config.selector_network_json().unwrap()).unwrap();
        assert_eq!(value["networkId"], "testnet");
        assert_eq!(value["nodeUrl"], "https://rpc.example.org");
        assert_eq!(value["helperUrl"], "https://helper.testnet.near.org");
    }

    #[test]
    fn app_config_maps_contract_to_access_key_target() {
        let config = AppConfig::default();
        let wallet = config.wallet_config();
        assert_eq!(wallet.create_access_key_for, config.contract_id);
        assert_eq!(wallet.network_id, NetworkId::Testnet);
    }
}
