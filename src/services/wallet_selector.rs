// ============================================================================
// WALLET SELECTOR - Handle opaco sobre @near-wallet-selector
// ============================================================================
// El trait es la frontera con la librería externa; la implementación real
// delega en el bridge JS (utils::wallet_ffi).
// ============================================================================

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::models::{AccountState, FinalExecutionOutcome, NetworkInfo, Transaction};
use crate::utils::wallet_ffi;

/// Conexión establecida con el subsistema de selección de wallets para una red
#[async_trait(?Send)]
pub trait WalletSelector {
    /// Red con la que se configuró el selector
    fn network(&self) -> &NetworkInfo;

    /// Lista interna de cuentas del selector
    fn accounts(&self) -> Result<Vec<AccountState>, WalletError>;

    /// Abre el modal de selección pidiendo una access key para `contract_id`
    fn show_modal(&self, contract_id: &str) -> Result<(), WalletError>;

    async fn sign_out(&self) -> Result<(), WalletError>;

    /// `None` si el wallet no devuelve outcome (p. ej. wallets con redirección)
    async fn sign_and_send_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Option<FinalExecutionOutcome>, WalletError>;
}

pub struct JsWalletSelector {
    handle: JsValue,
    network: NetworkInfo,
}

impl JsWalletSelector {
    /// Construye el selector con el módulo MyNearWallet
    pub async fn setup(config: &WalletConfig) -> Result<Self, WalletError> {
        let network_json = config.selector_network_json()?;
        let promise = wallet_ffi::setup_selector(&network_json)
            .map_err(|e| WalletError::from_js(&e, WalletError::Selector))?;
        let handle = JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::from_js(&e, WalletError::Selector))?;

        let network_json = wallet_ffi::selector_network(&handle)
            .map_err(|e| WalletError::from_js(&e, WalletError::Selector))?;
        let network: NetworkInfo = serde_json::from_str(&network_json)?;

        log::info!(
            "🔌 [WALLET] Selector listo para {} ({})",
            network.network_id,
            network.node_url
        );
        Ok(Self { handle, network })
    }
}

#[async_trait(?Send)]
impl WalletSelector for JsWalletSelector {
    fn network(&self) -> &NetworkInfo {
        &self.network
    }

    fn accounts(&self) -> Result<Vec<AccountState>, WalletError> {
        let json = wallet_ffi::selector_accounts(&self.handle)
            .map_err(|e| WalletError::from_js(&e, WalletError::Selector))?;
        Ok(serde_json::from_str(&json)?)
    }

    fn show_modal(&self, contract_id: &str) -> Result<(), WalletError> {
        log::info!("🔐 [WALLET] Abriendo modal para {}", contract_id);
        wallet_ffi::show_modal(&self.handle, contract_id)
            .map_err(|e| WalletError::from_js(&e, WalletError::Selector))
    }

    async fn sign_out(&self) -> Result<(), WalletError> {
        let promise = wallet_ffi::sign_out(&self.handle)
            .map_err(|e| WalletError::from_js(&e, WalletError::SignOut))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::from_js(&e, WalletError::SignOut))?;
        log::info!("👋 [WALLET] Sesión cerrada en el wallet");
        Ok(())
    }

    async fn sign_and_send_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Option<FinalExecutionOutcome>, WalletError> {
        let transaction_json = serde_json::to_string(&transaction)?;
        let promise = wallet_ffi::sign_and_send_transaction(&self.handle, &transaction_json)
            .map_err(|e| WalletError::from_js(&e, WalletError::Transaction))?;
        let outcome = JsFuture::from(promise)
            .await
            .map_err(|e| WalletError::from_js(&e, WalletError::Transaction))?;

        let outcome_json = outcome
            .as_string()
            .ok_or_else(|| WalletError::Encoding("outcome is not a JSON string".to_string()))?;
        Ok(serde_json::from_str::<Option<FinalExecutionOutcome>>(&outcome_json)?)
    }
}
