// ============================================================================
// SESSION INITIALIZER - Selector -> cuenta -> acciones -> métodos
// ============================================================================
// Se ejecuta una vez por montaje. Cada paso publica su resultado en el
// store en cuanto termina; todo depende de que el selector exista.
// ============================================================================

use std::rc::Rc;

use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::models::AccountState;
use crate::services::{call_method, view_method, JsWalletSelector, JsonRpcProvider, RpcProvider, WalletSelector};
use crate::state::session_store::{ActionPair, MethodPair, SessionStore};

pub struct SessionInitializer {
    config: WalletConfig,
}

impl SessionInitializer {
    pub fn new(config: WalletConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Construye el selector real y puebla el store
    pub async fn run(&self, store: &SessionStore) -> Result<(), WalletError> {
        log::info!(
            "🔌 [INIT] Configurando wallet selector para {} (access key: {})",
            self.config.network_id,
            self.config.create_access_key_for
        );
        let selector = JsWalletSelector::setup(&self.config).await?;
        self.bind(store, Rc::new(selector));
        Ok(())
    }

    /// Puebla el store con un selector ya construido; el RPC usa el nodo del selector
    pub fn bind(&self, store: &SessionStore, selector: Rc<dyn WalletSelector>) {
        let provider = Rc::new(JsonRpcProvider::new(selector.network().node_url.clone()));
        self.bind_with_provider(store, selector, provider);
    }

    pub fn bind_with_provider(
        &self,
        store: &SessionStore,
        selector: Rc<dyn WalletSelector>,
        provider: Rc<dyn RpcProvider>,
    ) {
        store.set_selector(selector.clone());

        // Si la lista no se puede leer se sigue sin cuenta, pero con el error visible
        let signed_account_id = match selector.accounts() {
            Ok(accounts) => discover_account(&accounts),
            Err(e) => {
                store.report_error(&e);
                String::new()
            }
        };
        if signed_account_id.is_empty() {
            log::info!("ℹ️ [INIT] Sin cuenta activa");
        } else {
            log::info!("✅ [INIT] Cuenta activa: {}", signed_account_id);
        }
        store.set_auth(signed_account_id);

        store.set_log_actions(bind_actions(
            store,
            selector.clone(),
            self.config.create_access_key_for.clone(),
        ));
        store.set_methods(bind_methods(selector, provider));
    }
}

/// Id de la cuenta activa, o "" si no hay ninguna
pub fn discover_account(accounts: &[AccountState]) -> String {
    accounts
        .iter()
        .find(|account| account.active)
        .map(|account| account.account_id.clone())
        .unwrap_or_default()
}

fn bind_actions(store: &SessionStore, selector: Rc<dyn WalletSelector>, contract_id: String) -> ActionPair {
    let log_in = {
        let selector = selector.clone();
        move || {
            let result = selector.show_modal(&contract_id);
            async move { result }
        }
    };

    let log_out = {
        let store = store.downgrade();
        move || {
            let selector = selector.clone();
            let store = store.clone();
            async move {
                selector.sign_out().await?;
                if let Some(store) = store.upgrade() {
                    store.set_auth("");
                }
                log::info!("👋 [SESSION] Logout");
                Ok(())
            }
        }
    };

    ActionPair::new(log_in, log_out)
}

fn bind_methods(selector: Rc<dyn WalletSelector>, provider: Rc<dyn RpcProvider>) -> MethodPair {
    MethodPair::new(
        move |request| {
            let provider = provider.clone();
            async move { view_method(provider.as_ref(), request).await }
        },
        move |request| {
            let selector = selector.clone();
            async move { call_method(selector.as_ref(), request).await }
        },
    )
}
