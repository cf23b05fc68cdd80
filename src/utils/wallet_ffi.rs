// ============================================================================
// WALLET FFI - Foreign Function Interface para @near-wallet-selector
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica.
// Los datos estructurados cruzan la frontera como JSON.
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/wallet_bridge.js")]
extern "C" {
    /// Promise<WalletSelector>; `network_json` es el id de red o el objeto Network
    #[wasm_bindgen(js_name = setupSelector, catch)]
    pub fn setup_selector(network_json: &str) -> Result<js_sys::Promise, JsValue>;

    /// JSON de `selector.options.network`
    #[wasm_bindgen(js_name = selectorNetwork, catch)]
    pub fn selector_network(selector: &JsValue) -> Result<String, JsValue>;

    /// JSON de `selector.store.getState().accounts`
    #[wasm_bindgen(js_name = selectorAccounts, catch)]
    pub fn selector_accounts(selector: &JsValue) -> Result<String, JsValue>;

    #[wasm_bindgen(js_name = showModal, catch)]
    pub fn show_modal(selector: &JsValue, contract_id: &str) -> Result<(), JsValue>;

    /// Promise<void>
    #[wasm_bindgen(js_name = signOut, catch)]
    pub fn sign_out(selector: &JsValue) -> Result<js_sys::Promise, JsValue>;

    /// Promise<string>: JSON del FinalExecutionOutcome o "null"
    #[wasm_bindgen(js_name = signAndSendTransaction, catch)]
    pub fn sign_and_send_transaction(
        selector: &JsValue,
        transaction_json: &str,
    ) -> Result<js_sys::Promise, JsValue>;
}
