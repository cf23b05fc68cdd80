// ============================================================================
// ERRORES - Un único tipo para todos los puntos de suspensión
// ============================================================================

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Código JSON-RPC que usa el nodo para errores de ejecución del contrato
pub const RPC_SERVER_ERROR: i64 = -32000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("wallet selector error: {0}")]
    Selector(String),

    #[error("no wallet selected")]
    NoWallet,

    #[error("sign out failed: {0}")]
    SignOut(String),

    #[error("transaction failed: {0}")]
    Transaction(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("network error: {0}")]
    Http(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("wallet not ready yet")]
    NotReady,
}

impl WalletError {
    /// Texto legible de un rechazo de promesa JS
    pub fn js_message(value: &JsValue) -> String {
        if let Some(text) = value.as_string() {
            return text;
        }
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return String::from(error.message());
        }
        format!("{:?}", value)
    }

    /// Rechazo del bridge JS; "No wallet selected" tiene variante propia
    pub fn from_js(value: &JsValue, wrap: fn(String) -> WalletError) -> WalletError {
        let message = Self::js_message(value);
        if message.contains("No wallet selected") {
            WalletError::NoWallet
        } else {
            wrap(message)
        }
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        WalletError::Encoding(err.to_string())
    }
}

impl From<base64::DecodeError> for WalletError {
    fn from(err: base64::DecodeError) -> Self {
        WalletError::Encoding(err.to_string())
    }
}

impl From<gloo_net::Error> for WalletError {
    fn from(err: gloo_net::Error) -> Self {
        WalletError::Http(err.to_string())
    }
}
