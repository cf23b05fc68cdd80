// ============================================================================
// ENCODING - JSON <-> base64 para argumentos y resultados de contratos
// ============================================================================

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;

use crate::error::WalletError;

/// Argumentos JSON -> UTF-8 -> base64 (`args_base64`)
pub fn encode_args(args: &Value) -> Result<String, WalletError> {
    Ok(STANDARD.encode(serde_json::to_vec(args)?))
}

/// Bytes devueltos por una view -> JSON
pub fn decode_result(bytes: &[u8]) -> Result<Value, WalletError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// `SuccessValue` de una transacción -> JSON.
/// Si el texto no es JSON (p. ej. métodos sin retorno) se devuelve como string.
pub fn decode_success_value(encoded: &str) -> Result<Value, WalletError> {
    let bytes = STANDARD.decode(encoded)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(serde_json::from_str(&text).unwrap_or_else(|_| Value::String(text.into_owned())))
}
