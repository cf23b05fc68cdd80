// ============================================================================
// RPC - Estructuras del JSON-RPC de NEAR (query call_function)
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{WalletError, RPC_SERVER_ERROR};
use crate::utils::encoding::encode_args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Finality {
    #[default]
    Optimistic,
    Final,
}

/// Parámetros de `query` con `request_type = "call_function"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallFunctionQuery {
    pub request_type: String,
    pub finality: Finality,
    pub account_id: String,
    pub method_name: String,
    pub args_base64: String,
}

impl CallFunctionQuery {
    pub fn new(
        account_id: impl Into<String>,
        method_name: impl Into<String>,
        args: &Value,
        finality: Finality,
    ) -> Result<Self, WalletError> {
        Ok(Self {
            request_type: "call_function".to_string(),
            finality,
            account_id: account_id.into(),
            method_name: method_name.into(),
            args_base64: encode_args(args)?,
        })
    }
}

/// Resultado de una llamada de solo lectura
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeResult {
    /// Bytes crudos devueltos por el contrato (normalmente JSON)
    pub result: Vec<u8>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default)]
    pub block_height: u64,
    #[serde(default)]
    pub block_hash: String,
}

impl CodeResult {
    /// Algunos nodos devuelven errores de ejecución dentro de `result.error`
    pub fn from_query_result(result: Value) -> Result<Self, WalletError> {
        if let Some(message) = result.get("error").and_then(Value::as_str) {
            return Err(WalletError::Rpc {
                code: RPC_SERVER_ERROR,
                message: message.to_string(),
            });
        }
        Ok(serde_json::from_value(result)?)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest<'a, P: Serialize> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'a str,
    pub params: &'a P,
}

impl<'a, P: Serialize> JsonRpcRequest<'a, P> {
    pub fn new(method: &'a str, params: &'a P) -> Self {
        Self {
            jsonrpc: "2.0",
            id: "dontcare",
            method,
            params,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcErrorBody {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcErrorBody>,
}

impl JsonRpcResponse {
    pub fn into_result(self) -> Result<Value, WalletError> {
        if let Some(error) = self.error {
            // `data` suele traer el detalle útil ("Server error" es genérico)
            let message = match error.data {
                Some(Value::String(detail)) => detail,
                Some(detail) if !detail.is_null() => format!("{}: {}", error.message, detail),
                _ => error.message,
            };
            return Err(WalletError::Rpc {
                code: error.code,
                message,
            });
        }
        self.result
            .ok_or_else(|| WalletError::Encoding("JSON-RPC response without result".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_function_query_encodes_args_and_finality() {
        let query =
            CallFunctionQuery::new("factory.testnet", "get_x", &json!({}), Finality::Optimistic)
                .unwrap();
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            json!({
                "request_type": "call_function",
                "finality": "optimistic",
                "account_id": "factory.testnet",
                "method_name": "get_x",
                "args_base64": "e30="
            })
        );
    }

    #[test]
    fn rpc_envelope_carries_method_and_params() {
        let params = json!({"a": 1});
        let request = JsonRpcRequest::new("query", &params);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], "dontcare");
        assert_eq!(value["method"], "query");
        assert_eq!(value["params"]["a"], 1);
    }

    #[test]
    fn rpc_error_body_prefers_string_data() {
        let response: JsonRpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "error": {"code": -32000, "message": "Server error", "data": "account does not exist"}
        }))
        .unwrap();
        assert_eq!(
            response.into_result(),
            Err(WalletError::Rpc {
                code: -32000,
                message: "account does not exist".into()
            })
        );
    }

    #[test]
    fn execution_error_inside_result_is_reported() {
        let err = CodeResult::from_query_result(json!({
            "error": "wasm execution failed with error: MethodNotFound",
            "logs": [],
            "block_height": 10,
            "block_hash": "xyz"
        }))
        .unwrap_err();
        assert!(matches!(err, WalletError::Rpc { code: RPC_SERVER_ERROR, .. }));
    }

    #[test]
    fn code_result_parses_byte_array() {
        let result = CodeResult::from_query_result(json!({
            "result": [52, 50],
            "logs": ["hello"],
            "block_height": 12,
            "block_hash": "abc"
        }))
        .unwrap();
        assert_eq!(result.result, b"42".to_vec());
        assert_eq!(result.logs, vec!["hello".to_string()]);
    }
}
