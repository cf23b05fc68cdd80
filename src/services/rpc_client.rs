// ============================================================================
// RPC CLIENT - SOLO COMUNICACIÓN JSON-RPC (Stateless)
// ============================================================================
// Consultas de solo lectura contra el nodo de la red del selector
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::error::WalletError;
use crate::models::rpc::{JsonRpcRequest, JsonRpcResponse};
use crate::models::{CallFunctionQuery, CodeResult, FinalExecutionOutcome, FinalExecutionStatus};
use crate::utils::encoding::decode_success_value;

/// Proveedor de consultas de solo lectura
#[async_trait(?Send)]
pub trait RpcProvider {
    async fn query_call_function(&self, query: &CallFunctionQuery) -> Result<CodeResult, WalletError>;
}

/// Cliente JSON-RPC sobre fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonRpcProvider {
    url: String,
}

impl JsonRpcProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send<P: Serialize>(&self, method: &str, params: &P) -> Result<Value, WalletError> {
        let body = JsonRpcRequest::new(method, params);
        let response = Request::post(&self.url).json(&body)?.send().await?;

        if !response.ok() {
            return Err(WalletError::Http(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            )));
        }

        let envelope = response
            .json::<JsonRpcResponse>()
            .await
            .map_err(|e| WalletError::Encoding(format!("Parse error: {}", e)))?;
        envelope.into_result()
    }
}

#[async_trait(?Send)]
impl RpcProvider for JsonRpcProvider {
    async fn query_call_function(&self, query: &CallFunctionQuery) -> Result<CodeResult, WalletError> {
        log::debug!(
            "🔎 [RPC] {}::{} ({:?})",
            query.account_id,
            query.method_name,
            query.finality
        );
        let result = self.send("query", query).await?;
        CodeResult::from_query_result(result)
    }
}

/// Valor de retorno del último receipt; `Null` si la transacción no terminó en éxito
pub fn get_transaction_last_result(outcome: &FinalExecutionOutcome) -> Result<Value, WalletError> {
    match &outcome.status {
        FinalExecutionStatus::SuccessValue(encoded) => decode_success_value(encoded),
        _ => Ok(Value::Null),
    }
}
