// ============================================================================
// TRANSACTION - Lo que se envía al wallet y lo que devuelve
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallParams {
    pub method_name: String,
    pub args: Value,
    /// Gas en unidades, como string decimal
    pub gas: String,
    /// Depósito en yoctoNEAR, como string decimal
    pub deposit: String,
}

/// Acción dentro de una transacción (`{"type": "FunctionCall", "params": {...}}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params")]
pub enum Action {
    FunctionCall(FunctionCallParams),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_id: Option<String>,
    pub receiver_id: String,
    pub actions: Vec<Action>,
}

impl Transaction {
    /// Transacción con una sola llamada a función
    pub fn function_call(receiver_id: impl Into<String>, params: FunctionCallParams) -> Self {
        Self {
            signer_id: None,
            receiver_id: receiver_id.into(),
            actions: vec![Action::FunctionCall(params)],
        }
    }
}

/// Estado final que reporta el nodo. Acepta la forma unitaria (`"Failure"`)
/// y la forma con valor (`{"Failure": {...}}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub enum FinalExecutionStatus {
    NotStarted,
    Started,
    Unknown,
    /// `Null` cuando llega sin detalle
    Failure(Value),
    /// Valor de retorno en base64
    SuccessValue(String),
    SuccessReceiptId(String),
}

impl TryFrom<Value> for FinalExecutionStatus {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(name) => match name.as_str() {
                "NotStarted" => Ok(Self::NotStarted),
                "Started" => Ok(Self::Started),
                "Unknown" => Ok(Self::Unknown),
                "Failure" => Ok(Self::Failure(Value::Null)),
                other => Err(format!("unknown execution status `{}`", other)),
            },
            Value::Object(map) if map.len() == 1 => {
                let (name, inner) = map.into_iter().next().ok_or("empty execution status")?;
                match (name.as_str(), inner) {
                    ("Failure", detail) => Ok(Self::Failure(detail)),
                    ("SuccessValue", Value::String(encoded)) => Ok(Self::SuccessValue(encoded)),
                    ("SuccessReceiptId", Value::String(receipt)) => Ok(Self::SuccessReceiptId(receipt)),
                    (unit @ ("NotStarted" | "Started" | "Unknown"), Value::Null) => {
                        Self::try_from(Value::String(unit.to_string()))
                    }
                    (other, _) => Err(format!("unexpected execution status `{}`", other)),
                }
            }
            other => Err(format!("invalid execution status: {}", other)),
        }
    }
}

/// Resultado final de una transacción enviada por el wallet.
/// Solo `status` se interpreta; el resto se guarda tal cual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalExecutionOutcome {
    pub status: FinalExecutionStatus,
    #[serde(default)]
    pub transaction: Value,
    #[serde(default)]
    pub transaction_outcome: Value,
    #[serde(default)]
    pub receipts_outcome: Value,
}

impl FinalExecutionOutcome {
    pub fn with_status(status: FinalExecutionStatus) -> Self {
        Self {
            status,
            transaction: Value::Null,
            transaction_outcome: Value::Null,
            receipts_outcome: Value::Null,
        }
    }
}
