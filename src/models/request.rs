use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::constants::DEFAULT_FUNCTION_CALL_GAS;

/// Llamada de solo lectura a un contrato
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRequest {
    pub contract_id: String,
    pub method: String,
    pub args: Value,
}

impl ViewRequest {
    pub fn new(contract_id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
            method: method.into(),
            args: Value::Object(Map::new()),
        }
    }

    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }
}

/// Llamada que cambia estado, firmada por el wallet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub contract_id: String,
    pub method: String,
    pub args: Value,
    pub gas: String,
    /// Depósito en NEAR, en decimal legible ("0", "1.5")
    pub deposit: String,
}

impl CallRequest {
    pub fn new(contract_id: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
            method: method.into(),
            args: Value::Object(Map::new()),
            gas: DEFAULT_FUNCTION_CALL_GAS.to_string(),
            deposit: "0".to_string(),
        }
    }

    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }

    pub fn with_gas(mut self, gas: impl Into<String>) -> Self {
        self.gas = gas.into();
        self
    }

    pub fn with_deposit(mut self, deposit: impl Into<String>) -> Self {
        self.deposit = deposit.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn call_request_defaults_match_wallet_defaults() {
        let request = CallRequest::new("factory.testnet", "set_x");
        assert_eq!(request.gas, "30000000000000");
        assert_eq!(request.deposit, "0");
        assert_eq!(request.args, json!({}));
    }

    #[test]
    fn view_request_builder_replaces_args() {
        let request = ViewRequest::new("factory.testnet", "get_x").with_args(json!({"k": 1}));
        assert_eq!(request.args["k"], 1);
    }
}
