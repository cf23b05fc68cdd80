pub mod rpc_client;
pub mod wallet_selector;
pub mod contract_service;

#[cfg(test)]
pub mod testing;

pub use rpc_client::{get_transaction_last_result, JsonRpcProvider, RpcProvider};
pub use wallet_selector::{JsWalletSelector, WalletSelector};
pub use contract_service::{call_method, view_method};
