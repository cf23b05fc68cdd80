// ============================================================================
// CONTRACT SERVICE - viewMethod / callMethod
// ============================================================================

use serde_json::Value;

use crate::error::WalletError;
use crate::models::{CallFunctionQuery, CallRequest, Finality, FunctionCallParams, Transaction, ViewRequest};
use crate::services::rpc_client::{get_transaction_last_result, RpcProvider};
use crate::services::wallet_selector::WalletSelector;
use crate::utils::encoding::decode_result;
use crate::utils::format::parse_near_amount;

/// Llamada de solo lectura con finalidad optimista
pub async fn view_method(provider: &dyn RpcProvider, request: ViewRequest) -> Result<Value, WalletError> {
    let query = CallFunctionQuery::new(
        request.contract_id,
        request.method,
        &request.args,
        Finality::Optimistic,
    )?;
    let result = provider.query_call_function(&query).await?;
    decode_result(&result.result)
}

/// Una única acción FunctionCall firmada por el wallet activo.
///
/// `Ok(None)` cuando el wallet no devuelve outcome.
pub async fn call_method(
    selector: &dyn WalletSelector,
    request: CallRequest,
) -> Result<Option<Value>, WalletError> {
    let deposit = parse_near_amount(&request.deposit)?;
    log::info!(
        "✍️ [CONTRACT] {}::{} (gas {}, deposit {} yocto)",
        request.contract_id,
        request.method,
        request.gas,
        deposit
    );

    let transaction = Transaction::function_call(
        request.contract_id,
        FunctionCallParams {
            method_name: request.method,
            args: request.args,
            gas: request.gas,
            deposit,
        },
    );

    match selector.sign_and_send_transaction(transaction).await? {
        Some(outcome) => Ok(Some(get_transaction_last_result(&outcome)?)),
        None => Ok(None),
    }
}
