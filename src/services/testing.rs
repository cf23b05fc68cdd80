// ============================================================================
// TESTING - Dobles en memoria del selector y del nodo RPC
// ============================================================================
// Un `FakeChain` compartido hace de estado del contrato: los métodos
// `set_<clave>` escriben `args.value` y los `get_<clave>` lo leen.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{WalletError, RPC_SERVER_ERROR};
use crate::models::{
    AccountState, Action, CallFunctionQuery, CodeResult, FinalExecutionOutcome, FinalExecutionStatus,
    NetworkInfo, Transaction,
};
use crate::services::rpc_client::RpcProvider;
use crate::services::wallet_selector::WalletSelector;

#[derive(Clone, Default)]
pub struct FakeChain {
    state: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl FakeChain {
    pub fn set(&self, key: &str, value: Value) {
        self.state.borrow_mut().insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.state.borrow().get(key).cloned()
    }
}

enum OutcomeMode {
    ApplyToChain,
    Fixed(FinalExecutionOutcome),
    Missing,
}

pub struct FakeSelector {
    network: NetworkInfo,
    accounts: RefCell<Vec<AccountState>>,
    chain: FakeChain,
    outcome: OutcomeMode,
    fail_sign_out: bool,
    fail_accounts: bool,
    sent: RefCell<Vec<Transaction>>,
    modal_requests: RefCell<Vec<String>>,
    sign_outs: Cell<usize>,
}

impl FakeSelector {
    pub fn with_accounts(accounts: Vec<AccountState>) -> Self {
        Self {
            network: NetworkInfo::new("testnet", "https://rpc.testnet.near.org"),
            accounts: RefCell::new(accounts),
            chain: FakeChain::default(),
            outcome: OutcomeMode::ApplyToChain,
            fail_sign_out: false,
            fail_accounts: false,
            sent: RefCell::new(Vec::new()),
            modal_requests: RefCell::new(Vec::new()),
            sign_outs: Cell::new(0),
        }
    }

    pub fn signed_in(account_id: &str) -> Self {
        Self::with_accounts(vec![AccountState::new(account_id, true)])
    }

    pub fn signed_out() -> Self {
        Self::with_accounts(Vec::new())
    }

    pub fn with_chain(mut self, chain: FakeChain) -> Self {
        self.chain = chain;
        self
    }

    pub fn with_outcome(mut self, outcome: FinalExecutionOutcome) -> Self {
        self.outcome = OutcomeMode::Fixed(outcome);
        self
    }

    pub fn without_outcome(mut self) -> Self {
        self.outcome = OutcomeMode::Missing;
        self
    }

    pub fn failing_sign_out(mut self) -> Self {
        self.fail_sign_out = true;
        self
    }

    pub fn failing_accounts(mut self) -> Self {
        self.fail_accounts = true;
        self
    }

    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.sent.borrow().clone()
    }

    pub fn modal_requests(&self) -> Vec<String> {
        self.modal_requests.borrow().clone()
    }

    pub fn sign_out_count(&self) -> usize {
        self.sign_outs.get()
    }

    fn apply(&self, transaction: &Transaction) {
        for Action::FunctionCall(params) in &transaction.actions {
            if let Some(key) = params.method_name.strip_prefix("set_") {
                let value = params.args.get("value").cloned().unwrap_or(Value::Null);
                self.chain.set(key, value);
            }
        }
    }
}

#[async_trait(?Send)]
impl WalletSelector for FakeSelector {
    fn network(&self) -> &NetworkInfo {
        &self.network
    }

    fn accounts(&self) -> Result<Vec<AccountState>, WalletError> {
        if self.fail_accounts {
            return Err(WalletError::Selector("accounts unreadable".to_string()));
        }
        Ok(self.accounts.borrow().clone())
    }

    fn show_modal(&self, contract_id: &str) -> Result<(), WalletError> {
        self.modal_requests.borrow_mut().push(contract_id.to_string());
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), WalletError> {
        self.sign_outs.set(self.sign_outs.get() + 1);
        if self.fail_sign_out {
            return Err(WalletError::SignOut("wallet unavailable".to_string()));
        }
        self.accounts.borrow_mut().clear();
        Ok(())
    }

    async fn sign_and_send_transaction(
        &self,
        transaction: Transaction,
    ) -> Result<Option<FinalExecutionOutcome>, WalletError> {
        if !self.accounts.borrow().iter().any(|a| a.active) {
            return Err(WalletError::NoWallet);
        }
        self.sent.borrow_mut().push(transaction.clone());
        match &self.outcome {
            OutcomeMode::ApplyToChain => {
                self.apply(&transaction);
                Ok(Some(FinalExecutionOutcome::with_status(
                    FinalExecutionStatus::SuccessValue(String::new()),
                )))
            }
            OutcomeMode::Fixed(outcome) => Ok(Some(outcome.clone())),
            OutcomeMode::Missing => Ok(None),
        }
    }
}

pub struct FakeProvider {
    chain: FakeChain,
    failure: Option<String>,
    queries: RefCell<Vec<CallFunctionQuery>>,
}

impl FakeProvider {
    pub fn new(chain: FakeChain) -> Self {
        Self {
            chain,
            failure: None,
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn chain(&self) -> &FakeChain {
        &self.chain
    }

    pub fn last_query(&self) -> Option<CallFunctionQuery> {
        self.queries.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl RpcProvider for FakeProvider {
    async fn query_call_function(&self, query: &CallFunctionQuery) -> Result<CodeResult, WalletError> {
        self.queries.borrow_mut().push(query.clone());
        if let Some(message) = &self.failure {
            return Err(WalletError::Rpc {
                code: RPC_SERVER_ERROR,
                message: message.clone(),
            });
        }
        let key = query.method_name.strip_prefix("get_").ok_or_else(|| WalletError::Rpc {
            code: RPC_SERVER_ERROR,
            message: format!("MethodNotFound: {}", query.method_name),
        })?;
        let value = self.chain.get(key).unwrap_or(Value::Null);
        Ok(CodeResult {
            result: serde_json::to_vec(&value)?,
            logs: Vec::new(),
            block_height: 1,
            block_hash: "fake".to_string(),
        })
    }
}
