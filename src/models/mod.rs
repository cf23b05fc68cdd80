pub mod wallet;
pub mod transaction;
pub mod rpc;
pub mod request;

pub use wallet::{AccountState, NetworkInfo};
pub use transaction::{Action, FinalExecutionOutcome, FinalExecutionStatus, FunctionCallParams, Transaction};
pub use rpc::{CallFunctionQuery, CodeResult, Finality};
pub use request::{CallRequest, ViewRequest};
