// ============================================================================
// SESSION STORE - Cuenta firmada, acciones de sesión y métodos de contrato
// ============================================================================
// Contenedor compartido y observable. No valida nada: los llamadores son
// de confianza. Cada setter notifica a los subscribers de forma síncrona.
// ============================================================================

use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use serde_json::Value;

use crate::error::WalletError;
use crate::models::{CallRequest, ViewRequest};
use crate::services::WalletSelector;
use crate::state::reactivity::{ReactiveState, Subscription, WeakReactiveState};

pub type SessionAction = Rc<dyn Fn() -> LocalBoxFuture<'static, Result<(), WalletError>>>;
pub type ViewMethod = Rc<dyn Fn(ViewRequest) -> LocalBoxFuture<'static, Result<Value, WalletError>>>;
pub type CallMethod =
    Rc<dyn Fn(CallRequest) -> LocalBoxFuture<'static, Result<Option<Value>, WalletError>>>;

/// logIn + logOut, siempre reemplazados juntos
#[derive(Clone)]
pub struct ActionPair {
    pub log_in: SessionAction,
    pub log_out: SessionAction,
}

impl ActionPair {
    pub fn new<I, IF, O, OF>(log_in: I, log_out: O) -> Self
    where
        I: Fn() -> IF + 'static,
        IF: Future<Output = Result<(), WalletError>> + 'static,
        O: Fn() -> OF + 'static,
        OF: Future<Output = Result<(), WalletError>> + 'static,
    {
        Self {
            log_in: Rc::new(move || log_in().boxed_local()),
            log_out: Rc::new(move || log_out().boxed_local()),
        }
    }

    /// Par inerte que se usa antes de que el selector esté listo
    pub fn inert() -> Self {
        Self::new(|| async { Ok(()) }, || async { Ok(()) })
    }
}

impl Default for ActionPair {
    fn default() -> Self {
        Self::inert()
    }
}

/// viewMethod + callMethod, siempre reemplazados juntos
#[derive(Clone)]
pub struct MethodPair {
    view: ViewMethod,
    call: CallMethod,
}

impl MethodPair {
    pub fn new<V, VF, C, CF>(view: V, call: C) -> Self
    where
        V: Fn(ViewRequest) -> VF + 'static,
        VF: Future<Output = Result<Value, WalletError>> + 'static,
        C: Fn(CallRequest) -> CF + 'static,
        CF: Future<Output = Result<Option<Value>, WalletError>> + 'static,
    {
        Self {
            view: Rc::new(move |request| view(request).boxed_local()),
            call: Rc::new(move |request| call(request).boxed_local()),
        }
    }

    pub fn view_method(&self, request: ViewRequest) -> LocalBoxFuture<'static, Result<Value, WalletError>> {
        (self.view)(request)
    }

    pub fn call_method(
        &self,
        request: CallRequest,
    ) -> LocalBoxFuture<'static, Result<Option<Value>, WalletError>> {
        (self.call)(request)
    }
}

/// Estado de sesión; vacío al arrancar, sin persistencia
#[derive(Clone, Default)]
pub struct Session {
    /// Vacío = sin sesión
    pub signed_account_id: String,
    pub actions: ActionPair,
    pub methods: Option<MethodPair>,
    pub selector: Option<Rc<dyn WalletSelector>>,
    pub last_error: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("signed_account_id", &self.signed_account_id)
            .field("methods_ready", &self.methods.is_some())
            .field("selector_ready", &self.selector.is_some())
            .field("last_error", &self.last_error)
            .finish()
    }
}

/// Handle barato de clonar al store de sesión
#[derive(Clone)]
pub struct SessionStore {
    state: ReactiveState<Session>,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.state.ptr_eq(&other.state)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.state.with(|session| fmt::Debug::fmt(session, f))
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: ReactiveState::new(Session::default()),
        }
    }

    // ---- getters -----------------------------------------------------------

    pub fn signed_account_id(&self) -> String {
        self.state.with(|s| s.signed_account_id.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.state.with(|s| !s.signed_account_id.is_empty())
    }

    pub fn actions(&self) -> ActionPair {
        self.state.with(|s| s.actions.clone())
    }

    pub fn methods(&self) -> Option<MethodPair> {
        self.state.with(|s| s.methods.clone())
    }

    pub fn selector(&self) -> Option<Rc<dyn WalletSelector>> {
        self.state.with(|s| s.selector.clone())
    }

    pub fn last_error(&self) -> Option<String> {
        self.state.with(|s| s.last_error.clone())
    }

    pub fn snapshot(&self) -> Session {
        self.state.with(Session::clone)
    }

    // ---- setters -----------------------------------------------------------

    /// Reemplaza solo la cuenta firmada
    pub fn set_auth(&self, signed_account_id: impl Into<String>) {
        let signed_account_id = signed_account_id.into();
        self.state.update(|s| s.signed_account_id = signed_account_id);
    }

    pub fn set_log_actions(&self, actions: ActionPair) {
        self.state.update(|s| s.actions = actions);
    }

    pub fn set_methods(&self, methods: MethodPair) {
        self.state.update(|s| s.methods = Some(methods));
    }

    pub fn set_selector(&self, selector: Rc<dyn WalletSelector>) {
        self.state.update(|s| s.selector = Some(selector));
    }

    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.last_error = error);
    }

    /// Log + banner
    pub fn report_error(&self, error: &WalletError) {
        log::error!("❌ [SESSION] {}", error);
        self.set_error(Some(error.to_string()));
    }

    // ---- acciones ----------------------------------------------------------

    // El Rc se clona antes de esperar: ningún borrow cruza el await.

    pub async fn log_in(&self) -> Result<(), WalletError> {
        let log_in = self.actions().log_in;
        log_in().await
    }

    pub async fn log_out(&self) -> Result<(), WalletError> {
        let log_out = self.actions().log_out;
        log_out().await
    }

    pub async fn view_method(&self, request: ViewRequest) -> Result<Value, WalletError> {
        let methods = self.methods().ok_or(WalletError::NotReady)?;
        methods.view_method(request).await
    }

    pub async fn call_method(&self, request: CallRequest) -> Result<Option<Value>, WalletError> {
        let methods = self.methods().ok_or(WalletError::NotReady)?;
        methods.call_method(request).await
    }

    // ---- suscripciones -----------------------------------------------------

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback)
    }

    pub fn downgrade(&self) -> WeakSessionStore {
        WeakSessionStore {
            state: self.state.downgrade(),
        }
    }
}

/// Referencia débil para closures que viven dentro del propio store
#[derive(Clone)]
pub struct WeakSessionStore {
    state: WeakReactiveState<Session>,
}

impl WeakSessionStore {
    pub fn upgrade(&self) -> Option<SessionStore> {
        self.state.upgrade().map(|state| SessionStore { state })
    }
}
