// ============================================================================
// PROJECT FACTORY PWA - Login NEAR + creación de proyectos (Yew + WASM)
// ============================================================================
// - Views: componentes Yew (login, navbar, router, crear proyecto)
// - Hooks: acceso al SessionStore por Context
// - State: SessionStore (Rc<RefCell> + subscribers) e inicializador
// - Services: wallet selector (bridge JS) y JSON-RPC
// - Models: estructuras del wallet y del nodo
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod services;
pub mod state;
pub mod hooks;
pub mod views;

pub use config::{AppConfig, NetworkId, WalletConfig, CONFIG};
pub use error::WalletError;
pub use state::{ActionPair, MethodPair, Session, SessionInitializer, SessionStore};
