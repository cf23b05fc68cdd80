pub mod app;
pub mod routes;
pub mod auth;
pub mod shared;
pub mod create_project;

pub use app::App;
pub use routes::{switch, Route};
pub use auth::{LoginButton, LoginPage, LoginState};
pub use shared::{ErrorBanner, TopNavBar};
pub use create_project::CreateProjectPage;
