use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::auth::LoginButton;
use crate::views::routes::Route;
use crate::views::shared::ErrorBanner;

#[function_component(TopNavBar)]
pub fn top_nav_bar() -> Html {
    html! {
        <header class="app-header">
            <nav class="nav-links">
                <Link<Route> to={Route::Login}>{"Inicio"}</Link<Route>>
                <Link<Route> to={Route::CreateProject}>{"Crear proyecto"}</Link<Route>>
            </nav>
            <div class="nav-actions">
                <LoginButton />
            </div>
            <ErrorBanner />
        </header>
    }
}
