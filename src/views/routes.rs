use yew::prelude::*;
use yew_router::prelude::*;

use crate::views::auth::LoginPage;
use crate::views::create_project::CreateProjectPage;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/create-project")]
    CreateProject,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::CreateProject => html! { <CreateProjectPage /> },
        Route::NotFound => html! {
            <section class="not-found">
                <h1>{"404"}</h1>
                <Link<Route> to={Route::Login}>{"Volver al inicio"}</Link<Route>>
            </section>
        },
    }
}
