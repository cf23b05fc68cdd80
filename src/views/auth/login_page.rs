use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_wallet;
use crate::views::auth::LoginButton;
use crate::views::routes::Route;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let store = use_wallet();
    let account_id = store.signed_account_id();

    html! {
        <section class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"Project Factory"}</h1>
                    <p>{"Conecta tu wallet NEAR para crear y gestionar proyectos"}</p>
                </div>
                if account_id.is_empty() {
                    <LoginButton />
                } else {
                    <>
                        <p class="login-account">{ format!("Conectado como {}", account_id) }</p>
                        <Link<Route> to={Route::CreateProject} classes={classes!("btn-primary")}>
                            {"Crear proyecto"}
                        </Link<Route>>
                    </>
                }
            </div>
        </section>
    }
}
