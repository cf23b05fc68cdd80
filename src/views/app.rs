// ============================================================================
// APP - Shell: store de sesión, inicialización del wallet y router
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_init_wallet;
use crate::state::SessionStore;
use crate::views::routes::{switch, Route};
use crate::views::shared::TopNavBar;

#[function_component(App)]
pub fn app() -> Html {
    // Un único store por montaje, compartido por Context
    let store = use_state(SessionStore::new);
    let store = (*store).clone();

    use_init_wallet(store.clone(), CONFIG.wallet_config());

    html! {
        <ContextProvider<SessionStore> context={store}>
            <BrowserRouter>
                <TopNavBar />
                <main class="app-content">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<SessionStore>>
    }
}
