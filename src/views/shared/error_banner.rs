use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::use_wallet;
use crate::utils::constants::ERROR_BANNER_TIMEOUT_MS;

/// Último error de wallet/RPC; se oculta solo o con la ✕
#[function_component(ErrorBanner)]
pub fn error_banner() -> Html {
    let store = use_wallet();
    let error = store.last_error();

    {
        let store = store.clone();
        use_effect_with(error.clone(), move |error| {
            let timeout = error
                .is_some()
                .then(|| Timeout::new(ERROR_BANNER_TIMEOUT_MS, move || store.set_error(None)));
            // Soltar el Timeout lo cancela
            move || drop(timeout)
        });
    }

    let on_dismiss = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.set_error(None))
    };

    match error {
        Some(message) => html! {
            <div class="error-banner" role="alert">
                <span class="error-message">{ message }</span>
                <button class="btn-dismiss" onclick={on_dismiss}>{"✕"}</button>
            </div>
        },
        None => html! {},
    }
}
