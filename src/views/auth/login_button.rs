use yew::prelude::*;

use crate::hooks::use_wallet;

/// Dos estados: sin sesión ("Login") o con sesión ("Logout {cuenta}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    SignedOut,
    SignedIn(String),
}

impl LoginState {
    pub fn from_account_id(account_id: &str) -> Self {
        if account_id.is_empty() {
            LoginState::SignedOut
        } else {
            LoginState::SignedIn(account_id.to_string())
        }
    }

    pub fn label(&self) -> String {
        match self {
            LoginState::SignedOut => "Login".to_string(),
            LoginState::SignedIn(account_id) => format!("Logout {}", account_id),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, LoginState::SignedIn(_))
    }
}

#[function_component(LoginButton)]
pub fn login_button() -> Html {
    let store = use_wallet();
    let state = LoginState::from_account_id(&store.signed_account_id());

    let onclick = {
        let store = store.clone();
        let signed_in = state.is_signed_in();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = if signed_in {
                    store.log_out().await
                } else {
                    store.log_in().await
                };
                if let Err(e) = result {
                    store.report_error(&e);
                }
            });
        })
    };

    html! {
        <button class="btn-transparent btn-login" onclick={onclick}>
            { state.label() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_account_renders_login() {
        let state = LoginState::from_account_id("");
        assert_eq!(state, LoginState::SignedOut);
        assert_eq!(state.label(), "Login");
        assert!(!state.is_signed_in());
    }

    #[test]
    fn signed_account_renders_logout_with_id() {
        let state = LoginState::from_account_id("alice.testnet");
        assert_eq!(state.label(), "Logout alice.testnet");
        assert!(state.is_signed_in());
    }
}
