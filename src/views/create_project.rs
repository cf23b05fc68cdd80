// ============================================================================
// CREATE PROJECT - Formulario contra el project-factory
// ============================================================================
// El factory crea la subcuenta `{project_id}.{factory}`, le despliega el
// contrato del proyecto y cobra el storage del depósito adjunto.
// ============================================================================

use serde_json::{json, Value};
use thiserror::Error;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONFIG;
use crate::error::WalletError;
use crate::hooks::use_wallet;
use crate::models::{CallRequest, ViewRequest};
use crate::utils::constants::CREATE_PROJECT_GAS;
use crate::utils::format::{format_near_amount, parse_near_amount};
use crate::views::auth::LoginButton;

const MAX_ACCOUNT_ID_LEN: usize = 64;
const MIN_PROJECT_ID_LEN: usize = 2;
const DEFAULT_DEPOSIT: &str = "5";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectFormError {
    #[error("El id del proyecto debe tener al menos 2 caracteres")]
    TooShort,
    #[error("La cuenta {0} supera los 64 caracteres")]
    TooLong(String),
    #[error("Carácter no permitido: '{0}' (solo minúsculas, dígitos, '-' y '_')")]
    InvalidCharacter(char),
    #[error("'-' y '_' no pueden ir al principio, al final ni seguidos")]
    MisplacedSeparator,
    #[error(transparent)]
    Amount(#[from] WalletError),
}

/// Valida `project_id` como segmento de subcuenta de `factory_id`
pub fn validate_project_id(project_id: &str, factory_id: &str) -> Result<(), ProjectFormError> {
    if project_id.len() < MIN_PROJECT_ID_LEN {
        return Err(ProjectFormError::TooShort);
    }
    if let Some(c) = project_id
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-' || *c == '_'))
    {
        return Err(ProjectFormError::InvalidCharacter(c));
    }

    let is_separator = |c: char| c == '-' || c == '_';
    let starts_or_ends = project_id.starts_with(is_separator) || project_id.ends_with(is_separator);
    let doubled = project_id
        .chars()
        .zip(project_id.chars().skip(1))
        .any(|(a, b)| is_separator(a) && is_separator(b));
    if starts_or_ends || doubled {
        return Err(ProjectFormError::MisplacedSeparator);
    }

    let account_id = project_account_id(project_id, factory_id);
    if account_id.len() > MAX_ACCOUNT_ID_LEN {
        return Err(ProjectFormError::TooLong(account_id));
    }
    Ok(())
}

pub fn project_account_id(project_id: &str, factory_id: &str) -> String {
    format!("{}.{}", project_id, factory_id)
}

/// "1,000.50" -> "1,000.5 NEAR"; None si el importe no es válido
pub fn deposit_preview(deposit: &str) -> Option<String> {
    let yocto = parse_near_amount(deposit).ok()?;
    format_near_amount(&yocto, 5).ok().map(|near| format!("{} NEAR", near))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectForm {
    pub project_id: String,
    pub description: String,
    /// NEAR, decimal
    pub deposit: String,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            description: String::new(),
            deposit: DEFAULT_DEPOSIT.to_string(),
        }
    }
}

impl ProjectForm {
    /// Llamada a `create_factory_subaccount_and_deploy` del factory
    pub fn to_call_request(&self, factory_id: &str) -> Result<CallRequest, ProjectFormError> {
        let project_id = self.project_id.trim();
        validate_project_id(project_id, factory_id)?;
        parse_near_amount(&self.deposit)?;

        Ok(CallRequest::new(factory_id, "create_factory_subaccount_and_deploy")
            .with_args(json!({
                "project_id": project_id,
                "_description": self.description.trim(),
                "public_key": Value::Null,
            }))
            .with_gas(CREATE_PROJECT_GAS)
            .with_deposit(self.deposit.trim()))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Submitting,
    Created { account_id: String, result: Option<String> },
    Failed(String),
}

#[function_component(CreateProjectPage)]
pub fn create_project_page() -> Html {
    let store = use_wallet();
    let factory_id = CONFIG.contract_id.clone();
    let form = use_state(ProjectForm::default);
    let status = use_state(|| SubmitStatus::Idle);
    let projects = use_state(|| None::<Vec<String>>);
    let refresh = use_state(|| 0u32);
    let methods_ready = store.methods().is_some();

    // Lista de proyectos: al tener métodos y después de cada creación
    {
        let store = store.clone();
        let projects = projects.clone();
        let factory_id = factory_id.clone();
        use_effect_with((methods_ready, *refresh), move |(ready, _)| {
            if *ready {
                wasm_bindgen_futures::spawn_local(async move {
                    let request = ViewRequest::new(factory_id, "view_contracts");
                    let listed = store
                        .view_method(request)
                        .await
                        .and_then(|value| serde_json::from_value::<Vec<String>>(value).map_err(WalletError::from));
                    match listed {
                        Ok(list) => {
                            log::info!("📋 [PROJECTS] {} proyectos", list.len());
                            projects.set(Some(list));
                        }
                        Err(e) => store.report_error(&e),
                    }
                });
            }
            || ()
        });
    }

    let on_project_id = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.project_id = input.value();
            form.set(next);
        })
    };

    let on_description = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };

    let on_deposit = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.deposit = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let store = store.clone();
        let form = form.clone();
        let status = status.clone();
        let refresh = refresh.clone();
        let factory_id = factory_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match form.to_call_request(&factory_id) {
                Ok(request) => request,
                Err(e) => {
                    status.set(SubmitStatus::Failed(e.to_string()));
                    return;
                }
            };
            let account_id = project_account_id(form.project_id.trim(), &factory_id);
            status.set(SubmitStatus::Submitting);

            let store = store.clone();
            let status = status.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match store.call_method(request).await {
                    Ok(result) => {
                        log::info!("✅ [PROJECTS] Proyecto creado: {}", account_id);
                        status.set(SubmitStatus::Created {
                            account_id,
                            result: result.map(|value| value.to_string()),
                        });
                        refresh.set(*refresh + 1);
                    }
                    Err(e) => {
                        store.report_error(&e);
                        status.set(SubmitStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    if !store.is_signed_in() {
        return html! {
            <section class="create-project">
                <h1>{"Crear proyecto"}</h1>
                <p>{"Inicia sesión con tu wallet NEAR para crear un proyecto."}</p>
                <LoginButton />
            </section>
        };
    }

    let submitting = *status == SubmitStatus::Submitting;
    let preview = deposit_preview(&form.deposit);

    html! {
        <section class="create-project">
            <h1>{"Crear proyecto"}</h1>
            <form class="project-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="project-id">{"Id del proyecto"}</label>
                    <input
                        type="text"
                        id="project-id"
                        placeholder="mi-proyecto"
                        value={form.project_id.clone()}
                        oninput={on_project_id}
                        required=true
                    />
                    <small class="hint">
                        { project_account_id(if form.project_id.is_empty() { "…" } else { form.project_id.trim() }, &factory_id) }
                    </small>
                </div>

                <div class="form-group">
                    <label for="project-description">{"Descripción"}</label>
                    <textarea
                        id="project-description"
                        value={form.description.clone()}
                        oninput={on_description}
                    />
                </div>

                <div class="form-group">
                    <label for="project-deposit">{"Depósito (NEAR)"}</label>
                    <input
                        type="text"
                        id="project-deposit"
                        inputmode="decimal"
                        value={form.deposit.clone()}
                        oninput={on_deposit}
                    />
                    <small class="hint">
                        { preview.unwrap_or_else(|| "Importe no válido".to_string()) }
                    </small>
                </div>

                <button type="submit" class="btn-primary" disabled={submitting}>
                    { if submitting { "Enviando…" } else { "Crear proyecto" } }
                </button>
            </form>

            {
                match &*status {
                    SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                    SubmitStatus::Created { account_id, result } => html! {
                        <p class="status-ok">
                            { format!("Proyecto {} creado", account_id) }
                            if let Some(result) = result {
                                <code>{ result.clone() }</code>
                            }
                        </p>
                    },
                    SubmitStatus::Failed(message) => html! {
                        <p class="status-error">{ message.clone() }</p>
                    },
                }
            }

            <section class="project-list">
                <h2>{"Proyectos existentes"}</h2>
                {
                    match &*projects {
                        None => html! { <p class="hint">{"Cargando…"}</p> },
                        Some(list) if list.is_empty() => html! { <p class="hint">{"Todavía no hay proyectos"}</p> },
                        Some(list) => html! {
                            <ul>
                                { for list.iter().map(|account| html! { <li key={account.clone()}>{ account.clone() }</li> }) }
                            </ul>
                        },
                    }
                }
            </section>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACTORY: &str = "factory.testnet";

    #[test]
    fn valid_project_ids_pass() {
        for id in ["ab", "my-project", "proj_2024", "a1-b2_c3"] {
            assert_eq!(validate_project_id(id, FACTORY), Ok(()), "{id}");
        }
    }

    #[test]
    fn invalid_project_ids_are_rejected() {
        assert_eq!(validate_project_id("a", FACTORY), Err(ProjectFormError::TooShort));
        assert_eq!(
            validate_project_id("My-Project", FACTORY),
            Err(ProjectFormError::InvalidCharacter('M'))
        );
        assert_eq!(
            validate_project_id("a.b", FACTORY),
            Err(ProjectFormError::InvalidCharacter('.'))
        );
        for id in ["-ab", "ab_", "a--b", "a-_b"] {
            assert_eq!(
                validate_project_id(id, FACTORY),
                Err(ProjectFormError::MisplacedSeparator),
                "{id}"
            );
        }
        let long = "a".repeat(60);
        assert!(matches!(
            validate_project_id(&long, FACTORY),
            Err(ProjectFormError::TooLong(_))
        ));
    }

    #[test]
    fn form_builds_factory_call() {
        let form = ProjectForm {
            project_id: " my-project ".into(),
            description: "Subasta de prueba".into(),
            deposit: "2.5".into(),
        };
        let request = form.to_call_request(FACTORY).unwrap();
        assert_eq!(request.contract_id, FACTORY);
        assert_eq!(request.method, "create_factory_subaccount_and_deploy");
        assert_eq!(request.gas, CREATE_PROJECT_GAS);
        assert_eq!(request.deposit, "2.5");
        assert_eq!(
            request.args,
            json!({
                "project_id": "my-project",
                "_description": "Subasta de prueba",
                "public_key": null
            })
        );
    }

    #[test]
    fn form_rejects_bad_deposit() {
        let form = ProjectForm {
            project_id: "my-project".into(),
            deposit: "cinco".into(),
            ..ProjectForm::default()
        };
        assert!(matches!(
            form.to_call_request(FACTORY),
            Err(ProjectFormError::Amount(WalletError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn deposit_preview_normalizes_amounts() {
        assert_eq!(deposit_preview("1,000.50").as_deref(), Some("1,000.5 NEAR"));
        assert_eq!(deposit_preview("5").as_deref(), Some("5 NEAR"));
        assert_eq!(deposit_preview("x"), None);
    }
}
