// ============================================================================
// USE WALLET - Acceso al SessionStore desde componentes Yew
// ============================================================================
// El store se comparte por Context (lo provee App); cada componente que lo
// usa se re-renderiza con cada notificación del store.
// ============================================================================

use yew::prelude::*;

use crate::config::WalletConfig;
use crate::state::{SessionInitializer, SessionStore};

/// Store de sesión del contexto, suscrito al componente actual
#[hook]
pub fn use_wallet() -> SessionStore {
    let store = use_context::<SessionStore>().expect("SessionStore must be provided by App");
    let update = use_force_update();

    use_effect_with(store.clone(), move |store| {
        let subscription = store.subscribe(move || update.force_update());
        move || drop(subscription)
    });

    store
}

/// Ejecuta el inicializador de sesión una vez por montaje (o si cambia la red)
#[hook]
pub fn use_init_wallet(store: SessionStore, config: WalletConfig) {
    use_effect_with(config, move |config| {
        let initializer = SessionInitializer::new(config.clone());
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = initializer.run(&store).await {
                store.report_error(&e);
            }
        });
        || ()
    });
}
