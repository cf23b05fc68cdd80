use project_factory_pwa::views::App;
use project_factory_pwa::CONFIG;

fn main() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!(
        "🚀 Project Factory starting on {} ({})",
        CONFIG.network_id,
        CONFIG.contract_id
    );

    yew::Renderer::<App>::new().render();
}
