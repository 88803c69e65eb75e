// ============================================================================
// SURPLUS MARKET - FRONTEND YEW (RUST + WASM)
// ============================================================================
// Capas:
// - views: páginas (una por ruta)
// - components: piezas reutilizables y guards
// - viewmodels: preparación de datos y validación de formularios, sin red
// - services: SOLO comunicación API (ApiClient + un módulo por recurso)
// - stores: sesión persistida y estado de carga
// - models: estructuras compartidas con el backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::app::App;
use crate::config::CONFIG;

pub fn run() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Surplus Market ({}) -> {}", CONFIG.environment, CONFIG.api_base_url);

    yew::Renderer::<App>::new().render();
}
