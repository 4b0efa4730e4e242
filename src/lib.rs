//! # readwise-web
//!
//! Leptos + WASM frontend for the ReadWise article summarizer.
//!
//! Users sign in with Google, paste article text, read the generated summary,
//! and browse their summary history. Summarization and storage happen in an
//! external backend reached over REST (`net::api`); this crate owns the
//! session model, the route guard, and the request orchestration around it.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// Browser entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match config::ClientConfig::from_build_env() {
        Ok(config) => {
            let _ = console_log::init_with_level(config.log_level);
            config
        }
        Err(e) => {
            let _ = console_log::init_with_level(config::DEFAULT_LOG_LEVEL);
            log::error!("{e}; falling back to default configuration");
            config::ClientConfig::default()
        }
    };
    log::info!("readwise client starting (api base {})", config.api_base_url);

    leptos::mount::mount_to_body(move || {
        leptos::view! { <app::App config=config.clone()/> }
    });
}
