//! DocBook patient portal frontend: sign-in, e-mail verified registration
//! and code based password reset.

pub mod api;
mod components;
pub mod config;
pub mod otp;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

/// Installs logging, loads the runtime config, then mounts the app.
pub fn start_app() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!("Starting DocBook frontend");

    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
        router::mount_app();
    });
}
