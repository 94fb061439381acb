//! Browser console logging setup.
//!
//! Failures users might report (lookup errors, sign-out errors) go through
//! `leptos::logging`; `log::debug!` carries watcher diagnostics and is routed
//! to the console by `console_log` once [`init`] runs.

/// Install the panic hook and console logger. Safe to call more than once.
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
}

