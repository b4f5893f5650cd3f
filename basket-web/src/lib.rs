//! Browser front end for the checkout basket.
#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod components;
pub mod dom;
pub mod error;
pub mod host;
pub mod http;
pub mod i18n;
pub mod mount;
pub mod nav_badge;
pub mod stripe;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Err(err) = mount::mount_all() {
        log::error!("Failed to mount basket: {err}");
    }
}
