//! # site-enhance
//!
//! WASM enhancement layer for a static personal site: scroll reveals, a
//! persisted light/dark toggle, an image lightbox, scroll-aware nav
//! highlighting with a progress bar, and smooth anchor scrolling.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reveal`] | Fire-once watched set with staggered delays |
//! | [`theme`] | Theme resolution, toggle, and the storage/marker seams |
//! | [`lightbox`] | Overlay open/close state |
//! | [`nav`] | Active section, link matching, reading progress |
//! | [`anchor`] | Same-page fragment parsing |
//! | [`typing`] | Optional hero title typewriter |
//! | [`config`] | Inline JSON overrides for selectors and timings |
//! | `browser` | web-sys bindings (feature `hydrate`) |
//!
//! The component modules never touch the DOM, so they build and test
//! natively. The `browser` bindings apply their decisions to the page.

pub mod anchor;
pub mod config;
pub mod error;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod typing;

#[cfg(feature = "hydrate")]
pub mod browser;

pub use error::EnhanceError;

/// WASM entry point. Wires every component once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    let _ = console_log::init_with_level(level);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        if let Err(e) = browser::listen(&document, "DOMContentLoaded", |_| boot()) {
            log::warn!("could not defer startup: {e}");
        }
    } else {
        boot();
    }
}

#[cfg(feature = "hydrate")]
fn boot() {
    match browser::UiContext::from_window() {
        Ok(ctx) => browser::run(&ctx),
        Err(e) => log::warn!("site enhancements disabled: {e}"),
    }
}
