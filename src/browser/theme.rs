//! Theme toggle control and `localStorage` persistence.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlElement, Storage, Window};

use super::{UiContext, listen};
use crate::config::ThemeConfig;
use crate::error::EnhanceError;
use crate::theme::{PreferenceStore, ROTATING_CLASS, Theme, ThemePreferenceManager, ThemeTarget};

const TOGGLE_ICONS: &str = r#"
<svg class="sun-icon" xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <circle cx="12" cy="12" r="5"></circle>
    <line x1="12" y1="1" x2="12" y2="3"></line>
    <line x1="12" y1="21" x2="12" y2="23"></line>
    <line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>
    <line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>
    <line x1="1" y1="12" x2="3" y2="12"></line>
    <line x1="21" y1="12" x2="23" y2="12"></line>
    <line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>
    <line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>
</svg>
<svg class="moon-icon" xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>
</svg>
"#;

/// `window.localStorage`, looked up on every access so a page that blocks
/// storage still gets a working toggle.
pub struct LocalStore {
    window: Window,
}

impl LocalStore {
    fn storage(&self) -> Option<Storage> {
        self.window.local_storage().ok().flatten()
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        let storage = self.storage().ok_or(EnhanceError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| EnhanceError::StorageUnavailable)
    }
}

/// Theme attribute on the `<html>` element.
pub struct RootMarker {
    root: Element,
    attribute: String,
}

impl ThemeTarget for RootMarker {
    fn marker(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn set_marker(&self, theme: Theme) {
        let _ = self.root.set_attribute(&self.attribute, theme.as_str());
    }
}

fn ambient_prefers_dark(window: &Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

fn build_toggle(ctx: &UiContext) -> Result<HtmlElement, EnhanceError> {
    let toggle = ctx.create("button", "theme-toggle")?;
    toggle.set_attribute("aria-label", "Toggle dark mode")?;
    toggle.set_inner_html(TOGGLE_ICONS);
    Ok(toggle)
}

/// Apply the resolved theme and mount the toggle into the nav bar.
///
/// The theme is applied even when the nav container is absent.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if the toggle cannot be built or mounted.
pub fn init(ctx: &UiContext, config: &ThemeConfig) -> Result<(), EnhanceError> {
    let store = LocalStore { window: ctx.window.clone() };
    let target = RootMarker { root: ctx.root.clone(), attribute: config.attribute.clone() };
    let manager = Rc::new(ThemePreferenceManager::new(store, target, config));
    manager.init(ambient_prefers_dark(&ctx.window, &config.dark_media_query));

    let Some(container) = ctx.query(&config.toggle_container) else {
        return Ok(());
    };
    let toggle = build_toggle(ctx)?;
    container.append_child(&toggle)?;

    let rotate_ms = config.rotate_ms;
    let control = toggle.clone();
    listen(&toggle, "click", move |_| {
        let theme = manager.toggle();
        log::debug!("theme toggled to {theme}");

        let class_list = control.class_list();
        let _ = class_list.add_1(ROTATING_CLASS);
        Timeout::new(rotate_ms, move || {
            let _ = class_list.remove_1(ROTATING_CLASS);
        })
        .forget();
    })
}
