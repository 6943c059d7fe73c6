//! web-sys bindings that wire the component models into a live page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every binding receives the same [`UiContext`] instead of reaching for
//! `web_sys::window()` itself, and only applies decisions made by the pure
//! models in the crate root. Listeners and observers live for the whole page,
//! so their closures are leaked with `forget`.

pub mod anchor;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod typing;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, EventTarget, HtmlElement, Window};

use crate::config::{CONFIG_ELEMENT_ID, EnhanceConfig};
use crate::error::EnhanceError;

/// Class added to `<body>` once the enhancements are wired.
pub const LOADED_CLASS: &str = "loaded";

/// Browser handles shared by every component.
#[derive(Clone, Debug)]
pub struct UiContext {
    pub window: Window,
    pub document: Document,
    /// The `<html>` element.
    pub root: Element,
    pub body: HtmlElement,
}

impl UiContext {
    /// Capture the current window's handles.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::MissingNode`] outside a document with a body.
    pub fn from_window() -> Result<Self, EnhanceError> {
        let window = web_sys::window().ok_or_else(|| EnhanceError::MissingNode("window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| EnhanceError::MissingNode("document".into()))?;
        let root = document
            .document_element()
            .ok_or_else(|| EnhanceError::MissingNode("html".into()))?;
        let body = document
            .body()
            .ok_or_else(|| EnhanceError::MissingNode("body".into()))?;
        Ok(Self { window, document, root, body })
    }

    /// Read the inline configuration block, if the page has one.
    pub fn config(&self) -> EnhanceConfig {
        let raw = self
            .document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        EnhanceConfig::from_optional_json(raw.as_deref())
    }

    pub fn query(&self, selector: &str) -> Option<Element> {
        self.document.query_selector(selector).ok().flatten()
    }

    /// All elements matching `selector`, in document order. An invalid
    /// selector matches nothing.
    pub fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            log::warn!("invalid selector {selector:?}");
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    /// Create an element with a class name.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Js`] if the document refuses the tag.
    pub fn create(&self, tag: &str, class: &str) -> Result<HtmlElement, EnhanceError> {
        let el = self.document.create_element(tag)?;
        el.set_class_name(class);
        el.dyn_into::<HtmlElement>()
            .map_err(|_| EnhanceError::Js(format!("<{tag}> is not an HTMLElement")))
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }

    pub fn scroll_height(&self) -> f64 {
        f64::from(self.root.scroll_height())
    }

    /// Set or clear the inline `overflow` of `<body>`.
    pub fn set_body_overflow(&self, value: &str) {
        let style = self.body.style();
        let _ = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
    }
}

/// Attach an event listener for the lifetime of the page.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if the target rejects the listener.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), EnhanceError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Run every component in order. A failing component is logged and skipped.
pub fn run(ctx: &UiContext) {
    let config = ctx.config();
    let _ = ctx.body.class_list().add_1(LOADED_CLASS);

    report("reveal", reveal::init(ctx, &config.reveal));
    report("theme", theme::init(ctx, &config.theme));
    report("lightbox", lightbox::init(ctx, &config.lightbox));
    report("nav", nav::init(ctx, &config.nav));
    report("anchors", anchor::init(ctx, &config.anchors));
    if config.typing.enabled {
        report("typing", typing::init(ctx, &config.typing));
    }
}

fn report(component: &str, result: Result<(), EnhanceError>) {
    if let Err(e) = result {
        log::warn!("{component} disabled: {e}");
    }
}
