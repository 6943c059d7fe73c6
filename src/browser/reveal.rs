//! IntersectionObserver binding for [`crate::reveal`].

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::UiContext;
use crate::config::RevealConfig;
use crate::error::EnhanceError;
use crate::reveal::{READY_CLASS, REVEALED_CLASS, RevealController};

/// Stagger, mark ready, and observe every content element on the page.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if the observer cannot be constructed.
pub fn init(ctx: &UiContext, config: &RevealConfig) -> Result<(), EnhanceError> {
    let elements = ctx.query_all(&config.selector());
    if elements.is_empty() {
        return Ok(());
    }

    let controller = Rc::new(RefCell::new(RevealController::<Element>::new(config)));

    // Used when the browser withholds rootBounds (cross-origin frames).
    let fallback_root_height = ctx.viewport_height() - f64::from(config.bottom_margin_px);
    let for_cb = Rc::clone(&controller);
    let cb = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let root_height = entry.root_bounds().map_or(fallback_root_height, |r| r.height());
            let mut controller = for_cb.borrow_mut();
            let exceeds_root = controller.exceeds_root(entry.bounding_client_rect().height(), root_height);
            let revealed =
                controller.on_visibility(&target, entry.is_intersecting(), entry.intersection_ratio(), exceeds_root);
            if let Some(binding) = revealed {
                let _ = target.class_list().add_1(REVEALED_CLASS);
                observer.unobserve(&target);
                log::debug!(
                    "revealed element #{} ({} revealed, {} waiting)",
                    binding.index,
                    controller.revealed_count(),
                    controller.watched_len()
                );
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    // The zero threshold reports entry for elements too tall to ever reach
    // the configured ratio.
    let thresholds = Array::of2(&JsValue::from_f64(0.0), &JsValue::from_f64(config.threshold));
    options.set_threshold(&thresholds);
    options.set_root_margin(&config.root_margin());
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();

    let mut controller = controller.borrow_mut();
    let bindings = controller.register(elements);
    for binding in bindings {
        if let Some(html) = binding.element.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("transition-delay", &binding.transition_delay());
        }
        let _ = binding.element.class_list().add_1(READY_CLASS);
        observer.observe(&binding.element);
    }
    log::debug!("reveal watching {} elements", bindings.len());
    Ok(())
}
