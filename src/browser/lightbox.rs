//! Lightbox overlay DOM and its open/close listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement, KeyboardEvent, Node};

use super::{UiContext, listen};
use crate::config::LightboxConfig;
use crate::error::EnhanceError;
use crate::lightbox::{ACTIVE_CLASS, CloseTrigger, LightboxState};

const CLOSE_CLASS: &str = "lightbox-close";

struct Lightbox {
    ctx: UiContext,
    overlay: HtmlElement,
    image: HtmlImageElement,
    caption: HtmlElement,
    state: RefCell<LightboxState>,
}

impl Lightbox {
    fn build(ctx: &UiContext) -> Result<Self, EnhanceError> {
        let overlay = ctx.create("div", "lightbox")?;

        let close = ctx.create("button", CLOSE_CLASS)?;
        close.set_attribute("aria-label", "Close")?;
        close.set_text_content(Some("\u{00d7}"));

        let image = ctx
            .document
            .create_element("img")?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| EnhanceError::Js("<img> is not an HTMLImageElement".into()))?;
        image.set_alt("");

        let caption = ctx.create("div", "lightbox-caption")?;

        overlay.append_child(&close)?;
        overlay.append_child(&image)?;
        overlay.append_child(&caption)?;
        ctx.body.append_child(&overlay)?;

        Ok(Self {
            ctx: ctx.clone(),
            overlay,
            image,
            caption,
            state: RefCell::new(LightboxState::new()),
        })
    }

    fn show(&self, source: &HtmlImageElement) {
        let alt = source.alt();
        self.state
            .borrow_mut()
            .show(&source.src(), Some(alt.as_str()).filter(|a| !a.is_empty()));
        self.sync();
    }

    fn close(&self, trigger: CloseTrigger) {
        if self.state.borrow_mut().close(trigger) {
            self.sync();
        }
    }

    fn handle_key(&self, key: &str) {
        if self.state.borrow_mut().handle_key(key) {
            self.sync();
        }
    }

    /// Classify a click inside the overlay as a close trigger, if it is one.
    fn close_trigger(&self, target: &Element) -> Option<CloseTrigger> {
        let overlay: &Node = &self.overlay;
        if target.is_same_node(Some(overlay)) {
            Some(CloseTrigger::Backdrop)
        } else if target.class_list().contains(CLOSE_CLASS) {
            Some(CloseTrigger::CloseButton)
        } else {
            None
        }
    }

    fn sync(&self) {
        let state = self.state.borrow();
        if state.is_open() {
            self.image.set_src(state.image_src());
            self.caption.set_text_content(Some(state.caption()));
            let _ = self.overlay.class_list().add_1(ACTIVE_CLASS);
        } else {
            let _ = self.overlay.class_list().remove_1(ACTIVE_CLASS);
        }
        self.ctx.set_body_overflow(state.body_overflow());
    }
}

/// Build the shared overlay and make every qualifying image open it.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if the overlay cannot be built or a
/// listener cannot be attached.
pub fn init(ctx: &UiContext, config: &LightboxConfig) -> Result<(), EnhanceError> {
    let images = ctx
        .query_all(&config.images)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        .collect::<Vec<_>>();
    if images.is_empty() {
        return Ok(());
    }

    let lightbox = Rc::new(Lightbox::build(ctx)?);

    for img in &images {
        let _ = img.style().set_property("cursor", "zoom-in");
        let lightbox = Rc::clone(&lightbox);
        let source = img.clone();
        listen(img, "click", move |_| lightbox.show(&source))?;
    }

    let for_overlay = Rc::clone(&lightbox);
    listen(&lightbox.overlay, "click", move |event| {
        let trigger = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| for_overlay.close_trigger(&el));
        if let Some(trigger) = trigger {
            for_overlay.close(trigger);
        }
    })?;

    let for_keys = Rc::clone(&lightbox);
    listen(&ctx.document, "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            for_keys.handle_key(&event.key());
        }
    })?;

    log::debug!("lightbox attached to {} images", images.len());
    Ok(())
}
