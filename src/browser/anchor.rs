//! Smooth scrolling for same-page anchor links.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{UiContext, listen};
use crate::anchor::in_page_target;
use crate::config::AnchorConfig;
use crate::error::EnhanceError;

/// Intercept every in-page anchor and scroll to its target smoothly.
///
/// Navigation is suppressed even when the fragment has no matching element.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if a listener cannot be attached.
pub fn init(ctx: &UiContext, config: &AnchorConfig) -> Result<(), EnhanceError> {
    let anchors = ctx.query_all(&config.links);
    for anchor in &anchors {
        let document = ctx.document.clone();
        let link = anchor.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = in_page_target(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    log::debug!("smooth scroll bound to {} anchors", anchors.len());
    Ok(())
}
