//! Scroll listener driving nav highlighting and the progress bar.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use super::{UiContext, listen};
use crate::config::NavConfig;
use crate::error::EnhanceError;
use crate::nav::{ACTIVE_CLASS, NavigationTracker, PROGRESS_CLASS, ScrollMetrics};

struct NavBinding {
    ctx: UiContext,
    tracker: NavigationTracker,
    sections: Vec<HtmlElement>,
    links: Vec<Element>,
    progress: HtmlElement,
}

impl NavBinding {
    fn update(&self) {
        let metrics = ScrollMetrics {
            scroll_top: self.ctx.scroll_y(),
            scroll_height: self.ctx.scroll_height(),
            viewport_height: self.ctx.viewport_height(),
        };
        let tops = self
            .sections
            .iter()
            .map(|s| f64::from(s.offset_top()))
            .collect::<Vec<_>>();
        let frame = self.tracker.frame(metrics, &tops);

        for link in &self.links {
            let _ = link.class_list().remove_1(ACTIVE_CLASS);
        }
        for &i in &frame.active_links {
            if let Some(link) = self.links.get(i) {
                let _ = link.class_list().add_1(ACTIVE_CLASS);
            }
        }

        let _ = self
            .progress
            .style()
            .set_property("width", &frame.progress_width());
    }
}

/// Track sections on scroll. No-op when the page has no identified sections.
///
/// # Errors
///
/// Returns [`EnhanceError::Js`] if the progress bar or listener cannot be
/// attached.
pub fn init(ctx: &UiContext, config: &NavConfig) -> Result<(), EnhanceError> {
    let sections = ctx
        .query_all(&config.sections)
        .into_iter()
        .filter(|s| !s.id().is_empty())
        .filter_map(|s| s.dyn_into::<HtmlElement>().ok())
        .collect::<Vec<_>>();
    let links = ctx.query_all(&config.links);
    let hrefs = links
        .iter()
        .map(|l| l.get_attribute("href").unwrap_or_default())
        .collect();

    let ids = sections.iter().map(|s| s.id()).collect();
    let Some(tracker) = NavigationTracker::new(ids, hrefs, config) else {
        return Ok(());
    };

    let progress = ctx.create("div", PROGRESS_CLASS)?;
    ctx.body.append_child(&progress)?;

    let binding = Rc::new(NavBinding { ctx: ctx.clone(), tracker, sections, links, progress });
    binding.update();

    let for_scroll = Rc::clone(&binding);
    listen(&ctx.window, "scroll", move |_| for_scroll.update())?;

    log::debug!("nav tracking sections {:?}", binding.tracker.section_ids());
    Ok(())
}
