//! Scroll-driven navigation highlighting and reading progress.
//!
//! On every scroll the tracker picks the last section whose top, minus a
//! fixed lookahead, has been scrolled past. Links whose fragment equals that
//! section id are marked active; all others are cleared. The progress bar is
//! computed independently from the same scroll metrics.
//!
//! Several links pointing at the same section are all highlighted together.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::anchor::fragment_of;
use crate::config::NavConfig;

/// Class marking the nav link of the section being read.
pub const ACTIVE_CLASS: &str = "active";
/// Class of the progress bar appended to `<body>`.
pub const PROGRESS_CLASS: &str = "scroll-progress";

/// Scroll position and document extent at one scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Reading progress in `[0, 100]`.
///
/// A document that cannot scroll reports 0.
pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let max = metrics.scroll_height - metrics.viewport_height;
    if max <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_top / max * 100.0).clamp(0.0, 100.0)
}

/// Id of the nearest section scrolled past, given `(id, top)` in document order.
pub fn active_section<'a>(
    sections: impl IntoIterator<Item = (&'a str, f64)>,
    scroll_top: f64,
    lookahead: f64,
) -> Option<&'a str> {
    sections
        .into_iter()
        .filter(|(_, top)| scroll_top >= top - lookahead)
        .last()
        .map(|(id, _)| id)
}

/// Whether a nav link points at `section_id`. Matching is on the exact
/// fragment, so `#work` does not match a `workshop` section.
pub fn link_targets(href: &str, section_id: &str) -> bool {
    fragment_of(href) == Some(section_id)
}

/// Highlight decisions for one scroll event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavFrame {
    pub active_section: Option<String>,
    /// Indices into the tracker's links that should carry [`ACTIVE_CLASS`].
    pub active_links: Vec<usize>,
    pub progress_percent: f64,
}

impl NavFrame {
    /// CSS width for the progress bar.
    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

#[derive(Clone, Debug)]
pub struct NavigationTracker {
    section_ids: Vec<String>,
    link_hrefs: Vec<String>,
    lookahead: f64,
}

impl NavigationTracker {
    /// Build a tracker, or `None` when the page has no identified sections.
    pub fn new(section_ids: Vec<String>, link_hrefs: Vec<String>, config: &NavConfig) -> Option<Self> {
        if section_ids.is_empty() {
            return None;
        }
        Some(Self { section_ids, link_hrefs, lookahead: config.lookahead_px })
    }

    pub fn section_ids(&self) -> &[String] {
        &self.section_ids
    }

    /// Compute the highlight and progress for the current scroll state.
    ///
    /// `section_tops` are the current offsets of the tracked sections, in
    /// the same order as [`Self::section_ids`]; layout can move them between
    /// events so they are read fresh each time.
    pub fn frame(&self, metrics: ScrollMetrics, section_tops: &[f64]) -> NavFrame {
        let sections = self
            .section_ids
            .iter()
            .map(String::as_str)
            .zip(section_tops.iter().copied());
        let active = active_section(sections, metrics.scroll_top, self.lookahead);

        let active_links = active.map_or_else(Vec::new, |id| {
            self.link_hrefs
                .iter()
                .enumerate()
                .filter(|(_, href)| link_targets(href, id))
                .map(|(i, _)| i)
                .collect()
        });

        NavFrame {
            active_section: active.map(str::to_owned),
            active_links,
            progress_percent: scroll_progress(metrics),
        }
    }
}
