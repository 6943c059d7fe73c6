//! Fire-once scroll reveal bookkeeping.
//!
//! The controller owns the ordered list of elements still waiting to be
//! revealed. Each element gets a staggered transition delay from its DOM
//! index at registration, and leaves the watched set the first time the
//! observer reports it past the visibility threshold. The set only shrinks
//! after registration, so a scroll back up never re-triggers a reveal.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;

/// Class marking an element as waiting for its reveal.
pub const READY_CLASS: &str = "animate-ready";
/// Class marking an element as revealed.
pub const REVEALED_CLASS: &str = "animate-in";

/// Slack allowed below the threshold when the browser rounds the ratio.
const RATIO_TOLERANCE: f64 = 1e-3;

/// One watched element and the delay assigned to it.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealBinding<H> {
    pub element: H,
    pub index: usize,
    pub delay_ms: u32,
}

impl<H> RevealBinding<H> {
    /// CSS `transition-delay` value for this binding.
    pub fn transition_delay(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

/// Watched-set owner for scroll reveals.
///
/// `H` is whatever identifies an element to the host: a `web_sys::Element`
/// in the browser, a plain id in tests.
#[derive(Debug)]
pub struct RevealController<H> {
    threshold: f64,
    stagger_ms: u32,
    watched: Vec<RevealBinding<H>>,
    next_index: usize,
    revealed: usize,
}

impl<H: PartialEq> RevealController<H> {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            threshold: config.threshold.clamp(0.0, 1.0),
            stagger_ms: config.stagger_ms,
            watched: Vec::new(),
            next_index: 0,
            revealed: 0,
        }
    }

    /// Register elements in DOM order and return their new bindings.
    ///
    /// Elements already being watched are skipped so they keep their
    /// original delay.
    pub fn register(&mut self, elements: impl IntoIterator<Item = H>) -> &[RevealBinding<H>] {
        let start = self.watched.len();
        for element in elements {
            if self.is_watching(&element) {
                continue;
            }
            let index = self.next_index;
            self.next_index += 1;
            let delay_ms = u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.stagger_ms);
            self.watched.push(RevealBinding { element, index, delay_ms });
        }
        &self.watched[start..]
    }

    /// Handle an observer report for `element`.
    ///
    /// `exceeds_root` is set when the element is so tall that the threshold
    /// ratio can never be reached inside the (margin-adjusted) viewport,
    /// i.e. `element height * threshold > viewport height`. Such an element
    /// reveals as soon as it intersects at all.
    ///
    /// Returns the binding when this report reveals the element; the binding
    /// is no longer watched afterwards. Reports for unknown or already
    /// revealed elements, and reports below the threshold, return `None`.
    pub fn on_visibility(
        &mut self,
        element: &H,
        intersecting: bool,
        ratio: f64,
        exceeds_root: bool,
    ) -> Option<RevealBinding<H>> {
        if !intersecting || (ratio + RATIO_TOLERANCE < self.threshold && !exceeds_root) {
            return None;
        }
        let pos = self.watched.iter().position(|b| &b.element == element)?;
        self.revealed += 1;
        Some(self.watched.remove(pos))
    }

    /// Whether an element of `element_height` can ever reach the threshold
    /// inside a root of `root_height`.
    pub fn exceeds_root(&self, element_height: f64, root_height: f64) -> bool {
        root_height > 0.0 && element_height * self.threshold > root_height
    }

    pub fn is_watching(&self, element: &H) -> bool {
        self.watched.iter().any(|b| &b.element == element)
    }

    /// Elements still waiting for their reveal.
    pub fn watched_len(&self) -> usize {
        self.watched.len()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }
}
