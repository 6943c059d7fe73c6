//! Full-screen image viewer state.
//!
//! One overlay exists per page. Showing a new image while the overlay is
//! open replaces its content; the overlay itself is reused. While open, the
//! page body does not scroll.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// Class toggled on the overlay while it is showing an image.
pub const ACTIVE_CLASS: &str = "active";

/// What closed the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    Backdrop,
    CloseButton,
    Escape,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: bool,
    image_src: String,
    caption: String,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `src` with `alt` as its caption. A missing alt shows no caption.
    pub fn show(&mut self, src: &str, alt: Option<&str>) {
        src.clone_into(&mut self.image_src);
        alt.unwrap_or_default().clone_into(&mut self.caption);
        self.open = true;
    }

    /// Close the overlay. Returns `false` when it was already closed.
    pub fn close(&mut self, trigger: CloseTrigger) -> bool {
        if !self.open {
            return false;
        }
        log::debug!("lightbox closed by {trigger:?}");
        self.open = false;
        true
    }

    /// Handle a document keydown. Only Escape on an open overlay does anything.
    pub fn handle_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close(CloseTrigger::Escape)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Inline `overflow` for `<body>`: scroll is suppressed while open.
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}
