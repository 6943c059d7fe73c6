//! Page-level configuration for the enhancement components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages may embed a `<script type="application/json" id="site-enhance-config">`
//! block to override selectors and timings. Every field has a default so a
//! partial block only changes what it names, and a page with no block gets
//! the stock behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::EnhanceError;

/// Element id of the inline JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-enhance-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnhanceConfig {
    pub reveal: RevealConfig,
    pub theme: ThemeConfig,
    pub lightbox: LightboxConfig,
    pub nav: NavConfig,
    pub anchors: AnchorConfig,
    pub typing: TypingConfig,
}

impl EnhanceConfig {
    /// Parse a (possibly partial) JSON configuration block.
    ///
    /// # Errors
    ///
    /// Returns [`EnhanceError::Config`] when `raw` is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.reveal.threshold = config.reveal.threshold.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Parse `raw` if present, falling back to defaults on absence or error.
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring site-enhance config: {e}");
                Self::default()
            }
        }
    }
}

/// Scroll reveal selectors and observer tuning.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    /// Fraction of the element that must be visible before it reveals.
    pub threshold: f64,
    /// Pixels trimmed off the bottom of the viewport for intersection checks.
    pub bottom_margin_px: u32,
    /// Transition delay added per element, in DOM order.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: [
                ".research-section",
                ".pub-list li",
                ".post-item",
                ".callout",
                ".finding",
                ".takeaways",
                "blockquote",
                ".photo-grid img",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            threshold: 0.1,
            bottom_margin_px: 50,
            stagger_ms: 50,
        }
    }
}

impl RevealConfig {
    /// Selector list joined for a single `querySelectorAll` call.
    pub fn selector(&self) -> String {
        self.selectors.join(", ")
    }

    /// Observer `rootMargin` string shrinking the viewport from the bottom.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            return "0px".to_owned();
        }
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub toggle_container: String,
    pub rotate_ms: u32,
    pub dark_media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_owned(),
            attribute: "data-theme".to_owned(),
            toggle_container: "nav .container".to_owned(),
            rotate_ms: 300,
            dark_media_query: "(prefers-color-scheme: dark)".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub images: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self { images: ".photo-grid img, .post-content img".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub sections: String,
    pub links: String,
    /// A section becomes active this many pixels before its top is reached.
    pub lookahead_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            sections: "main section[id]".to_owned(),
            links: ".nav-links a".to_owned(),
            lookahead_px: 100.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnchorConfig {
    pub links: String,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self { links: "a[href^=\"#\"]".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub target: String,
    pub start_delay_ms: u32,
    pub char_delay_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            target: ".hero h1".to_owned(),
            start_delay_ms: 500,
            char_delay_ms: 100,
        }
    }
}
