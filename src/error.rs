//! Error type shared by component initializers.
//!
//! Nothing here ever reaches the visitor: the runner logs each error and
//! moves on to the next component.

/// Error raised while wiring a component into the page.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    /// A DOM node the component cannot work without is absent.
    #[error("missing DOM node: {0}")]
    MissingNode(String),

    /// `localStorage` is disabled or threw on access.
    #[error("durable storage unavailable")]
    StorageUnavailable,

    /// The inline configuration block is not valid JSON for [`crate::config::EnhanceConfig`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
