//! Timer chain replaying the hero title one character at a time.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::UiContext;
use crate::config::TypingConfig;
use crate::error::EnhanceError;
use crate::typing::{CARET_BORDER, Typewriter};

/// Clear the hero title and type it back in. No-op without a hero title.
///
/// # Errors
///
/// Does not fail; returns `Result` so [`super::run`] treats every
/// component alike.
#[allow(clippy::unnecessary_wraps)]
pub fn init(ctx: &UiContext, config: &TypingConfig) -> Result<(), EnhanceError> {
    let Some(title) = ctx.query(&config.target).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return Ok(());
    };
    let text = title.text_content().unwrap_or_default();
    title.set_text_content(Some(""));
    let _ = title.style().set_property("border-right", CARET_BORDER);

    schedule(title, Typewriter::new(&text), config.start_delay_ms, config.char_delay_ms);
    Ok(())
}

fn schedule(title: HtmlElement, mut writer: Typewriter, delay_ms: u32, char_delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        match writer.step() {
            Some(visible) => {
                title.set_text_content(Some(&visible));
                schedule(title, writer, char_delay_ms, char_delay_ms);
            }
            None => {
                let _ = title.style().set_property("border-right", "none");
            }
        }
    })
    .forget();
}
