//! Typewriter replay of the hero title.
//!
//! Optional; enabled through [`crate::config::TypingConfig`]. The browser
//! binding clears the title, then calls [`Typewriter::step`] once per tick
//! until it returns `None`.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Inline border drawn as the caret while typing.
pub const CARET_BORDER: &str = "2px solid var(--accent)";

#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    typed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), typed: 0 }
    }

    /// Add one character and return the visible text, or `None` once the
    /// whole text is shown.
    pub fn step(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.typed += 1;
        Some(self.chars[..self.typed].iter().collect())
    }

    pub fn is_done(&self) -> bool {
        self.typed >= self.chars.len()
    }
}
