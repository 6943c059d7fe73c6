//! Same-page link fragment parsing.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Fragment of any link, e.g. `work` for `/index.html#work`.
///
/// An empty fragment (`#` alone) yields `None`.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.split_once('#')
        .map(|(_, fragment)| fragment)
        .filter(|fragment| !fragment.is_empty())
}

/// Target id of an in-page anchor. Only hrefs starting with `#` qualify.
pub fn in_page_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}
