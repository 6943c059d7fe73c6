use super::*;

#[test]
fn new_lightbox_is_closed_and_empty() {
    let lightbox = LightboxState::new();
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.image_src(), "");
    assert_eq!(lightbox.body_overflow(), "");
}

#[test]
fn showing_image_uses_alt_as_caption() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/photos/sunset.jpg", Some("Sunset"));
    assert!(lightbox.is_open());
    assert_eq!(lightbox.image_src(), "/photos/sunset.jpg");
    assert_eq!(lightbox.caption(), "Sunset");
    assert_eq!(lightbox.body_overflow(), "hidden");
}

#[test]
fn image_without_alt_has_empty_caption() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/a.jpg", Some("Old caption"));
    lightbox.show("/b.jpg", None);
    assert_eq!(lightbox.caption(), "");
}

#[test]
fn showing_while_open_replaces_content() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/a.jpg", Some("A"));
    lightbox.show("/b.jpg", Some("B"));
    assert!(lightbox.is_open());
    assert_eq!(lightbox.image_src(), "/b.jpg");
    assert_eq!(lightbox.caption(), "B");
}

// =============================================================
// Closing
// =============================================================

#[test]
fn every_close_trigger_restores_scroll() {
    for trigger in [CloseTrigger::Backdrop, CloseTrigger::CloseButton, CloseTrigger::Escape] {
        let mut lightbox = LightboxState::new();
        lightbox.show("/a.jpg", None);
        assert!(lightbox.close(trigger));
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.body_overflow(), "");
    }
}

#[test]
fn escape_while_closed_is_a_noop() {
    let mut lightbox = LightboxState::new();
    assert!(!lightbox.handle_key("Escape"));
    assert_eq!(lightbox, LightboxState::new());
}

#[test]
fn escape_closes_open_lightbox() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/a.jpg", Some("A"));
    assert!(lightbox.handle_key("Escape"));
    assert!(!lightbox.is_open());
}

#[test]
fn other_keys_leave_lightbox_open() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/a.jpg", Some("A"));
    assert!(!lightbox.handle_key("Enter"));
    assert!(!lightbox.handle_key("escape"));
    assert!(lightbox.is_open());
}

#[test]
fn closing_twice_reports_second_as_noop() {
    let mut lightbox = LightboxState::new();
    lightbox.show("/a.jpg", None);
    assert!(lightbox.close(CloseTrigger::Backdrop));
    assert!(!lightbox.close(CloseTrigger::CloseButton));
}
