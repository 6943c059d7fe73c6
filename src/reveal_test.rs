use super::*;

fn controller() -> RevealController<&'static str> {
    RevealController::new(&RevealConfig::default())
}

// =============================================================
// Registration
// =============================================================

#[test]
fn register_assigns_staggered_delays_in_order() {
    let mut reveal = controller();
    let bindings = reveal.register(["intro", "post", "quote"]);
    let delays = bindings.iter().map(RevealBinding::transition_delay).collect::<Vec<_>>();
    assert_eq!(delays, ["0ms", "50ms", "100ms"]);
    assert_eq!(bindings[2].index, 2);
}

#[test]
fn register_nothing_is_a_noop() {
    let mut reveal = controller();
    assert!(reveal.register(Vec::<&str>::new()).is_empty());
    assert_eq!(reveal.watched_len(), 0);
}

#[test]
fn later_registration_continues_the_stagger() {
    let mut reveal = controller();
    reveal.register(["a", "b"]);
    let bindings = reveal.register(["c"]);
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].delay_ms, 100);
}

#[test]
fn duplicate_registration_keeps_first_binding() {
    let mut reveal = controller();
    reveal.register(["a"]);
    assert!(reveal.register(["a"]).is_empty());
    assert_eq!(reveal.watched_len(), 1);
}

// =============================================================
// Visibility
// =============================================================

#[test]
fn element_reveals_once_past_threshold() {
    let mut reveal = controller();
    reveal.register(["a", "b"]);

    let binding = reveal.on_visibility(&"a", true, 0.4, false).unwrap();
    assert_eq!(binding.element, "a");
    assert!(!reveal.is_watching(&"a"));
    assert_eq!(reveal.watched_len(), 1);

    assert!(reveal.on_visibility(&"a", true, 1.0, false).is_none());
    assert_eq!(reveal.revealed_count(), 1);
}

#[test]
fn element_below_threshold_stays_watched() {
    let mut reveal = controller();
    reveal.register(["a"]);
    assert!(reveal.on_visibility(&"a", true, 0.05, false).is_none());
    assert!(reveal.is_watching(&"a"));
    assert!(reveal.on_visibility(&"a", true, 0.1, false).is_some());
}

#[test]
fn non_intersecting_report_never_reveals() {
    let mut reveal = controller();
    reveal.register(["a"]);
    assert!(reveal.on_visibility(&"a", false, 0.9, false).is_none());
    assert!(reveal.is_watching(&"a"));
}

#[test]
fn unknown_element_report_is_ignored() {
    let mut reveal = controller();
    reveal.register(["a"]);
    assert!(reveal.on_visibility(&"zzz", true, 1.0, false).is_none());
    assert_eq!(reveal.revealed_count(), 0);
}

#[test]
fn watched_set_shrinks_to_empty() {
    let mut reveal = controller();
    reveal.register(["a", "b", "c"]);
    for id in ["c", "a", "b"] {
        assert!(reveal.on_visibility(&id, true, 0.5, false).is_some());
    }
    assert_eq!(reveal.watched_len(), 0);
    assert_eq!(reveal.revealed_count(), 3);
}

#[test]
fn custom_threshold_is_honored() {
    let config = RevealConfig { threshold: 0.5, ..RevealConfig::default() };
    let mut reveal = RevealController::new(&config);
    reveal.register(["a"]);
    assert!(reveal.on_visibility(&"a", true, 0.3, false).is_none());
    assert!(reveal.on_visibility(&"a", true, 0.5, false).is_some());
}

#[test]
fn element_taller_than_viewport_reveals_on_entry() {
    // 10000px element on a 750px effective viewport: the ratio tops out at 0.075.
    let mut reveal = controller();
    reveal.register(["tall"]);
    let exceeds = reveal.exceeds_root(10_000.0, 750.0);
    assert!(exceeds);
    let binding = reveal.on_visibility(&"tall", true, 0.01, exceeds).unwrap();
    assert_eq!(binding.element, "tall");
    assert!(!reveal.is_watching(&"tall"));
}

#[test]
fn tall_element_still_requires_intersection() {
    let mut reveal = controller();
    reveal.register(["tall"]);
    assert!(reveal.on_visibility(&"tall", false, 0.0, true).is_none());
    assert!(reveal.is_watching(&"tall"));
}

#[test]
fn exceeds_root_only_for_unreachable_threshold() {
    let reveal = controller();
    assert!(!reveal.exceeds_root(600.0, 750.0));
    assert!(!reveal.exceeds_root(7_500.0, 750.0));
    assert!(reveal.exceeds_root(7_501.0, 750.0));
    assert!(!reveal.exceeds_root(10_000.0, 0.0));
}
