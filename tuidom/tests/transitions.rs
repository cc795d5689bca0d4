use std::time::{Duration, Instant};

use tuidom::animation::{collect_element_ids, AnimationState, PropertyValue, TransitionProperty};
use tuidom::{Color, Easing, Element, Initial, Size, Style, TransitionConfig, Transitions};

const CURVES: [Easing; 6] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
    Easing::CubicBezier(0.42, 0.0, 0.58, 1.0),
    Easing::CubicBezier(0.48, 0.15, 0.25, 0.96),
];

fn linear(ms: u64) -> Transitions {
    Transitions::new().width(TransitionConfig::new(Duration::from_millis(ms), Easing::Linear))
}

fn percent(value: Option<PropertyValue>) -> f32 {
    match value {
        Some(PropertyValue::Percent(p)) => p,
        other => panic!("expected a percent, got {other:?}"),
    }
}

// =============================================================================
// Easing Function Tests
// =============================================================================

#[test]
fn test_easing_linear() {
    assert_eq!(Easing::Linear.apply(0.0), 0.0);
    assert_eq!(Easing::Linear.apply(0.5), 0.5);
    assert_eq!(Easing::Linear.apply(1.0), 1.0);
}

#[test]
fn test_easing_quadratic_curves() {
    assert_eq!(Easing::EaseIn.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    assert!(Easing::EaseInOut.apply(0.25) < 0.25);
    assert!(Easing::EaseInOut.apply(0.75) > 0.75);
}

#[test]
fn test_easing_boundaries() {
    for easing in CURVES {
        assert_eq!(easing.apply(0.0), 0.0, "{:?} at 0", easing);
        assert_eq!(easing.apply(1.0), 1.0, "{:?} at 1", easing);
    }
}

#[test]
fn test_easing_clamps_progress() {
    for easing in CURVES {
        assert_eq!(easing.apply(-1.0), 0.0, "{:?} below 0", easing);
        assert_eq!(easing.apply(2.0), 1.0, "{:?} above 1", easing);
    }
}

#[test]
fn test_easing_monotonic() {
    for easing in CURVES {
        let mut prev = 0.0;
        for i in 1..=20 {
            let t = i as f32 / 20.0;
            let val = easing.apply(t);
            assert!(val >= prev - 1e-4, "{:?} not monotonic at t={}", easing, t);
            prev = val;
        }
    }
}

#[test]
fn test_cubic_bezier_diagonal_is_linear() {
    let easing = Easing::CubicBezier(0.0, 0.0, 1.0, 1.0);
    for t in [0.1, 0.3, 0.5, 0.9] {
        assert!((easing.apply(t) - t).abs() < 1e-3, "t={t}");
    }
}

#[test]
fn test_cubic_bezier_symmetric_curve_hits_midpoint() {
    let easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);
    assert!((easing.apply(0.5) - 0.5).abs() < 1e-3);
    assert!(easing.apply(0.2) < 0.2);
}

#[test]
fn test_transitions_has_any() {
    assert!(!Transitions::new().has_any());
    assert!(linear(100).has_any());
}

// =============================================================================
// AnimationState Tests
// =============================================================================

#[test]
fn test_no_transition_on_first_frame_without_initial() {
    let root = Element::box_().id("a").width(Size::Fixed(10)).transitions(linear(100));
    let mut state = AnimationState::new();

    state.update_at(&root, Instant::now());

    assert!(!state.has_active_transitions());
}

#[test]
fn test_mount_animates_from_initial() {
    let root = Element::box_()
        .id("bar")
        .width(Size::Percent(0.5))
        .initial(Initial::new().width(Size::Percent(0.0)))
        .transitions(linear(1000));
    let mut state = AnimationState::new();
    let t0 = Instant::now();

    state.update_at(&root, t0);

    let mid = percent(state.get_interpolated_at(
        "bar",
        TransitionProperty::Width,
        t0 + Duration::from_millis(250),
    ));
    assert!((mid - 0.125).abs() < 1e-4);
}

#[test]
fn test_initial_without_transition_does_not_animate() {
    let root = Element::box_()
        .id("bar")
        .width(Size::Percent(0.5))
        .initial(Initial::new().width(Size::Percent(0.0)));
    let mut state = AnimationState::new();

    state.update_at(&root, Instant::now());

    assert!(!state.has_active_transitions());
}

#[test]
fn test_width_change_starts_transition() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();

    let frame1 = Element::box_().id("a").width(Size::Fixed(10)).transitions(linear(1000));
    state.update_at(&frame1, t0);

    let frame2 = Element::box_().id("a").width(Size::Fixed(20)).transitions(linear(1000));
    state.update_at(&frame2, t0);

    assert_eq!(
        state.get_interpolated_at("a", TransitionProperty::Width, t0 + Duration::from_millis(500)),
        Some(PropertyValue::U16(15))
    );
}

#[test]
fn test_retarget_starts_from_current_value() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let frame = |p: f32| {
        Element::box_()
            .id("bar")
            .width(Size::Percent(p))
            .transitions(linear(1000))
    };

    state.update_at(&frame(0.0), t0);
    state.update_at(&frame(1.0), t0);

    // Halfway there, reverse
    let t1 = t0 + Duration::from_millis(500);
    state.update_at(&frame(0.0), t1);

    let at_t1 = percent(state.get_interpolated_at("bar", TransitionProperty::Width, t1));
    assert!((at_t1 - 0.5).abs() < 1e-4);

    let later = percent(state.get_interpolated_at(
        "bar",
        TransitionProperty::Width,
        t1 + Duration::from_millis(500),
    ));
    assert!((later - 0.25).abs() < 1e-4);
}

#[test]
fn test_no_transition_without_config() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();

    state.update_at(&Element::box_().id("a").width(Size::Fixed(10)), t0);
    state.update_at(&Element::box_().id("a").width(Size::Fixed(20)), t0);

    assert!(!state.has_active_transitions());
}

#[test]
fn test_reduced_motion_skips_transitions() {
    let root = Element::box_()
        .id("bar")
        .width(Size::Percent(0.5))
        .initial(Initial::new().width(Size::Percent(0.0)))
        .transitions(linear(1000));
    let mut state = AnimationState::new();
    state.set_reduced_motion(true);

    state.update_at(&root, Instant::now());

    assert!(!state.has_active_transitions());
}

#[test]
fn test_completed_transitions_are_pruned() {
    let root = Element::box_()
        .id("bar")
        .width(Size::Percent(0.5))
        .initial(Initial::new().width(Size::Percent(0.0)))
        .transitions(linear(100));
    let mut state = AnimationState::new();
    let t0 = Instant::now();

    state.update_at(&root, t0);
    assert_eq!(state.active_count(), 1);

    state.update_at(&root, t0 + Duration::from_secs(1));
    assert!(!state.has_active_transitions());
}

#[test]
fn test_removed_elements_are_forgotten() {
    let with_child = |id: &str| {
        Element::col().id("root").child(
            Element::box_()
                .id(id)
                .width(Size::Percent(0.5))
                .initial(Initial::new().width(Size::Percent(0.0)))
                .transitions(linear(1000)),
        )
    };
    let mut state = AnimationState::new();
    let t0 = Instant::now();

    state.update_at(&with_child("old"), t0);
    state.update_at(&with_child("new"), t0);

    assert!(state
        .get_interpolated_at("old", TransitionProperty::Width, t0)
        .is_none());
    assert!(state
        .get_interpolated_at("new", TransitionProperty::Width, t0)
        .is_some());
}

#[test]
fn test_background_transition_interpolates_color() {
    let mut state = AnimationState::new();
    let t0 = Instant::now();
    let frame = |color: Color| {
        Element::box_()
            .id("a")
            .style(Style::new().background(color))
            .transitions(Transitions::new().background(TransitionConfig::new(
                Duration::from_millis(1000),
                Easing::Linear,
            )))
    };

    state.update_at(&frame(Color::rgb(255, 0, 0)), t0);
    state.update_at(&frame(Color::rgb(0, 0, 255)), t0);

    let value = state.get_interpolated_at(
        "a",
        TransitionProperty::Background,
        t0 + Duration::from_millis(500),
    );
    let Some(PropertyValue::Color(mid)) = value else {
        panic!("expected a color, got {value:?}");
    };
    assert_ne!(mid.to_rgb(), Color::rgb(255, 0, 0).to_rgb());
    assert_ne!(mid.to_rgb(), Color::rgb(0, 0, 255).to_rgb());
}

#[test]
fn test_collect_element_ids() {
    let root = Element::col()
        .id("root")
        .child(Element::text("a").id("a"))
        .child(Element::row().id("b").child(Element::text("c").id("c")));

    let ids = collect_element_ids(&root);

    assert_eq!(ids.len(), 4);
    assert!(ids.contains("c"));
}
