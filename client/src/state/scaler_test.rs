use super::*;

fn measured(viewport_width: f64, content_height: f64) -> ScalerState {
    let mut state = ScalerState::default();
    state.on_viewport_width(Some(viewport_width));
    state.on_content_height(Some(content_height));
    state
}

// =============================================================
// Scale factor
// =============================================================

#[test]
fn default_state_is_unmeasured_at_natural_scale() {
    let state = ScalerState::default();
    assert_eq!(state.measurement(), Measurement::Unmeasured);
    assert_eq!(state.scale_factor(), 1.0);
    assert_eq!(state.content_height(), 0.0);
    assert_eq!(state.design_width(), DESIGN_WIDTH);
}

#[test]
fn scale_factor_is_viewport_over_design_width() {
    let mut state = ScalerState::default();
    state.on_viewport_width(Some(720.0));
    assert_eq!(state.scale_factor(), 0.5);

    state.on_viewport_width(Some(1920.0));
    assert_eq!(state.scale_factor(), 1920.0 / 1440.0);
}

#[test]
fn invalid_design_width_falls_back_to_default() {
    assert_eq!(ScalerState::new(0.0).design_width(), DESIGN_WIDTH);
    assert_eq!(ScalerState::new(-10.0).design_width(), DESIGN_WIDTH);
    assert_eq!(ScalerState::new(f64::NAN).design_width(), DESIGN_WIDTH);
    assert_eq!(ScalerState::new(1200.0).design_width(), 1200.0);
}

#[test]
fn unusable_viewport_width_keeps_previous_scale() {
    let mut state = measured(720.0, 1000.0);
    state.on_viewport_width(None);
    state.on_viewport_width(Some(f64::INFINITY));
    state.on_viewport_width(Some(-5.0));
    assert_eq!(state.scale_factor(), 0.5);
    assert_eq!(state.content_height(), 1000.0);
}

// =============================================================
// Frame style
// =============================================================

#[test]
fn scaled_down_frame_height_is_content_times_scale() {
    let state = measured(720.0, 3000.0);
    let style = state.frame_style();
    assert_eq!(style.height, FrameHeight::Px(1500.0));
    assert_eq!(style.overflow_y, Overflow::Hidden);
}

#[test]
fn design_width_and_above_leave_height_auto() {
    for width in [1440.0, 1920.0] {
        let style = measured(width, 9000.0).frame_style();
        assert_eq!(style.height, FrameHeight::Auto);
        assert_eq!(style.overflow_y, Overflow::Visible);
    }
}

#[test]
fn scale_of_exactly_one_is_not_scaling_down() {
    let state = measured(1440.0, 100.0);
    assert_eq!(state.scale_factor(), 1.0);
    assert!(!state.is_scaling_down());
}

#[test]
fn content_height_change_updates_frame_without_new_viewport_event() {
    let mut state = measured(720.0, 1000.0);
    assert_eq!(state.frame_style().height, FrameHeight::Px(500.0));

    state.on_content_height(Some(2000.0));
    assert_eq!(state.frame_style().height, FrameHeight::Px(1000.0));

    state.on_content_height(Some(400.0));
    assert_eq!(state.frame_style().height, FrameHeight::Px(200.0));
}

#[test]
fn missing_measurement_counts_as_zero_height() {
    let mut state = ScalerState::default();
    state.on_viewport_width(Some(720.0));
    state.on_content_height(None);
    assert!(state.is_measured());
    assert_eq!(state.frame_style().height, FrameHeight::Px(0.0));

    state.on_content_height(Some(f64::NAN));
    assert_eq!(state.content_height(), 0.0);

    state.on_content_height(Some(800.0));
    assert_eq!(state.frame_style().height, FrameHeight::Px(400.0));
}

#[test]
fn repeated_resize_with_same_width_is_idempotent() {
    let mut state = measured(375.0, 5000.0);
    let before = state;
    state.on_viewport_width(Some(375.0));
    state.on_viewport_width(Some(375.0));
    assert_eq!(state, before);
}

#[test]
fn phone_to_desktop_round_trip() {
    let mut state = measured(1440.0, 5000.0);
    assert_eq!(state.frame_style().height, FrameHeight::Auto);

    state.on_viewport_width(Some(375.0));
    assert!((state.scale_factor() - 0.2604).abs() < 1e-4);
    let FrameHeight::Px(px) = state.frame_style().height else {
        panic!("expected a clamped frame height");
    };
    assert!((px - 1302.08).abs() < 0.01);

    state.on_viewport_width(Some(1440.0));
    assert_eq!(state.frame_style().height, FrameHeight::Auto);
}

#[test]
fn reset_returns_to_unmeasured() {
    let mut state = measured(720.0, 1000.0);
    state.reset();
    assert!(!state.is_measured());
    assert_eq!(state.frame_style().height, FrameHeight::Auto);
}

// =============================================================
// CSS rendering
// =============================================================

#[test]
fn frame_css_renders_auto_branch() {
    let css = measured(1440.0, 10.0).frame_style().to_css();
    assert!(css.contains("width: 100vw;"));
    assert!(css.contains("height: auto;"));
    assert!(css.contains("overflow-x: hidden;"));
    assert!(css.contains("overflow-y: visible;"));
}

#[test]
fn frame_css_renders_clamped_branch() {
    let css = measured(720.0, 3000.0).frame_style().to_css();
    assert!(css.contains("height: 1500px;"));
    assert!(css.contains("overflow-x: hidden;"));
    assert!(css.contains("overflow-y: hidden;"));
}

#[test]
fn stage_css_anchors_scale_at_top() {
    let css = measured(720.0, 3000.0).stage_css();
    assert_eq!(css, "width: 1440px; transform: scale(0.5); transform-origin: top center;");
}
