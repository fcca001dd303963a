use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_is_unscrolled_and_closed() {
    let state = UiState::default();
    assert!(!state.header_scrolled);
    assert!(!state.mobile_menu_open);
    assert_eq!(state.scroll_progress, 0.0);
}

// =============================================================
// Header
// =============================================================

#[test]
fn header_condenses_only_past_threshold() {
    let mut state = UiState::default();
    state.on_scroll(50.0, 4000.0, 800.0);
    assert!(!state.header_scrolled);
    state.on_scroll(51.0, 4000.0, 800.0);
    assert!(state.header_scrolled);
    state.on_scroll(0.0, 4000.0, 800.0);
    assert!(!state.header_scrolled);
}

#[test]
fn mobile_menu_toggles_and_closes() {
    let mut state = UiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

// =============================================================
// Scroll progress
// =============================================================

#[test]
fn scroll_progress_is_fraction_of_scrollable_range() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_is_zero_for_non_scrolling_page() {
    assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
}

#[test]
fn on_scroll_updates_progress() {
    let mut state = UiState::default();
    state.on_scroll(500.0, 3000.0, 1000.0);
    assert_eq!(state.scroll_progress, 0.25);
}
