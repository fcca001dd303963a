use super::*;
use crate::state::view::Transition;

#[test]
fn header_condenses_when_scrolled() {
    assert_eq!(header_class(false), "site-header");
    assert_eq!(header_class(true), "site-header site-header--scrolled");
}

#[test]
fn brand_title_is_light_only_over_home_hero() {
    assert_eq!(brand_title_class(false, View::Home), "site-header__title");
    assert!(brand_title_class(true, View::Home).ends_with("--dark"));
    assert!(brand_title_class(false, View::Clients).ends_with("--dark"));
}

#[test]
fn only_current_view_link_is_active() {
    let mut state = ViewState::default();
    state.apply(Transition::To(View::Infrastructure));
    for view in View::NAV {
        let active = nav_link_class(&state, view).ends_with("--active");
        assert_eq!(active, view == View::Infrastructure, "{view:?}");
    }
}

#[test]
fn no_link_is_active_on_home() {
    let state = ViewState::default();
    assert!(View::NAV.into_iter().all(|view| nav_link_class(&state, view) == "site-header__link"));
}
