use super::*;

// =============================================================
// View
// =============================================================

#[test]
fn view_default_is_home() {
    assert_eq!(View::default(), View::Home);
    assert_eq!(ViewState::default().view(), View::Home);
}

#[test]
fn nav_lists_every_view_except_home() {
    assert!(!View::NAV.contains(&View::Home));
    for view in View::ALL {
        if view != View::Home {
            assert!(View::NAV.contains(&view), "{view:?} missing from nav");
        }
    }
}

#[test]
fn nav_keeps_declaration_order() {
    let rest: Vec<View> = View::ALL.into_iter().filter(|v| *v != View::Home).collect();
    assert_eq!(View::NAV.to_vec(), rest);
}

#[test]
fn nav_labels_match_header_copy() {
    let labels = View::NAV.map(View::label);
    assert_eq!(labels, ["Products", "About Us", "Infrastructure", "Our Clients", "Contact"]);
}

#[test]
fn slugs_are_unique() {
    for (i, a) in View::ALL.iter().enumerate() {
        for (j, b) in View::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.slug(), b.slug());
            }
        }
    }
}

#[test]
fn view_serializes_as_kebab_case_slug() {
    for view in View::ALL {
        let json = serde_json::to_string(&view).unwrap();
        assert_eq!(json, format!("\"{}\"", view.slug()));
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn to_switches_view_and_reports_change() {
    let mut state = ViewState::default();
    assert!(state.apply(Transition::To(View::About)));
    assert_eq!(state.view(), View::About);
    assert!(!state.apply(Transition::To(View::About)));
}

#[test]
fn select_product_opens_products_with_selection() {
    let mut state = ViewState::default();
    assert!(state.apply(Transition::SelectProduct("woven")));
    assert_eq!(state.view(), View::Products);
    assert_eq!(state.selected_product(), Some("woven"));
}

#[test]
fn plain_navigation_keeps_product_selection() {
    let mut state = ViewState::default();
    state.apply(Transition::SelectProduct("hangtags"));
    state.apply(Transition::To(View::Contact));
    state.apply(Transition::To(View::Products));
    assert_eq!(state.selected_product(), Some("hangtags"));
}

#[test]
fn back_to_home_clears_selection() {
    let mut state = ViewState::default();
    state.apply(Transition::SelectProduct("badges"));
    assert!(state.apply(Transition::BackToHome));
    assert_eq!(state.view(), View::Home);
    assert_eq!(state.selected_product(), None);
}

#[test]
fn home_is_never_highlighted() {
    let state = ViewState::default();
    assert!(!state.is_active(View::Home));
    for view in View::NAV {
        assert!(!state.is_active(view));
    }
}

#[test]
fn only_current_view_is_highlighted() {
    let mut state = ViewState::default();
    state.apply(Transition::To(View::Clients));
    for view in View::NAV {
        assert_eq!(state.is_active(view), view == View::Clients);
    }
}
