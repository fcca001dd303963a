use super::*;

#[test]
fn known_id_opens_detail() {
    let product = resolve_selection(Some("hangtags"));
    assert_eq!(product.map(|p| p.id), find_product("hangtags").map(|p| p.id));
}

#[test]
fn unknown_or_missing_id_shows_grid() {
    assert!(resolve_selection(Some("no-such-product")).is_none());
    assert!(resolve_selection(None).is_none());
}

#[test]
fn every_catalog_entry_resolves() {
    for product in &PRODUCTS {
        assert_eq!(resolve_selection(Some(product.id)).map(|p| p.title), Some(product.title));
    }
}

#[test]
fn seeded_selection_opens_detail() {
    let selection = CatalogSelection::seeded(Some("woven"));
    assert_eq!(selection.product().map(|p| p.id), Some("woven"));
    assert!(CatalogSelection::seeded(None).product().is_none());
}

#[test]
fn resending_same_id_does_not_reopen_after_close() {
    let mut selection = CatalogSelection::seeded(Some("hangtags"));
    selection.close();

    // Header "Products" click re-publishes the unchanged navigator state.
    selection.follow(Some("hangtags"));
    assert!(selection.product().is_none());
}

#[test]
fn new_navigator_id_opens_detail() {
    let mut selection = CatalogSelection::seeded(Some("hangtags"));
    selection.close();
    selection.follow(Some("badges"));
    assert_eq!(selection.product().map(|p| p.id), Some("badges"));
}

#[test]
fn cleared_navigator_id_keeps_local_choice() {
    let mut selection = CatalogSelection::seeded(Some("hangtags"));
    selection.open("woven");
    selection.follow(None);
    assert_eq!(selection.product().map(|p| p.id), Some("woven"));

    // After the clear, the same id counts as a fresh selection.
    selection.close();
    selection.follow(Some("hangtags"));
    assert_eq!(selection.product().map(|p| p.id), Some("hangtags"));
}
