use std::collections::HashSet;

use super::*;

#[test]
fn product_ids_are_unique() {
    let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), PRODUCTS.len());
}

#[test]
fn every_product_has_one_feature_per_kind() {
    let kinds = [
        FeatureKind::Customizable,
        FeatureKind::HighResolution,
        FeatureKind::Durable,
        FeatureKind::CostEffective,
        FeatureKind::EcoFriendly,
        FeatureKind::QuickTurnaround,
    ];
    for product in &PRODUCTS {
        let got: Vec<_> = product.features.iter().map(|f| f.kind).collect();
        assert_eq!(got, kinds, "{}", product.id);
    }
}

#[test]
fn every_product_has_full_detail_lists() {
    for product in &PRODUCTS {
        assert!(!product.gallery.is_empty(), "{}", product.id);
        for list in [product.materials, product.finishing, product.customization, product.applications] {
            assert_eq!(list.len(), 4, "{}", product.id);
        }
    }
}

#[test]
fn find_product_by_id() {
    assert_eq!(find_product("woven").map(|p| p.title), Some("Woven Labels"));
    assert_eq!(find_product("belly-bands").map(|p| p.title), Some("Belly Band & Inserts"));
    assert!(find_product("gift-cards").is_none());
    assert!(find_product("").is_none());
}

#[test]
fn teasers_point_at_catalog_entries() {
    for teaser in &TEASERS {
        assert!(find_product(teaser.product_id).is_some(), "{}", teaser.product_id);
    }
}
