use std::collections::HashSet;

use super::clients::{HOME_LOGOS, PARTNER_LOGOS};
use super::company::{CONTACT, HERO_SLIDES, JOURNEY_STEPS, STATS};
use super::infrastructure::{MACHINES, Machine};
use crate::util::animation::JOURNEY_STEP_COUNT;

#[test]
fn hero_titles_split_after_first_word() {
    let slide = HERO_SLIDES[0];
    assert_eq!(slide.title_lead(), "The");
    assert_eq!(slide.title_rest(), "Soul of Fashion");
}

#[test]
fn journey_copy_matches_step_count() {
    assert_eq!(JOURNEY_STEPS.len(), usize::from(JOURNEY_STEP_COUNT));
}

#[test]
fn partner_grid_covers_home_strip() {
    let partners: HashSet<_> = PARTNER_LOGOS.iter().map(|l| l.name).collect();
    assert_eq!(partners.len(), PARTNER_LOGOS.len());
    assert!(HOME_LOGOS.iter().all(|l| partners.contains(l.name)));
}

#[test]
fn logo_url_uses_clearbit() {
    assert_eq!(HOME_LOGOS[1].logo_url(), "https://logo.clearbit.com/hm.com");
}

#[test]
fn contact_links() {
    assert_eq!(CONTACT.tel(), "tel:+919036333005");
    assert_eq!(CONTACT.mailto(), "mailto:rkscreations10@gmail.com");
}

#[test]
fn machine_units_are_one_based() {
    assert_eq!(Machine::unit_label(0), "UNIT 01");
    assert_eq!(Machine::unit_label(MACHINES.len() - 1), "UNIT 07");
}

#[test]
fn stats_are_nonzero() {
    assert!(STATS.iter().all(|s| s.value > 0));
}
