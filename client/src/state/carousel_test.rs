use super::*;

#[test]
fn new_carousel_starts_at_first_slide() {
    let c = CarouselState::new(3);
    assert_eq!(c.index(), 0);
    assert_eq!(c.slide_count(), 3);
    assert_eq!(c.direction(), SlideDirection::None);
    assert!(!c.is_paused());
}

#[test]
fn empty_carousel_behaves_as_single_slide() {
    let mut c = CarouselState::new(0);
    assert_eq!(c.slide_count(), 1);
    c.next();
    assert_eq!(c.index(), 0);
    assert!(!c.tick());
}

#[test]
fn next_wraps_to_first() {
    let mut c = CarouselState::new(3);
    c.next();
    c.next();
    assert_eq!(c.index(), 2);
    c.next();
    assert_eq!(c.index(), 0);
    assert_eq!(c.direction(), SlideDirection::Forward);
}

#[test]
fn prev_wraps_to_last() {
    let mut c = CarouselState::new(3);
    c.prev();
    assert_eq!(c.index(), 2);
    assert_eq!(c.direction(), SlideDirection::Backward);
}

#[test]
fn tick_advances_only_when_not_paused() {
    let mut c = CarouselState::new(3);
    assert!(c.tick());
    assert_eq!(c.index(), 1);

    c.set_paused(true);
    assert!(!c.tick());
    assert_eq!(c.index(), 1);

    c.set_paused(false);
    assert!(c.tick());
    assert_eq!(c.index(), 2);
}

#[test]
fn go_to_sets_direction_from_relative_position() {
    let mut c = CarouselState::new(5);
    c.go_to(3);
    assert_eq!(c.index(), 3);
    assert_eq!(c.direction(), SlideDirection::Forward);
    c.go_to(1);
    assert_eq!(c.direction(), SlideDirection::Backward);
    c.go_to(9);
    assert_eq!(c.index(), 1);
}

#[test]
fn direction_class_suffixes_are_distinct() {
    assert_eq!(SlideDirection::None.class_suffix(), "still");
    assert_eq!(SlideDirection::Forward.class_suffix(), "forward");
    assert_eq!(SlideDirection::Backward.class_suffix(), "backward");
}
