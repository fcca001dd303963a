use super::*;

#[test]
fn counter_waits_for_start() {
    let mut counter = StatCounter::new(12);
    assert!(!counter.tick());
    assert_eq!(counter.current(), 0);
}

#[test]
fn counter_reaches_target_and_stops() {
    let mut counter = StatCounter::new(3);
    assert!(counter.start());
    assert!(!counter.start());
    assert!(counter.tick());
    assert!(counter.tick());
    assert!(!counter.tick());
    assert_eq!(counter.current(), 3);
    assert!(counter.is_done());
    assert!(!counter.tick());
    assert_eq!(counter.current(), 3);
}

#[test]
fn counter_interval_spreads_over_duration() {
    assert_eq!(StatCounter::new(40).tick_interval_ms(), 50);
    assert_eq!(StatCounter::new(100).tick_interval_ms(), 20);
    assert_eq!(StatCounter::new(5_000).tick_interval_ms(), 1);
}

#[test]
fn zero_target_is_done_immediately() {
    let mut counter = StatCounter::new(0);
    assert!(counter.is_done());
    counter.start();
    assert!(!counter.tick());
    assert_eq!(counter.current(), 0);
}

#[test]
fn journey_wraps_after_last_step() {
    let mut journey = JourneySequence::default();
    let mut seen = vec![journey.step()];
    for _ in 0..6 {
        journey.advance();
        seen.push(journey.step());
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 1]);
}

#[test]
fn journey_go_to_ignores_out_of_range() {
    let mut journey = JourneySequence::default();
    journey.go_to(4);
    assert_eq!(journey.step(), 4);
    journey.go_to(0);
    journey.go_to(7);
    assert_eq!(journey.step(), 4);
    assert!(journey.has_reached(3));
    assert!(!journey.has_reached(5));
}
