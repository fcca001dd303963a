use super::test_helpers::FakeViewport;
use super::*;
use std::cell::RefCell;

fn recorder() -> (Rc<RefCell<Vec<ViewportEvent>>>, Rc<dyn Fn(ViewportEvent)>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, Rc::new(move |event| sink.borrow_mut().push(event)))
}

#[test]
fn subscription_cancel_runs_once() {
    let count = Rc::new(RefCell::new(0));
    let hits = Rc::clone(&count);
    let mut sub = Subscription::new(move || *hits.borrow_mut() += 1);
    assert!(sub.is_active());
    sub.cancel();
    sub.cancel();
    drop(sub);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn dropping_subscription_cancels_it() {
    let count = Rc::new(RefCell::new(0));
    let hits = Rc::clone(&count);
    {
        let _sub = Subscription::new(move || *hits.borrow_mut() += 1);
    }
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn noop_subscription_is_inactive() {
    let sub = Subscription::noop();
    assert!(!sub.is_active());
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
}

#[test]
fn fake_reports_current_values() {
    let fake = FakeViewport::new(1024.0, 2048.0);
    assert_eq!(fake.viewport_width(), Some(1024.0));
    assert_eq!(fake.content_height(), Some(2048.0));
    fake.set_content_height(None);
    assert_eq!(fake.content_height(), None);
}

#[test]
fn fake_fires_matching_events_to_listeners() {
    let fake = FakeViewport::new(1440.0, 100.0);
    let (seen, listener) = recorder();
    let _sub = fake.subscribe(listener);

    fake.resize(800.0);
    fake.set_content_height(Some(300.0));
    assert_eq!(*seen.borrow(), vec![ViewportEvent::Resized, ViewportEvent::ContentResized]);
}

#[test]
fn cancelled_listener_receives_nothing() {
    let fake = FakeViewport::new(1440.0, 100.0);
    let (seen, listener) = recorder();
    let mut sub = fake.subscribe(listener);
    assert_eq!(fake.listener_count(), 1);

    sub.cancel();
    assert_eq!(fake.listener_count(), 0);
    fake.resize(320.0);
    assert!(seen.borrow().is_empty());
}
