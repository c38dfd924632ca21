use crate::obs::{EventSink, QueryEvent, record_event, with_event_sink};
use std::cell::RefCell;

fn clamp_event() -> QueryEvent {
    QueryEvent::PageClamped {
        entity: "Invoice",
        requested: 9,
    }
}

#[derive(Default)]
struct Capture(RefCell<u64>);

impl EventSink for Capture {
    fn record(&self, _: &QueryEvent) {
        *self.0.borrow_mut() += 1;
    }
}

#[test]
fn scoped_sink_receives_every_event_in_scope() {
    let capture = Capture::default();

    with_event_sink(&capture, || {
        record_event(&clamp_event());
        record_event(&clamp_event());
    });

    assert_eq!(*capture.0.borrow(), 2);
}

#[test]
fn nested_override_restores_the_enclosing_sink() {
    let outer = Capture::default();
    let inner = Capture::default();

    with_event_sink(&outer, || {
        record_event(&clamp_event());

        with_event_sink(&inner, || {
            record_event(&clamp_event());
        });

        // Raised after the inner scope ends; must reach the outer sink.
        record_event(&clamp_event());
    });

    assert_eq!(*outer.0.borrow(), 2);
    assert_eq!(*inner.0.borrow(), 1);
}
