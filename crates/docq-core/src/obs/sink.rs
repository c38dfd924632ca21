use std::{
    cell::RefCell,
    sync::atomic::{AtomicU64, Ordering},
};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn EventSink>> = const { RefCell::new(None) };
}

///
/// QueryEvent
///
/// Warning-level signals raised by the query layer. Normalizations and
/// recoverable substitutions are legal behavior but must never be silent.
///

#[derive(Clone, Debug)]
pub enum QueryEvent {
    /// An out-of-range page number was normalized to the first page.
    PageClamped {
        entity: &'static str,
        requested: i64,
    },

    /// The requested join result shape rejected a document and the
    /// primary-shaped fallback was substituted.
    ResultShapeFallback {
        entity: &'static str,
        reason: String,
    },
}

///
/// EventSink
///

pub trait EventSink {
    fn record(&self, event: &QueryEvent);
}

/// Record an event through the scoped sink if one is installed, otherwise
/// through the global counters.
pub fn record_event(event: &QueryEvent) {
    let handled = SINK_OVERRIDE.with(|cell| {
        if let Some(ptr) = *cell.borrow() {
            // Pointer is only installed by `with_event_sink`, which keeps the
            // sink alive for the duration of the closure.
            unsafe { (*ptr).record(event) };
            true
        } else {
            false
        }
    });

    if !handled {
        GlobalEventSink.record(event);
    }
}

/// Run `f` with `sink` receiving every event raised on this thread.
///
/// Overrides nest: when an inner scope ends, the enclosing sink resumes
/// receiving events.
pub fn with_event_sink<T>(sink: &dyn EventSink, f: impl FnOnce() -> T) -> T {
    // SAFETY: the transmute erases the borrow lifetime so the pointer fits
    // the 'static thread-local slot. The guard removes it when this scope
    // ends, so no dereference can outlive `sink`.
    let ptr = unsafe { std::mem::transmute::<&dyn EventSink, *const dyn EventSink>(sink) };

    struct Reset {
        prev: Option<*const dyn EventSink>,
    }

    impl Drop for Reset {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.prev;
            });
        }
    }

    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(ptr));

    let _reset = Reset { prev };
    f()
}

///
/// GlobalEventSink
///
/// Default process-wide sink backed by atomic counters. Acts as the concrete
/// sink when no scoped override is installed.
///

struct GlobalEventSink;

static PAGE_CLAMPS: AtomicU64 = AtomicU64::new(0);
static SHAPE_FALLBACKS: AtomicU64 = AtomicU64::new(0);

impl EventSink for GlobalEventSink {
    fn record(&self, event: &QueryEvent) {
        match event {
            QueryEvent::PageClamped { .. } => {
                PAGE_CLAMPS.fetch_add(1, Ordering::Relaxed);
            }
            QueryEvent::ResultShapeFallback { .. } => {
                SHAPE_FALLBACKS.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

///
/// EventReport
///
/// Point-in-time snapshot of the global counters.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EventReport {
    pub page_clamps: u64,
    pub shape_fallbacks: u64,
}

/// Snapshot the global event counters.
#[must_use]
pub fn event_report() -> EventReport {
    EventReport {
        page_clamps: PAGE_CLAMPS.load(Ordering::Relaxed),
        shape_fallbacks: SHAPE_FALLBACKS.load(Ordering::Relaxed),
    }
}

/// Reset the global event counters.
pub fn event_reset() {
    PAGE_CLAMPS.store(0, Ordering::Relaxed);
    SHAPE_FALLBACKS.store(0, Ordering::Relaxed);
}
