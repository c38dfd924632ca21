//! Observability: query event sink and process-wide counters.
//!
//! Query logic MUST NOT mutate counters directly; all signals flow through
//! `QueryEvent` and `EventSink`. This module is the only bridge between
//! execution logic and global event state.

mod sink;

#[cfg(test)]
mod tests;

pub use sink::{
    EventReport, EventSink, QueryEvent, event_report, event_reset, record_event, with_event_sink,
};
