//! Combinator tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect which
//! rows are produced.

use crate::policy::PolicyKind;
use std::fmt;

///
/// ZipTraceSink
///

pub trait ZipTraceSink: Send + Sync {
    fn on_event(&self, event: ZipTraceEvent);
}

///
/// ZipTraceEvent
///
/// `step` counts combinator steps from zero; it equals the number of rows
/// yielded before the step began.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZipTraceEvent {
    ColumnExhausted {
        step: u64,
        column: usize,
        policy: PolicyKind,
        exhausted: usize,
        width: usize,
    },
    FullStop {
        step: u64,
        column: usize,
    },
    Raised {
        step: u64,
        column: usize,
    },
    Row {
        step: u64,
        exhausted: usize,
        width: usize,
    },
    Finished {
        rows: u64,
        exhausted: usize,
        width: usize,
    },
}

impl fmt::Display for ZipTraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ColumnExhausted {
                step,
                column,
                policy,
                exhausted,
                width,
            } => write!(
                f,
                "exhausted at (row {step}, column {column}), policy {policy}, \
                 {exhausted} of {width} now exhausted"
            ),
            Self::FullStop { step, column } => {
                write!(f, "full stop at (row {step}, column {column})")
            }
            Self::Raised { step, column } => {
                write!(f, "raise at (row {step}, column {column})")
            }
            Self::Row {
                step,
                exhausted,
                width,
            } => write!(f, "row {step}, {exhausted} of {width} exhausted"),
            Self::Finished {
                rows,
                exhausted,
                width,
            } => write!(f, "finished after {rows} rows, {exhausted} of {width} exhausted"),
        }
    }
}

///
/// ZipTrace
///
/// Per-combinator diagnostics: an optional sink plus the `[debug]` printer.
///

#[derive(Clone, Copy, Default)]
pub(crate) struct ZipTrace {
    debug: bool,
    sink: Option<&'static dyn ZipTraceSink>,
}

impl ZipTrace {
    pub(crate) const fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub(crate) const fn set_sink(&mut self, sink: &'static dyn ZipTraceSink) {
        self.sink = Some(sink);
    }

    pub(crate) const fn is_debug(&self) -> bool {
        self.debug
    }

    pub(crate) fn emit(&self, event: ZipTraceEvent) {
        if self.debug {
            println!("[debug] {event}");
        }
        if let Some(sink) = self.sink {
            sink.on_event(event);
        }
    }

    /// Emit a `Row` event; the `[debug]` line also carries the row values.
    pub(crate) fn emit_row<V: fmt::Debug>(&self, event: ZipTraceEvent, values: &[V]) {
        if self.debug {
            println!("[debug] {}", row_debug_line(event, values));
        }
        if let Some(sink) = self.sink {
            sink.on_event(event);
        }
    }
}

fn row_debug_line<V: fmt::Debug>(event: ZipTraceEvent, values: &[V]) -> String {
    format!("{event}, values: {values:?}")
}

impl fmt::Debug for ZipTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZipTrace")
            .field("debug", &self.debug)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_render_for_debug_output() {
        let event = ZipTraceEvent::ColumnExhausted {
            step: 6,
            column: 2,
            policy: PolicyKind::Previous,
            exhausted: 1,
            width: 3,
        };
        assert_eq!(
            event.to_string(),
            "exhausted at (row 6, column 2), policy previous, 1 of 3 now exhausted"
        );
        assert_eq!(
            ZipTraceEvent::FullStop { step: 6, column: 1 }.to_string(),
            "full stop at (row 6, column 1)"
        );
    }

    #[test]
    fn row_debug_line_lists_values() {
        let event = ZipTraceEvent::Row {
            step: 7,
            exhausted: 1,
            width: 3,
        };

        assert_eq!(
            row_debug_line(event, &[7, 2, 5]),
            "row 7, 1 of 3 exhausted, values: [7, 2, 5]"
        );
    }

    #[test]
    fn default_trace_is_silent() {
        let trace = ZipTrace::default();
        assert!(!trace.is_debug());
        trace.emit(ZipTraceEvent::Raised { step: 0, column: 0 });
    }
}
