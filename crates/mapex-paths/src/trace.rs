//! Observation of a running search.

use mapex_core::Point;

/// Observer notified once per position a search expands.
///
/// `frontier` is the search's own frontier at that instant: the pending
/// queue for BFS, the open set for A*, empty for the depth-first family.
/// The hook is a one-way notification: it receives only borrowed data and
/// cannot influence the search outcome. Searching with a no-op sink behaves
/// identically to not tracing at all.
pub trait Trace {
    fn observe(&mut self, current: Point, frontier: &[Point]);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn observe(&mut self, _current: Point, _frontier: &[Point]) {}
}

/// Adapter turning a closure into a [`Trace`] sink.
#[derive(Debug, Clone, Copy)]
pub struct TraceFn<F>(pub F);

impl<F: FnMut(Point, &[Point])> Trace for TraceFn<F> {
    fn observe(&mut self, current: Point, frontier: &[Point]) {
        (self.0)(current, frontier)
    }
}

/// One observed expansion: the position and a snapshot of the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    pub current: Point,
    pub frontier: Vec<Point>,
}

/// Sink that records every event for later playback, e.g. by a renderer
/// stepping through the exploration.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    events: Vec<TraceEvent>,
}

impl TraceRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, in observation order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all recorded events, keeping the allocation.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Consume the recorder, yielding the owned event sequence.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl Trace for TraceRecorder {
    fn observe(&mut self, current: Point, frontier: &[Point]) {
        self.events.push(TraceEvent {
            current,
            frontier: frontier.to_vec(),
        });
    }
}
