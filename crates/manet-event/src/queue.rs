//! `EventQueue` — sparse time-ordered event storage.
//!
//! # Why a `BTreeMap`
//!
//! A binary heap pops in time order but cannot cancel an arbitrary entry
//! without either tombstones or a secondary index.  A `BTreeMap` keyed by
//! `(time, seq)` gives O(log n) schedule, pop, *and* cancel-by-handle with
//! no tombstone bookkeeping, and its iteration order is exactly the
//! execution order — which makes the FIFO tie-break free: the insertion
//! sequence is simply part of the key.
//!
//! For mobility workloads n stays small (one pending step per node plus a
//! sample event), so the log factor is negligible.

use std::collections::BTreeMap;

use manet_core::SimTime;

use crate::{ScheduleError, ScheduleResult};

// ── EventHandle ───────────────────────────────────────────────────────────────

/// Identifies one scheduled event for later cancellation.
///
/// The handle is the event's full ordering key.  Once the event has fired
/// the key is gone from the map, so a stale handle cancels nothing —
/// cancellation is naturally idempotent.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct EventHandle {
    pub time: SimTime,
    /// Insertion sequence number, unique per queue for the whole run.
    pub seq: u64,
}

// ── EventQueue ────────────────────────────────────────────────────────────────

/// A time-ordered queue of payloads of type `T`, owning the simulation clock.
pub struct EventQueue<T> {
    inner: BTreeMap<EventHandle, T>,
    /// Current simulation time.  Advances only when an event is popped.
    now: SimTime,
    /// Next insertion sequence number.
    next_seq: u64,
    /// Total events ever scheduled (diagnostics).
    scheduled: u64,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self {
            inner:     BTreeMap::new(),
            now:       SimTime::ZERO,
            next_seq:  0,
            scheduled: 0,
        }
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Schedule `payload` to fire at `time`.
    ///
    /// `time` may equal the current clock (the event fires later this
    /// instant, after everything already queued for it — FIFO).  A time
    /// strictly before the clock is a caller defect and fails with
    /// [`ScheduleError::PastTime`].
    pub fn schedule(&mut self, time: SimTime, payload: T) -> ScheduleResult<EventHandle> {
        if time < self.now {
            return Err(ScheduleError::PastTime { requested: time, now: self.now });
        }
        let handle = EventHandle { time, seq: self.next_seq };
        self.next_seq += 1;
        self.scheduled += 1;
        self.inner.insert(handle, payload);
        Ok(handle)
    }

    /// Remove an unfired event.  Returns `true` if the event was still
    /// pending; `false` (a no-op) if it already fired or never existed.
    pub fn cancel(&mut self, handle: EventHandle) -> bool {
        self.inner.remove(&handle).is_some()
    }

    /// Pop the earliest event and advance the clock to its time.
    ///
    /// Returns `None` when the queue is empty (the clock stays where the
    /// last event left it).
    pub fn pop_next(&mut self) -> Option<(EventHandle, T)> {
        let entry = self.inner.pop_first()?;
        debug_assert!(entry.0.time >= self.now, "event queue ordering violated");
        self.now = entry.0.time;
        Some(entry)
    }

    /// Pop the earliest event if it fires at or before `stop`.
    ///
    /// Leaves later events queued and the clock untouched, so the caller can
    /// finish the run at exactly `stop`.
    pub fn pop_next_until(&mut self, stop: SimTime) -> Option<(EventHandle, T)> {
        if self.peek_time()? > stop {
            return None;
        }
        self.pop_next()
    }

    /// Firing time of the earliest pending event.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.inner.keys().next().map(|h| h.time)
    }

    /// Force the clock forward to `time` (used by the kernel to close out a
    /// run at the configured stop time).  Never moves the clock backwards.
    pub fn advance_to(&mut self, time: SimTime) {
        if time > self.now {
            self.now = time;
        }
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total events ever scheduled on this queue.
    pub fn scheduled_total(&self) -> u64 {
        self.scheduled
    }
}
