//! Unit tests for manet-event.

use manet_core::SimTime;

use crate::{EventQueue, ScheduleError};

fn secs(s: f64) -> SimTime {
    SimTime::from_secs(s)
}

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.schedule(secs(3.0), "c").unwrap();
        q.schedule(secs(1.0), "a").unwrap();
        q.schedule(secs(2.0), "b").unwrap();

        let order: Vec<&str> = std::iter::from_fn(|| q.pop_next().map(|(_, p)| p)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn clock_is_monotonic_across_pops() {
        let mut q = EventQueue::new();
        for i in [5u64, 2, 9, 2, 7] {
            q.schedule(secs(i as f64), i).unwrap();
        }
        let mut last = SimTime::ZERO;
        while let Some((handle, _)) = q.pop_next() {
            assert!(handle.time >= last);
            assert_eq!(q.now(), handle.time);
            last = handle.time;
        }
    }

    #[test]
    fn simultaneous_events_fire_fifo() {
        let mut q = EventQueue::new();
        let t = secs(1.0);
        q.schedule(t, "first").unwrap();
        q.schedule(t, "second").unwrap();
        q.schedule(t, "third").unwrap();

        assert_eq!(q.pop_next().unwrap().1, "first");
        assert_eq!(q.pop_next().unwrap().1, "second");
        assert_eq!(q.pop_next().unwrap().1, "third");
    }

    #[test]
    fn scheduling_at_current_time_is_allowed() {
        let mut q = EventQueue::new();
        q.schedule(secs(1.0), 1).unwrap();
        q.pop_next().unwrap();
        // Clock is now at 1.0 — an event *at* 1.0 still fires (after the
        // one that moved the clock, by sequence order).
        q.schedule(secs(1.0), 2).unwrap();
        assert_eq!(q.pop_next().unwrap().1, 2);
    }

    #[test]
    fn scheduling_in_the_past_fails() {
        let mut q = EventQueue::new();
        q.schedule(secs(2.0), ()).unwrap();
        q.pop_next().unwrap();

        let err = q.schedule(secs(1.0), ()).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::PastTime { requested: secs(1.0), now: secs(2.0) }
        );
    }
}

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancelled_event_never_fires() {
        let mut q = EventQueue::new();
        let keep   = q.schedule(secs(1.0), "keep").unwrap();
        let cancel = q.schedule(secs(2.0), "cancel").unwrap();

        assert!(q.cancel(cancel));
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_next().unwrap().0, keep);
        assert!(q.pop_next().is_none());
    }

    #[test]
    fn cancel_after_fire_is_noop() {
        let mut q = EventQueue::new();
        let h = q.schedule(secs(1.0), ()).unwrap();
        q.pop_next().unwrap();

        assert!(!q.cancel(h));
        assert!(!q.cancel(h)); // idempotent
    }
}

#[cfg(test)]
mod run_until {
    use super::*;

    #[test]
    fn pop_next_until_stops_at_boundary() {
        let mut q = EventQueue::new();
        q.schedule(secs(1.0), 1).unwrap();
        q.schedule(secs(5.0), 5).unwrap();
        q.schedule(secs(10.0), 10).unwrap();

        assert_eq!(q.pop_next_until(secs(5.0)).unwrap().1, 1);
        assert_eq!(q.pop_next_until(secs(5.0)).unwrap().1, 5); // inclusive
        assert!(q.pop_next_until(secs(5.0)).is_none());
        assert_eq!(q.len(), 1); // the 10 s event stays queued
        assert_eq!(q.now(), secs(5.0));
    }

    #[test]
    fn advance_to_never_moves_backwards() {
        let mut q: EventQueue<()> = EventQueue::new();
        q.advance_to(secs(3.0));
        assert_eq!(q.now(), secs(3.0));
        q.advance_to(secs(1.0));
        assert_eq!(q.now(), secs(3.0));
    }

    #[test]
    fn schedule_counter_tracks_totals() {
        let mut q = EventQueue::new();
        assert!(q.is_empty());
        q.schedule(secs(1.0), ()).unwrap();
        q.schedule(secs(2.0), ()).unwrap();
        q.pop_next().unwrap();
        assert_eq!(q.scheduled_total(), 2);
        assert_eq!(q.len(), 1);
    }
}
