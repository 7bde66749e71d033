//! Virtual-time timer scheduler.
//!
//! Holds one-shot and repeating timers keyed by `TimerId`. Time only moves
//! when the owner asks for due timers up to some instant, so the same
//! sequence of calls always fires the same timers in the same order.
//!
//! ## Ordering
//!
//! Due timers are returned one at a time in deadline order; timers with the
//! same deadline fire in the order they were (re)armed. Returning one timer
//! per call lets the owner react (and cancel other timers) before the next
//! one is considered.

use std::time::Duration;

use rustc_hash::FxHashMap;

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

#[derive(Clone, Debug)]
struct Timer<E> {
    deadline: Duration,
    /// `Some` for repeating timers.
    interval: Option<Duration>,
    /// Arming order, breaks deadline ties.
    seq: u64,
    event: E,
}

/// Cancellable one-shot and repeating timers over virtual time.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: FxHashMap<TimerId, Timer<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: FxHashMap::default(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire `event` once, `delay` from now.
    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerId {
        self.insert(delay, None, event)
    }

    /// Fire `event` every `interval`, first after one interval.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn schedule_repeating(&mut self, interval: Duration, event: E) -> TimerId {
        assert!(!interval.is_zero(), "Repeating interval must be non-zero");
        self.insert(interval, Some(interval), event)
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.insert(
            id,
            Timer {
                deadline: self.now + delay,
                interval,
                seq,
                event,
            },
        );
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancel a timer. Returns true if it was still pending.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    /// Cancel every pending timer.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Whether `id` is still pending.
    #[must_use]
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Move the clock forward to `until` without firing anything.
    ///
    /// Call after draining `pop_due(until)`. Never moves time backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl<E: Clone> Scheduler<E> {
    /// Pop the next timer due at or before `until`.
    ///
    /// Advances the clock to that timer's deadline. A repeating timer is
    /// re-armed one interval after its deadline; a one-shot timer is removed.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let id = self
            .timers
            .iter()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
            .map(|(id, _)| *id)?;

        let seq = self.bump_seq();
        let timer = self.timers.get_mut(&id)?;
        self.now = self.now.max(timer.deadline);
        let event = timer.event.clone();
        let interval = timer.interval;

        match interval {
            Some(interval) => {
                timer.deadline += interval;
                timer.seq = seq;
            }
            None => {
                self.timers.remove(&id);
            }
        }

        Some((id, event))
    }

    /// Fire everything due up to `now + elapsed`, collecting events.
    ///
    /// Convenience for owners that do not cancel timers from inside
    /// callbacks; the engine drains with `pop_due` instead.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<(TimerId, E)> {
        let until = self.now + elapsed;
        let mut fired = Vec::new();
        while let Some(entry) = self.pop_due(until) {
            fired.push(entry);
        }
        self.settle(until);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_one_shot_fires_once() {
        let mut scheduler = Scheduler::new();
        let id = scheduler.schedule_once(secs(5), "freeze");

        assert!(scheduler.advance(secs(4)).is_empty());
        assert_eq!(scheduler.advance(secs(1)), vec![(id, "freeze")]);
        assert!(scheduler.advance(secs(10)).is_empty());
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), secs(15));
    }

    #[test]
    fn test_repeating_rearms() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(secs(1), "tick");

        assert_eq!(scheduler.advance(Duration::from_millis(3500)).len(), 3);
        assert_eq!(scheduler.advance(Duration::from_millis(500)).len(), 1);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_deadline_order_and_ties() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(secs(1), "tick");
        scheduler.schedule_once(secs(2), "expire");

        let events: Vec<_> = scheduler.advance(secs(3)).into_iter().map(|(_, e)| e).collect();

        // "expire" was armed at t=0, the tick re-armed at t=1: expire wins the t=2 tie.
        assert_eq!(events, vec!["tick", "expire", "tick", "tick"]);
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = Scheduler::new();
        let tick = scheduler.schedule_repeating(secs(1), "tick");
        let once = scheduler.schedule_once(secs(1), "once");

        assert!(scheduler.cancel(once));
        assert!(!scheduler.cancel(once));
        assert!(scheduler.is_pending(tick));

        scheduler.cancel_all();
        assert!(!scheduler.is_pending(tick));
        assert!(scheduler.advance(secs(5)).is_empty());
    }

    #[test]
    fn test_pop_due_moves_clock_to_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_once(secs(2), 1u8);
        scheduler.schedule_once(secs(4), 2u8);

        assert_eq!(scheduler.pop_due(secs(10)).map(|(_, e)| e), Some(1));
        assert_eq!(scheduler.now(), secs(2));

        // Scheduled relative to the deadline just reached.
        scheduler.schedule_once(secs(1), 3u8);
        assert_eq!(scheduler.pop_due(secs(10)).map(|(_, e)| e), Some(3));
        assert_eq!(scheduler.pop_due(secs(10)).map(|(_, e)| e), Some(2));
        assert_eq!(scheduler.pop_due(secs(10)), None);

        scheduler.settle(secs(10));
        assert_eq!(scheduler.now(), secs(10));
    }

    #[test]
    fn test_next_deadline() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        assert_eq!(scheduler.next_deadline(), None);

        scheduler.schedule_once(secs(3), ());
        scheduler.schedule_once(secs(1), ());
        assert_eq!(scheduler.next_deadline(), Some(secs(1)));
    }

    #[test]
    #[should_panic(expected = "Repeating interval must be non-zero")]
    fn test_zero_interval() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_repeating(Duration::ZERO, ());
    }
}
