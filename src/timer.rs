//! Single-shot delayed events.
//!
//! Entries cannot be withdrawn once scheduled. Each one carries the epoch that
//! was current when it was queued; the owner compares that against its live
//! epoch when the entry comes due and drops stale ones.

#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<E> {
    pub due_ms: f64,
    pub epoch: u64,
    pub event: E,
    seq: u64,
}

#[derive(Debug, Clone)]
pub struct TimerQueue<E> {
    entries: Vec<Scheduled<E>>,
    next_seq: u64,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self { entries: Vec::new(), next_seq: 0 }
    }
}

impl<E> TimerQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, epoch: u64, event: E) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Scheduled { due_ms, epoch, event, seq });
    }

    /// Removes and returns the earliest entry due at or before `now_ms`.
    /// Entries due at the same instant come out in scheduling order.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<Scheduled<E>> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= now_ms)
            .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest pending due time, if any.
    pub fn next_due(&self) -> Option<f64> {
        self.entries.iter().map(|s| s.due_ms).min_by(f64::total_cmp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_fires_early() {
        let mut q = TimerQueue::new();
        q.schedule(500.0, 0, "a");
        assert!(q.pop_due(499.9).is_none());
        assert_eq!(q.pop_due(500.0).map(|s| s.event), Some("a"));
        assert!(q.is_empty());
    }

    #[test]
    fn fires_in_due_order_then_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(1000.0, 0, "late");
        q.schedule(200.0, 0, "first");
        q.schedule(200.0, 0, "second");
        let fired: Vec<_> = std::iter::from_fn(|| q.pop_due(5000.0).map(|s| s.event)).collect();
        assert_eq!(fired, vec!["first", "second", "late"]);
    }

    #[test]
    fn keeps_epoch_for_the_owner() {
        let mut q = TimerQueue::new();
        q.schedule(10.0, 3, ());
        assert_eq!(q.next_due(), Some(10.0));
        let s = q.pop_due(10.0).unwrap();
        assert_eq!(s.epoch, 3);
        assert_eq!(q.next_due(), None);
    }
}
