/// Tracks consecutive matches that land within the combo window of each other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComboTracker {
    count: u32,
    // None until the first match on this board, so it never counts as a combo.
    last_match_ms: Option<f64>,
}

impl ComboTracker {
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn last_match_ms(&self) -> Option<f64> {
        self.last_match_ms
    }

    /// Records a match at `now_ms` and returns the new chain length.
    pub fn register_match(&mut self, now_ms: f64, window_ms: f64) -> u32 {
        let chained = self.last_match_ms.is_some_and(|last| now_ms - last < window_ms);
        self.count = if chained { self.count + 1 } else { 1 };
        self.last_match_ms = Some(now_ms);
        self.count
    }

    /// A mismatch breaks the chain; the timestamp is kept.
    pub fn break_chain(&mut self) {
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_starts_a_chain_of_one() {
        let mut combo = ComboTracker::default();
        assert_eq!(combo.register_match(100.0, 3000.0), 1);
    }

    #[test]
    fn quick_matches_chain_and_slow_ones_restart() {
        let mut combo = ComboTracker::default();
        combo.register_match(0.0, 3000.0);
        assert_eq!(combo.register_match(2999.0, 3000.0), 2);
        assert_eq!(combo.register_match(4000.0, 3000.0), 3);
        assert_eq!(combo.register_match(7000.0, 3000.0), 1);
    }

    #[test]
    fn broken_chain_restarts_even_inside_window() {
        let mut combo = ComboTracker::default();
        combo.register_match(0.0, 3000.0);
        combo.break_chain();
        assert_eq!(combo.count(), 0);
        assert_eq!(combo.register_match(1000.0, 3000.0), 1);
    }
}
