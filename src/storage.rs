//! High score persistence seam.
//!
//! The stored value is a decimal integer as text. A missing or unparsable
//! entry reads as "no high score yet".

use std::cell::Cell;
use std::rc::Rc;

use crate::error::StorageError;

pub trait HighScoreStore {
    /// Recorded high score, `0` when absent or unreadable.
    fn load(&self) -> u32;
    fn save(&self, score: u32) -> Result<(), StorageError>;
}

pub fn parse_high_score(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}

pub fn encode_high_score(score: u32) -> String {
    score.to_string()
}

/// In-memory store. Clones share the same slot so a test can keep a handle
/// while the controller owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<Cell<Option<u32>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(score: u32) -> Self {
        Self { slot: Rc::new(Cell::new(Some(score))) }
    }

    pub fn stored(&self) -> Option<u32> {
        self.slot.get()
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.slot.get().unwrap_or(0)
    }

    fn save(&self, score: u32) -> Result<(), StorageError> {
        self.slot.set(Some(score));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_treats_missing_and_corrupt_as_zero() {
        assert_eq!(parse_high_score(None), 0);
        assert_eq!(parse_high_score(Some("")), 0);
        assert_eq!(parse_high_score(Some("abc")), 0);
        assert_eq!(parse_high_score(Some("-5")), 0);
        assert_eq!(parse_high_score(Some("144")), 144);
        assert_eq!(parse_high_score(Some(" 88 ")), 88);
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        assert_eq!(store.load(), 0);
        store.save(310).unwrap();
        assert_eq!(handle.stored(), Some(310));
        assert_eq!(encode_high_score(310), "310");
    }
}
