use web_sys::{Storage, window};

use crate::error::StorageError;
use crate::storage::{HighScoreStore, encode_high_score, parse_high_score};

/// High score kept in `window.localStorage` under a single key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Option<Storage> {
        window()?.local_storage().ok().flatten()
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load(&self) -> u32 {
        let raw = self.storage().and_then(|s| s.get_item(&self.key).ok().flatten());
        parse_high_score(raw.as_deref())
    }

    fn save(&self, score: u32) -> Result<(), StorageError> {
        let storage = self.storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(&self.key, &encode_high_score(score))
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}
