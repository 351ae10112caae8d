use thiserror::Error;

/// Precondition violations raised by the board engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid size must be positive")]
    EmptyGrid,
    #[error("grid size {0} gives an odd tile count")]
    OddTileCount(u32),
    #[error("board needs {needed} glyphs but the alphabet only has {available}")]
    AlphabetExhausted { needed: usize, available: usize },
    #[error("no tile with id {0} on this board")]
    UnknownTile(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("high score storage is unavailable")]
    Unavailable,
    #[error("failed to write high score: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl From<GameError> for wasm_bindgen::JsValue {
    fn from(err: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
