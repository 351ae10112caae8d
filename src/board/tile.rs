pub type TileId = u32;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tile {
    pub id: TileId,
    pub symbol: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

impl Tile {
    pub const fn new(id: TileId, symbol: &'static str) -> Self {
        Self { id, symbol, flipped: false, matched: false }
    }

    /// Symbol is visible to the player.
    pub fn face_up(&self) -> bool {
        self.flipped || self.matched
    }
}
