//! Board engine: the tiles for one level attempt and the pick/resolve cycle.
//!
//! A board is dealt from a sliding window of the glyph alphabet, shuffled, and
//! then driven by two calls: `select` for each player pick and `resolve` once
//! the reveal delay for a picked pair has elapsed. While a pair is waiting on
//! `resolve` the board is locked and every pick is ignored.
//!
//! The board never reads a clock or schedules anything itself; the session
//! controller owns time and tells the board when a resolution is due.

mod combo;
mod tile;

pub use combo::ComboTracker;
pub use tile::{Tile, TileId};

use crate::config::GameConfig;
use crate::error::BoardError;
use crate::rng::TileRng;

/// Outcome of a single pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Locked board, already picked, already matched, or a pair is pending.
    Ignored,
    /// First tile of a pair is face up.
    Revealed,
    /// Second tile is face up and the board is locked until `resolve`.
    PairPending { matching: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    Match { pair: [TileId; 2], combo_count: u32, points: u32 },
    Mismatch { pair: [TileId; 2] },
}

#[derive(Clone, Debug)]
pub struct Board {
    grid_size: u32,
    level: u32,
    tiles: Vec<Tile>,
    selection: Vec<TileId>,
    matched_pairs: u32,
    combo: ComboTracker,
    locked: bool,
}

impl Board {
    /// Deal a shuffled board from the built-in glyph alphabet.
    pub fn new(grid_size: u32, level: u32, rng: &mut TileRng) -> Result<Self, BoardError> {
        Self::with_alphabet(grid_size, level, crate::MEMORY_GLYPHS, rng)
    }

    pub fn with_alphabet(
        grid_size: u32,
        level: u32,
        alphabet: &'static [&'static str],
        rng: &mut TileRng,
    ) -> Result<Self, BoardError> {
        let symbols = select_symbols(grid_size, level, alphabet)?;

        let mut tiles: Vec<Tile> = symbols
            .iter()
            .chain(symbols.iter())
            .enumerate()
            .map(|(id, &symbol)| Tile::new(id as TileId, symbol))
            .collect();
        rng.shuffle(&mut tiles);

        Ok(Self {
            grid_size,
            level,
            tiles,
            selection: Vec::with_capacity(2),
            matched_pairs: 0,
            combo: ComboTracker::default(),
            locked: false,
        })
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Tiles in display order (row-major).
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn pairs_count(&self) -> u32 {
        self.grid_size * self.grid_size / 2
    }

    pub fn combo_count(&self) -> u32 {
        self.combo.count()
    }

    pub fn last_match_ms(&self) -> Option<f64> {
        self.combo.last_match_ms()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.pairs_count()
    }

    fn position(&self, id: TileId) -> Result<usize, BoardError> {
        self.tiles.iter().position(|t| t.id == id).ok_or(BoardError::UnknownTile(id))
    }

    /// Flip tile `id` face up. Picks the board cannot take right now are
    /// `Ok(Selection::Ignored)`; only an id that is not on the board is an error.
    pub fn select(&mut self, id: TileId) -> Result<Selection, BoardError> {
        let idx = self.position(id)?;
        if self.locked
            || self.selection.len() >= 2
            || self.selection.contains(&id)
            || self.tiles[idx].matched
        {
            return Ok(Selection::Ignored);
        }

        self.tiles[idx].flipped = true;
        self.selection.push(id);

        if self.selection.len() < 2 {
            return Ok(Selection::Revealed);
        }
        self.locked = true;
        let matching = self.pending_pair_matches().unwrap_or(false);
        Ok(Selection::PairPending { matching })
    }

    fn pending_pair_matches(&self) -> Option<bool> {
        let [a, b] = self.pending_pair()?;
        Some(self.tile(a)?.symbol == self.tile(b)?.symbol)
    }

    fn pending_pair(&self) -> Option<[TileId; 2]> {
        match self.selection.as_slice() {
            &[a, b] => Some([a, b]),
            _ => None,
        }
    }

    /// Settle the pending pair. Returns `None` when no pair is pending, which
    /// is how a late timer aimed at an already settled pair shows up.
    pub fn resolve(&mut self, now_ms: f64, cfg: &GameConfig) -> Option<Resolution> {
        let pair = self.pending_pair()?;
        let matching = self.pending_pair_matches()?;

        for tile in self.tiles.iter_mut().filter(|t| pair.contains(&t.id)) {
            tile.flipped = false;
            if matching {
                tile.matched = true;
            }
        }
        self.selection.clear();
        self.locked = false;

        if matching {
            self.matched_pairs += 1;
            let combo_count = self.combo.register_match(now_ms, cfg.combo_window_ms);
            let points = cfg.match_points(combo_count, self.level);
            Some(Resolution::Match { pair, combo_count, points })
        } else {
            self.combo.break_chain();
            Some(Resolution::Mismatch { pair })
        }
    }
}

/// Window of `alphabet` used for a `grid_size` board at `level`. Higher levels
/// slide the window along so later boards use different glyphs.
pub fn select_symbols(
    grid_size: u32,
    level: u32,
    alphabet: &'static [&'static str],
) -> Result<&'static [&'static str], BoardError> {
    if grid_size == 0 {
        return Err(BoardError::EmptyGrid);
    }
    let total = grid_size as usize * grid_size as usize;
    if total % 2 != 0 {
        return Err(BoardError::OddTileCount(grid_size));
    }
    let pairs = total / 2;
    if pairs > alphabet.len() {
        return Err(BoardError::AlphabetExhausted { needed: pairs, available: alphabet.len() });
    }
    let offset = (level as usize / 2).min(alphabet.len() - pairs);
    Ok(&alphabet[offset..offset + pairs])
}
