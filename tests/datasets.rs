// Dataset invariants for the glyph alphabet.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

#[test]
fn glyphs_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for g in neuro_reactive::MEMORY_GLYPHS {
        assert!(!g.trim().is_empty(), "blank glyph in MEMORY_GLYPHS");
        assert!(seen.insert(*g), "duplicate glyph '{}' in MEMORY_GLYPHS", g);
    }
}

// The 8x8 board needs 32 distinct glyphs at every level.
#[test]
fn alphabet_covers_the_largest_board() {
    let cfg = neuro_reactive::GameConfig::default();
    let max_pairs = (cfg.max_grid_size * cfg.max_grid_size / 2) as usize;
    assert!(neuro_reactive::MEMORY_GLYPHS.len() >= max_pairs);
}
