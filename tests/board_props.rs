// Property and statistical checks for board generation.

use std::collections::HashMap;

use neuro_reactive::{Board, BoardError, MEMORY_GLYPHS, TileRng};

#[test]
fn every_reachable_board_is_well_formed() {
    let mut rng = TileRng::new(2024);
    for grid in [4u32, 6, 8] {
        for level in 1..=40u32 {
            let board = Board::new(grid, level, &mut rng).unwrap();
            let n = (grid * grid) as usize;
            assert_eq!(board.tiles().len(), n, "grid {grid} level {level}");

            let mut ids: Vec<u32> = board.tiles().iter().map(|t| t.id).collect();
            ids.sort_unstable();
            assert_eq!(ids, (0..n as u32).collect::<Vec<_>>(), "ids must be 0..{n}");

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for t in board.tiles() {
                *counts.entry(t.symbol).or_default() += 1;
            }
            assert_eq!(counts.len(), n / 2, "grid {grid} level {level}");
            assert!(counts.values().all(|&c| c == 2), "every symbol appears exactly twice");

            let offset = (level as usize / 2).min(MEMORY_GLYPHS.len() - n / 2);
            for sym in &MEMORY_GLYPHS[offset..offset + n / 2] {
                assert_eq!(counts.get(sym), Some(&2), "window glyph {sym} missing");
            }
        }
    }
}

#[test]
fn level_one_uses_the_start_of_the_alphabet() {
    let board = Board::new(4, 1, &mut TileRng::new(1)).unwrap();
    let mut symbols: Vec<&str> = board.tiles().iter().map(|t| t.symbol).collect();
    symbols.sort_unstable();
    symbols.dedup();
    let mut expected = MEMORY_GLYPHS[..8].to_vec();
    expected.sort_unstable();
    assert_eq!(symbols, expected);
}

#[test]
fn shuffle_positions_are_roughly_uniform() {
    const TRIALS: usize = 16_000;
    let mut rng = TileRng::new(0xC0FFEE);
    let mut first_id_at = [0usize; 16];
    let mut last_id_at = [0usize; 16];
    for _ in 0..TRIALS {
        let board = Board::new(4, 1, &mut rng).unwrap();
        for (pos, t) in board.tiles().iter().enumerate() {
            if t.id == 0 {
                first_id_at[pos] += 1;
            }
            if t.id == 15 {
                last_id_at[pos] += 1;
            }
        }
    }
    // Expected 1000 per slot, sd ~31; allow a wide margin.
    for counts in [first_id_at, last_id_at] {
        for (pos, &c) in counts.iter().enumerate() {
            assert!((800..=1200).contains(&c), "position {pos} got {c} of {TRIALS}");
        }
    }
}

#[test]
fn invalid_boards_are_rejected() {
    let mut rng = TileRng::new(3);
    assert_eq!(Board::new(0, 1, &mut rng).err(), Some(BoardError::EmptyGrid));
    assert_eq!(Board::new(5, 1, &mut rng).err(), Some(BoardError::OddTileCount(5)));
    assert_eq!(
        Board::new(10, 1, &mut rng).err(),
        Some(BoardError::AlphabetExhausted { needed: 50, available: MEMORY_GLYPHS.len() })
    );
    static SHORT: &[&str] = &["x", "y", "z"];
    assert_eq!(
        Board::with_alphabet(4, 1, SHORT, &mut rng).err(),
        Some(BoardError::AlphabetExhausted { needed: 8, available: 3 })
    );
}
