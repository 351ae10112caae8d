//! Tunable game constants.
//!
//! All timings are milliseconds on the same clock the host feeds into
//! `SessionController::tick` (browser `performance.now()`).

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Reveal time before a matching pair is locked in.
    pub match_delay_ms: f64,
    /// Reveal time before a mismatched pair flips back.
    pub mismatch_delay_ms: f64,
    /// Two matches closer than this chain into a combo.
    pub combo_window_ms: f64,
    pub combo_multiplier_cap: u32,
    /// How long the HUD combo amplifier stays raised after a score award.
    pub combo_display_decay_ms: f64,
    /// Pause in `Won` before the session returns to `Ready`.
    pub advance_delay_ms: f64,
    pub base_match_points: u32,
    pub level_bonus_per_level: u32,
    pub starting_grid_size: u32,
    pub max_grid_size: u32,
    pub grid_growth: u32,
    pub starting_integrity: u32,
    pub base_damage: u32,
    pub damage_level_divisor: u32,
    pub max_damage: u32,
    pub high_score_key: String,
    /// Begin the next level as soon as the session returns to `Ready`.
    pub auto_begin_next_level: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_delay_ms: 500.0,
            mismatch_delay_ms: 1000.0,
            combo_window_ms: 3000.0,
            combo_multiplier_cap: 5,
            combo_display_decay_ms: 1500.0,
            advance_delay_ms: 2000.0,
            base_match_points: 10,
            level_bonus_per_level: 100,
            starting_grid_size: 4,
            max_grid_size: 8,
            grid_growth: 2,
            starting_integrity: 100,
            base_damage: 10,
            damage_level_divisor: 3,
            max_damage: 20,
            high_score_key: "neuroReactiveHighScore".to_string(),
            auto_begin_next_level: false,
        }
    }
}

impl GameConfig {
    /// Integrity lost on one mismatch at `level`.
    pub fn damage_for_level(&self, level: u32) -> u32 {
        (self.base_damage + level / self.damage_level_divisor.max(1)).min(self.max_damage)
    }

    /// Grid size to use once the session reaches `next_level`.
    pub fn grid_size_for(&self, current: u32, next_level: u32) -> u32 {
        if next_level % 2 == 0 {
            (current + self.grid_growth).min(self.max_grid_size)
        } else {
            current
        }
    }

    /// Points for one match with the given (already updated) combo count.
    pub fn match_points(&self, combo_count: u32, level: u32) -> u32 {
        self.base_match_points + combo_count.min(self.combo_multiplier_cap) * level
    }

    pub fn level_bonus(&self, level: u32) -> u32 {
        level * self.level_bonus_per_level
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_grows_with_level_and_caps() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.damage_for_level(1), 10);
        assert_eq!(cfg.damage_for_level(5), 11);
        assert_eq!(cfg.damage_for_level(30), 20);
        assert_eq!(cfg.damage_for_level(300), 20);
    }

    #[test]
    fn grid_grows_on_even_levels_only() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.grid_size_for(4, 2), 6);
        assert_eq!(cfg.grid_size_for(6, 3), 6);
        assert_eq!(cfg.grid_size_for(6, 4), 8);
        assert_eq!(cfg.grid_size_for(8, 6), 8);
    }

    #[test]
    fn combo_multiplier_is_capped() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.match_points(1, 1), 11);
        assert_eq!(cfg.match_points(3, 2), 16);
        assert_eq!(cfg.match_points(9, 2), 20);
    }
}
