//! Session controller: level progression, score, mind integrity and the
//! status machine, with the board engine doing tile-level play underneath.
//!
//! Time only moves when the host calls [`SessionController::tick`]. Reveal
//! delays, the HUD combo decay and the pause after a won level are queued as
//! [`TimerEvent`]s tagged with the epoch of the board they belong to; a new
//! board bumps the epoch so anything still queued for the old one is dropped
//! when it comes due.

mod status;

pub use status::{GameStatus, StatusEvent};

use crate::board::{Board, Resolution, Selection, TileId};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::feedback::{Effect, Feedback};
use crate::log;
use crate::rng::TileRng;
use crate::storage::HighScoreStore;
use crate::timer::TimerQueue;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Settle the pair that was picked.
    Resolve,
    /// Drop the HUD combo amplifier back to 1.
    ComboDecay,
    /// Leave `Won` for `Ready`.
    Advance,
}

/// Advisory messages for the front end. They never feed back into the core.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "camelCase"))]
pub enum Notice {
    LevelComplete { level: u32, bonus: u32 },
    Combo { count: u32 },
    GameOver { score: u32, level: u32 },
}

/// Read-only view of the session for rendering and for JS hosts.
/// Face-down tiles carry no symbol.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Snapshot {
    pub status: GameStatus,
    pub level: u32,
    pub grid_size: u32,
    pub score: u32,
    pub high_score: u32,
    pub mind_integrity: u32,
    pub combo_display: u32,
    pub locked: bool,
    pub tiles: Vec<TileView>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileView {
    pub id: TileId,
    pub symbol: Option<&'static str>,
    pub flipped: bool,
    pub matched: bool,
}

pub struct SessionController {
    config: GameConfig,
    level: u32,
    grid_size: u32,
    score: u32,
    high_score: u32,
    mind_integrity: u32,
    combo_display: u32,
    status: GameStatus,
    board: Option<Board>,
    timers: TimerQueue<TimerEvent>,
    epoch: u64,
    rng: TileRng,
    store: Box<dyn HighScoreStore>,
    feedback: Box<dyn Feedback>,
    notices: Vec<Notice>,
}

impl SessionController {
    pub fn new(
        config: GameConfig,
        store: Box<dyn HighScoreStore>,
        feedback: Box<dyn Feedback>,
        rng: TileRng,
    ) -> Self {
        let high_score = store.load();
        Self {
            level: 1,
            grid_size: config.starting_grid_size,
            score: 0,
            high_score,
            mind_integrity: config.starting_integrity,
            combo_display: 1,
            status: GameStatus::Ready,
            board: None,
            timers: TimerQueue::new(),
            epoch: 0,
            rng,
            store,
            feedback,
            notices: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn mind_integrity(&self) -> u32 {
        self.mind_integrity
    }

    pub fn combo_display(&self) -> u32 {
        self.combo_display
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Due time of the earliest queued timer, stale ones included.
    pub fn next_timer_due(&self) -> Option<f64> {
        self.timers.next_due()
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Begin (or restart after a loss). Returns `Ok(false)` when the current
    /// status does not accept a begin.
    pub fn begin(&mut self, now_ms: f64) -> Result<bool, GameError> {
        let Some(next) = self.status.next(StatusEvent::Begin) else {
            log::debug("begin", &format!("ignored while {}", self.status.as_str()));
            return Ok(false);
        };
        if self.status == GameStatus::Lost {
            self.reset_progress();
        }

        let board = Board::new(self.grid_size, self.level, &mut self.rng)?;
        self.board = Some(board);
        self.epoch += 1;
        self.combo_display = 1;
        self.status = next;

        log::info(
            "begin",
            &format!(
                "level {} grid {}x{} at {:.0}ms",
                self.level, self.grid_size, self.grid_size, now_ms
            ),
        );
        self.feedback.play(Effect::GameStart);
        Ok(true)
    }

    fn reset_progress(&mut self) {
        self.level = 1;
        self.score = 0;
        self.grid_size = self.config.starting_grid_size;
        self.mind_integrity = self.config.starting_integrity;
        self.combo_display = 1;
    }

    /// Player picked tile `id`. Outside `Playing` every pick is ignored.
    pub fn select_tile(&mut self, id: TileId, now_ms: f64) -> Result<Selection, GameError> {
        if self.status != GameStatus::Playing {
            return Ok(Selection::Ignored);
        }
        let Some(board) = self.board.as_mut() else {
            return Ok(Selection::Ignored);
        };

        let selection = board.select(id)?;
        match selection {
            Selection::Ignored => {}
            Selection::Revealed => self.feedback.play(Effect::TileSelected),
            Selection::PairPending { matching } => {
                self.feedback.play(Effect::TileSelected);
                let delay = if matching {
                    self.config.match_delay_ms
                } else {
                    self.config.mismatch_delay_ms
                };
                self.timers.schedule(now_ms + delay, self.epoch, TimerEvent::Resolve);
            }
        }
        Ok(selection)
    }

    /// Fire every timer due at or before `now_ms`, oldest first.
    pub fn tick(&mut self, now_ms: f64) -> Result<(), GameError> {
        while let Some(timer) = self.timers.pop_due(now_ms) {
            if timer.epoch != self.epoch {
                log::debug(
                    "tick",
                    &format!("dropping stale {:?} from epoch {}", timer.event, timer.epoch),
                );
                continue;
            }
            match timer.event {
                TimerEvent::Resolve => self.on_resolve(timer.due_ms),
                TimerEvent::ComboDecay => self.combo_display = 1,
                TimerEvent::Advance => self.on_advance(timer.due_ms)?,
            }
        }
        Ok(())
    }

    fn on_resolve(&mut self, now_ms: f64) {
        if self.status != GameStatus::Playing {
            return;
        }
        let Some(board) = self.board.as_mut() else {
            return;
        };
        let Some(resolution) = board.resolve(now_ms, &self.config) else {
            return;
        };

        match resolution {
            Resolution::Match { combo_count, points, .. } => {
                self.award(points, now_ms);
                self.feedback.play(Effect::MatchSuccess);
                if combo_count > 1 {
                    self.notices.push(Notice::Combo { count: combo_count });
                }
                self.check_completion(now_ms);
            }
            Resolution::Mismatch { .. } => {
                self.apply_mistake();
            }
        }
    }

    fn check_completion(&mut self, now_ms: f64) {
        let cleared = self.board.as_ref().is_some_and(Board::is_complete);
        if !cleared || self.status != GameStatus::Playing {
            return;
        }

        let level = self.level;
        let bonus = self.config.level_bonus(level);
        self.award(bonus, now_ms);
        self.notices.push(Notice::LevelComplete { level, bonus });
        log::info("level", &format!("level {level} complete, bonus {bonus}"));

        if self.transition(StatusEvent::BoardCleared) {
            let next_level = level + 1;
            self.grid_size = self.config.grid_size_for(self.grid_size, next_level);
            self.level = next_level;
            self.board = None;
            self.timers.schedule(
                now_ms + self.config.advance_delay_ms,
                self.epoch,
                TimerEvent::Advance,
            );
        }
    }

    fn on_advance(&mut self, now_ms: f64) -> Result<(), GameError> {
        if self.transition(StatusEvent::AdvanceElapsed) && self.config.auto_begin_next_level {
            self.begin(now_ms)?;
        }
        Ok(())
    }

    /// Score award as seen by the player: points plus a raised HUD combo
    /// amplifier that decays after a short while.
    fn award(&mut self, points: u32, now_ms: f64) {
        self.apply_score(points);
        self.combo_display += 1;
        self.timers.schedule(
            now_ms + self.config.combo_display_decay_ms,
            self.epoch,
            TimerEvent::ComboDecay,
        );
    }

    /// Add `points` to the score, recording a new high score if beaten.
    pub fn apply_score(&mut self, points: u32) {
        self.score += points;
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(err) = self.store.save(self.high_score) {
                log::warn("storage", &err.to_string());
            }
        }
    }

    /// Take mismatch damage for the current level. Returns the damage dealt.
    pub fn apply_mistake(&mut self) -> u32 {
        let damage = self.config.damage_for_level(self.level);
        self.mind_integrity = self.mind_integrity.saturating_sub(damage);
        self.combo_display = 1;

        if self.mind_integrity == 0 && self.transition(StatusEvent::IntegrityDepleted) {
            log::info(
                "game_over",
                &format!("integrity collapsed at level {} with score {}", self.level, self.score),
            );
            self.feedback.play(Effect::GameOver);
            self.notices.push(Notice::GameOver { score: self.score, level: self.level });
        }
        damage
    }

    fn transition(&mut self, event: StatusEvent) -> bool {
        match self.status.next(event) {
            Some(next) => {
                self.status = next;
                true
            }
            None => {
                log::debug(
                    "status",
                    &format!("refused {:?} while {}", event, self.status.as_str()),
                );
                false
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let tiles = self
            .board
            .as_ref()
            .map(|b| {
                b.tiles()
                    .iter()
                    .map(|t| TileView {
                        id: t.id,
                        symbol: t.face_up().then_some(t.symbol),
                        flipped: t.flipped,
                        matched: t.matched,
                    })
                    .collect()
            })
            .unwrap_or_default();
        Snapshot {
            status: self.status,
            level: self.level,
            grid_size: self.grid_size,
            score: self.score,
            high_score: self.high_score,
            mind_integrity: self.mind_integrity,
            combo_display: self.combo_display,
            locked: self.board.as_ref().is_some_and(Board::is_locked),
            tiles,
        }
    }
}
