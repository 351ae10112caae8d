/// Audio/visual cue the core asks the front end to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    TileSelected,
    MatchSuccess,
    GameOver,
    GameStart,
}

/// Fire-and-forget effect sink. Implementations must not fail loudly; the
/// core never waits on them.
pub trait Feedback {
    fn play(&self, effect: Effect);
}

/// Plays nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&self, _effect: Effect) {}
}
