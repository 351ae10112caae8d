/// Coarse game status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GameStatus {
    Ready,
    Playing,
    Won,
    Lost,
}

/// What can move the status machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    /// Player pressed begin / restart.
    Begin,
    /// Every pair on the board is matched.
    BoardCleared,
    /// The pause after a won level elapsed.
    AdvanceElapsed,
    /// Mind integrity hit zero.
    IntegrityDepleted,
}

impl GameStatus {
    /// Status after `event`, or `None` if the machine refuses it.
    pub fn next(self, event: StatusEvent) -> Option<GameStatus> {
        use GameStatus::*;
        use StatusEvent::*;
        match (self, event) {
            (Ready | Lost, Begin) => Some(Playing),
            (Playing, BoardCleared) => Some(Won),
            (Won, AdvanceElapsed) => Some(Ready),
            (Ready | Playing | Won, IntegrityDepleted) => Some(Lost),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus::*;
    use super::StatusEvent::*;

    #[test]
    fn begin_only_from_ready_or_lost() {
        assert_eq!(Ready.next(Begin), Some(Playing));
        assert_eq!(Lost.next(Begin), Some(Playing));
        assert_eq!(Playing.next(Begin), None);
        assert_eq!(Won.next(Begin), None);
    }

    #[test]
    fn level_cycle() {
        assert_eq!(Playing.next(BoardCleared), Some(Won));
        assert_eq!(Won.next(AdvanceElapsed), Some(Ready));
        assert_eq!(Ready.next(BoardCleared), None);
        assert_eq!(Playing.next(AdvanceElapsed), None);
    }

    #[test]
    fn lost_is_terminal_until_begin() {
        for s in [Ready, Playing, Won] {
            assert_eq!(s.next(IntegrityDepleted), Some(Lost));
        }
        assert_eq!(Lost.next(IntegrityDepleted), None);
        assert_eq!(Lost.next(BoardCleared), None);
        assert_eq!(Lost.next(AdvanceElapsed), None);
    }
}
