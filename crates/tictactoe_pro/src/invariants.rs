//! Consistency checks run against the engine after it changes.
//!
//! Each check is a zero-sized type naming one property of the board, the
//! scoreboard, or the recorded win. Debug builds run the whole group after
//! every move and reset.

use crate::engine::GameEngine;
use tracing::warn;

/// One property of `S` that every reachable state satisfies.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Short sentence naming the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property that failed, carrying its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// What the failed property states.
    pub description: String,
}

impl InvariantViolation {
    /// Records a failed property.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A tuple of [`Invariant`]s run as one group.
pub trait InvariantSet<S> {
    /// Runs every member against `state`, reporting each one that fails
    /// in tuple order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);

/// Invariant: exactly one square per coordinate.
pub struct BoardShapeInvariant;

impl Invariant<GameEngine> for BoardShapeInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let size = engine.board_size();
        engine.board().squares().len() == size * size
    }

    fn description() -> &'static str {
        "Board has exactly one square per coordinate"
    }
}

/// Invariant: the scoreboard tracks every player and nobody else.
pub struct ScoreboardCoverageInvariant;

impl Invariant<GameEngine> for ScoreboardCoverageInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let scoreboard = engine.scoreboard();
        scoreboard.len() == engine.players().len()
            && engine
                .players()
                .iter()
                .all(|p| scoreboard.get_score(p.label()).is_some())
    }

    fn description() -> &'static str {
        "Scoreboard has one entry per configured player"
    }
}

/// Invariant: a winner is declared exactly when a uniform combo is recorded.
pub struct WinnerConsistentInvariant;

impl Invariant<GameEngine> for WinnerConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let combo = engine.winning_combo();
        if !engine.has_winner() {
            return combo.is_empty();
        }

        let Some(first) = combo.first() else {
            return false;
        };
        let Some(label) = engine.board().get(*first).and_then(|s| s.label()) else {
            return false;
        };
        combo.len() == engine.board_size()
            && combo
                .iter()
                .all(|c| engine.board().get(*c).and_then(|s| s.label()) == Some(label))
    }

    fn description() -> &'static str {
        "Winner flag matches a uniformly marked winning combo"
    }
}

/// Everything the engine checks after a move or reset.
pub type EngineInvariants = (
    BoardShapeInvariant,
    ScoreboardCoverageInvariant,
    WinnerConsistentInvariant,
);

/// Panics in debug builds if the engine is inconsistent.
pub(crate) fn assert_invariants(engine: &GameEngine) {
    if cfg!(debug_assertions)
        && let Err(violations) = EngineInvariants::check_all(engine)
    {
        for violation in &violations {
            warn!(description = %violation.description, "Engine invariant violated");
        }
        panic!("Engine invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Move, Player};

    fn engine() -> GameEngine {
        GameEngine::new(
            vec![Player::new("X", "red"), Player::new("O", "green")],
            3,
        )
        .unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_new_engine() {
        assert!(EngineInvariants::check_all(&engine()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_win() {
        let mut game = engine();
        for col in 0..3 {
            game.process_move(Move::new(0, col, "X")).unwrap();
        }
        assert!(game.has_winner());
        assert!(EngineInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BoardShapeInvariant, WinnerConsistentInvariant);
        assert!(TwoInvariants::check_all(&engine()).is_ok());
    }

    struct NeverHolds;

    impl Invariant<GameEngine> for NeverHolds {
        fn holds(_: &GameEngine) -> bool {
            false
        }

        fn description() -> &'static str {
            "never"
        }
    }

    #[test]
    fn test_invariant_set_reports_violations() {
        type Set = (BoardShapeInvariant, NeverHolds, NeverHolds);
        let violations = Set::check_all(&engine()).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new("never"), InvariantViolation::new("never")]
        );
    }
}
