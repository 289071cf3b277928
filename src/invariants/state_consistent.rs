//! State consistency invariant: reported state matches the board.

use crate::game::Game;
use crate::invariants::Invariant;
use crate::rules;
use crate::types::GameState;

/// The reported game state agrees with a full-board rescan.
///
/// A `Won` state requires that player to own a completed line, `Draw`
/// requires a full board with no winner, and an in-progress game must
/// have no winner and at least one blank cell.
pub struct StateConsistentInvariant;

impl Invariant<Game> for StateConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.state() {
            GameState::Won(player) => rules::check_winner(game.board()) == Some(player),
            GameState::Draw => rules::is_draw(game.board()),
            GameState::Turn(_) => {
                rules::check_winner(game.board()).is_none() && !rules::is_full(game.board())
            }
        }
    }

    fn description() -> &'static str {
        "Reported game state agrees with a full-board rescan"
    }
}
