//! Property tests: engine invariants hold under random play.

use proptest::prelude::*;
use tictactoe_engine::invariants::{GameInvariants, InvariantSet};
use tictactoe_engine::{rules, Game, GameState, PlaceError, Token};

/// Plays row-major legal moves until the game ends.
fn play_to_end(game: &mut Game) {
    while let Some(player) = game.state().to_move() {
        let size = game.size();
        let blank = (0..size * size)
            .map(|idx| (idx / size, idx % size))
            .find(|&(row, col)| game.board().is_blank(row, col))
            .expect("in-progress game has a blank cell");

        game.place_marker(Token::from(player), blank.0, blank.1)
            .expect("legal move");
    }
}

#[test]
fn test_full_rollout_reaches_terminal_state() {
    for size in [3, 4, 5] {
        let mut game = Game::new(size);
        play_to_end(&mut game);

        assert!(game.state().is_terminal());
        assert!(GameInvariants::check_all(&game).is_ok());
    }
}

proptest! {
    #[test]
    fn random_play_respects_engine_invariants(
        size in 3usize..8,
        attempts in prop::collection::vec((0usize..10, 0usize..10), 1..60),
    ) {
        let mut game = Game::new(size);

        for (row, col) in attempts {
            let Some(player) = game.state().to_move() else {
                break;
            };

            let before = game.clone();
            match game.place_marker(Token::from(player), row, col) {
                Ok(state) => {
                    prop_assert_eq!(state, game.state());
                    prop_assert!(GameInvariants::check_all(&game).is_ok());

                    // Incremental detection agrees with a full rescan
                    prop_assert_eq!(
                        game.state().winner(),
                        rules::check_winner(game.board())
                    );
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }

    #[test]
    fn finished_game_rejects_placements_everywhere(
        size in 3usize..6,
        attempts in prop::collection::vec((0usize..8, 0usize..8), 1..20),
    ) {
        let mut game = Game::new(size);
        play_to_end(&mut game);
        let finished = game.clone();

        for (row, col) in attempts {
            for token in [Token::X, Token::O, Token::Blank] {
                prop_assert_eq!(
                    game.place_marker(token, row, col),
                    Err(PlaceError::GameOver)
                );
            }
        }
        prop_assert_eq!(&game, &finished);
    }

    #[test]
    fn turn_order_strictly_alternates(
        size in 3usize..8,
        attempts in prop::collection::vec((0usize..8, 0usize..8), 1..50),
    ) {
        let mut game = Game::new(size);

        for (row, col) in attempts {
            let GameState::Turn(player) = game.state() else {
                break;
            };

            // On a playable cell the opponent is rejected for turn order
            if game.board().is_blank(row, col) {
                prop_assert_eq!(
                    game.place_marker(Token::from(player.opponent()), row, col),
                    Err(PlaceError::WrongTurn(player.opponent()))
                );
            }

            if game.place_marker(Token::from(player), row, col).is_ok() {
                if let GameState::Turn(next) = game.state() {
                    prop_assert_eq!(next, player.opponent());
                }
            }
        }
    }
}
