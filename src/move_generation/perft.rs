//! Legal move-tree node counting.
//!
//! Every edge is played on a copy, so reveals accumulate along each path just
//! as they would in a real game.

use crate::game_state::chess_types::GameStatus;
use crate::game_state::game_state::Game;
use crate::move_generation::legal_move_apply::apply_legal_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub reveals: usize,
    pub checks: usize,
    pub checkmates: usize,
    pub draws: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.reveals += rhs.reveals;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
        self.draws += rhs.draws;
    }
}

/// Count the move sequences of exactly `depth` plies from `game`.
///
/// Finished games have no legal moves, so nothing is counted below them.
pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    if game.is_over() {
        return total;
    }

    for (from, to) in all_legal_moves(game.board(), game.turn()) {
        let (next, outcome) = apply_legal_move(game, from, to);

        if depth == 1 {
            total.nodes += 1;
            total.captures += usize::from(outcome.captured.is_some());
            total.reveals += usize::from(outcome.revealed.is_some());
            match outcome.status {
                GameStatus::Check => total.checks += 1,
                GameStatus::Checkmate => {
                    total.checks += 1;
                    total.checkmates += 1;
                }
                GameStatus::Draw => total.draws += 1,
                GameStatus::InProgress => {}
            }
        } else {
            total.merge(perft(&next, depth - 1));
        }
    }

    total
}
