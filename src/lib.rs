//! Crate root module declarations for the Reveal Chess rules engine.
//!
//! Exposes the game model, movement tables, legality and status evaluation,
//! the observer-safe projection, and the text front end used by the binary.

pub mod errors;
pub mod game_interface;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod projection;
    pub mod setup;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_rays;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod cli {
    pub mod cli_config;
    pub mod command_loop;
    pub mod stderr_logger;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
