//! Crate root module declarations for the chess rules core.
//!
//! Board representation, the legality oracle and move executor, terminal
//! detection, alpha-beta search with a background scheduler, and a game
//! session tying players and clocks together. Rendering and input handling
//! belong to the front end.

pub mod config;
pub mod errors;
pub mod interface;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_record;
}

pub mod moves {
    pub mod leaper_attacks;
    pub mod slider_attacks;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliders;
    pub mod perft;
    pub mod terminal_detector;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod scheduler;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod game_clock;
    pub mod game_session;
    pub mod player;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
}
