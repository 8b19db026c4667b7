//! Errors used throughout the crate.
//!
//! `ChessError` is the single error type returned by the public operations.
//! `MoveRejected` is the expected, user-facing outcome of an illegal move and
//! converts into `ChessError` with `?`.
//!
//! Variants fall in three groups:
//! - caller contract violations (`InvalidCoordinate`, `InvalidSquareName`,
//!   `InvalidFen`, `SearchInProgress`, `NoSearchOutstanding`);
//! - normal game outcomes (`MoveRejected`, `NoLegalMove`);
//! - fatal corruption (`MissingKing`, `SchedulerDisconnected`,
//!   `WorkerPanicked`), which callers should surface instead of recovering
//!   from.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind};

/// Reason a coordinate pair was refused as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejected {
    #[error("there is no piece on the origin square")]
    NoPieceAtOrigin,

    #[error("the piece on the origin square belongs to the side not on move")]
    NotSideToMove,

    #[error("origin and destination are the same square")]
    NullMove,

    #[error("the destination is occupied by a piece of the same color")]
    DestinationOccupiedByOwnPiece,

    #[error("a {0:?} cannot move that way")]
    InvalidPattern(PieceKind),

    #[error("the move would leave the king in check")]
    LeavesKingInCheck,

    #[error("the game is over")]
    GameOver,

    #[error("the computer is to move")]
    AwaitingComputer,

    #[error("a human player is to move")]
    NotComputerTurn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A square outside `[0, 7] x [0, 7]` was given by a caller.
    #[error("invalid coordinate ({row}, {col})")]
    InvalidCoordinate { row: u8, col: u8 },

    #[error("move rejected: {0}")]
    MoveRejected(#[from] MoveRejected),

    /// Search was asked for a move in a position without any.
    #[error("no legal move is available")]
    NoLegalMove,

    /// The board lost a king; a prior move application is broken.
    #[error("fatal: the {0} king is missing from the board")]
    MissingKing(Color),

    #[error("a search is already outstanding")]
    SearchInProgress,

    #[error("no search is outstanding")]
    NoSearchOutstanding,

    #[error("search worker disconnected")]
    SchedulerDisconnected,

    #[error("a worker thread panicked")]
    WorkerPanicked,

    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
