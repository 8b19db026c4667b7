use std::thread;

use crate::errors::ChessError;
use crate::game_state::game_state::GameState;
use crate::game_state::move_record::{MoveRecord, SpecialMove};
use crate::move_generation::legal_move_apply::{apply, undo};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, legal_moves};

/// Leaf statistics of a perft walk. Everything but `nodes` describes the
/// move that reached each leaf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn record_leaf(&mut self, game_state: &GameState, record: &MoveRecord) {
        self.nodes += 1;

        if record.is_capture() {
            self.captures += 1;
        }
        match record.special {
            SpecialMove::EnPassantCapture => self.en_passant += 1,
            SpecialMove::CastleKingside | SpecialMove::CastleQueenside => self.castles += 1,
            SpecialMove::Promotion => self.promotions += 1,
            SpecialMove::None | SpecialMove::DoubleStep => {}
        }

        if in_check(&game_state.board, game_state.side_to_move) {
            self.checks += 1;
            if !has_legal_move(game_state) {
                self.checkmates += 1;
            }
        }
    }
}

#[inline]
pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessError> {
    perft_single_thread(game_state, depth)
}

pub fn perft_single_thread(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessError> {
    game_state.verify_kings()?;
    let mut scratch = game_state.snapshot();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, None, &mut total)?;
    Ok(total)
}

/// Same counts as [`perft_single_thread`], one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessError> {
    game_state.verify_kings()?;
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let root = game_state.snapshot();
    let results = thread::scope(|scope| {
        let handles: Vec<_> = legal_moves(&root)
            .into_iter()
            .map(|mv| {
                let mut local_state = root.clone();
                scope.spawn(move || -> Result<PerftCounts, ChessError> {
                    let record = apply(&mut local_state, mv.from, mv.to)?;
                    let mut local = PerftCounts::default();
                    perft_recurse(&mut local_state, depth - 1, Some(record), &mut local)?;
                    Ok(local)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .map_err(|_| ChessError::WorkerPanicked)
                    .and_then(|result| result)
            })
            .collect::<Vec<_>>()
    });

    let mut total = PerftCounts::default();
    for local in results {
        total.merge(local?);
    }
    Ok(total)
}

fn perft_recurse(
    game_state: &mut GameState,
    depth: u8,
    last: Option<MoveRecord>,
    counts: &mut PerftCounts,
) -> Result<(), ChessError> {
    if depth == 0 {
        match last {
            Some(record) => counts.record_leaf(game_state, &record),
            None => counts.nodes += 1,
        }
        return Ok(());
    }

    for mv in legal_moves(game_state) {
        let record = apply(game_state, mv.from, mv.to)?;
        let result = perft_recurse(game_state, depth - 1, Some(record), counts);
        undo(game_state);
        result?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft").nodes, 400);

        let depth3 = perft(&game, 3).expect("perft");
        assert_eq!(depth3.nodes, 8_902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
        assert_eq!(depth3.checkmates, 0);
    }

    #[test]
    fn position_3_counts_en_passant() {
        let game = GameState::from_fen(POSITION_3).expect("fen");
        assert_eq!(perft(&game, 1).expect("perft").nodes, 14);
        assert_eq!(perft(&game, 2).expect("perft").nodes, 191);

        let depth3 = perft(&game, 3).expect("perft");
        assert_eq!(depth3.nodes, 2_812);
        assert_eq!(depth3.captures, 209);
        assert_eq!(depth3.en_passant, 2);
        assert_eq!(depth3.checks, 267);
    }

    #[test]
    fn kiwipete_counts_castles() {
        let game = GameState::from_fen(KIWIPETE).expect("fen");
        let depth1 = perft(&game, 1).expect("perft");
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.castles, 2);
        assert_eq!(depth1.captures, 8);

        let depth2 = perft(&game, 2).expect("perft");
        assert_eq!(depth2.nodes, 2_039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn multi_threaded_matches_single_thread() {
        let game = GameState::from_fen(KIWIPETE).expect("fen");
        assert_eq!(
            perft_multi_threaded(&game, 2).expect("perft"),
            perft_single_thread(&game, 2).expect("perft")
        );
    }

    #[test]
    fn perft_leaves_input_untouched() {
        let game = GameState::new_game();
        let before = game.clone();
        perft(&game, 2).expect("perft");
        assert_eq!(game, before);
    }
}
