//! A game between two players with clocks and a background computer player.
//!
//! The session is the only owner of the live [`GameState`]. Computer moves
//! are searched by a [`SearchScheduler`] worker on a private snapshot; the
//! reply is applied here, and only if the game is still at the ply it was
//! requested for. Once an outcome is recorded the state is frozen until
//! [`GameSession::new_game`].

use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info, warn};

use crate::config::EngineConfig;
use crate::engines::engine_alpha_beta::AlphaBetaEngine;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{ChessError, MoveRejected};
use crate::game_state::{chess_types::*, game_state::GameState, move_record::MoveRecord};
use crate::interface;
use crate::move_generation::terminal_detector::{DrawReason, GameStatus};
use crate::search::scheduler::{SearchId, SearchReply, SearchScheduler};
use crate::session::game_clock::GameClock;
use crate::session::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
    Timeout { winner: Color },
}

impl Outcome {
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } | Outcome::Timeout { winner } => Some(winner),
            Outcome::Stalemate | Outcome::Draw(_) => None,
        }
    }

    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Ongoing => None,
            GameStatus::Checkmate { winner } => Some(Outcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
            GameStatus::Draw(reason) => Some(Outcome::Draw(reason)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingSearch {
    id: SearchId,
    ply: usize,
    game_number: u64,
}

pub struct GameSession {
    state: GameState,
    /// Indexed by `Color::index`.
    players: [Player; 2],
    clock: GameClock,
    config: EngineConfig,
    outcome: Option<Outcome>,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
    scheduler: SearchScheduler,
    pending: Option<PendingSearch>,
    game_number: u64,
}

impl GameSession {
    pub fn new(white: Player, black: Player, config: EngineConfig) -> Self {
        let engine = AlphaBetaEngine::new(config.search_depth);
        Self::with_engine(white, black, config, Box::new(engine))
    }

    pub fn with_engine(white: Player, black: Player, config: EngineConfig, engine: Box<dyn Engine>) -> Self {
        info!("new session: {} (White) vs {} (Black)", white.name, black.name);
        Self {
            state: GameState::new_game(),
            players: [white, black],
            clock: GameClock::new(config.time_per_player),
            config,
            outcome: None,
            started_at: Utc::now(),
            finished_at: None,
            scheduler: SearchScheduler::spawn(engine),
            pending: None,
            game_number: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    #[inline]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.player(self.state.side_to_move).is_computer
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Wall time since the game started, or its total length once finished.
    pub fn duration(&self) -> TimeDelta {
        self.finished_at.unwrap_or_else(Utc::now) - self.started_at
    }

    pub fn status(&self) -> Result<GameStatus, ChessError> {
        interface::status(&self.state)
    }

    /// True while a dispatched search has not reported back, including one
    /// left over from a game that has since ended or been replaced.
    #[inline]
    pub fn is_searching(&self) -> bool {
        self.scheduler.is_searching()
    }

    /// Empty once the game is over.
    pub fn legal_destinations(&self, from: Square) -> Result<BTreeSet<Square>, ChessError> {
        if self.is_over() {
            return Ok(BTreeSet::new());
        }
        interface::legal_destinations(&self.state, from)
    }

    /// Play a move for a human on move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, ChessError> {
        if self.is_over() {
            return Err(MoveRejected::GameOver.into());
        }
        if self.is_computer_turn() || self.search_pending_in_this_game() {
            return Err(MoveRejected::AwaitingComputer.into());
        }

        let record = interface::attempt_move(&mut self.state, from, to)?;
        self.after_move(&record)?;
        Ok(record)
    }

    /// Start a background search for the computer on move.
    pub fn request_ai_move(&mut self) -> Result<SearchId, ChessError> {
        if self.is_over() {
            return Err(MoveRejected::GameOver.into());
        }
        if !self.is_computer_turn() {
            return Err(MoveRejected::NotComputerTurn.into());
        }
        self.state.verify_kings()?;

        let params = GoParams {
            depth: Some(self.config.search_depth),
        };
        let id = self.scheduler.dispatch(&self.state, params)?;
        self.pending = Some(PendingSearch {
            id,
            ply: self.state.ply(),
            game_number: self.game_number,
        });
        Ok(id)
    }

    /// Apply the computer's move if it has arrived. `Ok(None)` while the
    /// search is still running and when a stale reply was discarded.
    pub fn poll_ai_move(&mut self) -> Result<Option<MoveRecord>, ChessError> {
        match self.scheduler.try_recv()? {
            Some(reply) => self.accept_reply(reply),
            None => Ok(None),
        }
    }

    /// Block until the computer's move arrives, then apply it.
    pub fn wait_ai_move(&mut self) -> Result<Option<MoveRecord>, ChessError> {
        let reply = self.scheduler.wait()?;
        self.accept_reply(reply)
    }

    /// Charge `elapsed` to the side on move. Running out ends the game in
    /// the opponent's favour.
    pub fn tick_clock(&mut self, elapsed: TimeDelta) -> Option<Outcome> {
        if self.is_over() {
            return self.outcome;
        }
        let side = self.state.side_to_move;
        if self.clock.tick(side, elapsed) {
            self.finish(Outcome::Timeout {
                winner: side.opposite(),
            });
        }
        self.outcome
    }

    /// Reset the board and clocks, keeping the players and their records.
    /// A search still running for the previous game is discarded when it
    /// reports back.
    pub fn new_game(&mut self) -> Result<(), ChessError> {
        self.game_number += 1;
        self.state = GameState::new_game();
        self.clock.reset();
        self.outcome = None;
        self.started_at = Utc::now();
        self.finished_at = None;

        if self.scheduler.is_searching() {
            debug!("new game {} while a search is outstanding", self.game_number);
        } else {
            self.scheduler.new_game()?;
        }
        info!("game {} started", self.game_number);
        Ok(())
    }

    fn search_pending_in_this_game(&self) -> bool {
        self.pending
            .is_some_and(|pending| pending.game_number == self.game_number)
    }

    fn accept_reply(&mut self, reply: SearchReply) -> Result<Option<MoveRecord>, ChessError> {
        let current = self.pending.take();
        let fresh = current.is_some_and(|pending| {
            pending.id == reply.id && pending.game_number == self.game_number && pending.ply == self.state.ply()
        });
        if !fresh || self.is_over() {
            warn!("discarding stale reply to search {}", reply.id);
            if current.is_some_and(|pending| pending.game_number != self.game_number) {
                self.scheduler.new_game()?;
            }
            return Ok(None);
        }

        let output = reply.output?;
        let best = output.best_move.ok_or(ChessError::NoLegalMove)?;
        debug!(
            "search {} for {} took {:?}: {:?}",
            reply.id, reply.side, reply.elapsed, output.info_lines
        );

        self.state.verify_kings()?;
        let record = interface::attempt_move(&mut self.state, best.from, best.to)?;
        self.after_move(&record)?;
        Ok(Some(record))
    }

    fn after_move(&mut self, record: &MoveRecord) -> Result<(), ChessError> {
        info!(
            "{} played {}{} ({})",
            record.moved.color,
            record.from,
            record.to,
            self.player(record.moved.color).name
        );

        if let Some(outcome) = Outcome::from_status(self.status()?) {
            self.finish(outcome);
        }
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.finished_at = Some(Utc::now());

        let winner = outcome.winner();
        for color in [Color::White, Color::Black] {
            self.players[color.index()].record_game(winner == Some(color));
        }
        match winner {
            Some(color) => info!("game over: {outcome:?}, {} wins", self.player(color).name),
            None => info!("game over: {outcome:?}"),
        }
    }
}
