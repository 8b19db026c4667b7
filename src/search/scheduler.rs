//! Background search worker.
//!
//! A single worker thread owns the engine. The owning context sends it a
//! snapshot through a request channel and later collects the reply from a
//! reply channel; nothing is shared between the two sides. At most one search
//! is outstanding at a time and there is no mid-search cancellation.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::ChessError;
use crate::game_state::{chess_types::Color, game_state::GameState};

pub type SearchId = u64;

enum WorkerMessage {
    Search(SearchRequest),
    NewGame,
}

struct SearchRequest {
    id: SearchId,
    position: GameState,
    params: GoParams,
}

#[derive(Debug)]
pub struct SearchReply {
    pub id: SearchId,
    /// Side the search picked a move for.
    pub side: Color,
    pub output: Result<EngineOutput, ChessError>,
    pub elapsed: Duration,
}

pub struct SearchScheduler {
    request_tx: Option<Sender<WorkerMessage>>,
    reply_rx: Receiver<SearchReply>,
    worker: Option<JoinHandle<()>>,
    outstanding: Option<SearchId>,
    next_id: SearchId,
}

impl SearchScheduler {
    pub fn spawn(engine: Box<dyn Engine>) -> Self {
        let (request_tx, request_rx) = mpsc::channel();
        let (reply_tx, reply_rx) = mpsc::channel();
        let worker = thread::spawn(move || worker_loop(engine, request_rx, reply_tx));

        Self {
            request_tx: Some(request_tx),
            reply_rx,
            worker: Some(worker),
            outstanding: None,
            next_id: 0,
        }
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.outstanding.is_some()
    }

    #[inline]
    pub fn outstanding(&self) -> Option<SearchId> {
        self.outstanding
    }

    /// Send a private copy of `game_state` to the worker.
    pub fn dispatch(&mut self, game_state: &GameState, params: GoParams) -> Result<SearchId, ChessError> {
        if self.outstanding.is_some() {
            return Err(ChessError::SearchInProgress);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.send(WorkerMessage::Search(SearchRequest {
            id,
            position: game_state.snapshot(),
            params,
        }))?;

        debug!("dispatched search {id} for {}", game_state.side_to_move);
        self.outstanding = Some(id);
        Ok(id)
    }

    /// Reset engine state between games. Must not be called mid-search.
    pub fn new_game(&mut self) -> Result<(), ChessError> {
        if self.outstanding.is_some() {
            return Err(ChessError::SearchInProgress);
        }
        self.send(WorkerMessage::NewGame)
    }

    /// Non-blocking poll for the outstanding reply.
    pub fn try_recv(&mut self) -> Result<Option<SearchReply>, ChessError> {
        let Some(expected) = self.outstanding else {
            return Err(ChessError::NoSearchOutstanding);
        };

        loop {
            match self.reply_rx.try_recv() {
                Ok(reply) if reply.id == expected => {
                    self.outstanding = None;
                    return Ok(Some(reply));
                }
                Ok(reply) => warn!("dropping reply to superseded search {}", reply.id),
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => {
                    self.outstanding = None;
                    return Err(ChessError::SchedulerDisconnected);
                }
            }
        }
    }

    /// Block until the outstanding reply arrives.
    pub fn wait(&mut self) -> Result<SearchReply, ChessError> {
        let Some(expected) = self.outstanding else {
            return Err(ChessError::NoSearchOutstanding);
        };

        loop {
            match self.reply_rx.recv() {
                Ok(reply) if reply.id == expected => {
                    self.outstanding = None;
                    return Ok(reply);
                }
                Ok(reply) => warn!("dropping reply to superseded search {}", reply.id),
                Err(_) => {
                    self.outstanding = None;
                    return Err(ChessError::SchedulerDisconnected);
                }
            }
        }
    }

    fn send(&self, message: WorkerMessage) -> Result<(), ChessError> {
        self.request_tx
            .as_ref()
            .ok_or(ChessError::SchedulerDisconnected)?
            .send(message)
            .map_err(|_| ChessError::SchedulerDisconnected)
    }
}

impl Drop for SearchScheduler {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.request_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

fn worker_loop(mut engine: Box<dyn Engine>, requests: Receiver<WorkerMessage>, replies: Sender<SearchReply>) {
    while let Ok(message) = requests.recv() {
        match message {
            WorkerMessage::NewGame => engine.new_game(),
            WorkerMessage::Search(request) => {
                let started = Instant::now();
                let output = engine.choose_move(&request.position, &request.params);
                let reply = SearchReply {
                    id: request.id,
                    side: request.position.side_to_move,
                    output,
                    elapsed: started.elapsed(),
                };
                if replies.send(reply).is_err() {
                    break;
                }
            }
        }
    }
    debug!("search worker for {} exiting", engine.name());
}
