//! Running a search off the calling thread.
//!
//! [`SearchTask::spawn`] moves a [`SearchQuery`] to a worker thread and
//! hands the result back over a channel. Cancelling the task's [`Context`]
//! does not interrupt the search; the result is dropped instead of
//! delivered.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use knight_core::{Board, Cell};
use knight_paths::{FindError, KnightPath, KnightPathFinder};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// SearchQuery
// ---------------------------------------------------------------------------

/// Everything one search needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQuery {
    pub board: Board,
    pub moves: i32,
    pub source: Cell,
    pub destination: Cell,
}

impl SearchQuery {
    /// Run the search on the current thread.
    pub fn run(&self) -> Result<Vec<KnightPath>, FindError> {
        KnightPathFinder::new(self.board).find(self.moves, self.source, self.destination)
    }
}

pub type SearchResult = Result<Vec<KnightPath>, FindError>;

// ---------------------------------------------------------------------------
// SearchTask
// ---------------------------------------------------------------------------

/// A search running on its own thread.
#[derive(Debug)]
pub struct SearchTask {
    ctx: Context,
    rx: Receiver<SearchResult>,
    handle: Option<JoinHandle<()>>,
}

impl SearchTask {
    pub fn spawn(query: SearchQuery) -> Self {
        let ctx = Context::new();
        let (tx, rx) = mpsc::channel();
        let worker_ctx = ctx.clone();
        let handle = thread::spawn(move || {
            let result = query.run();
            if worker_ctx.is_done() {
                log::debug!("search for {query:?} cancelled, dropping result");
                return;
            }
            // The receiver may already be gone; nothing to do then.
            let _ = tx.send(result);
        });
        Self {
            ctx,
            rx,
            handle: Some(handle),
        }
    }

    /// The task's cancellation token.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    /// The result if it is ready, without blocking.
    pub fn try_result(&self) -> Option<SearchResult> {
        if self.ctx.is_done() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(r) => Some(r),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the search finishes. Returns `None` if the task was
    /// cancelled or the worker died.
    pub fn wait(mut self) -> Option<SearchResult> {
        let result = self.rx.recv().ok();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("search worker panicked");
            }
        }
        if self.ctx.is_done() { None } else { result }
    }
}
