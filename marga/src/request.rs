//! Queued path requests.
//!
//! Callers that should not block on a search hand their start/target pairs to
//! a [`PathRequestManager`] and collect the answers later.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────┐  PathRequest   ┌──────────────────────────────┐
//! │ Caller                   │──────────────▶│ Worker thread                │
//! │  request_path()          │                │  read lock grid              │
//! │  try_receive()           │◀──────────────│  find_path_world()           │
//! │  update_grid()           │  PathResponse  │  one request at a time, FIFO │
//! └──────────────────────────┘                └──────────────────────────────┘
//! ```
//!
//! ## Usage Modes
//!
//! 1. **Synchronous**: requests wait in a local queue until the caller runs
//!    them with `process_next()` / `process_all()`
//! 2. **Threaded**: a worker thread drains the queue and sends responses back
//!    over a channel
//!
//! The worker holds the grid's read lock only while a search runs, so
//! `update_grid()` edits land between searches. Cancellation inside a search
//! is not supported; `shutdown()` lets the current search finish and drops
//! everything still queued.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::WorldPoint;
use crate::grid::NavigationGrid;
use crate::pathfinding::{AStarConfig, AStarPlanner, PathResult};

/// Identifier handed out by [`PathRequestManager::request_path`].
pub type PathRequestId = u64;

/// Configuration for the request queue.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathRequestConfig {
    /// Whether to run searches on a background thread (vs synchronous).
    #[serde(default = "defaults::enabled")]
    pub use_background_thread: bool,

    /// How long the worker waits for a request before re-checking the stop flag.
    #[serde(default = "defaults::poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for PathRequestConfig {
    fn default() -> Self {
        Self {
            use_background_thread: defaults::enabled(),
            poll_interval_ms: defaults::poll_interval_ms(),
        }
    }
}

impl PathRequestConfig {
    /// Synchronous configuration: nothing runs until `process_next()`.
    pub fn synchronous() -> Self {
        Self {
            use_background_thread: false,
            ..Default::default()
        }
    }
}

/// A queued search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRequest {
    /// Request id.
    pub id: PathRequestId,
    /// Start position in world coordinates.
    pub start: WorldPoint,
    /// Target position in world coordinates.
    pub target: WorldPoint,
}

/// A completed search.
#[derive(Clone, Debug)]
pub struct PathResponse {
    /// Id of the request this answers.
    pub id: PathRequestId,
    /// Start position as requested.
    pub start: WorldPoint,
    /// Target position as requested.
    pub target: WorldPoint,
    /// Search result.
    pub result: PathResult,
}

/// FIFO path request queue over a shared grid.
pub struct PathRequestManager<G: NavigationGrid + Send + Sync + 'static> {
    /// Configuration.
    config: PathRequestConfig,
    /// Planner settings applied to every request.
    astar: AStarConfig,
    /// Grid shared with the worker.
    grid: Arc<RwLock<G>>,
    /// Requests waiting for `process_next()` (synchronous mode).
    pending: VecDeque<PathRequest>,
    /// Next id to hand out.
    next_id: PathRequestId,
    /// Requests sent to the worker without a received response.
    in_flight: usize,
    /// Background thread handle (if running).
    thread_handle: Option<JoinHandle<()>>,
    /// Channel to send requests to background thread.
    request_tx: Option<mpsc::Sender<PathRequest>>,
    /// Channel to receive responses from background thread.
    response_rx: Option<mpsc::Receiver<PathResponse>>,
    /// Flag to stop background thread.
    should_stop: Arc<AtomicBool>,
}

impl<G: NavigationGrid + Send + Sync + 'static> PathRequestManager<G> {
    /// Create a manager, starting the worker when the config asks for one.
    pub fn new(grid: G, astar: AStarConfig, config: PathRequestConfig) -> Self {
        let mut manager = Self {
            config,
            astar,
            grid: Arc::new(RwLock::new(grid)),
            pending: VecDeque::new(),
            next_id: 1,
            in_flight: 0,
            thread_handle: None,
            request_tx: None,
            response_rx: None,
            should_stop: Arc::new(AtomicBool::new(false)),
        };
        if manager.config.use_background_thread {
            manager.start_background_thread();
        }
        manager
    }

    /// Create with default configuration.
    pub fn with_defaults(grid: G) -> Self {
        Self::new(grid, AStarConfig::default(), PathRequestConfig::default())
    }

    /// Get a reference to the shared grid.
    pub fn grid(&self) -> &Arc<RwLock<G>> {
        &self.grid
    }

    /// Start the background worker thread.
    ///
    /// Requests already queued for synchronous processing are handed to the
    /// worker in order.
    pub fn start_background_thread(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        let (request_tx, request_rx) = mpsc::channel::<PathRequest>();
        let (response_tx, response_rx) = mpsc::channel::<PathResponse>();

        self.should_stop.store(false, Ordering::SeqCst);

        let grid = Arc::clone(&self.grid);
        let should_stop = Arc::clone(&self.should_stop);
        let astar = self.astar.clone();
        let poll_interval = Duration::from_millis(self.config.poll_interval_ms);

        let handle = thread::spawn(move || {
            while !should_stop.load(Ordering::SeqCst) {
                match request_rx.recv_timeout(poll_interval) {
                    Ok(request) => {
                        let response = {
                            let grid = grid.read().unwrap_or_else(PoisonError::into_inner);
                            run_request(&*grid, &astar, request)
                        };
                        if response_tx.send(response).is_err() {
                            break; // Manager dropped the receiver
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        // No request, check the stop flag again
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => {
                        break; // Channel closed
                    }
                }
            }
            debug!("[PathRequest] worker stopped");
        });

        self.thread_handle = Some(handle);
        self.response_rx = Some(response_rx);
        self.request_tx = Some(request_tx);

        for request in std::mem::take(&mut self.pending) {
            self.dispatch(request);
        }
        debug!("[PathRequest] worker started");
    }

    /// Queue a search from `start` to `target`.
    pub fn request_path(&mut self, start: WorldPoint, target: WorldPoint) -> PathRequestId {
        let id = self.next_id;
        self.next_id += 1;

        trace!(
            "[PathRequest] #{} queued: ({:.2},{:.2}) -> ({:.2},{:.2})",
            id, start.x, start.y, target.x, target.y
        );
        self.dispatch(PathRequest { id, start, target });
        id
    }

    fn dispatch(&mut self, request: PathRequest) {
        if let Some(ref tx) = self.request_tx {
            match tx.send(request) {
                Ok(()) => {
                    self.in_flight += 1;
                    return;
                }
                Err(mpsc::SendError(request)) => {
                    warn!(
                        "[PathRequest] worker unavailable, #{} kept for synchronous processing",
                        request.id
                    );
                    self.pending.push_back(request);
                    return;
                }
            }
        }
        self.pending.push_back(request);
    }

    /// Run the oldest locally queued request on the caller's thread.
    ///
    /// Returns `None` when nothing is queued locally.
    pub fn process_next(&mut self) -> Option<PathResponse> {
        let request = self.pending.pop_front()?;
        let grid = self.grid.read().unwrap_or_else(PoisonError::into_inner);
        Some(run_request(&*grid, &self.astar, request))
    }

    /// Run every locally queued request, in order.
    pub fn process_all(&mut self) -> Vec<PathResponse> {
        std::iter::from_fn(|| self.process_next()).collect()
    }

    /// Try to receive a response from the background thread.
    ///
    /// Returns `None` if no response is available yet.
    pub fn try_receive(&mut self) -> Option<PathResponse> {
        let response = self.response_rx.as_ref()?.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(response)
    }

    /// Block until the next response is available.
    ///
    /// In synchronous mode this runs the next queued request instead.
    /// Returns `None` if nothing is outstanding or the worker has gone away.
    pub fn wait_for_result(&mut self) -> Option<PathResponse> {
        if !self.is_background_running() || self.in_flight == 0 {
            return self.process_next();
        }
        let response = self.response_rx.as_ref()?.recv().ok()?;
        self.in_flight -= 1;
        Some(response)
    }

    /// Like [`wait_for_result`](Self::wait_for_result), giving up after `timeout`.
    pub fn wait_for_result_timeout(&mut self, timeout: Duration) -> Option<PathResponse> {
        if !self.is_background_running() || self.in_flight == 0 {
            return self.process_next();
        }
        let response = self.response_rx.as_ref()?.recv_timeout(timeout).ok()?;
        self.in_flight -= 1;
        Some(response)
    }

    /// Edit the grid between searches.
    ///
    /// Blocks until the search currently running on the worker (if any)
    /// releases the grid.
    pub fn update_grid<F, R>(&self, edit: F) -> R
    where
        F: FnOnce(&mut G) -> R,
    {
        let mut grid = self.grid.write().unwrap_or_else(PoisonError::into_inner);
        edit(&mut grid)
    }

    /// Replace the grid wholesale between searches.
    pub fn replace_grid(&self, grid: G) {
        self.update_grid(|current| *current = grid);
    }

    /// Requests queued locally plus requests the worker has not answered.
    pub fn pending_count(&self) -> usize {
        self.pending.len() + self.in_flight
    }

    /// Stop the background thread.
    ///
    /// The current search (if any) runs to completion; requests the worker
    /// had not started are dropped, along with unread responses.
    pub fn stop_background_thread(&mut self) {
        self.should_stop.store(true, Ordering::SeqCst);

        // Drop the request channel to unblock the thread
        self.request_tx = None;

        if let Some(handle) = self.thread_handle.take()
            && handle.join().is_err()
        {
            warn!("[PathRequest] worker panicked");
        }

        self.response_rx = None;
        self.in_flight = 0;
    }

    /// Stop the worker and discard every queued request.
    pub fn shutdown(&mut self) {
        self.stop_background_thread();
        self.pending.clear();
    }

    /// Check if the background thread is running.
    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }
}

impl<G: NavigationGrid + Send + Sync + 'static> Drop for PathRequestManager<G> {
    fn drop(&mut self) {
        self.stop_background_thread();
    }
}

fn run_request<G>(grid: &G, astar: &AStarConfig, request: PathRequest) -> PathResponse
where
    G: NavigationGrid + ?Sized,
{
    let result =
        AStarPlanner::new(grid, astar.clone()).find_path_world(request.start, request.target);
    trace!(
        "[PathRequest] #{} done: success={} waypoints={}",
        request.id,
        result.success,
        result.waypoints.len()
    );
    PathResponse {
        id: request.id,
        start: request.start,
        target: request.target,
        result,
    }
}
