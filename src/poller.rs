use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::model::LiveView;
use crate::service::DataService;

/// Anything that can produce a live view for a match id. Runs on the blocking pool.
pub type Fetcher = Arc<dyn Fn(&str) -> Result<Option<LiveView>> + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Ready(LiveView),
    NotFound(String),
    /// The last fetch failed; carries the error text for logs only.
    Failed(String),
}

/// Outcome of one poll tick, tagged with the tick's generation.
#[derive(Debug)]
pub struct FetchResult {
    pub generation: u64,
    pub outcome: Result<Option<LiveView>>,
}

/// What the presentation layer currently shows, and which tick produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    generation: u64,
    view: ViewState,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderState {
    pub fn new() -> Self {
        Self { generation: 0, view: ViewState::Loading }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Apply a completed fetch unless a newer tick has already been applied.
    /// Returns whether the state changed.
    pub fn apply(&mut self, result: FetchResult, match_id: &str) -> bool {
        if result.generation <= self.generation {
            debug!(
                generation = result.generation,
                applied = self.generation,
                "Discarding stale fetch result"
            );
            return false;
        }
        self.generation = result.generation;
        self.view = match result.outcome {
            Ok(Some(view)) => ViewState::Ready(view),
            Ok(None) => {
                warn!(match_id, "Match not found");
                ViewState::NotFound(match_id.to_string())
            }
            Err(e) => {
                error!(error = %e, match_id, "Live view fetch failed");
                ViewState::Failed(e.to_string())
            }
        };
        true
    }
}

/// Re-fetches one match on a fixed interval and hands each new state to a callback.
pub struct LivePoller {
    fetch: Fetcher,
    match_id: String,
    interval: Duration,
}

impl LivePoller {
    pub fn new(service: Arc<DataService>, match_id: impl Into<String>, interval: Duration) -> Self {
        let fetch: Fetcher = Arc::new(move |id: &str| service.live_view(id));
        Self::with_fetcher(fetch, match_id, interval)
    }

    pub fn with_fetcher(fetch: Fetcher, match_id: impl Into<String>, interval: Duration) -> Self {
        Self { fetch, match_id: match_id.into(), interval }
    }

    /// Start polling. The first tick fires immediately.
    ///
    /// Ticks never wait for earlier fetches; each result carries its tick's
    /// generation and results older than the one on screen are dropped.
    pub fn spawn<F>(self, mut on_render: F) -> PollHandle
    where
        F: FnMut(&RenderState) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let (tx, mut rx) = mpsc::unbounded_channel::<FetchResult>();
            let mut ticker = tokio::time::interval(self.interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut generation: u64 = 0;
            let mut state = RenderState::new();
            on_render(&state);
            info!(match_id = %self.match_id, interval_secs = self.interval.as_secs_f64(), "Polling started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        generation += 1;
                        let tx = tx.clone();
                        let fetch = Arc::clone(&self.fetch);
                        let match_id = self.match_id.clone();
                        debug!(generation, "Poll tick");
                        tokio::task::spawn_blocking(move || {
                            let outcome = fetch(&match_id);
                            // Receiver is gone once polling stops
                            let _ = tx.send(FetchResult { generation, outcome });
                        });
                    }
                    Some(result) = rx.recv() => {
                        if state.apply(result, &self.match_id) {
                            on_render(&state);
                        }
                    }
                }
            }
        });
        PollHandle { task }
    }
}

/// Owner of a running poll loop.
#[derive(Debug)]
pub struct PollHandle {
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Cancel the timer. Fetches already in flight finish but are never applied.
    pub fn stop(self) {
        self.task.abort();
        info!("Polling stopped");
    }
}
