//! Timer-driven AI play
//!
//! [`AutoPlay`] repeatedly asks the session's AI-controlled marks for moves
//! at a fixed interval. Cancellation is checked before every tick and again
//! before an AI answer is applied, so once a [`CancelToken`] is cancelled no
//! further move takes effect, even one whose request was already in flight.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use tracing::{debug, info};

use crate::{
    Error,
    engine::Engine,
    ports::MoveSource,
    session::{MoveReport, Session},
};

/// Longest uninterrupted sleep between cancellation checks
const CANCEL_POLL: Duration = Duration::from_millis(10);

/// Shared cancellation flag; clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// What a single tick did
#[derive(Debug)]
pub enum Tick<E: Engine> {
    /// An AI move was applied
    Moved(MoveReport<E>),
    /// The finished board was cleared instead of moving
    Cleared,
    /// A human is to move; nothing requested
    Skipped,
    /// The AI request or its answer failed; state unchanged
    Failed(Error),
    /// The token was cancelled; nothing applied
    Cancelled,
}

/// Totals for one [`AutoPlay::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoPlaySummary {
    pub ticks: usize,
    pub moves: usize,
    pub clears: usize,
    pub skipped: usize,
    pub failures: usize,
}

/// Cancelable scheduled AI play.
#[derive(Debug, Clone)]
pub struct AutoPlay {
    interval: Duration,
    token: CancelToken,
}

impl AutoPlay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            token: CancelToken::new(),
        }
    }

    /// Share an existing token, e.g. one cancelled from another thread
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Handle that stops this auto-play when cancelled
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Run one tick.
    ///
    /// A finished board (held under a deferred clear policy) is cleared and
    /// the move request for this tick is dropped rather than queued.
    pub fn tick<E, S>(&self, session: &mut Session<E>, source: &mut S) -> Tick<E>
    where
        E: Engine,
        S: MoveSource<E> + ?Sized,
    {
        if self.token.is_cancelled() {
            return Tick::Cancelled;
        }
        if session.awaiting_clear() {
            session.clear_board();
            return Tick::Cleared;
        }
        if session.is_human_turn() {
            return Tick::Skipped;
        }
        let input = match session.request_ai_move(source) {
            Ok(input) => input,
            Err(e) => return Tick::Failed(e),
        };
        if self.token.is_cancelled() {
            debug!(%input, "cancelled while the AI request was in flight, answer dropped");
            return Tick::Cancelled;
        }
        match session.apply_ai_move(input) {
            Ok(report) => Tick::Moved(report),
            Err(e) => Tick::Failed(e),
        }
    }

    /// Sleep for `interval` in short slices; returns early once cancelled.
    fn pause(&self) {
        let mut remaining = self.interval;
        while !remaining.is_zero() && !self.token.is_cancelled() {
            let slice = remaining.min(CANCEL_POLL);
            thread::sleep(slice);
            remaining -= slice;
        }
    }

    /// Tick every `interval` until cancelled or `stop` returns true.
    ///
    /// `stop` sees the session and the tick that just ran. The sleep between
    /// ticks wakes up early on cancellation.
    pub fn run<E, S, F>(&self, session: &mut Session<E>, source: &mut S, mut stop: F) -> AutoPlaySummary
    where
        E: Engine,
        S: MoveSource<E> + ?Sized,
        F: FnMut(&Session<E>, &Tick<E>) -> bool,
    {
        let mut summary = AutoPlaySummary::default();
        info!(interval_ms = self.interval.as_millis() as u64, "auto-play started");

        loop {
            self.pause();
            let tick = self.tick(session, source);
            if matches!(tick, Tick::Cancelled) {
                info!(moves = summary.moves, "auto-play cancelled");
                break;
            }

            summary.ticks += 1;
            match &tick {
                Tick::Moved(report) => {
                    summary.moves += 1;
                    debug!(player = %report.player, input = %report.input, "auto-play move");
                }
                Tick::Cleared => summary.clears += 1,
                Tick::Skipped => summary.skipped += 1,
                Tick::Failed(e) => {
                    summary.failures += 1;
                    debug!(error = %e, "auto-play tick failed");
                }
                Tick::Cancelled => {}
            }

            if stop(session, &tick) {
                info!(moves = summary.moves, "auto-play finished");
                break;
            }
        }
        summary
    }
}
