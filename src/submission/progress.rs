//! Progress animation shown while a generate request is pending.
//!
//! [`ProgressCycle`] is the pure part: which message and percentage to show
//! next. [`ProgressTicker`] drives it from a timer task and writes every frame
//! to a [`SubmissionView`]. The ticker is a guard: it stops when cancelled and
//! also when dropped.

use crate::submission::view::SubmissionView;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::trace;

pub const LOADING_MESSAGES: [&str; 4] = [
    "Analyzing the original movie plot...",
    "Brainstorming creative alternatives...",
    "Crafting your unique ending...",
    "Finalizing the details...",
];

/// Default time between two frames.
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(3000);

/// Percentage shown once the response has arrived.
pub const RESOLVED_PERCENT: u8 = 90;

pub fn percent_for(index: usize) -> u8 {
    20 + 20 * (index % LOADING_MESSAGES.len()) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressFrame {
    pub index: usize,
    pub message: &'static str,
    pub percent: u8,
}

#[derive(Debug, Default)]
pub struct ProgressCycle {
    index: usize,
}

impl ProgressCycle {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn current(&self) -> ProgressFrame {
        ProgressFrame {
            index: self.index,
            message: LOADING_MESSAGES[self.index],
            percent: percent_for(self.index),
        }
    }

    pub fn advance(&mut self) -> ProgressFrame {
        self.index = (self.index + 1) % LOADING_MESSAGES.len();
        self.current()
    }
}

/// Owns the timer task of one submission.
pub struct ProgressTicker {
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    /// Start ticking. The first frame is written one `period` from now.
    pub fn start<V>(view: V, period: Duration) -> Self
    where
        V: SubmissionView + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut cycle = ProgressCycle::new();
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let frame = cycle.advance();
                trace!(index = frame.index, percent = frame.percent, "progress tick");
                view.set_progress_message(frame.message);
                view.update_progress_bar(frame.percent);
            }
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Stop the timer and wait until its task is gone, so no frame can be
    /// written after this returns.
    pub async fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
