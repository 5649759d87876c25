//! The UI surface the submission handler drives.
//!
//! The handler never owns any UI state. It talks to a [`SubmissionView`],
//! which in the application is a [`ChannelView`] forwarding every call as a
//! [`ViewUpdate`] onto the event loop.

use crate::submission::error::RequestError;
use crate::submission::reply::ScriptPayload;
use tokio::sync::mpsc;

/// Wizard steps, numbered as the user sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Movie = 1,
    Prompt = 2,
    Script = 3,
}

impl Step {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Movie => "Movie",
            Step::Prompt => "Prompt",
            Step::Script => "Script",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Success,
    Error,
}

/// The movie and prompt of one submission, passed explicitly instead of
/// living in shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub movie: String,
    pub prompt: String,
}

impl RequestContext {
    pub fn new(movie: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            prompt: prompt.into(),
        }
    }
}

/// Everything the submission handler may do to the screen.
pub trait SubmissionView: Send + Sync {
    fn show_alert(&self, message: &str, level: AlertLevel);
    fn navigate_to_step(&self, step: Step);
    fn hide_results(&self);
    fn set_current_request(&self, context: &RequestContext);
    fn set_progress_message(&self, message: &str);
    fn update_progress_bar(&self, percent: u8);
    fn render_success(&self, payload: &ScriptPayload);
    fn render_failure(&self, error: &RequestError);
}

/// One [`SubmissionView`] call, as data.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Alert { message: String, level: AlertLevel },
    Navigate(Step),
    HideResults,
    CurrentRequest(RequestContext),
    ProgressMessage(String),
    ProgressBar(u8),
    Success(ScriptPayload),
    Failure(RequestError),
}

/// A view that sends each call down an unbounded channel, wrapped into the
/// receiver's event type by `wrap`.
pub struct ChannelView<E> {
    tx: mpsc::UnboundedSender<E>,
    wrap: fn(ViewUpdate) -> E,
}

impl<E> Clone for ChannelView<E> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            wrap: self.wrap,
        }
    }
}

impl<E: Send + 'static> ChannelView<E> {
    pub fn new(tx: mpsc::UnboundedSender<E>, wrap: fn(ViewUpdate) -> E) -> Self {
        Self { tx, wrap }
    }

    fn send(&self, update: ViewUpdate) {
        // The receiver is gone only while the app is shutting down.
        let _ = self.tx.send((self.wrap)(update));
    }
}

impl<E: Send + 'static> SubmissionView for ChannelView<E> {
    fn show_alert(&self, message: &str, level: AlertLevel) {
        self.send(ViewUpdate::Alert {
            message: message.to_string(),
            level,
        });
    }

    fn navigate_to_step(&self, step: Step) {
        self.send(ViewUpdate::Navigate(step));
    }

    fn hide_results(&self) {
        self.send(ViewUpdate::HideResults);
    }

    fn set_current_request(&self, context: &RequestContext) {
        self.send(ViewUpdate::CurrentRequest(context.clone()));
    }

    fn set_progress_message(&self, message: &str) {
        self.send(ViewUpdate::ProgressMessage(message.to_string()));
    }

    fn update_progress_bar(&self, percent: u8) {
        self.send(ViewUpdate::ProgressBar(percent));
    }

    fn render_success(&self, payload: &ScriptPayload) {
        self.send(ViewUpdate::Success(payload.clone()));
    }

    fn render_failure(&self, error: &RequestError) {
        self.send(ViewUpdate::Failure(error.clone()));
    }
}
