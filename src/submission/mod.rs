//! Prompt submission: validate, post, animate progress, render the outcome.

pub mod client;
pub mod error;
pub mod progress;
pub mod reply;
pub mod view;

use crate::submission::client::ScriptBackend;
use crate::submission::error::{SubmitError, EMPTY_PROMPT_ALERT};
use crate::submission::progress::{ProgressCycle, ProgressTicker, RESOLVED_PERCENT};
use crate::submission::reply::{GenerateRequest, ScriptPayload};
use crate::submission::view::{AlertLevel, RequestContext, Step, SubmissionView};
use std::time::Duration;
use tracing::{info, warn};

/// Run one submission for `movie` with the text the user typed.
///
/// A blank prompt raises an alert and returns [`SubmitError::EmptyPrompt`]
/// without touching anything else. Otherwise the view moves to the script
/// step, the progress ticker runs until a response head (or a transport
/// failure) comes back, and exactly one of `render_success` / `render_failure` is
/// called. The ticker is always stopped before that call.
pub async fn submit<V, B>(
    movie: &str,
    raw_prompt: &str,
    view: &V,
    backend: &B,
    period: Duration,
) -> Result<ScriptPayload, SubmitError>
where
    V: SubmissionView + Clone + 'static,
    B: ScriptBackend + ?Sized,
{
    let prompt = raw_prompt.trim();
    if prompt.is_empty() {
        view.show_alert(EMPTY_PROMPT_ALERT, AlertLevel::Error);
        return Err(SubmitError::EmptyPrompt);
    }

    let context = RequestContext::new(movie, prompt);
    info!(movie = %context.movie, prompt_len = context.prompt.len(), "submitting prompt");

    view.set_current_request(&context);
    view.navigate_to_step(Step::Script);
    view.hide_results();

    let first = ProgressCycle::new().current();
    view.set_progress_message(first.message);
    view.update_progress_bar(first.percent);

    let ticker = ProgressTicker::start(view.clone(), period);
    let pending = backend
        .generate_script(&GenerateRequest {
            movie: &context.movie,
            prompt: &context.prompt,
        })
        .await;
    ticker.cancel().await;

    // The request resolves when the response head arrives; reading and
    // parsing the body comes after.
    let outcome = match pending {
        Ok(reply) => {
            view.update_progress_bar(RESOLVED_PERCENT);
            reply.read_body().await.and_then(|raw| raw.decode())
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(payload) => {
            info!(movie = %context.movie, "script generated");
            view.render_success(&payload);
            Ok(payload)
        }
        Err(e) => {
            warn!(movie = %context.movie, error = %e, "submission failed");
            view.render_failure(&e);
            Err(e.into())
        }
    }
}
