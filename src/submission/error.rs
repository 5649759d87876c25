use thiserror::Error;

/// Alert text shown when the prompt field is blank.
pub const EMPTY_PROMPT_ALERT: &str = "Please describe your alternate ending";

/// Why a submission did not produce a script.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// The prompt was empty after trimming. Nothing was sent.
    #[error("{}", EMPTY_PROMPT_ALERT)]
    EmptyPrompt,

    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Failures of the generate request itself. All of them are recoverable:
/// the user can resubmit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The request never produced a response (connection refused, reset, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// A response arrived but its body was not the expected JSON.
    #[error("Unreadable response (HTTP {status}): {message}")]
    Decode { status: u16, message: String },

    /// The server answered with something other than `"success"`.
    #[error("{}", rejected_message(.status, .message))]
    Rejected {
        status: Option<String>,
        message: Option<String>,
    },
}

fn rejected_message(status: &Option<String>, message: &Option<String>) -> String {
    match (message, status) {
        (Some(msg), _) => format!("Generation failed: {}", msg),
        (None, Some(status)) => format!("Generation failed with status \"{}\"", status),
        (None, None) => "Generation failed".to_string(),
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        RequestError::Transport(e.to_string())
    }
}
