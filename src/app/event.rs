use crate::submission::error::{RequestError, SubmitError};
use crate::submission::reply::MovieCheck;
use crate::submission::view::ViewUpdate;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Answer to a movie check
    MovieChecked {
        movie: String,
        result: Result<MovieCheck, RequestError>,
    },

    /// A screen update from the running submission
    Submission(ViewUpdate),

    /// The submission task returned
    SubmissionFinished { result: Result<(), SubmitError> },

    /// Tick for UI refresh
    Tick,
}
