/// Side effects requested by the event handler and carried out by the main loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CheckMovie { movie: String },
    Submit { movie: String, prompt: String },
    Quit,
}
