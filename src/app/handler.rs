use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::submission::error::RequestError;
use crate::submission::reply::MovieCheck;
use crate::submission::view::{AlertLevel, Step, ViewUpdate};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

pub const EMPTY_MOVIE_ALERT: &str = "Please enter a movie name";

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::MovieChecked { movie, result } => {
            handle_movie_checked(state, movie, result);
            vec![]
        }
        AppEvent::Submission(update) => {
            apply_view_update(state, update);
            vec![]
        }
        AppEvent::SubmissionFinished { result } => {
            state.in_flight = false;
            state.dirty = true;
            if let Err(e) = result {
                debug!(error = %e, "submission ended without a script");
            }
            vec![]
        }
        AppEvent::Tick => {
            handle_tick(state);
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.expire_alert();

    // Keep the spinner moving
    if state.in_flight || state.checking_movie {
        state.dirty = true;
    }
}

fn handle_movie_checked(
    state: &mut AppState,
    movie: String,
    result: Result<MovieCheck, RequestError>,
) {
    state.checking_movie = false;
    match result {
        Ok(check) if check.exists => {
            let movie = check.movie.unwrap_or(movie);
            state.raise_alert(
                format!("Found a script for \"{}\"", movie),
                AlertLevel::Success,
            );
            state.accept_movie(movie);
        }
        Ok(check) => {
            let reason = check
                .error
                .unwrap_or_else(|| format!("No script found for \"{}\"", movie));
            state.raise_alert(reason, AlertLevel::Error);
        }
        Err(e) => {
            state.raise_alert(format!("Could not check movie: {}", e), AlertLevel::Error);
        }
    }
}

/// Apply one screen update sent by the submission task.
pub fn apply_view_update(state: &mut AppState, update: ViewUpdate) {
    state.dirty = true;
    match update {
        ViewUpdate::Alert { message, level } => state.raise_alert(message, level),
        ViewUpdate::Navigate(step) => state.navigate_to(step),
        ViewUpdate::HideResults => {
            state.results_visible = false;
            state.result_scroll = 0;
        }
        ViewUpdate::CurrentRequest(context) => {
            state.current_request = Some(context);
            state.phase = SubmissionPhase::Pending;
        }
        ViewUpdate::ProgressMessage(message) => state.progress.message = message,
        ViewUpdate::ProgressBar(percent) => state.progress.percent = percent.min(100),
        ViewUpdate::Success(payload) => {
            state.result = Some(ResultPanel::Script(payload));
            state.results_visible = true;
            state.phase = SubmissionPhase::Succeeded;
            state.raise_alert("Your alternate ending is ready", AlertLevel::Success);
        }
        ViewUpdate::Failure(error) => {
            let text = error.to_string();
            state.result = Some(ResultPanel::Failure(text.clone()));
            state.results_visible = true;
            state.phase = SubmissionPhase::Failed;
            state.raise_alert(text, AlertLevel::Error);
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match state.step {
        Step::Movie => handle_movie_key(state, key),
        Step::Prompt => handle_prompt_key(state, key),
        Step::Script => handle_script_key(state, key),
    }
}

/// Shared line-editing keys. Returns `false` if the key was not an edit.
fn edit_field(field: &mut TextField, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => field.delete_word_back(),
        KeyCode::Char('u') if ctrl => field.clear(),
        KeyCode::Char('a') if ctrl => field.move_home(),
        KeyCode::Char('e') if ctrl => field.move_end(),
        KeyCode::Char(c) if !ctrl => field.insert_char(c),
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => return false,
    }
    true
}

fn handle_movie_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            if state.checking_movie {
                return vec![];
            }
            let movie = state.movie_input.trimmed().to_string();
            if movie.is_empty() {
                state.raise_alert(EMPTY_MOVIE_ALERT, AlertLevel::Error);
                return vec![];
            }
            state.movie_input.commit();
            if !state.config.server.verify_movie {
                state.raise_alert(format!("Using \"{}\"", movie), AlertLevel::Info);
                state.accept_movie(movie);
                return vec![];
            }
            state.checking_movie = true;
            vec![Action::CheckMovie { movie }]
        }
        KeyCode::Up => {
            state.movie_input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.movie_input.history_down();
            vec![]
        }
        _ => {
            edit_field(&mut state.movie_input, key);
            vec![]
        }
    }
}

fn handle_prompt_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Enter => {
            if state.in_flight {
                return vec![];
            }
            let Some(movie) = state.current_movie.clone() else {
                state.navigate_to(Step::Movie);
                return vec![];
            };
            // Validation happens in the submission itself.
            let prompt = state.prompt_input.commit();
            state.in_flight = true;
            vec![Action::Submit { movie, prompt }]
        }
        KeyCode::Esc => {
            state.navigate_to(Step::Movie);
            vec![]
        }
        KeyCode::Up => {
            state.prompt_input.history_up();
            vec![]
        }
        KeyCode::Down => {
            state.prompt_input.history_down();
            vec![]
        }
        _ => {
            edit_field(&mut state.prompt_input, key);
            vec![]
        }
    }
}

fn handle_script_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.scroll_results(-1),
        KeyCode::Down => state.scroll_results(1),
        KeyCode::PageUp => state.scroll_results(-10),
        KeyCode::PageDown => state.scroll_results(10),
        KeyCode::Home => {
            state.result_scroll = 0;
        }
        // Leaving the step or resubmitting waits for the running submission.
        KeyCode::Esc | KeyCode::Char('e') if !state.in_flight => {
            state.navigate_to(Step::Prompt)
        }
        KeyCode::Char('r') if !state.in_flight => {
            if let Some(context) = state.current_request.clone() {
                state.in_flight = true;
                return vec![Action::Submit {
                    movie: context.movie,
                    prompt: context.prompt,
                }];
            }
        }
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::submission::error::SubmitError;
    use crate::submission::reply::ScriptPayload;
    use crate::submission::view::RequestContext;

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        handle_event(
            state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))),
        )
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn on_prompt_step() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.accept_movie("Titanic".into());
        state
    }

    #[test]
    fn test_ctrl_c_quits_from_any_step() {
        let mut state = on_prompt_step();
        let actions = handle_event(
            &mut state,
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert_eq!(actions, vec![Action::Quit]);
    }

    #[test]
    fn test_blank_movie_raises_alert() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, "   ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.alert.as_ref().unwrap().text, EMPTY_MOVIE_ALERT);
        assert_eq!(state.step, Step::Movie);
    }

    #[test]
    fn test_movie_enter_dispatches_check_once() {
        let mut state = AppState::new(AppConfig::default());
        type_text(&mut state, " Alien ");
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            vec![Action::CheckMovie {
                movie: "Alien".into()
            }]
        );
        assert!(state.checking_movie);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_movie_accepted_without_verification() {
        let mut config = AppConfig::default();
        config.server.verify_movie = false;
        let mut state = AppState::new(config);
        type_text(&mut state, "Alien");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.step, Step::Prompt);
        assert_eq!(state.current_movie.as_deref(), Some("Alien"));
    }

    #[test]
    fn test_movie_check_results() {
        let mut state = AppState::new(AppConfig::default());
        state.checking_movie = true;
        handle_event(
            &mut state,
            AppEvent::MovieChecked {
                movie: "Nope".into(),
                result: Ok(MovieCheck {
                    exists: false,
                    movie: None,
                    error: Some("Movie not found on IMSDB".into()),
                }),
            },
        );
        assert!(!state.checking_movie);
        assert_eq!(state.step, Step::Movie);
        let alert = state.alert.clone().unwrap();
        assert_eq!(alert.text, "Movie not found on IMSDB");
        assert_eq!(alert.level, AlertLevel::Error);

        handle_event(
            &mut state,
            AppEvent::MovieChecked {
                movie: "alien".into(),
                result: Ok(MovieCheck {
                    exists: true,
                    movie: Some("Alien".into()),
                    error: None,
                }),
            },
        );
        assert_eq!(state.step, Step::Prompt);
        assert_eq!(state.current_movie.as_deref(), Some("Alien"));
    }

    #[test]
    fn test_movie_check_transport_error() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(
            &mut state,
            AppEvent::MovieChecked {
                movie: "Alien".into(),
                result: Err(RequestError::Transport("connection refused".into())),
            },
        );
        assert_eq!(
            state.alert.unwrap().text,
            "Could not check movie: Request failed: connection refused"
        );
    }

    #[test]
    fn test_prompt_enter_submits_raw_text() {
        let mut state = on_prompt_step();
        type_text(&mut state, " hero wins ");
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            vec![Action::Submit {
                movie: "Titanic".into(),
                prompt: " hero wins ".into(),
            }]
        );
        assert!(state.in_flight);
        // Second Enter while in flight does nothing
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn test_blank_prompt_still_goes_through_submission() {
        let mut state = on_prompt_step();
        let actions = press(&mut state, KeyCode::Enter);
        assert_eq!(
            actions,
            vec![Action::Submit {
                movie: "Titanic".into(),
                prompt: String::new(),
            }]
        );

        handle_event(
            &mut state,
            AppEvent::Submission(ViewUpdate::Alert {
                message: "Please describe your alternate ending".into(),
                level: AlertLevel::Error,
            }),
        );
        handle_event(
            &mut state,
            AppEvent::SubmissionFinished {
                result: Err(SubmitError::EmptyPrompt),
            },
        );

        assert!(!state.in_flight);
        assert_eq!(state.step, Step::Prompt);
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert_eq!(
            state.alert.unwrap().text,
            "Please describe your alternate ending"
        );
    }

    #[test]
    fn test_view_updates_drive_script_step() {
        let mut state = on_prompt_step();
        state.results_visible = true;

        for update in [
            ViewUpdate::CurrentRequest(RequestContext::new("Titanic", "hero wins")),
            ViewUpdate::Navigate(Step::Script),
            ViewUpdate::HideResults,
            ViewUpdate::ProgressMessage("Crafting your unique ending...".into()),
            ViewUpdate::ProgressBar(60),
        ] {
            apply_view_update(&mut state, update);
        }
        assert_eq!(state.step, Step::Script);
        assert_eq!(state.phase, SubmissionPhase::Pending);
        assert!(!state.results_visible);
        assert_eq!(state.progress.percent, 60);
        assert_eq!(state.progress.message, "Crafting your unique ending...");

        apply_view_update(&mut state, ViewUpdate::ProgressBar(90));
        apply_view_update(&mut state, ViewUpdate::Success(ScriptPayload::default()));
        assert_eq!(state.phase, SubmissionPhase::Succeeded);
        assert!(state.results_visible);
        assert_eq!(state.progress.percent, 90);
        assert!(matches!(state.result, Some(ResultPanel::Script(_))));
    }

    #[test]
    fn test_failure_update_shows_error() {
        let mut state = on_prompt_step();
        apply_view_update(
            &mut state,
            ViewUpdate::Failure(RequestError::Transport("connection closed".into())),
        );
        assert_eq!(state.phase, SubmissionPhase::Failed);
        assert_eq!(
            state.result,
            Some(ResultPanel::Failure(
                "Request failed: connection closed".into()
            ))
        );
        assert_eq!(state.alert.unwrap().level, AlertLevel::Error);
    }

    #[test]
    fn test_script_step_keys() {
        let mut state = on_prompt_step();
        state.step = Step::Script;
        state.current_request = Some(RequestContext::new("Titanic", "hero wins"));

        state.in_flight = true;
        assert!(press(&mut state, KeyCode::Char('r')).is_empty());
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('e'));
        assert_eq!(state.step, Step::Script);
        press(&mut state, KeyCode::Down);
        assert_eq!(state.result_scroll, 1);

        state.in_flight = false;
        assert_eq!(
            press(&mut state, KeyCode::Char('r')),
            vec![Action::Submit {
                movie: "Titanic".into(),
                prompt: "hero wins".into(),
            }]
        );
        state.in_flight = false;
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.step, Step::Prompt);
    }

    #[test]
    fn test_tick_expires_alert() {
        let mut state = AppState::new(AppConfig::default());
        state.config.ui.alert_secs = 1;
        state.raise_alert("hi", AlertLevel::Info);
        for _ in 0..20 {
            handle_event(&mut state, AppEvent::Tick);
        }
        assert!(state.alert.is_none());
    }
}
