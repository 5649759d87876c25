use crate::config::AppConfig;
use crate::submission::progress::LOADING_MESSAGES;
use crate::submission::reply::ScriptPayload;
use crate::submission::view::{AlertLevel, RequestContext, Step};
use chrono::Local;
use unicode_width::UnicodeWidthStr;

/// UI refresh period, in milliseconds.
pub const TICK_MS: u64 = 50;

/// A single-line text field with cursor and history.
#[derive(Debug, Default)]
pub struct TextField {
    pub text: String,
    /// Byte offset into `text`, always on a char boundary.
    pub cursor: usize,
    pub history: Vec<String>,
    pub history_index: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].width()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.history_index = None;
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.text.len(), |c| self.cursor + c.len_utf8())
    }

    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    pub fn delete_word_back(&mut self) {
        let before = &self.text[..self.cursor];
        let word_start = before
            .trim_end_matches(' ')
            .rfind(' ')
            .map_or(0, |i| i + 1);
        self.text.drain(word_start..self.cursor);
        self.cursor = word_start;
    }

    /// Record the current text in history and return it. The field keeps its
    /// contents so the user can edit and resubmit.
    pub fn commit(&mut self) -> String {
        let text = self.text.clone();
        self.history_index = None;
        let trimmed = text.trim();
        if !trimmed.is_empty() && self.history.last().map(String::as_str) != Some(trimmed) {
            self.history.push(trimmed.to_string());
        }
        text
    }

    fn load(&mut self, idx: usize) {
        self.history_index = Some(idx);
        self.text = self.history[idx].clone();
        self.cursor = self.text.len();
    }

    pub fn history_up(&mut self) {
        let idx = match self.history_index {
            _ if self.history.is_empty() => return,
            Some(0) => return,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.load(idx);
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.load(i + 1),
            Some(_) => self.clear(),
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDisplay {
    pub message: String,
    pub percent: u8,
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self {
            message: LOADING_MESSAGES[0].to_string(),
            percent: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultPanel {
    Script(ScriptPayload),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub timestamp: String,
    pub text: String,
    pub level: AlertLevel,
    pub raised_at_tick: u64,
}

pub struct AppState {
    pub config: AppConfig,
    pub step: Step,
    pub movie_input: TextField,
    pub prompt_input: TextField,
    pub current_movie: Option<String>,
    pub current_request: Option<RequestContext>,
    pub checking_movie: bool,
    /// A submission task is running. Only one may run at a time.
    pub in_flight: bool,
    pub phase: SubmissionPhase,
    pub progress: ProgressDisplay,
    pub results_visible: bool,
    pub result: Option<ResultPanel>,
    pub result_scroll: u16,
    pub alert: Option<Alert>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            step: Step::Movie,
            movie_input: TextField::new(),
            prompt_input: TextField::new(),
            current_movie: None,
            current_request: None,
            checking_movie: false,
            in_flight: false,
            phase: SubmissionPhase::Idle,
            progress: ProgressDisplay::default(),
            results_visible: false,
            result: None,
            result_scroll: 0,
            alert: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn raise_alert(&mut self, text: impl Into<String>, level: AlertLevel) {
        self.alert = Some(Alert {
            timestamp: Local::now()
                .format(&self.config.ui.timestamp_format)
                .to_string(),
            text: text.into(),
            level,
            raised_at_tick: self.tick_count,
        });
        self.dirty = true;
    }

    fn alert_ticks(&self) -> u64 {
        self.config.ui.alert_secs * 1000 / TICK_MS
    }

    /// Drop the current alert once it has been shown long enough.
    pub fn expire_alert(&mut self) {
        let ttl = self.alert_ticks();
        if let Some(alert) = &self.alert {
            if self.tick_count.saturating_sub(alert.raised_at_tick) >= ttl {
                self.alert = None;
                self.dirty = true;
            }
        }
    }

    pub fn navigate_to(&mut self, step: Step) {
        if self.step != step {
            self.step = step;
            self.dirty = true;
        }
    }

    /// Make `movie` the subject of future prompts and move on to step 2.
    pub fn accept_movie(&mut self, movie: String) {
        if self.current_movie.as_deref() != Some(movie.as_str()) {
            self.results_visible = false;
            self.result = None;
            self.phase = SubmissionPhase::Idle;
        }
        self.current_movie = Some(movie);
        self.navigate_to(Step::Prompt);
    }

    pub fn scroll_results(&mut self, delta: i32) {
        let next = (self.result_scroll as i32 + delta).max(0);
        self.result_scroll = next.min(u16::MAX as i32) as u16;
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let movie = self.current_movie.as_deref().unwrap_or("no movie selected");
        let activity = if self.checking_movie {
            " | looking up movie..."
        } else if self.in_flight {
            " | generating..."
        } else {
            ""
        };
        format!("Step {}/3: {} | {}{}", self.step.number(), self.step.title(), movie, activity)
    }
}
