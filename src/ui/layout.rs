use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub step_bar: Rect,
    pub body: Rect,
    pub input_box: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step bar
            Constraint::Min(5),    // Step body
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        step_bar: chunks[0],
        body: chunks[1],
        input_box: chunks[2],
        status_bar: chunks[3],
    }
}

/// Split the script step body into a progress panel and the result panel.
pub fn split_script_body(body: Rect, results_visible: bool) -> (Rect, Option<Rect>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body);
    (chunks[0], results_visible.then_some(chunks[1]))
}
