use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (marker, marker_style) = match state.phase {
        SubmissionPhase::Pending if state.in_flight => (
            SPINNER[(state.tick_count as usize / 2) % SPINNER.len()],
            Style::default().fg(Theme::ACCENT_TEAL),
        ),
        SubmissionPhase::Succeeded => ("✔", Style::default().fg(Theme::ACCENT_GREEN)),
        SubmissionPhase::Failed => ("✘", Style::default().fg(Theme::ACCENT_ROSE)),
        _ => ("•", Style::default().fg(Theme::TEXT_MUTED)),
    };

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled(marker, marker_style),
        Span::raw(" "),
        Span::styled(state.progress.message.as_str(), Theme::title()),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Theme::panel_bg());

    let percent = u16::from(state.progress.percent.min(100));
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Theme::gauge())
        .percent(percent)
        .label(format!("{}%", percent));
    frame.render_widget(gauge, area);
}
