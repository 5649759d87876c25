use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match &state.alert {
        Some(alert) => {
            parts.push(Span::styled(
                format!(" [{}] ", alert.timestamp),
                Theme::timestamp().bg(Theme::BG_ELEVATED),
            ));
            parts.push(Span::styled(
                format!("{} ", alert.text),
                Theme::alert(alert.level),
            ));
        }
        None => parts.push(Span::styled(
            format!(" {} ", state.status_line()),
            Theme::status_bar(),
        )),
    }

    let server = &state.config.server.base_url;
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + server.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {} ", server),
        Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
