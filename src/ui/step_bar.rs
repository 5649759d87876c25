use crate::app::state::AppState;
use crate::submission::view::Step;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const STEPS: [Step; 3] = [Step::Movie, Step::Prompt, Step::Script];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(
            " 🎬 ",
            Style::default().fg(Theme::ACCENT_TEAL).bg(Theme::BG_ELEVATED),
        ),
        Span::styled(
            "Alternate Ending",
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::BOLD),
        ),
        separator(),
    ];

    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " › ",
                Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
            ));
        }
        let style = if *step == state.step {
            Theme::step_active()
        } else if step.number() < state.step.number() {
            Theme::step_done()
        } else {
            Theme::step_pending()
        };
        spans.push(Span::styled(
            format!("{}. {}", step.number(), step.title()),
            style,
        ));
    }

    if let Some(movie) = &state.current_movie {
        spans.push(separator());
        spans.push(Span::styled(
            movie.as_str(),
            Style::default()
                .fg(Theme::ACCENT_LAVENDER)
                .bg(Theme::BG_ELEVATED)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Theme::BG_ELEVATED));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(
        " │ ",
        Style::default().fg(Theme::BORDER_DIM).bg(Theme::BG_ELEVATED),
    )
}
