mod input_box;
mod layout;
mod progress_panel;
mod results;
mod status_bar;
mod step_bar;
mod theme;

use crate::app::state::AppState;
use crate::submission::view::Step;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    step_bar::render(frame, app_layout.step_bar, state);
    match state.step {
        Step::Movie => render_movie_step(frame, app_layout.body, state),
        Step::Prompt => render_prompt_step(frame, app_layout.body, state),
        Step::Script => render_script_step(frame, app_layout.body, state),
    }
    input_box::render(frame, app_layout.input_box, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

fn body_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::uniform(1))
        .style(Theme::panel_bg())
}

fn key_hint(key: &'static str, text: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {} ", key),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(text, Style::default().fg(Theme::TEXT_SECONDARY)),
    ])
}

fn render_movie_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Which movie deserves a different ending?",
            Theme::title(),
        )),
        Line::from(""),
        key_hint("Enter", "Look up the movie"),
        key_hint("↑/↓", "Previous titles"),
        key_hint("Ctrl+C", "Quit"),
    ];
    if state.checking_movie {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Looking up \"{}\"...", state.movie_input.trimmed()),
            Style::default().fg(Theme::ACCENT_AMBER),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(body_block(" Step 1: Movie "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_prompt_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let movie = state.current_movie.as_deref().unwrap_or("?");
    let lines = vec![
        Line::from(vec![
            Span::styled("How should ", Theme::title()),
            Span::styled(
                movie.to_string(),
                Style::default()
                    .fg(Theme::ACCENT_LAVENDER)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ),
            Span::styled(" end instead?", Theme::title()),
        ]),
        Line::from(""),
        key_hint("Enter", "Generate the script"),
        key_hint("↑/↓", "Previous prompts"),
        key_hint("Esc", "Choose another movie"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(body_block(" Step 2: Prompt "))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_script_step(frame: &mut Frame, area: Rect, state: &AppState) {
    let (progress_area, results_area) = layout::split_script_body(area, state.results_visible);
    progress_panel::render(frame, progress_area, state);
    if let Some(results_area) = results_area {
        results::render(frame, results_area, state);
    }
}
