use crate::app::state::*;
use crate::submission::view::Step;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (title, field) = match state.step {
        Step::Movie => (" Movie title ", Some(&state.movie_input)),
        Step::Prompt => (" Describe your alternate ending ", Some(&state.prompt_input)),
        Step::Script => (" Keys ", None),
    };
    let editable = field.is_some() && !state.in_flight && !state.checking_movie;

    let (border_style, border_type, bg) = if editable {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .title(title)
        .title_style(if editable { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(field) = field else {
        let hint = if state.in_flight {
            "↑/↓ scroll  Ctrl+C quit"
        } else {
            "↑/↓ scroll  r resubmit  Esc edit prompt  Ctrl+C quit"
        };
        frame.render_widget(Paragraph::new(hint).style(Theme::hint()), inner);
        return;
    };

    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(field.text.as_str(), Theme::input_text()),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    if editable && inner.width > 0 {
        // Chevron "❯ " is two columns wide
        let prompt_offset = 2u16;
        let column = u16::try_from(field.cursor_column()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(prompt_offset).saturating_add(column);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
