use crate::app::state::*;
use crate::submission::reply::ScriptPayload;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

/// Payload fields shown as sections, in display order.
const SECTIONS: [(&str, &str); 5] = [
    ("alternate_ending", "Alternate Ending"),
    ("visual_description", "Visual Description"),
    ("narration_text", "Narration"),
    ("character_dialogue", "Character Dialogue"),
    ("production_notes", "Production Notes"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(panel) = &state.result else {
        return;
    };

    let (title, border_style) = match panel {
        ResultPanel::Script(_) => (" Your alternate ending ", Theme::border_focused()),
        ResultPanel::Failure(_) => (" Generation failed ", Theme::error_message()),
    };
    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(border_style)
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = result_lines(panel);
    let total = lines.len();
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.result_scroll, 0));
    frame.render_widget(paragraph, inner);

    let available_height = inner.height as usize;
    if total > available_height {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(available_height))
            .position(state.result_scroll as usize);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

pub fn result_lines(panel: &ResultPanel) -> Vec<Line<'static>> {
    match panel {
        ResultPanel::Script(payload) => script_lines(payload),
        ResultPanel::Failure(message) => vec![
            Line::from(vec![
                Span::styled("✘ ", Style::default().fg(Theme::ACCENT_ROSE)),
                Span::styled(message.clone(), Theme::error_message()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press r to try again or Esc to edit the prompt.",
                Theme::hint(),
            )),
        ],
    }
}

fn script_lines(payload: &ScriptPayload) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (key, heading) in SECTIONS {
        let Some(text) = payload.text(key).filter(|t| !t.trim().is_empty()) else {
            continue;
        };
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            Theme::section_heading(),
        )));
        lines.extend(
            text.lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Theme::body_text()))),
        );
    }

    if payload.is_empty() {
        lines.push(Line::from(Span::styled(
            "The server sent back an empty script.",
            Theme::hint(),
        )));
    } else if lines.is_empty() {
        // Unknown payload shape: show it as-is
        let pretty = serde_json::to_string_pretty(&payload.fields).unwrap_or_default();
        lines.extend(
            pretty
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), Theme::body_text()))),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> ScriptPayload {
        match value {
            serde_json::Value::Object(fields) => ScriptPayload { fields },
            _ => unreachable!(),
        }
    }

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_known_sections_in_order() {
        let p = payload(json!({
            "production_notes": "Shoot at dusk.",
            "alternate_ending": "Jack survives.\nRose waves.",
            "movie": "Titanic",
            "narration_text": "   ",
        }));
        assert_eq!(
            plain(&result_lines(&ResultPanel::Script(p))),
            vec![
                "Alternate Ending",
                "Jack survives.",
                "Rose waves.",
                "",
                "Production Notes",
                "Shoot at dusk.",
            ]
        );
    }

    #[test]
    fn test_unknown_payload_falls_back_to_json() {
        let p = payload(json!({"script": "FADE IN."}));
        assert_eq!(
            plain(&result_lines(&ResultPanel::Script(p))),
            vec!["{", "  \"script\": \"FADE IN.\"", "}"]
        );
    }

    #[test]
    fn test_empty_payload_hint() {
        let lines = result_lines(&ResultPanel::Script(ScriptPayload::default()));
        assert_eq!(plain(&lines), vec!["The server sent back an empty script."]);
    }

    #[test]
    fn test_failure_lines() {
        let lines = result_lines(&ResultPanel::Failure("Generation failed: quota".into()));
        assert_eq!(lines[0].to_string(), "✘ Generation failed: quota");
        assert_eq!(lines.len(), 3);
    }
}
