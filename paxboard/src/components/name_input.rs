//! Single-line input for the first name of a new passenger
//!
//! Emits `on_change` for each edit and `on_submit` on Enter. The draft
//! value lives in app state; this component only keeps its cursor.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use paxboard_core::{Component, EventKind};

use crate::action::Action;

pub struct NameInputProps<'a> {
    /// Current draft value
    pub value: &'a str,
    pub is_focused: bool,
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

#[derive(Default)]
pub struct NameInput {
    /// Cursor position in characters
    cursor: usize,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.chars().count());
    }
}

impl Component<Action> for NameInput {
    type Props<'a> = NameInputProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        let value = props.value;
        let len = value.chars().count();
        self.clamp_cursor(value);

        match key.code {
            KeyCode::Char(c) => {
                let mut new_value: String = value.chars().take(self.cursor).collect();
                new_value.push(c);
                new_value.extend(value.chars().skip(self.cursor));
                self.cursor += 1;
                Some((props.on_change)(new_value))
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let new_value: String = value
                    .chars()
                    .take(self.cursor - 1)
                    .chain(value.chars().skip(self.cursor))
                    .collect();
                self.cursor -= 1;
                Some((props.on_change)(new_value))
            }
            KeyCode::Delete if self.cursor < len => {
                let new_value: String = value
                    .chars()
                    .take(self.cursor)
                    .chain(value.chars().skip(self.cursor + 1))
                    .collect();
                Some((props.on_change)(new_value))
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(len);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = len;
                None
            }
            KeyCode::Enter => {
                self.cursor = 0;
                Some((props.on_submit)(value.to_string()))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let (text, style) = if props.value.is_empty() {
            ("First name", Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };

        let paragraph = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Add passenger ")
                .border_style(border_style),
        );
        frame.render_widget(paragraph, area);

        if props.is_focused {
            let cursor_x = area.x + 1 + self.cursor as u16;
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position((cursor_x, area.y + 1));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paxboard_core::testing::{key, RenderHarness};

    fn props(value: &str) -> NameInputProps<'_> {
        NameInputProps {
            value,
            is_focused: true,
            on_change: Action::DraftChange,
            on_submit: Action::DraftSubmit,
        }
    }

    #[test]
    fn typing_emits_change() {
        let mut input = NameInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), props(""))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::DraftChange("a".into())]);
    }

    #[test]
    fn backspace_at_start_is_ignored() {
        let mut input = NameInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("backspace")), props("Ann"))
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn enter_submits_current_value() {
        let mut input = NameInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("enter")), props("Ann"))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::DraftSubmit("Ann".into())]);
    }

    #[test]
    fn enter_with_empty_draft_still_submits() {
        // Validation belongs to the client, not the widget.
        let mut input = NameInput::new();

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("enter")), props(""))
            .into_iter()
            .collect();

        assert_eq!(actions, vec![Action::DraftSubmit(String::new())]);
    }

    #[test]
    fn unfocused_ignores_events() {
        let mut input = NameInput::new();
        let mut p = props("");
        p.is_focused = false;

        let actions: Vec<_> = input
            .handle_event(&EventKind::Key(key("a")), p)
            .into_iter()
            .collect();

        assert!(actions.is_empty());
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = NameInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props(""));
        });

        assert!(output.contains("First name"));
        assert!(output.contains("Add passenger"));
    }

    #[test]
    fn renders_draft_value() {
        let mut render = RenderHarness::new(30, 3);
        let mut input = NameInput::new();

        let output = render.render_to_string_plain(|frame| {
            input.render(frame, frame.area(), props("Ann"));
        });

        assert!(output.contains("Ann"));
    }
}
