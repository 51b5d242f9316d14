//! Bottom status line: key hints, or the most recent notice

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use paxboard_core::Component;

use crate::action::Action;
use crate::state::{Focus, Notice};

pub struct StatusBarProps<'a> {
    pub notice: Option<&'a Notice>,
    pub focus: Focus,
}

#[derive(Default)]
pub struct StatusBar;

impl Component<Action> for StatusBar {
    type Props<'a> = StatusBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let (text, style) = match props.notice {
            Some(Notice::Error(msg)) => (format!(" error: {msg}"), Style::default().fg(Color::Red)),
            Some(Notice::Info(msg)) => (format!(" {msg}"), Style::default().fg(Color::Green)),
            None => {
                let hints = match props.focus {
                    Focus::Input => " enter add | tab roster | esc quit",
                    Focus::Roster => " enter toggle | j/k move | r refresh | tab input | q quit",
                };
                (hints.to_string(), Style::default().fg(Color::DarkGray))
            }
        };

        frame.render_widget(Paragraph::new(text).style(style), area);
    }
}
