//! Scrollable passenger roster
//!
//! The list container of the board: one row per passenger, keyboard
//! navigation, and the status toggle. Rows are passive - they render
//! whatever value they are handed and never subscribe to anything.
//!
//! The toggle computes the next status from the row's current value
//! (`new` approves, anything else denies) and emits an update intent;
//! it does not apply the status locally. The row changes only when the
//! update event round-trip replaces its value.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use paxboard_core::{Component, EventKind};

use crate::action::Action;
use crate::model::{toggled_status, Passenger, STATUS_APPROVED, STATUS_DENIED, STATUS_NEW};

pub struct RosterProps<'a> {
    pub passengers: &'a [Passenger],
    /// Currently selected row
    pub selected: usize,
    pub is_focused: bool,
    pub is_loading: bool,
    pub on_select: fn(usize) -> Action,
    pub on_toggle: fn(String, String) -> Action,
}

/// Identity marker rendered with each row, derived from the id alone
pub fn row_marker(id: &str) -> String {
    format!("#{id}")
}

fn status_style(status: &str) -> Style {
    match status {
        STATUS_NEW => Style::default().fg(Color::Yellow),
        STATUS_APPROVED => Style::default().fg(Color::Green),
        STATUS_DENIED => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::DarkGray),
    }
}

#[derive(Default)]
pub struct Roster {
    /// Scroll offset for the viewport
    scroll_offset: usize,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the selected row inside the viewport
    fn ensure_visible(&mut self, selected: usize, viewport_height: usize) {
        if viewport_height == 0 {
            return;
        }

        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + viewport_height {
            self.scroll_offset = selected.saturating_sub(viewport_height - 1);
        }
    }

    fn row_line(passenger: &Passenger, selected: bool) -> Line<'_> {
        let name_style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(
                format!(" {:<6}", row_marker(&passenger.id)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("{:<26}", passenger.full_name()), name_style),
            Span::styled(passenger.status.clone(), status_style(&passenger.status)),
        ])
    }
}

impl Component<Action> for Roster {
    type Props<'a> = RosterProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused || props.passengers.is_empty() {
            return None;
        }

        let EventKind::Key(key) = event else {
            return None;
        };

        let len = props.passengers.len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let next = (props.selected + 1).min(len - 1);
                if next != props.selected {
                    Some((props.on_select)(next))
                } else {
                    None
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let next = props.selected.saturating_sub(1);
                if next != props.selected {
                    Some((props.on_select)(next))
                } else {
                    None
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                if props.selected != 0 {
                    Some((props.on_select)(0))
                } else {
                    None
                }
            }
            KeyCode::Char('G') | KeyCode::End => {
                if props.selected != len - 1 {
                    Some((props.on_select)(len - 1))
                } else {
                    None
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                props.passengers.get(props.selected).map(|p| {
                    (props.on_toggle)(p.id.clone(), toggled_status(&p.status).to_string())
                })
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Passengers ({}) ", props.passengers.len()))
            .border_style(if props.is_focused {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });

        if props.passengers.is_empty() {
            let text = if props.is_loading {
                "fetching passengers..."
            } else {
                "no passengers - type a name above and press Enter"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let viewport_height = area.height.saturating_sub(2) as usize;
        self.ensure_visible(props.selected, viewport_height);

        let items: Vec<ListItem> = props
            .passengers
            .iter()
            .enumerate()
            .map(|(i, p)| ListItem::new(Self::row_line(p, i == props.selected)))
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default().with_selected(Some(props.selected));
        *state.offset_mut() = self.scroll_offset;

        frame.render_stateful_widget(list, area, &mut state);
    }
}
