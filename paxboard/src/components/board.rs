//! Screen container: composes the input, the roster, and the status bar
//!
//! Routes terminal events by focus and handles the global keys. Data-change
//! events do not pass through here - they arrive as actions via the hub
//! bridge wired in main.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use paxboard_core::{Component, EventKind, EventOutcome};

use crate::action::Action;
use crate::state::{AppState, Focus};

use super::{NameInput, NameInputProps, Roster, RosterProps, StatusBar, StatusBarProps};

pub struct BoardProps<'a> {
    pub state: &'a AppState,
}

#[derive(Default)]
pub struct Board {
    input: NameInput,
    roster: Roster,
    status: StatusBar,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a terminal event to an outcome for the runtime.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(_, _) = event {
            return EventOutcome::needs_render();
        }
        EventOutcome::from_actions(self.handle_event(event, BoardProps { state }))
    }

    fn input_props<'a>(state: &'a AppState, is_focused: bool) -> NameInputProps<'a> {
        NameInputProps {
            value: &state.draft,
            is_focused,
            on_change: Action::DraftChange,
            on_submit: Action::DraftSubmit,
        }
    }

    fn roster_props<'a>(state: &'a AppState, is_focused: bool) -> RosterProps<'a> {
        RosterProps {
            passengers: &state.passengers,
            selected: state.selected,
            is_focused,
            is_loading: state.is_loading,
            on_select: Action::RosterSelect,
            on_toggle: |id, status| Action::PassengerToggleStatus { id, status },
        }
    }
}

impl Component<Action> for Board {
    type Props<'a> = BoardProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let state = props.state;

        if let EventKind::Key(key) = event {
            match key.code {
                KeyCode::Esc => return vec![Action::Quit],
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return vec![Action::Quit]
                }
                KeyCode::Tab => return vec![Action::FocusNext],
                _ => {}
            }

            // Plain letters are free when the input is not focused
            if state.focus == Focus::Roster {
                match key.code {
                    KeyCode::Char('q') => return vec![Action::Quit],
                    KeyCode::Char('r') => return vec![Action::RosterFetch],
                    _ => {}
                }
            }
        }

        match state.focus {
            Focus::Input => self
                .input
                .handle_event(event, Self::input_props(state, true))
                .into_iter()
                .collect::<Vec<_>>(),
            Focus::Roster => self
                .roster
                .handle_event(event, Self::roster_props(state, true))
                .into_iter()
                .collect::<Vec<_>>(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Name input
            Constraint::Min(3),    // Roster
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        let title = Paragraph::new(" paxboard")
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, chunks[0]);

        self.input.render(
            frame,
            chunks[1],
            Self::input_props(state, state.focus == Focus::Input),
        );
        self.roster.render(
            frame,
            chunks[2],
            Self::roster_props(state, state.focus == Focus::Roster),
        );
        self.status.render(
            frame,
            chunks[3],
            StatusBarProps {
                notice: state.notice.as_ref(),
                focus: state.focus,
            },
        );
    }
}
