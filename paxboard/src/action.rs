//! Application actions
//!
//! Intent actions trigger effects; `Did` actions carry results back.
//! `PassengerDidCreate` and `PassengerDidUpdate` arrive through the data
//! hub bridge rather than directly from tasks - they are the UI-facing leg
//! of the change-event protocol.

use crate::model::Passenger;

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Intent: fetch the full roster
    RosterFetch,
    /// Result: roster loaded
    RosterDidLoad(Vec<Passenger>),
    /// Result: roster fetch failed
    RosterDidError(String),
    /// Move the roster selection
    RosterSelect(usize),

    /// Keystroke changed the draft name
    DraftChange(String),
    /// Enter pressed in the input; payload is the draft at that moment
    DraftSubmit(String),

    /// Intent: set a passenger's status (computed by the row's toggle)
    PassengerToggleStatus { id: String, status: String },
    /// Hub event: a passenger was created (server-confirmed value)
    PassengerDidCreate(Passenger),
    /// Hub event: a passenger was updated (full replacement value)
    PassengerDidUpdate(Passenger),
    /// Result: a create or update failed
    PassengerDidError(String),

    /// Switch focus between input and roster
    FocusNext,
    /// Exit the application
    Quit,
}

impl paxboard_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::RosterFetch => "RosterFetch",
            Action::RosterDidLoad(_) => "RosterDidLoad",
            Action::RosterDidError(_) => "RosterDidError",
            Action::RosterSelect(_) => "RosterSelect",
            Action::DraftChange(_) => "DraftChange",
            Action::DraftSubmit(_) => "DraftSubmit",
            Action::PassengerToggleStatus { .. } => "PassengerToggleStatus",
            Action::PassengerDidCreate(_) => "PassengerDidCreate",
            Action::PassengerDidUpdate(_) => "PassengerDidUpdate",
            Action::PassengerDidError(_) => "PassengerDidError",
            Action::FocusNext => "FocusNext",
            Action::Quit => "Quit",
        }
    }
}
