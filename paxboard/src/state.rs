//! Application state - single source of truth
//!
//! Components receive `&AppState` through props; only the reducer mutates
//! it. The roster holds the currently rendered sequence and nothing more:
//! it is rebuilt by a full fetch on creation events, and individual rows
//! are replaced wholesale on update events.

use crate::model::Passenger;

/// Which widget receives keyboard input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The name input at the top
    #[default]
    Input,
    /// The roster list
    Roster,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Roster,
            Focus::Roster => Focus::Input,
        }
    }
}

/// A transient status-line message
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Currently rendered roster
    pub passengers: Vec<Passenger>,
    /// Draft first name in the input widget
    pub draft: String,
    /// Selected roster row
    pub selected: usize,
    /// Whether a roster fetch is in flight
    pub is_loading: bool,
    /// Most recent error or informational message
    pub notice: Option<Notice>,
    pub focus: Focus,
}

impl AppState {
    pub fn selected_passenger(&self) -> Option<&Passenger> {
        self.passengers.get(self.selected)
    }
}
