pub mod board;
pub mod name_input;
pub mod roster;
pub mod status_bar;

// Re-export core Component trait
pub use paxboard_core::Component;

pub use board::{Board, BoardProps};
pub use name_input::{NameInput, NameInputProps};
pub use roster::{row_marker, Roster, RosterProps};
pub use status_bar::{StatusBar, StatusBarProps};
