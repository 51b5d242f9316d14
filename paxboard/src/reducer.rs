//! Reducer - pure function: (state, action) -> state change + effects
//!
//! All state mutations happen here; network work is declared as effects
//! and performed by the main loop.

use paxboard_core::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, Notice};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Roster =====
        Action::RosterFetch => {
            state.is_loading = true;
            state.notice = None;
            DispatchResult::changed_with(Effect::FetchRoster)
        }

        Action::RosterDidLoad(passengers) => {
            state.passengers = passengers;
            state.is_loading = false;
            if state.selected >= state.passengers.len() {
                state.selected = state.passengers.len().saturating_sub(1);
            }
            DispatchResult::changed()
        }

        Action::RosterDidError(msg) => {
            state.is_loading = false;
            state.notice = Some(Notice::Error(msg));
            DispatchResult::changed()
        }

        Action::RosterSelect(index) => {
            if index != state.selected && index < state.passengers.len() {
                state.selected = index;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== Draft input =====
        Action::DraftChange(text) => {
            state.draft = text;
            DispatchResult::changed()
        }

        Action::DraftSubmit(first_name) => {
            // Optimistic reset: the draft clears regardless of request
            // outcome; failures land in the status bar.
            state.draft.clear();
            DispatchResult::changed_with(Effect::CreatePassenger { first_name })
        }

        // ===== Passenger mutations =====
        Action::PassengerToggleStatus { id, status } => {
            // No local application; the row re-renders only via the
            // update event round-trip.
            DispatchResult::effect(Effect::UpdateStatus { id, status })
        }

        Action::PassengerDidCreate(passenger) => {
            // Creation invalidates the whole roster: re-fetch rather than
            // insert the event payload locally.
            state.notice = Some(Notice::Info(format!("added {}", passenger.full_name())));
            DispatchResult::changed_with(Effect::FetchRoster)
        }

        Action::PassengerDidUpdate(updated) => {
            // Replace the matching row wholesale; no-op when it is not
            // currently rendered.
            match state.passengers.iter().position(|p| p.id == updated.id) {
                Some(index) => {
                    state.passengers[index] = updated;
                    DispatchResult::changed()
                }
                None => DispatchResult::unchanged(),
            }
        }

        Action::PassengerDidError(msg) => {
            state.notice = Some(Notice::Error(msg));
            DispatchResult::changed()
        }

        // ===== UI =====
        Action::FocusNext => {
            state.focus = state.focus.next();
            DispatchResult::changed()
        }

        Action::Quit => {
            // Quit is handled in the main loop, not here
            DispatchResult::unchanged()
        }
    }
}
