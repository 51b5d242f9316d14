//! paxboard: a terminal UI for managing a passenger roster
//!
//! The data layer (transport + entity client) and the UI layer (components
//! driven by an effect store) are connected by a data-change hub: after a
//! confirmed mutation the client publishes the canonical server value, and
//! hub subscriptions wired at startup turn those publications into actions.
//!
//! The flow for every mutation:
//!
//! 1. key event -> component emits an intent action
//! 2. reducer declares an effect; the main loop spawns a task
//! 3. the task calls the entity client; the client makes one round-trip
//!    and, on success, one hub publication
//! 4. the hub bridge enqueues the corresponding `Did` action
//! 5. reducer folds the server-confirmed value into state; changed state
//!    re-renders

pub mod action;
pub mod api;
pub mod client;
pub mod components;
pub mod effect;
pub mod model;
pub mod reducer;
pub mod state;
pub mod testing;
