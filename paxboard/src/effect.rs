//! Effects - side effects declared by the reducer
//!
//! Effects are returned from the reducer and handled by the main loop.
//! This keeps the reducer pure while making network operations explicit.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full roster
    FetchRoster,
    /// Create a passenger with the given first name
    CreatePassenger { first_name: String },
    /// Set one passenger's status
    UpdateStatus { id: String, status: String },
}
