//! Passenger wire model

use serde::{Deserialize, Serialize};

/// Hub category for passenger change events
pub const ENTITY: &str = "passenger";

/// Status sentinel: freshly created, not yet reviewed
pub const STATUS_NEW: &str = "new";
/// Status after approving a `new` passenger
pub const STATUS_APPROVED: &str = "approved";
/// Status after toggling any non-`new` passenger
pub const STATUS_DENIED: &str = "denied";

/// A passenger as returned by the service.
///
/// `id` is server-assigned and stable. Rendered passengers are treated as
/// immutable values: an update arrives as a full replacement, never as an
/// in-place field mutation, so references held elsewhere stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub status: String,
}

impl Passenger {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial passenger for create/update request bodies.
///
/// `None` fields are omitted from the JSON body. Create requires a
/// non-blank `first_name`; update requires nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PassengerPatch {
    /// Patch carrying only a first name (create path)
    pub fn with_first_name(first_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            ..Self::default()
        }
    }

    /// Patch carrying only a status (toggle path)
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }
}

/// Next status for the toggle action: `new` approves, anything else denies.
///
/// Not an involution: toggling twice from `new` lands on `denied`.
pub fn toggled_status(current: &str) -> &'static str {
    if current == STATUS_NEW {
        STATUS_APPROVED
    } else {
        STATUS_DENIED
    }
}
