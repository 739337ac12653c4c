//! The prospect record.
//!
//! A prospect is a captured lead: a name, an email address, and a flag that
//! records whether outreach has happened. Records are plain values addressed
//! by their identifier; the store replaces a record wholesale when it changes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a prospect.
pub type ProspectId = Uuid;

/// Name given to prospects created without one.
pub const DEFAULT_NAME: &str = "Anonymous";

/// A captured sales lead.
///
/// Serialized with the field names of the persisted file:
/// `{"id", "name", "emailAddress", "isContacted"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prospect {
    id: ProspectId,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email_address: String,
    is_contacted: bool,
}

impl Prospect {
    /// Create an uncontacted prospect with a freshly generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, email_address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email_address: email_address.into(),
            is_contacted: false,
        }
    }

    /// The prospect's identifier.
    #[must_use]
    pub fn id(&self) -> ProspectId {
        self.id
    }

    /// Whether outreach has happened.
    #[must_use]
    pub fn is_contacted(&self) -> bool {
        self.is_contacted
    }

    /// A copy of this record with the contacted flag flipped.
    ///
    /// Only the store calls this, so the flag changes exclusively through
    /// `ProspectStore::toggle`.
    #[must_use]
    pub(crate) fn toggled(&self) -> Self {
        Self {
            is_contacted: !self.is_contacted,
            ..self.clone()
        }
    }
}

impl Default for Prospect {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, "")
    }
}
