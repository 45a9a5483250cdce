//! Activity data types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An extracurricular activity and its roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description, fixed once loaded
    pub description: String,

    /// Enrolled emails in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            participants: Vec::new(),
        }
    }

    /// Check whether an email is on the roster.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Drop repeated emails, keeping the first occurrence of each.
    pub(crate) fn dedup_participants(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.participants.retain(|p| seen.insert(p.clone()));
    }
}

/// Snapshot of every activity keyed by name, as returned by a listing.
pub type ActivityListing = BTreeMap<String, Activity>;

/// Confirmation returned by a successful enroll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub email: String,
}

impl Enrollment {
    pub fn message(&self) -> String {
        format!("{} signed up for {}", self.email, self.activity)
    }
}

/// Confirmation returned by a successful withdraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    pub activity: String,
    pub email: String,
}

impl Withdrawal {
    pub fn message(&self) -> String {
        format!("Removed {} from {}", self.email, self.activity)
    }
}
