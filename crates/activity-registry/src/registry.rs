//! In-memory activity registry.

use crate::error::RegistryError;
use crate::types::{Activity, ActivityListing, Enrollment, Withdrawal};
use std::collections::BTreeMap;

/// Activities indexed by their exact, case-sensitive name.
///
/// The set of names is fixed at construction; only rosters change.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    activities: BTreeMap<String, Activity>,
}

impl Registry {
    /// Build a registry from a seed dataset.
    pub fn from_seed(seed: ActivityListing) -> Self {
        let activities = seed
            .into_iter()
            .map(|(name, mut activity)| {
                activity.dedup_participants();
                (name, activity)
            })
            .collect();

        Self { activities }
    }

    /// Full mapping of activity name to description and roster.
    pub fn list(&self) -> ActivityListing {
        self.activities.clone()
    }

    /// Get an activity by name.
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.activities.contains_key(name)
    }

    /// Append an email to an activity's roster.
    pub fn enroll(&mut self, activity: &str, email: &str) -> Result<Enrollment, RegistryError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::NotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(RegistryError::AlreadyEnrolled {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.participants.push(email.to_string());

        Ok(Enrollment {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    /// Remove an email from an activity's roster, keeping the others in order.
    pub fn withdraw(&mut self, activity: &str, email: &str) -> Result<Withdrawal, RegistryError> {
        let entry = self
            .activities
            .get_mut(activity)
            .ok_or_else(|| RegistryError::NotFound(activity.to_string()))?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RegistryError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        entry.participants.remove(position);

        Ok(Withdrawal {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }

    /// Names of every activity an email is enrolled in.
    pub fn activities_for(&self, email: &str) -> Vec<&str> {
        self.activities
            .iter()
            .filter(|(_, a)| a.has_participant(email))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Get the number of activities.
    pub fn count(&self) -> usize {
        self.activities.len()
    }

    /// Total enrollments across all activities.
    pub fn participant_count(&self) -> usize {
        self.activities.values().map(|a| a.participants.len()).sum()
    }
}
