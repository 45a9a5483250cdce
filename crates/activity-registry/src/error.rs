//! Activity registry errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Activity {0} not found")]
    NotFound(String),

    #[error("Participant {email} not found in {activity}")]
    ParticipantNotFound { activity: String, email: String },

    #[error("Student {email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RegistryError {
    /// True for both the unknown-activity and unknown-participant cases.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound(_) | RegistryError::ParticipantNotFound { .. }
        )
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Seed(format!("JSON parse error: {}", e))
    }
}
