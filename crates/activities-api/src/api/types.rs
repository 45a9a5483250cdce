//! API request and response types.

use serde::{Deserialize, Serialize};

/// Query string for a signup.
#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Student email, taken as-is
    pub email: String,
}

/// Confirmation for signup and removal.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub activity_count: usize,
    pub participant_count: usize,
}
