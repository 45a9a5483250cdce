//! HTTP request handlers.

use super::types::{HealthResponse, MessageResponse, SignupQuery};
use super::AppState;
use crate::error::ApiError;
use activity_registry::ActivityListing;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::{debug, info};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        activity_count: state.store.count().await,
        participant_count: state.store.participant_count().await,
    })
}

/// List every activity with its description and roster.
pub async fn list_activities(State(state): State<AppState>) -> Json<ActivityListing> {
    let activities = state.store.list().await;
    debug!("Listing {} activities", activities.len());
    Json(activities)
}

/// Sign a student up for an activity.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<SignupQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(activity = %name, email = %query.email, "Signup request received");

    let enrollment = state.store.enroll(&name, &query.email).await?;

    Ok(Json(MessageResponse {
        message: enrollment.message(),
    }))
}

/// Remove a student from an activity.
pub async fn remove_participant(
    State(state): State<AppState>,
    Path((name, email)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!(activity = %name, email = %email, "Removal request received");

    let withdrawal = state.store.withdraw(&name, &email).await?;

    Ok(Json(MessageResponse {
        message: withdrawal.message(),
    }))
}
