//! Seed datasets for populating the registry at startup.

use crate::error::RegistryError;
use crate::types::{Activity, ActivityListing};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Built-in activities and their descriptions.
const DEFAULT_ACTIVITIES: &[(&str, &str)] = &[
    ("Tennis", "Learn to play tennis"),
    ("Basketball", "Play basketball with friends"),
    ("Volleyball", "Join our volleyball team"),
    ("Soccer", "Play soccer on the field"),
    ("Drama Club", "Perform in theatrical productions"),
    ("Painting", "Create beautiful artwork with acrylics and oils"),
    ("Photography", "Explore the art of digital photography"),
    ("Debate Club", "Compete in debate tournaments"),
    ("Robotics", "Build and program robots"),
    ("Chess Club", "Master strategy and tactics in chess"),
];

/// The ten reference activities, each with an empty roster.
pub fn default_seed() -> ActivityListing {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description)| (name.to_string(), Activity::new(*description)))
        .collect()
}

/// Load a seed dataset from a JSON file.
///
/// The file has the same shape as the activity listing: an object keyed by
/// activity name whose values carry a `description` and optionally
/// `participants`.
pub async fn load_seed(path: &Path) -> Result<ActivityListing, RegistryError> {
    debug!(path = %path.display(), "Reading seed file");
    let data = fs::read(path).await?;
    let seed = parse_seed(&data)?;

    info!(path = %path.display(), "Loaded seed with {} activities", seed.len());
    Ok(seed)
}

/// Parse a seed dataset from JSON bytes.
pub fn parse_seed(data: &[u8]) -> Result<ActivityListing, RegistryError> {
    let seed: ActivityListing = serde_json::from_slice(data)?;
    if seed.is_empty() {
        return Err(RegistryError::Seed("seed contains no activities".into()));
    }
    Ok(seed)
}
