//! In-memory registry of extracurricular activities.
//!
//! Holds every activity's description and participant roster, enforces that
//! an email appears at most once per roster, and exposes a cloneable
//! [`ActivityStore`] that serializes mutations behind a single lock.

mod error;
mod registry;
mod seed;
mod store;
mod types;

pub use error::RegistryError;
pub use registry::Registry;
pub use seed::{default_seed, load_seed, parse_seed};
pub use store::ActivityStore;
pub use types::*;
