//! Activities API - HTTP service for extracurricular activity signups.
//!
//! Exposes the activity registry over three routes:
//! - `GET /activities` lists every activity and roster
//! - `POST /activities/{name}/signup?email=...` adds a participant
//! - `DELETE /activities/{name}/participants/{email}` removes one

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::ApiError;
