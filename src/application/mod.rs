//! Application layer - Use cases and orchestration

pub mod update_gist;

pub use update_gist::{UpdateGistService, UpdateOutcome};
