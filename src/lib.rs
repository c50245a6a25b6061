//! hitokoto-gist - Daily quote to GitHub Gist updater
//!
//! Fetches a random quote from the Hitokoto API, converts it to Traditional
//! Chinese characters and writes it, with an update timestamp, into one file
//! of a GitHub Gist.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::HitokotoError;
