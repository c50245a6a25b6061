//! Error types for hitokoto-gist

use thiserror::Error;

/// Main error type for a single update run
#[derive(Debug, Error)]
pub enum HitokotoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch quote: {0}")]
    Fetch(String),

    #[error("Script conversion failed: {0}")]
    Conversion(String),

    #[error("Gist request failed: {0}")]
    Gist(String),

    #[error("Gist API error ({status}): {body}")]
    GistStatus { status: u16, body: String },

    #[error("Time zone error: {0}")]
    TimeZone(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl HitokotoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HitokotoError::Config(_) | HitokotoError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HitokotoError::Config(msg) if msg.contains("GH_TOKEN") => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Create a personal access token with the 'gist' scope\n\
                    • Export it: export GH_TOKEN=<token>\n\
                    • Or set gh_token in the file passed with --config",
                    self
                )
            }
            HitokotoError::GistStatus { status: 401, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that GH_TOKEN has not expired or been revoked",
                    self
                )
            }
            HitokotoError::GistStatus { status: 404, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check GIST_ID (the last path segment of the gist URL)\n\
                    • Make sure GH_TOKEN belongs to the gist owner and has the 'gist' scope",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HitokotoError
pub type Result<T> = std::result::Result<T, HitokotoError>;
