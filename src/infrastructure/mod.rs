//! Infrastructure layer - Configuration and remote collaborators

pub mod config;
pub mod converter;
pub mod gist;
pub mod hitokoto;
pub mod http;

pub use config::{Config, FileConfig};
pub use converter::{ScriptConverter, ZhConverter};
pub use gist::{Gist, GistFile, GistStore, GitHubGistClient};
pub use hitokoto::{quote_query, HitokotoClient, QuoteSource};
