//! Domain layer - Quote model and content formatting rules

pub mod category;
pub mod content;
pub mod quote;
pub mod script;
pub mod timestamp;

pub use category::CategorySet;
pub use content::{attribution_suffix, compose_content};
pub use quote::Quote;
pub use script::ScriptConversion;
pub use timestamp::{format_rfc1123, load_time_zone, DEFAULT_TIME_ZONE};
