//! Gist file content composition

/// Label written before the update timestamp ("updated at").
pub const UPDATED_LABEL: &str = "更新於";

/// Attribution line appended under the quote, or empty when there is none.
pub fn attribution_suffix(source: Option<&str>) -> String {
    match source {
        Some(source) if !source.is_empty() => format!("\n ---{}", source),
        _ => String::new(),
    }
}

/// Final file content: quote, attribution and update line.
pub fn compose_content(text: &str, suffix: &str, timestamp: &str) -> String {
    format!("{}{}\n\n{} {}", text, suffix, UPDATED_LABEL, timestamp)
}
