//! Output formatting utilities

/// Format dry-run output: a header naming the target, then the content
pub fn format_preview(gist_id: &str, file_name: &str, content: &str) -> String {
    format!("--- {} / {} ---\n{}\n", gist_id, file_name, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_preview() {
        let output = format_preview("abc", "hitokoto.txt", "你好\n\n更新於 now");
        assert_eq!(output, "--- abc / hitokoto.txt ---\n你好\n\n更新於 now\n");
    }
}
