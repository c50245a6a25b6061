//! Category filters for the quotation API

/// Ordered set of single-character category codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    codes: Vec<String>,
}

impl CategorySet {
    /// Parse a `CATEGORY` value: every non-whitespace character is one code.
    pub fn parse(raw: &str) -> Self {
        CategorySet {
            codes: raw
                .trim()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(String::from)
                .collect(),
        }
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Human readable name of a known category code.
///
/// Unknown codes are still sent; the API decides what to do with them.
pub fn category_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "a" => "anime",
        "b" => "comic",
        "c" => "game",
        "d" => "literature",
        "e" => "original",
        "f" => "internet",
        "g" => "other",
        "h" => "film",
        "i" => "poetry",
        "j" => "netease music",
        "k" => "philosophy",
        "l" => "witty",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_characters() {
        let set = CategorySet::parse("abk");
        assert_eq!(set.codes(), &["a", "b", "k"]);
    }

    #[test]
    fn test_parse_skips_whitespace() {
        let set = CategorySet::parse("  a b\t");
        assert_eq!(set.codes(), &["a", "b"]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(CategorySet::parse("").is_empty());
        assert!(CategorySet::parse("   ").is_empty());
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_name("a"), Some("anime"));
        assert_eq!(category_name("l"), Some("witty"));
        assert_eq!(category_name("z"), None);
    }
}
