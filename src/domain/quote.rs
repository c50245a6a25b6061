//! Quote record returned by the Hitokoto API

use serde::{Deserialize, Deserializer};

/// A single quotation and where it came from.
///
/// Decoded from the Hitokoto JSON payload. `from` and `from_who` are
/// frequently `null` upstream; both decode to an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    #[serde(rename = "hitokoto", default)]
    pub text: String,

    #[serde(rename = "from", default, deserialize_with = "null_as_empty")]
    pub source_work: String,

    #[serde(rename = "from_who", default, deserialize_with = "null_as_empty")]
    pub source_author: String,
}

impl Quote {
    pub fn new(text: &str, source_work: &str, source_author: &str) -> Self {
        Quote {
            text: text.to_string(),
            source_work: source_work.to_string(),
            source_author: source_author.to_string(),
        }
    }

    /// The attribution to show under the quote.
    ///
    /// The source work wins over the author; only one is ever shown.
    pub fn attribution(&self) -> Option<&str> {
        if !self.source_work.is_empty() {
            Some(&self.source_work)
        } else if !self.source_author.is_empty() {
            Some(&self.source_author)
        } else {
            None
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let json = r#"{
            "id": 6325,
            "uuid": "1b4b1c7a-7c3f-4b52-9a3c-3b5d0c0f4a9e",
            "hitokoto": "你好",
            "type": "d",
            "from": "书A",
            "from_who": "某人",
            "length": 2
        }"#;

        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote, Quote::new("你好", "书A", "某人"));
    }

    #[test]
    fn test_decode_null_author() {
        let json = r#"{"hitokoto": "你好", "from": "书A", "from_who": null}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.source_author, "");
    }

    #[test]
    fn test_decode_missing_fields() {
        let quote: Quote = serde_json::from_str("{}").unwrap();
        assert_eq!(quote, Quote::new("", "", ""));
    }

    #[test]
    fn test_decode_malformed_json_fails() {
        assert!(serde_json::from_str::<Quote>("<html>502</html>").is_err());
    }

    #[test]
    fn test_attribution_prefers_source_work() {
        assert_eq!(Quote::new("q", "X", "Y").attribution(), Some("X"));
    }

    #[test]
    fn test_attribution_falls_back_to_author() {
        assert_eq!(Quote::new("q", "", "Y").attribution(), Some("Y"));
    }

    #[test]
    fn test_attribution_empty() {
        assert_eq!(Quote::new("q", "", "").attribution(), None);
    }
}
