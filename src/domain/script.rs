//! Script variant conversions

/// Recognized Chinese script conversions, named after their OpenCC ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScriptConversion {
    /// Simplified to Traditional
    #[default]
    S2T,
    /// Traditional to Simplified
    T2S,
    /// Simplified to Traditional (Taiwan)
    S2TW,
    /// Simplified to Traditional (Hong Kong)
    S2HK,
}

impl ScriptConversion {
    /// Conversion applied to every quote
    pub const DEFAULT: ScriptConversion = ScriptConversion::S2T;

    pub fn id(&self) -> &'static str {
        match self {
            ScriptConversion::S2T => "s2t",
            ScriptConversion::T2S => "t2s",
            ScriptConversion::S2TW => "s2tw",
            ScriptConversion::S2HK => "s2hk",
        }
    }
}

impl std::fmt::Display for ScriptConversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_simplified_to_traditional() {
        assert_eq!(ScriptConversion::default(), ScriptConversion::S2T);
        assert_eq!(ScriptConversion::DEFAULT, ScriptConversion::S2T);
    }

    #[test]
    fn test_ids() {
        assert_eq!(ScriptConversion::S2T.to_string(), "s2t");
        assert_eq!(ScriptConversion::T2S.id(), "t2s");
        assert_eq!(ScriptConversion::S2TW.id(), "s2tw");
        assert_eq!(ScriptConversion::S2HK.id(), "s2hk");
    }
}
