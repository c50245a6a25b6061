//! Chinese script conversion backed by zhconv

use crate::domain::ScriptConversion;
use crate::error::Result;
use zhconv::{zhconv, Variant};

/// Text transform between written-script variants
pub trait ScriptConverter {
    fn convert(&self, text: &str) -> Result<String>;
}

impl<T: ScriptConverter + ?Sized> ScriptConverter for &T {
    fn convert(&self, text: &str) -> Result<String> {
        (**self).convert(text)
    }
}

/// Converter using the rule sets bundled with `zhconv`
#[derive(Debug, Clone, Copy)]
pub struct ZhConverter {
    conversion: ScriptConversion,
}

impl ZhConverter {
    pub fn new(conversion: ScriptConversion) -> Self {
        ZhConverter { conversion }
    }

    pub fn conversion(&self) -> ScriptConversion {
        self.conversion
    }

    fn target(&self) -> Variant {
        match self.conversion {
            ScriptConversion::S2T => Variant::ZhHant,
            ScriptConversion::T2S => Variant::ZhHans,
            ScriptConversion::S2TW => Variant::ZhTW,
            ScriptConversion::S2HK => Variant::ZhHK,
        }
    }
}

impl Default for ZhConverter {
    fn default() -> Self {
        ZhConverter::new(ScriptConversion::DEFAULT)
    }
}

impl ScriptConverter for ZhConverter {
    fn convert(&self, text: &str) -> Result<String> {
        Ok(zhconv(text, self.target()))
    }
}
