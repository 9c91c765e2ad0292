use serde::Serialize;

use crate::dictionary::DictType;

pub struct VibratoToken {
    pub surface: String,
    pub features: String,
}

impl From<vibrato::token::Token<'_, '_>> for VibratoToken {
    fn from(value: vibrato::token::Token) -> Self {
        Self {
            surface: value.surface().into(),
            features: value.feature().into(),
        }
    }
}

/// One segment as reported by the morphological analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedToken {
    pub surface: String,
    /// Kana reading in the analyzer's own convention (katakana, may contain ー).
    pub reading: Option<String>,
}

impl AnalyzedToken {
    pub fn new(surface: &str, reading: Option<&str>) -> Self {
        Self { surface: surface.to_string(), reading: reading.map(str::to_string) }
    }

    /// Pull the reading column for `dict_type` out of a comma-separated
    /// feature string. Unknown words carry fewer columns or `*`.
    pub fn from_features(surface: String, features: &str, dict_type: &DictType) -> Self {
        let reading = features
            .split(',')
            .nth(dict_type.reading_index())
            .map(str::trim)
            .filter(|field| !field.is_empty() && *field != "*")
            .map(str::to_string);

        Self { surface, reading }
    }

    pub fn from_vibrato(token: VibratoToken, dict_type: &DictType) -> Self {
        Self::from_features(token.surface, &token.features, dict_type)
    }
}
