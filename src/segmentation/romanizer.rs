use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use wana_kana::ConvertJapanese;

use super::{
    analyzer::{
        shared_analyzer,
        AnalyzerConfig,
        MorphologicalAnalyzer,
    },
    token_models::AnalyzedToken,
};
use crate::core::{
    utils::StripLongVowel,
    YomikataError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub surface: String,
    pub reading: String,
    pub romaji: String,
    /// No usable reading came from the analyzer; `reading` and `romaji` were
    /// derived from the surface form, so kanji are left untransliterated.
    pub reading_from_surface: bool,
}

/// Parallel per-token arrays plus the space-joined romanization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RomanizedSentence {
    pub kana_words: Vec<String>,
    pub readings: Vec<String>,
    pub romaji_words: Vec<String>,
    pub formatted: String,
    #[serde(skip)]
    pub tokens: Vec<Token>,
}

impl From<Vec<Token>> for RomanizedSentence {
    fn from(tokens: Vec<Token>) -> Self {
        let kana_words = tokens.iter().map(|t| t.surface.clone()).collect();
        let readings = tokens.iter().map(|t| t.reading.clone()).collect();
        let romaji_words: Vec<String> = tokens.iter().map(|t| t.romaji.clone()).collect();
        let formatted = romaji_words.join(" ");

        Self { kana_words, readings, romaji_words, formatted, tokens }
    }
}

pub fn romanize_token(token: &AnalyzedToken) -> Token {
    let cleaned = token.reading.as_deref().map(str::strip_long_vowel).filter(|r| !r.is_empty());

    let (source, reading_from_surface) = match cleaned {
        Some(reading) => (reading, false),
        None => {
            debug!(surface = %token.surface, "no reading from analyzer, using surface form");
            (token.surface.clone(), true)
        }
    };

    let reading = source.as_str().to_hiragana();
    let romaji = reading.as_str().to_romaji();

    Token { surface: token.surface.clone(), reading, romaji, reading_from_surface }
}

pub fn romanize<A: MorphologicalAnalyzer + ?Sized>(analyzer: &A, sentence: &str) -> RomanizedSentence {
    let tokens: Vec<Token> = analyzer.analyze(sentence).iter().map(romanize_token).collect();
    debug!(sentence, tokens = tokens.len(), "romanized sentence");
    tokens.into()
}

/// Romanize many sentences against one shared analyzer; output keeps input order.
pub fn romanize_all<A, S>(analyzer: &A, sentences: &[S]) -> Vec<RomanizedSentence>
where
    A: MorphologicalAnalyzer + ?Sized,
    S: AsRef<str> + Sync,
{
    sentences.par_iter().map(|sentence| romanize(analyzer, sentence.as_ref())).collect()
}

/// Romanize with the process-wide analyzer, building it on first use.
pub async fn romanize_sentence(
    config: &AnalyzerConfig,
    sentence: &str,
) -> Result<RomanizedSentence, YomikataError> {
    let analyzer = shared_analyzer(config).await?;
    Ok(romanize(analyzer.as_ref(), sentence))
}
