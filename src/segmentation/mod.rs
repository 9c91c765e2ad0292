pub mod analyzer;

pub mod romanizer;

pub mod token_models;

#[cfg(test)]


pub use analyzer::{
    shared_analyzer,
    AnalyzerConfig,
    MorphologicalAnalyzer,
    VibratoAnalyzer,
};
pub use romanizer::{
    romanize,
    romanize_all,
    romanize_sentence,
    RomanizedSentence,
    Token,
};
