use std::{
    future::Future,
    path::PathBuf,
    sync::Arc,
    time::Instant,
};

use serde::{
    Deserialize,
    Serialize,
};
use tokio::sync::OnceCell;
use tracing::info;
use vibrato::{
    Dictionary,
    Tokenizer,
};

use super::token_models::{
    AnalyzedToken,
    VibratoToken,
};
use crate::{
    core::YomikataError,
    dictionary::{
        ensure_dictionary,
        load_dictionary,
        DictType,
    },
};

/// Segments a sentence and annotates each segment with its reading.
/// Implementations are read-only after construction and shared across threads.
pub trait MorphologicalAnalyzer: Send + Sync {
    fn analyze(&self, sentence: &str) -> Vec<AnalyzedToken>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub dict_type: DictType,
    /// Use this `system.dic` instead of the downloaded one.
    #[serde(default)]
    pub dictionary_path: Option<PathBuf>,
}

pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
    dict_type: DictType,
}

impl VibratoAnalyzer {
    pub fn new(dict: Dictionary, dict_type: DictType) -> Self {
        Self { tokenizer: Tokenizer::new(dict), dict_type }
    }

    /// Locate (downloading if needed) and load the system dictionary. Blocking.
    pub fn load(config: &AnalyzerConfig) -> Result<Self, YomikataError> {
        let start = Instant::now();
        let dict_path = match &config.dictionary_path {
            Some(path) => path.clone(),
            None => ensure_dictionary(&config.dict_type, None)?,
        };

        let dict = load_dictionary(&dict_path).map_err(|e| {
            YomikataError::AnalyzerInit(format!("{}: {}", dict_path.display(), e))
        })?;

        info!(
            dict_type = ?config.dict_type,
            path = %dict_path.display(),
            elapsed = ?start.elapsed(),
            "analyzer ready"
        );
        Ok(Self::new(dict, config.dict_type))
    }

    pub fn dict_type(&self) -> DictType {
        self.dict_type
    }
}

impl MorphologicalAnalyzer for VibratoAnalyzer {
    fn analyze(&self, sentence: &str) -> Vec<AnalyzedToken> {
        let mut worker = self.tokenizer.new_worker();
        worker.reset_sentence(sentence);
        worker.tokenize();

        worker
            .token_iter()
            .map(|token| AnalyzedToken::from_vibrato(VibratoToken::from(token), &self.dict_type))
            .collect()
    }
}

/// Lazily built, process-wide analyzer slot. Concurrent first callers await
/// the same in-flight initialization. A failed initialization is returned to
/// the caller that ran it and leaves the slot empty, so the next caller retries.
pub struct AnalyzerCell<A> {
    cell: OnceCell<Arc<A>>,
}

impl<A> AnalyzerCell<A> {
    pub const fn new() -> Self {
        Self { cell: OnceCell::const_new() }
    }

    pub fn get(&self) -> Option<Arc<A>> {
        self.cell.get().cloned()
    }

    pub async fn get_or_init<F, Fut>(&self, init: F) -> Result<Arc<A>, YomikataError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<A, YomikataError>>,
    {
        self.cell
            .get_or_try_init(|| async move { init().await.map(Arc::new) })
            .await
            .cloned()
    }
}

impl<A> Default for AnalyzerCell<A> {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_ANALYZER: AnalyzerCell<VibratoAnalyzer> = AnalyzerCell::new();

/// The process-wide analyzer. The first call's `config` decides which
/// dictionary is loaded; later calls get the same handle.
pub async fn shared_analyzer(config: &AnalyzerConfig) -> Result<Arc<VibratoAnalyzer>, YomikataError> {
    SHARED_ANALYZER
        .get_or_init(|| {
            let config = config.clone();
            async move { tokio::task::spawn_blocking(move || VibratoAnalyzer::load(&config)).await? }
        })
        .await
}
