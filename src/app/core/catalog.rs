// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use rust_embed::RustEmbed;
use serde::Deserialize;

use crate::app::core::models::{WordEntry, WordRange, range};

const CATALOG_FILE: &str = "words.ron";

#[derive(RustEmbed)]
#[folder = "res/catalog/"]
struct CatalogAssets;

/// On-disk representation of the bundled catalog, words are `(number, source, target)` tuples
#[derive(Deserialize)]
struct CatalogFile {
    source_language: String,
    target_language: String,
    words: Vec<(usize, String, String)>,
}

/// The complete, read-only list of vocabulary entries the application can study
#[derive(Debug)]
pub struct Catalog {
    source_language: String,
    target_language: String,
    words: Vec<WordEntry>,
}

impl Catalog {
    /// Loads and validates the catalog embedded in the binary without blocking the UI thread
    pub async fn load() -> Result<Arc<Catalog>, anywho::Error> {
        let catalog = tokio::task::spawn_blocking(Self::bundled).await??;
        tracing::info!(
            words = catalog.len(),
            source = catalog.source_language(),
            target = catalog.target_language(),
            "word catalog loaded"
        );
        Ok(Arc::new(catalog))
    }

    /// Parses the catalog embedded in the binary
    pub fn bundled() -> Result<Catalog, anywho::Error> {
        let file = CatalogAssets::get(CATALOG_FILE)
            .ok_or_else(|| anywho::anywho!("Bundled catalog {} is missing", CATALOG_FILE))?;
        let content = std::str::from_utf8(&file.data)?;
        Self::from_ron(content)
    }

    /// Parses a catalog in the RON format used by the bundled word list
    pub fn from_ron(content: &str) -> Result<Catalog, anywho::Error> {
        let file: CatalogFile = ron::from_str(content)?;

        let words = file
            .words
            .into_iter()
            .map(|(number, source, target)| WordEntry::new(number, source, target))
            .collect();

        Self::from_words(file.source_language, file.target_language, words)
    }

    /// Builds a [`Catalog`], the words must be numbered `1..=N` in order
    pub fn from_words(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        words: Vec<WordEntry>,
    ) -> Result<Catalog, anywho::Error> {
        if words.is_empty() {
            return Err(anywho::anywho!("The word catalog is empty"));
        }

        if let Some((index, word)) = words
            .iter()
            .enumerate()
            .find(|(index, word)| word.number != index + 1)
        {
            return Err(anywho::anywho!(
                "Catalog entry {} has sequence number {} (\"{}\")",
                index + 1,
                word.number,
                word.source
            ));
        }

        Ok(Catalog {
            source_language: source_language.into(),
            target_language: target_language.into(),
            words,
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    /// Words whose sequence numbers fall inside the given [`WordRange`]
    pub fn slice(&self, range: &WordRange) -> &[WordEntry] {
        let start = range.start.saturating_sub(1).min(self.words.len());
        let end = range.end.min(self.words.len()).max(start);
        &self.words[start..end]
    }

    /// Ranges offered to the user: the full catalog first, then each chunk in order
    pub fn range_choices(&self, chunk_size: usize) -> Vec<WordRange> {
        std::iter::once(range::full_range(self.len()))
            .chain(range::chunked_ranges(self.len(), chunk_size))
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn numbered_catalog(size: usize) -> Catalog {
    let words = (1..=size)
        .map(|n| WordEntry::new(n, format!("word {n}"), format!("palabra {n}")))
        .collect();
    Catalog::from_words("English", "Spanish", words).expect("numbered catalog is valid")
}
