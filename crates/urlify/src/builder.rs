use std::cell::OnceCell;

use log::debug;

use crate::{
    charmap::is_supported_language,
    config::UrlifyConfig,
    pipeline::{SlugOptions, slugify_with},
};

/// Holds the text and options for a slug and remembers the result until any of them change.
///
/// Setters chain and can be called in any order. The result is computed on the first call to
/// [`SlugBuilder::transform`] and reused by later calls until a setter runs, every setter
/// (stopword additions and removals included) throws the cached slug away.
///
/// A builder is not meant to be shared between threads. The transliteration and stopword
/// tables behind it are process wide and read-only.
#[derive(Debug, Default, Clone)]
pub struct SlugBuilder {
    text: String,
    options: SlugOptions,
    result: OnceCell<String>,
}

impl SlugBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &UrlifyConfig) -> Self {
        let mut builder = Self::new();
        if let Some(language) = &config.language {
            builder.set_language(language.as_str());
        }
        builder.set_max_length(config.max_length);
        for word in &config.stopwords {
            builder.add_stopword(word);
        }

        builder
    }

    /// An empty identifier clears the hint. Unknown identifiers are kept but transliterate
    /// exactly like no hint at all.
    pub fn set_language(&mut self, language: impl Into<String>) -> &mut Self {
        let language = language.into();
        if language.is_empty() {
            self.options.language = None;
        } else {
            if !is_supported_language(&language) {
                debug!("unknown language {:?}, no map will take precedence", language);
            }
            self.options.language = Some(language);
        }

        self.invalidate()
    }

    /// `0` disables truncation.
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        self.options.max_length = max_length;
        self.invalidate()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self.invalidate()
    }

    pub fn add_stopword(&mut self, word: &str) -> &mut Self {
        self.options.stopwords.push(word.trim().to_string());
        self.invalidate()
    }

    /// Drops the first stopword added to this builder that equals `word` once trimmed. The
    /// default stopwords always apply and can't be removed.
    pub fn remove_stopword(&mut self, word: &str) -> &mut Self {
        let word = word.trim();
        if let Some(index) = self.options.stopwords.iter().position(|w| w == word) {
            self.options.stopwords.remove(index);
        } else {
            debug!("{:?} is not an added stopword", word);
        }

        self.invalidate()
    }

    /// Returns the slug, computing it only if nothing cached it since the last change.
    pub fn transform(&self) -> &str {
        self.result.get_or_init(|| slugify_with(&self.text, &self.options))
    }

    pub fn is_cached(&self) -> bool {
        self.result.get().is_some()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Option<&str> {
        self.options.language.as_deref()
    }

    pub fn max_length(&self) -> usize {
        self.options.max_length
    }

    pub fn stopwords(&self) -> &[String] {
        &self.options.stopwords
    }

    fn invalidate(&mut self) -> &mut Self {
        self.result.take();
        self
    }
}
