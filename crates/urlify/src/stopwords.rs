use std::sync::LazyLock;

use log::debug;
use regex::{Regex, RegexBuilder};

/// Filler words dropped from every slug.
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "a", "an", "as", "at", "before", "but", "by", "for", "from", "is", "in", "into", "like", "of",
    "off", "on", "onto", "per", "since", "than", "the", "this", "that", "to", "up", "via", "with",
];

static DEFAULTS: LazyLock<Vec<Stopword>> =
    LazyLock::new(|| DEFAULT_STOPWORDS.iter().filter_map(|word| Stopword::new(word)).collect());

/// A word compiled into its two removal patterns, `" word"` and `"word "`.
///
/// Matching is case-insensitive and is plain substring matching, not tokenisation: "a " also
/// matches the tail of "pizza time", and " a" eats the capital of "Big Apple", which comes out
/// as "Bigpple".
#[derive(Debug, Clone)]
pub struct Stopword {
    leading: Regex,
    trailing: Regex,
}

impl Stopword {
    /// Returns `None` for words that are empty once trimmed.
    pub fn new(word: &str) -> Option<Self> {
        let word = word.trim();
        if word.is_empty() {
            return None;
        }

        match Self::compile(word) {
            Ok(stopword) => Some(stopword),
            Err(err) => {
                debug!("ignoring stopword {:?}: {}", word, err);
                None
            }
        }
    }

    fn compile(word: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(word);
        let leading = build_pattern(&format!(" {}", escaped))?;
        let trailing = build_pattern(&format!("{} ", escaped))?;

        Ok(Self { leading, trailing })
    }

    /// Removes every `" word"`, then every `"word "`.
    pub fn remove_from(&self, text: &str) -> String {
        let text = self.leading.replace_all(text, "");
        self.trailing.replace_all(&text, "").into_owned()
    }
}

fn build_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Strips the default stopwords, then `extra` in the order given.
pub fn remove_stopwords(text: &str, extra: &[String]) -> String {
    let mut text = text.to_string();

    for stopword in DEFAULTS.iter() {
        text = stopword.remove_from(&text);
    }

    for stopword in extra.iter().filter_map(|word| Stopword::new(word)) {
        text = stopword.remove_from(&text);
    }

    text
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_removed() {
        assert_eq!("Quick Fox", remove_stopwords("The Quick Fox", &[]));
        assert_eq!("x y z", remove_stopwords("x the y the z", &[]));
        assert_eq!("Rust Beginners", remove_stopwords("Rust for Beginners", &[]));
    }

    #[test]
    fn test_removal_is_substring_based() {
        assert_eq!("Pizztime", remove_stopwords("Pizza time", &[]));
        assert_eq!("Bigpple", remove_stopwords("Big Apple", &[]));
        assert_eq!("Learnbout Rust", remove_stopwords("Learn About Rust", &[]));
        // No surrounding space, nothing to remove.
        assert_eq!("Theory", remove_stopwords("Theory", &[]));
    }

    #[test]
    fn test_extra_words_are_removed_after_defaults() {
        let extra = vec!["foo".to_string(), "  Baz ".to_string()];

        assert_eq!("bar", remove_stopwords("foo bar", &extra));
        assert_eq!("bar", remove_stopwords("bar BAZ", &extra));
    }

    #[test]
    fn test_extra_words_are_escaped() {
        let extra = vec!["c++".to_string()];

        assert_eq!("rocks", remove_stopwords("c++ rocks", &extra));
    }

    #[test]
    fn test_empty_words_are_ignored() {
        assert!(Stopword::new("   ").is_none());
        assert_eq!(
            "keep my spaces",
            remove_stopwords("keep my spaces", &["".to_string(), " ".to_string()])
        );
    }
}
