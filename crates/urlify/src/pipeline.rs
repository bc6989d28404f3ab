use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::{charmap::transliterate, stopwords::remove_stopwords};

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s_\-a-zA-Z0-9]").expect("Invalid regex"));
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").expect("Invalid regex"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").expect("Invalid regex"));

/// Everything that shapes a slug apart from the text itself.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SlugOptions {
    /// Preferred transliteration map, see [`crate::charmap::transliterate`].
    pub language: Option<String>,
    /// Maximum slug length in bytes, `0` means unlimited.
    pub max_length: usize,
    /// Stopwords removed in addition to [`crate::stopwords::DEFAULT_STOPWORDS`].
    pub stopwords: Vec<String>,
}

/// Turns `text` into a slug.
///
/// This never fails: the result only ever contains lowercase ASCII letters, digits and single
/// hyphens, never starts or ends with a hyphen, and may be empty when nothing survives.
/// Slugifying a slug again with the same options returns it unchanged.
pub fn slugify_with(text: &str, options: &SlugOptions) -> String {
    let text = transliterate(text.trim(), options.language.as_deref());
    trace!("transliterated: {:?}", text);

    let text = remove_stopwords(&text, &options.stopwords);
    trace!("without stopwords: {:?}", text);

    let text = DISALLOWED.replace_all(&text, "");
    let mut text = normalize(&text);
    trace!("normalized: {:?}", text);

    truncate(&mut text, options.max_length);

    text.trim_matches('-').to_string()
}

fn normalize(text: &str) -> String {
    let text = text.replace('_', " ");
    let text = WHITESPACE.replace_all(text.trim(), "-");

    HYPHEN_RUN.replace_all(&text, "-").to_ascii_lowercase()
}

// Only ASCII is left by now, any byte offset is a char boundary.
fn truncate(text: &mut String, max_length: usize) {
    if max_length > 0 && text.len() > max_length {
        text.truncate(max_length);
    }
}
