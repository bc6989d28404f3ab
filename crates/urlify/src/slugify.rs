use crate::pipeline::{SlugOptions, slugify_with};

/// Slugifies with the default stopwords, no language hint and no length limit.
///
/// Example: `Über den Wolken` → `ueber-den-wolken`
pub fn slugify(input: &str) -> String {
    slugify_with(input, &SlugOptions::default())
}

/// Like [`slugify`] but resolves characters shared between maps with `language` first.
pub fn slugify_in(input: &str, language: &str) -> String {
    slugify_with(
        input,
        &SlugOptions {
            language: Some(language.to_string()),
            ..Default::default()
        },
    )
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_slugify() {
        assert_eq!("ueber-den-wolken", slugify("Über den Wolken"));
        assert_eq!("heading-1", slugify("heading 1"));
        assert_eq!("", slugify(""));
    }

    #[test]
    fn test_slugify_in() {
        assert_eq!("ubersicht", slugify_in("Übersicht", "latin"));
        assert_eq!("uebersicht", slugify_in("Übersicht", "de"));
    }
}
