use std::{collections::HashMap, sync::LazyLock};

/// A single language's transliteration table, mapping one code point to its ASCII
/// approximation. Replacements may be longer than one character ("ß" → "ss") or empty.
#[derive(Debug)]
pub struct CharMap {
    pub language: &'static str,
    pub chars: &'static [(char, &'static str)],
}

/// Identifiers accepted as a language hint, in the order their maps are consulted
/// when no hint (or an unknown one) is given.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "de",
    "latin",
    "latin_symbols",
    "el",
    "tr",
    "bg",
    "ru",
    "uk",
    "cs",
    "pl",
    "ro",
    "lv",
    "lt",
    "vn",
    "ar",
    "sr",
    "az",
];

static BY_LANGUAGE: LazyLock<HashMap<&'static str, HashMap<char, &'static str>>> =
    LazyLock::new(|| {
        CHAR_MAPS
            .iter()
            .map(|map| {
                let chars: HashMap<char, &'static str> = map.chars.iter().copied().collect();
                (map.language, chars)
            })
            .collect()
    });

// First map in declaration order wins for characters several maps share.
static FALLBACK: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    let mut merged = HashMap::new();
    for map in CHAR_MAPS {
        for &(from, to) in map.chars {
            merged.entry(from).or_insert(to);
        }
    }
    merged
});

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

pub fn char_map(language: &str) -> Option<&'static CharMap> {
    CHAR_MAPS.iter().find(|map| map.language == language)
}

/// Replaces every mapped character with its ASCII approximation.
///
/// The map for `language` takes precedence, every other map is still applied afterwards, so
/// a hint only decides which replacement wins for characters shared between maps ("ö" is
/// "oe" in German but "o" in Turkish). Text in every supported script is always
/// transliterated, there is no way to restrict it to a single script. Unknown language
/// identifiers behave as if no hint was given. Characters no map knows about are left as
/// they are.
pub fn transliterate(text: &str, language: Option<&str>) -> String {
    let preferred = language.and_then(|id| BY_LANGUAGE.get(id));
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }

        match preferred
            .and_then(|chars| chars.get(&c))
            .or_else(|| FALLBACK.get(&c))
        {
            Some(to) => out.push_str(to),
            None => out.push(c),
        }
    }

    out
}

// German
const DE: &[(char, &str)] = &[
    ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"), ('ä', "ae"), ('ö', "oe"), ('ü', "ue"),
    ('ß', "ss"), ('ẞ', "SS"),
];

const LATIN: &[(char, &str)] = &[
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"),
    ('Ă', "A"), ('Æ', "AE"), ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"),
    ('Ë', "E"), ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ð', "D"),
    ('Ñ', "N"), ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"),
    ('Ő', "O"), ('Ø', "O"), ('Ș', "S"), ('Ț', "T"), ('Ù', "U"), ('Ú', "U"),
    ('Û', "U"), ('Ü', "U"), ('Ű', "U"), ('Ý', "Y"), ('Þ', "TH"), ('ß', "ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"),
    ('ă', "a"), ('æ', "ae"), ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"),
    ('ë', "e"), ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "d"),
    ('ñ', "n"), ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"),
    ('ő', "o"), ('ø', "o"), ('ș', "s"), ('ț', "t"), ('ù', "u"), ('ú', "u"),
    ('û', "u"), ('ü', "u"), ('ű', "u"), ('ý', "y"), ('þ', "th"), ('ÿ', "y"),
];

const LATIN_SYMBOLS: &[(char, &str)] = &[
    ('©', "(c)"),
];

// Greek
const EL: &[(char, &str)] = &[
    ('α', "a"), ('β', "b"), ('γ', "g"), ('δ', "d"), ('ε', "e"), ('ζ', "z"),
    ('η', "h"), ('θ', "8"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"),
    ('ν', "n"), ('ξ', "3"), ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"),
    ('τ', "t"), ('υ', "y"), ('φ', "f"), ('χ', "x"), ('ψ', "ps"), ('ω', "w"),
    ('ά', "a"), ('έ', "e"), ('ί', "i"), ('ό', "o"), ('ύ', "y"), ('ή', "h"),
    ('ώ', "w"), ('ς', "s"), ('ϊ', "i"), ('ΰ', "y"), ('ϋ', "y"), ('ΐ', "i"),
    ('Α', "A"), ('Β', "B"), ('Γ', "G"), ('Δ', "D"), ('Ε', "E"), ('Ζ', "Z"),
    ('Η', "H"), ('Θ', "8"), ('Ι', "I"), ('Κ', "K"), ('Λ', "L"), ('Μ', "M"),
    ('Ν', "N"), ('Ξ', "3"), ('Ο', "O"), ('Π', "P"), ('Ρ', "R"), ('Σ', "S"),
    ('Τ', "T"), ('Υ', "Y"), ('Φ', "F"), ('Χ', "X"), ('Ψ', "PS"), ('Ω', "W"),
    ('Ά', "A"), ('Έ', "E"), ('Ί', "I"), ('Ό', "O"), ('Ύ', "Y"), ('Ή', "H"),
    ('Ώ', "W"), ('Ϊ', "I"), ('Ϋ', "Y"),
];

// Turkish
const TR: &[(char, &str)] = &[
    ('ş', "s"), ('Ş', "S"), ('ı', "i"), ('İ', "I"), ('ç', "c"), ('Ç', "C"),
    ('ü', "u"), ('Ü', "U"), ('ö', "o"), ('Ö', "O"), ('ğ', "g"), ('Ğ', "G"),
];

// Bulgarian
const BG: &[(char, &str)] = &[
    ('Щ', "Sht"), ('Ш', "Sh"), ('Ч', "Ch"), ('Ц', "C"), ('Ю', "Yu"), ('Я', "Ya"),
    ('Ж', "J"), ('А', "A"), ('Б', "B"), ('В', "V"), ('Г', "G"), ('Д', "D"),
    ('Е', "E"), ('З', "Z"), ('И', "I"), ('Й', "Y"), ('К', "K"), ('Л', "L"),
    ('М', "M"), ('Н', "N"), ('О', "O"), ('П', "P"), ('Р', "R"), ('С', "S"),
    ('Т', "T"), ('У', "U"), ('Ф', "F"), ('Х', "H"), ('Ь', ""), ('Ъ', "A"),
    ('щ', "sht"), ('ш', "sh"), ('ч', "ch"), ('ц', "c"), ('ю', "yu"), ('я', "ya"),
    ('ж', "j"), ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"),
    ('е', "e"), ('з', "z"), ('и', "i"), ('й', "y"), ('к', "k"), ('л', "l"),
    ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"),
    ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ь', ""), ('ъ', "a"),
];

// Russian
const RU: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
    ('ё', "yo"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"),
    ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
    ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "h"), ('ц', "c"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "sh"), ('ъ', ""), ('ы', "y"), ('ь', ""),
    ('э', "e"), ('ю', "yu"), ('я', "ya"), ('А', "A"), ('Б', "B"), ('В', "V"),
    ('Г', "G"), ('Д', "D"), ('Е', "E"), ('Ё', "Yo"), ('Ж', "Zh"), ('З', "Z"),
    ('И', "I"), ('Й', "J"), ('К', "K"), ('Л', "L"), ('М', "M"), ('Н', "N"),
    ('О', "O"), ('П', "P"), ('Р', "R"), ('С', "S"), ('Т', "T"), ('У', "U"),
    ('Ф', "F"), ('Х', "H"), ('Ц', "C"), ('Ч', "Ch"), ('Ш', "Sh"), ('Щ', "Sh"),
    ('Ъ', ""), ('Ы', "Y"), ('Ь', ""), ('Э', "E"), ('Ю', "Yu"), ('Я', "Ya"),
    ('№', ""),
];

// Ukrainian
const UK: &[(char, &str)] = &[
    ('Є', "Ye"), ('І', "I"), ('Ї', "Yi"), ('Ґ', "G"), ('є', "ye"), ('і', "i"),
    ('ї', "yi"), ('ґ', "g"),
];

// Czech
const CS: &[(char, &str)] = &[
    ('č', "c"), ('ď', "d"), ('ě', "e"), ('ň', "n"), ('ř', "r"), ('š', "s"),
    ('ť', "t"), ('ů', "u"), ('ž', "z"), ('Č', "C"), ('Ď', "D"), ('Ě', "E"),
    ('Ň', "N"), ('Ř', "R"), ('Š', "S"), ('Ť', "T"), ('Ů', "U"), ('Ž', "Z"),
];

// Polish
const PL: &[(char, &str)] = &[
    ('ą', "a"), ('ć', "c"), ('ę', "e"), ('ł', "l"), ('ń', "n"), ('ó', "o"),
    ('ś', "s"), ('ź', "z"), ('ż', "z"), ('Ą', "A"), ('Ć', "C"), ('Ę', "e"),
    ('Ł', "L"), ('Ń', "N"), ('Ó', "O"), ('Ś', "S"), ('Ź', "Z"), ('Ż', "Z"),
];

// Romanian
const RO: &[(char, &str)] = &[
    ('ă', "a"), ('â', "a"), ('î', "i"), ('ș', "s"), ('ț', "t"), ('Ţ', "T"),
    ('ţ', "t"),
];

// Latvian
const LV: &[(char, &str)] = &[
    ('ā', "a"), ('č', "c"), ('ē', "e"), ('ģ', "g"), ('ī', "i"), ('ķ', "k"),
    ('ļ', "l"), ('ņ', "n"), ('š', "s"), ('ū', "u"), ('ž', "z"), ('Ā', "A"),
    ('Č', "C"), ('Ē', "E"), ('Ģ', "G"), ('Ī', "i"), ('Ķ', "k"), ('Ļ', "L"),
    ('Ņ', "N"), ('Š', "S"), ('Ū', "u"), ('Ž', "Z"),
];

// Lithuanian
const LT: &[(char, &str)] = &[
    ('ą', "a"), ('č', "c"), ('ę', "e"), ('ė', "e"), ('į', "i"), ('š', "s"),
    ('ų', "u"), ('ū', "u"), ('ž', "z"), ('Ą', "A"), ('Č', "C"), ('Ę', "E"),
    ('Ė', "E"), ('Į', "I"), ('Š', "S"), ('Ų', "U"), ('Ū', "U"), ('Ž', "Z"),
];

// Vietnamese
const VN: &[(char, &str)] = &[
    ('Á', "A"), ('À', "A"), ('Ả', "A"), ('Ã', "A"), ('Ạ', "A"), ('Ă', "A"),
    ('Ắ', "A"), ('Ằ', "A"), ('Ẳ', "A"), ('Ẵ', "A"), ('Ặ', "A"), ('Â', "A"),
    ('Ấ', "A"), ('Ầ', "A"), ('Ẩ', "A"), ('Ẫ', "A"), ('Ậ', "A"), ('á', "a"),
    ('à', "a"), ('ả', "a"), ('ã', "a"), ('ạ', "a"), ('ă', "a"), ('ắ', "a"),
    ('ằ', "a"), ('ẳ', "a"), ('ẵ', "a"), ('ặ', "a"), ('â', "a"), ('ấ', "a"),
    ('ầ', "a"), ('ẩ', "a"), ('ẫ', "a"), ('ậ', "a"), ('É', "E"), ('È', "E"),
    ('Ẻ', "E"), ('Ẽ', "E"), ('Ẹ', "E"), ('Ê', "E"), ('Ế', "E"), ('Ề', "E"),
    ('Ể', "E"), ('Ễ', "E"), ('Ệ', "E"), ('é', "e"), ('è', "e"), ('ẻ', "e"),
    ('ẽ', "e"), ('ẹ', "e"), ('ê', "e"), ('ế', "e"), ('ề', "e"), ('ể', "e"),
    ('ễ', "e"), ('ệ', "e"), ('Í', "I"), ('Ì', "I"), ('Ỉ', "I"), ('Ĩ', "I"),
    ('Ị', "I"), ('í', "i"), ('ì', "i"), ('ỉ', "i"), ('ĩ', "i"), ('ị', "i"),
    ('Ó', "O"), ('Ò', "O"), ('Ỏ', "O"), ('Õ', "O"), ('Ọ', "O"), ('Ô', "O"),
    ('Ố', "O"), ('Ồ', "O"), ('Ổ', "O"), ('Ỗ', "O"), ('Ộ', "O"), ('Ơ', "O"),
    ('Ớ', "O"), ('Ờ', "O"), ('Ở', "O"), ('Ỡ', "O"), ('Ợ', "O"), ('ó', "o"),
    ('ò', "o"), ('ỏ', "o"), ('õ', "o"), ('ọ', "o"), ('ô', "o"), ('ố', "o"),
    ('ồ', "o"), ('ổ', "o"), ('ỗ', "o"), ('ộ', "o"), ('ơ', "o"), ('ớ', "o"),
    ('ờ', "o"), ('ở', "o"), ('ỡ', "o"), ('ợ', "o"), ('Ú', "U"), ('Ù', "U"),
    ('Ủ', "U"), ('Ũ', "U"), ('Ụ', "U"), ('Ư', "U"), ('Ứ', "U"), ('Ừ', "U"),
    ('Ử', "U"), ('Ữ', "U"), ('Ự', "U"), ('ú', "u"), ('ù', "u"), ('ủ', "u"),
    ('ũ', "u"), ('ụ', "u"), ('ư', "u"), ('ứ', "u"), ('ừ', "u"), ('ử', "u"),
    ('ữ', "u"), ('ự', "u"), ('Ý', "Y"), ('Ỳ', "Y"), ('Ỷ', "Y"), ('Ỹ', "Y"),
    ('Ỵ', "Y"), ('ý', "y"), ('ỳ', "y"), ('ỷ', "y"), ('ỹ', "y"), ('ỵ', "y"),
    ('Đ', "D"), ('đ', "d"),
];

// Arabic
const AR: &[(char, &str)] = &[
    ('أ', "a"), ('ب', "b"), ('ت', "t"), ('ث', "th"), ('ج', "g"), ('ح', "h"),
    ('خ', "kh"), ('د', "d"), ('ذ', "th"), ('ر', "r"), ('ز', "z"), ('س', "s"),
    ('ش', "sh"), ('ص', "s"), ('ض', "d"), ('ط', "t"), ('ظ', "th"), ('ع', "aa"),
    ('غ', "gh"), ('ف', "f"), ('ق', "k"), ('ك', "k"), ('ل', "l"), ('م', "m"),
    ('ن', "n"), ('ه', "h"), ('و', "o"), ('ي', "y"),
];

// Serbian
const SR: &[(char, &str)] = &[
    ('ђ', "dj"), ('ј', "j"), ('љ', "lj"), ('њ', "nj"), ('ћ', "c"), ('џ', "dz"),
    ('đ', "dj"), ('Ђ', "Dj"), ('Ј', "j"), ('Љ', "Lj"), ('Њ', "Nj"), ('Ћ', "C"),
    ('Џ', "Dz"), ('Đ', "Dj"),
];

// Azerbaijani
const AZ: &[(char, &str)] = &[
    ('ç', "c"), ('ə', "e"), ('ğ', "g"), ('ı', "i"), ('ö', "o"), ('ş', "s"),
    ('ü', "u"), ('Ç', "C"), ('Ə', "E"), ('Ğ', "G"), ('İ', "I"), ('Ö', "O"),
    ('Ş', "S"), ('Ü', "U"),
];

pub static CHAR_MAPS: &[CharMap] = &[
    CharMap {
        language: "de",
        chars: DE,
    },
    CharMap {
        language: "latin",
        chars: LATIN,
    },
    CharMap {
        language: "latin_symbols",
        chars: LATIN_SYMBOLS,
    },
    CharMap {
        language: "el",
        chars: EL,
    },
    CharMap {
        language: "tr",
        chars: TR,
    },
    CharMap {
        language: "bg",
        chars: BG,
    },
    CharMap {
        language: "ru",
        chars: RU,
    },
    CharMap {
        language: "uk",
        chars: UK,
    },
    CharMap {
        language: "cs",
        chars: CS,
    },
    CharMap {
        language: "pl",
        chars: PL,
    },
    CharMap {
        language: "ro",
        chars: RO,
    },
    CharMap {
        language: "lv",
        chars: LV,
    },
    CharMap {
        language: "lt",
        chars: LT,
    },
    CharMap {
        language: "vn",
        chars: VN,
    },
    CharMap {
        language: "ar",
        chars: AR,
    },
    CharMap {
        language: "sr",
        chars: SR,
    },
    CharMap {
        language: "az",
        chars: AZ,
    },
];

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_supported_language_has_a_map() {
        let declared: Vec<&str> = CHAR_MAPS.iter().map(|map| map.language).collect();

        assert_eq!(SUPPORTED_LANGUAGES.to_vec(), declared);
        for language in SUPPORTED_LANGUAGES {
            assert!(is_supported_language(language));
            assert!(char_map(language).is_some());
        }
        assert!(!is_supported_language("DE"));
        assert!(char_map("klingon").is_none());
    }

    #[test]
    fn test_replacements_are_ascii() {
        for map in CHAR_MAPS {
            for (from, to) in map.chars {
                assert!(!from.is_ascii(), "{} maps ascii {:?}", map.language, from);
                assert!(to.is_ascii(), "{} maps {:?} to {:?}", map.language, from, to);
            }
        }
    }

    #[test]
    fn test_language_hint_decides_shared_characters() {
        assert_eq!("Oeffnen", transliterate("Öffnen", Some("de")));
        assert_eq!("Offnen", transliterate("Öffnen", Some("tr")));
        assert_eq!("Offnen", transliterate("Öffnen", Some("latin")));
        // German is declared first so it wins without a hint.
        assert_eq!("Oeffnen", transliterate("Öffnen", None));

        assert_eq!("Jogurt", transliterate("Йогурт", Some("ru")));
        assert_eq!("Yogurt", transliterate("Йогурт", None));
    }

    #[test]
    fn test_all_scripts_transliterated_regardless_of_hint() {
        assert_eq!(
            "Ueber Ellhnika privet",
            transliterate("Über Ελληνικά привет", Some("de"))
        );
    }

    #[test]
    fn test_unknown_language_behaves_as_none() {
        assert_eq!(
            transliterate("Ça va très bien", None),
            transliterate("Ça va très bien", Some("fr"))
        );
    }

    #[test]
    fn test_unmapped_characters_are_kept() {
        assert_eq!("Tokyo 東京", transliterate("Tokyo 東京", None));
        assert_eq!("Kniga ", transliterate("Книга №", Some("ru")));
        assert_eq!("(c) 2024", transliterate("© 2024", None));
    }

    #[test]
    fn test_char_map_lookup() {
        let german = char_map("de").unwrap();

        assert_eq!("de", german.language);
        assert!(german.chars.contains(&('ß', "ss")));
        assert!(!german.chars.iter().any(|(from, _)| *from == 'é'));
    }
}
