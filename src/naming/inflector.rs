//! English inflection rules
//!
//! Ordered regex rule table in the style of the usual Rails inflections:
//! later rules take precedence, irregular words and uncountables are checked
//! first.

use regex::Regex;
use std::sync::LazyLock;

/// String inflection used to derive collection field names
pub trait Inflector {
    /// Plural form of a single lowercase word
    fn pluralize(&self, word: &str) -> String;

    /// `CompoundWord` to `compound_word`
    fn underscore(&self, word: &str) -> String;
}

/// Plural rules, least specific first
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"$", "s"),
    (r"s$", "s"),
    (r"^(ax|test)is$", "${1}es"),
    (r"(octop|vir)us$", "${1}i"),
    (r"(octop|vir)i$", "${1}i"),
    (r"(alias|status)$", "${1}es"),
    (r"(bu)s$", "${1}ses"),
    (r"(buffal|tomat)o$", "${1}oes"),
    (r"([ti])um$", "${1}a"),
    (r"([ti])a$", "${1}a"),
    (r"sis$", "ses"),
    (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"(hive)$", "${1}s"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(x|ch|ss|sh)$", "${1}es"),
    (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"^(m|l)ouse$", "${1}ice"),
    (r"^(m|l)ice$", "${1}ice"),
    (r"^(ox)$", "${1}en"),
    (r"^(oxen)$", "${1}"),
    (r"(quiz)$", "${1}zes"),
];

const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

static PLURALS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PLURAL_RULES
        .iter()
        .rev()
        .map(|(pattern, replacement)| {
            let regex = Regex::new(&format!("(?i){pattern}")).expect("valid plural rule");
            (regex, *replacement)
        })
        .collect()
});

static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("valid boundary regex"));

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("valid boundary regex"));

/// English inflector
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let lower = word.to_lowercase();
        if UNCOUNTABLES.contains(&lower.as_str()) {
            return word.to_string();
        }

        for (singular, plural) in IRREGULARS {
            if lower == *singular || lower == *plural {
                return match_first_char(word, plural);
            }
        }

        for (regex, replacement) in PLURALS.iter() {
            if regex.is_match(word) {
                return regex.replace(word, *replacement).into_owned();
            }
        }
        word.to_string()
    }

    fn underscore(&self, word: &str) -> String {
        let word = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
        let word = WORD_BOUNDARY.replace_all(&word, "${1}_${2}");
        word.replace('-', "_").to_lowercase()
    }
}

/// `plural` with the first character cased like `word`'s
fn match_first_char(word: &str, plural: &str) -> String {
    let mut chars = plural.chars();
    match (word.chars().next(), chars.next()) {
        (Some(w), Some(p)) if w.is_uppercase() => p.to_uppercase().chain(chars).collect(),
        _ => plural.to_string(),
    }
}
