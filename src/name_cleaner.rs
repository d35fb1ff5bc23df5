//! # Ingredient Name Cleaner
//!
//! Strips quantity, unit, parenthetical, preparation, and trailing-qualifier
//! text from a raw ingredient line to recover the canonical ingredient name.
//!
//! The pipeline runs in a fixed order: container detection, canned-form
//! normalization (canned lines only), complex-parenthetical removal
//! (non-canned lines only), leading quantity removal, leading unit-word
//! removal, preparation-adjective stripping, trailing-qualifier stripping.
//! Lines that mention a can as a container get the literal prefix "canned"
//! and keep their preparation adjectives.
//!
//! Cleaning is a pure function of the raw text and never fails: when the
//! pipeline strips the whole line, the original line is returned verbatim.

use crate::unit_normalizer::synonyms_longest_first;
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

/// Preparation adjectives stripped from the front of non-canned names.
///
/// "ground" is not in the list; compound names like "ground beef" and
/// "ground cinnamon" keep it.
const PREP_WORDS: &[&str] = &[
    "chopped",
    "minced",
    "sliced",
    "diced",
    "crushed",
    "grated",
    "shredded",
    "cubed",
    "peeled",
    "cored",
    "seeded",
    "julienned",
    "halved",
    "quartered",
    "beaten",
    "sifted",
    "melted",
    "softened",
    "finely",
    "coarsely",
    "roughly",
];

lazy_static! {
    /// Whole-word "can"/"cans"/"canned" anywhere in the line
    static ref CAN_WORD: Regex = Regex::new(r"(?i)\b(can|cans|canned)\b").unwrap();

    /// Container-count phrasing: "<count> (<aside>) cans "
    static ref CANNED_CONTAINER: Regex = Regex::new(
        r"(?i)(\d+(?:\s+\d+/\d+)?|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*\(.*?\)\s*(cans?)\s+"
    ).unwrap();

    /// Bare "<N> cans " prefix
    static ref CANNED_COUNT_PREFIX: Regex = Regex::new(r"(?i)^\d+\s+(cans?)\s+").unwrap();

    /// Any remaining standalone "can"/"cans" word
    static ref CAN_STANDALONE: Regex = Regex::new(r"(?i)\b(cans?)\b").unwrap();

    /// Doubled "canned canned" left behind by the passes above; the
    /// replacement keeps the first token so capitalization survives
    static ref CANNED_DOUBLED: Regex = Regex::new(r"(?i)\b(canned)\s+canned\b").unwrap();

    /// Container/weight asides on non-canned lines:
    /// "<count> (<free text>) <word>" is discarded entirely
    static ref COMPLEX_QUANTITY_ASIDE: Regex = Regex::new(
        r"(\d+(?:\s+\d+/\d+)?|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*\(.*?\)\s*[a-zA-Z]+\s*"
    ).unwrap();

    /// Leading numeric token: mixed fraction, number+glyph, simple fraction,
    /// decimal, numeric range, bare glyph, or integer, tried in that order
    static ref LEADING_QUANTITY: Regex = Regex::new(
        r"^(\d+\s+\d+/\d+|\d+\s*[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]|\d+/\d+|\d+\.\d+|\d+\s*-\s*\d+|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞]|\d+)\s*"
    ).unwrap();

    /// Single leading unit word (longest synonym first, optional period and
    /// plural "s", optionally followed by "of")
    static ref LEADING_UNIT_WORD: Regex = {
        let synonyms: Vec<String> = synonyms_longest_first()
            .iter()
            .map(|s| regex::escape(s))
            .collect();
        Regex::new(&format!(r"(?i)^({})\.?s?\s+(?:of\s+)?", synonyms.join("|"))).unwrap()
    };

    /// Single leading preparation adjective
    static ref LEADING_PREP_WORD: Regex =
        Regex::new(&format!(r"(?i)^({})\s+", PREP_WORDS.join("|"))).unwrap();

    /// Trailing clauses: ", divided", ", or to taste", ", plus more",
    /// ", to taste", ", optional", each through end of line
    static ref TRAILING_QUALIFIERS: Vec<Regex> = [
        r"(?i),\s*divided.*$",
        r"(?i),\s*or to taste.*$",
        r"(?i),\s*plus more.*$",
        r"(?i),\s*to taste.*$",
        r"(?i),\s*optional.*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect();
}

/// Clean a raw ingredient line down to its canonical name.
///
/// Always returns a best-effort string; if cleaning strips everything, the
/// original line is returned unchanged.
pub fn clean_ingredient_name(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let has_can_container = CAN_WORD.is_match(text);
    let mut name = text.to_string();

    if has_can_container {
        // Collapse container-count phrasing into the literal prefix
        // "canned", then normalize any stragglers.
        name = CANNED_CONTAINER.replace_all(&name, "canned ").trim().to_string();
        name = CANNED_COUNT_PREFIX.replace_all(&name, "canned ").trim().to_string();
        name = CAN_STANDALONE.replace_all(&name, "canned").trim().to_string();
        name = CANNED_DOUBLED.replace_all(&name, "$1").trim().to_string();
    } else {
        name = COMPLEX_QUANTITY_ASIDE.replace_all(&name, "").trim().to_string();
    }

    name = LEADING_QUANTITY.replace(&name, "").trim().to_string();
    name = LEADING_UNIT_WORD.replace(&name, "").trim().to_string();

    if !has_can_container {
        // The pass cap bounds stacked adjectives like "finely chopped diced".
        for _ in 0..3 {
            name = LEADING_PREP_WORD.replace(&name, "").trim().to_string();
        }
    }

    for qualifier in TRAILING_QUALIFIERS.iter() {
        name = qualifier.replace_all(&name, "").trim().to_string();
    }

    if name.is_empty() {
        trace!("cleaning stripped the whole line, keeping it verbatim: {:?}", text);
        return text.to_string();
    }
    name
}
