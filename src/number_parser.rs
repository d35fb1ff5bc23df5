//! # Number Parser
//!
//! Converts a numeric token from an ingredient line into its decimal value.
//! Handles integers, decimals, simple and mixed fractions, and unicode
//! vulgar fraction glyphs, in that strict precedence order (glyphs first).

use regex::Regex;
use std::sync::LazyLock;

/// Unicode vulgar fractions and their decimal values.
///
/// Checked in table order; the first glyph present in the token wins.
pub const UNICODE_FRACTIONS: &[(char, f64)] = &[
    ('¼', 0.25),
    ('½', 0.5),
    ('¾', 0.75),
    ('⅐', 1.0 / 7.0),
    ('⅑', 1.0 / 9.0),
    ('⅒', 0.1),
    ('⅓', 1.0 / 3.0),
    ('⅔', 2.0 / 3.0),
    ('⅕', 0.2),
    ('⅖', 0.4),
    ('⅗', 0.6),
    ('⅘', 0.8),
    ('⅙', 1.0 / 6.0),
    ('⅚', 5.0 / 6.0),
    ('⅛', 0.125),
    ('⅜', 0.375),
    ('⅝', 0.625),
    ('⅞', 0.875),
];

/// Compiled regex patterns for fraction forms
struct NumberPatterns {
    /// Matches mixed fractions at the start of a token: "1 1/2"
    mixed: Regex,
    /// Matches simple fractions at the start of a token: "1/2"
    fraction: Regex,
}

impl NumberPatterns {
    fn new() -> Self {
        Self {
            mixed: Regex::new(r"^(\d+)\s+(\d+)/(\d+)").unwrap(),
            fraction: Regex::new(r"^(\d+)/(\d+)").unwrap(),
        }
    }
}

static NUMBER_PATTERNS: LazyLock<NumberPatterns> = LazyLock::new(NumberPatterns::new);

/// Parse a numeric token into its decimal value.
///
/// Returns `None` when no number is recognized, including fractions with a
/// zero denominator, which are treated as unparseable rather than raising an
/// arithmetic fault.
///
/// When a vulgar fraction glyph is preceded by a numeric prefix the two are
/// added ("1½" → 1.5). A non-numeric prefix is silently discarded and the
/// glyph value stands alone.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();

    for &(glyph, value) in UNICODE_FRACTIONS {
        if let Some(idx) = text.find(glyph) {
            let before = text[..idx].trim();
            if before.is_empty() {
                return Some(value);
            }
            return match before.parse::<f64>() {
                Ok(prefix) => Some(prefix + value),
                Err(_) => Some(value),
            };
        }
    }

    if let Some(caps) = NUMBER_PATTERNS.mixed.captures(text) {
        let whole: f64 = caps[1].parse().ok()?;
        let numerator: f64 = caps[2].parse().ok()?;
        let denominator: f64 = caps[3].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(whole + numerator / denominator);
    }

    if let Some(caps) = NUMBER_PATTERNS.fraction.captures(text) {
        let numerator: f64 = caps[1].parse().ok()?;
        let denominator: f64 = caps[2].parse().ok()?;
        if denominator == 0.0 {
            return None;
        }
        return Some(numerator / denominator);
    }

    text.parse::<f64>().ok()
}
