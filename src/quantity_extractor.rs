//! # Quantity Extractor
//!
//! Scans a raw ingredient line with a precedence-ordered set of named
//! matchers and produces a single `(unit, amount)` pair.
//!
//! Matchers are tried in fixed order with first-success-wins semantics:
//!
//! 1. **Container pattern**: "2 (6 ounce) cans". The amount is the
//!    container count times the per-container amount, and the *contents'*
//!    unit is the meaningful one, not the container word.
//! 2. **Simple pattern**: "2 cups", "1 1/2 teaspoons". Honored only when
//!    the word following the first recognized number normalizes to a known
//!    unit; otherwise the pattern is rejected entirely.
//! 3. **Default**: `(COUNT, 1)`.
//!
//! A line like "2 chicken breasts" therefore yields `(COUNT, 1)`: the
//! numeral is only honored when paired with a recognized unit word, and is
//! otherwise left to the name-cleaning phase.

use crate::afx_model::{Quantity, UnitTag};
use crate::number_parser::parse_number;
use crate::unit_normalizer::normalize_unit;
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex patterns for quantity extraction, tried in fixed order
struct QuantityPatterns {
    /// Container form: "2 (6 ounce) cans".
    ///
    /// Capture 1: container count (integer, mixed fraction, or vulgar
    /// fraction glyph). Capture 2: per-container amount. Capture 3:
    /// per-container unit text. Capture 4: the container word itself,
    /// required but otherwise unused.
    container: Regex,
    /// Simple form: "2 cups", "1 1/2 teaspoons", "½ cup".
    ///
    /// Capture 1: amount. Capture 2: the shortest word run immediately
    /// following it, terminated by whitespace, a comma, or end of line.
    simple: Regex,
}

impl QuantityPatterns {
    fn new() -> Self {
        Self {
            container: Regex::new(
                r"(\d+(?:\s+\d+/\d+)?|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*\((\d+(?:\.\d+)?(?:\s+\d+/\d+)?|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*([a-zA-Z\s]+)\)\s*([a-zA-Z]+)",
            )
            .unwrap(),
            simple: Regex::new(
                r"(\d+(?:\.\d+)?(?:\s+\d+/\d+)?|[¼½¾⅐⅑⅒⅓⅔⅕⅖⅗⅘⅙⅚⅛⅜⅝⅞])\s*([a-zA-Z\s]+?)(?:\s|,|$)",
            )
            .unwrap(),
        }
    }
}

static QUANTITY_PATTERNS: LazyLock<QuantityPatterns> = LazyLock::new(QuantityPatterns::new);

/// Extract the quantity from a raw ingredient line.
///
/// Total over its input: every line yields a quantity, with `(COUNT, 1)` as
/// the fallback when no matcher succeeds.
pub fn extract_quantity(line: &str) -> Quantity {
    let mut amount: Option<f64> = None;
    let mut unit = UnitTag::Count;

    if let Some(caps) = QUANTITY_PATTERNS.container.captures(line) {
        // A matched container pattern commits; the simple pattern is never
        // consulted even when the numbers fail to parse.
        let count = parse_number(&caps[1]);
        let inner_amount = parse_number(&caps[2]);

        // Zero or unparseable numbers read as missing, keeping the defaults.
        if let (Some(count), Some(inner_amount)) = (count, inner_amount) {
            if count != 0.0 && inner_amount != 0.0 {
                amount = Some(count * inner_amount);
                unit = normalize_unit(&caps[3]).unwrap_or(UnitTag::Count);
                debug!(
                    "container pattern matched: {} x {} {}",
                    count,
                    inner_amount,
                    unit.as_str()
                );
            }
        }
    } else if let Some(caps) = QUANTITY_PATTERNS.simple.captures(line) {
        // Honored only when the word after the number is a known unit.
        if let Some(tag) = normalize_unit(&caps[2]) {
            amount = parse_number(&caps[1]);
            unit = tag;
            debug!("simple pattern matched: {:?} {}", &caps[1], unit.as_str());
        } else {
            trace!("simple pattern rejected: {:?} is not a unit", &caps[2]);
        }
    }

    Quantity::new(unit, amount.unwrap_or(1.0))
}
