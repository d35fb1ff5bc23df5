//! # Ingredient Parser
//!
//! The assembly point of the pipeline: quantity extraction and name cleaning
//! run as independent passes over the same raw line, and their results are
//! composed into the terminal [`ParsedIngredient`] record.
//!
//! Parsing is total: every line yields a record, with explicit fallback
//! defaults (amount 1, unit `COUNT`, name = original line) instead of
//! errors. Lines parse independently of one another, so batches can be
//! processed in any order; [`parse_ingredient_list`] preserves input order
//! in its output.
//!
//! ## Usage
//!
//! ```rust
//! use afx_ingredients::ingredient_parser::parse_ingredient;
//!
//! let record = parse_ingredient("2 (6 ounce) cans tomato paste");
//! assert_eq!(record.name, "canned tomato paste");
//! assert_eq!(record.quantity_list[0].amount, 12.0);
//! ```

use crate::afx_model::ParsedIngredient;
use crate::name_cleaner::clean_ingredient_name;
use crate::quantity_extractor::extract_quantity;
use log::debug;

/// Parse a single raw ingredient line into an AFX record.
///
/// Never fails; malformed or unusual text falls back to the defaults.
pub fn parse_ingredient(raw_line: &str) -> ParsedIngredient {
    let quantity = extract_quantity(raw_line);
    let name = clean_ingredient_name(raw_line);
    let record = ParsedIngredient::new(name, quantity);
    debug!("parsed {:?} -> {}", raw_line, record);
    record
}

/// Parse an ordered batch of ingredient lines.
///
/// Each line parses independently; the output preserves input order, so
/// `output[i]` always corresponds to `input[i]`.
pub fn parse_ingredient_list<I, S>(lines: I) -> Vec<ParsedIngredient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| parse_ingredient(line.as_ref()))
        .collect()
}
