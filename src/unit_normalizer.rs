//! # Unit Normalizer
//!
//! Maps free-text unit words and phrases (singular, plural, abbreviated,
//! with or without periods) onto the closed [`UnitTag`] taxonomy. Count-like
//! container words (pieces, cloves, cans, jars, packages, bags, boxes,
//! bunches, heads, stalks) normalize to `COUNT`.

use crate::afx_model::UnitTag;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Accepted unit synonyms and their canonical tags
static UNIT_MAPPINGS: LazyLock<HashMap<&'static str, UnitTag>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Volume units
    map.insert("cup", UnitTag::Cup);
    map.insert("cups", UnitTag::Cup);
    map.insert("c", UnitTag::Cup);
    map.insert("tablespoon", UnitTag::Tablespoon);
    map.insert("tablespoons", UnitTag::Tablespoon);
    map.insert("tbsp", UnitTag::Tablespoon);
    map.insert("tbs", UnitTag::Tablespoon);
    map.insert("teaspoon", UnitTag::Teaspoon);
    map.insert("teaspoons", UnitTag::Teaspoon);
    map.insert("tsp", UnitTag::Teaspoon);
    map.insert("fluid ounce", UnitTag::FluidOunce);
    map.insert("fluid ounces", UnitTag::FluidOunce);
    map.insert("fl oz", UnitTag::FluidOunce);
    map.insert("fl. oz", UnitTag::FluidOunce);
    map.insert("pint", UnitTag::Pint);
    map.insert("pints", UnitTag::Pint);
    map.insert("pt", UnitTag::Pint);
    map.insert("quart", UnitTag::Quart);
    map.insert("quarts", UnitTag::Quart);
    map.insert("qt", UnitTag::Quart);
    map.insert("gallon", UnitTag::Gallon);
    map.insert("gallons", UnitTag::Gallon);
    map.insert("gal", UnitTag::Gallon);
    map.insert("milliliter", UnitTag::Milliliter);
    map.insert("milliliters", UnitTag::Milliliter);
    map.insert("ml", UnitTag::Milliliter);
    map.insert("liter", UnitTag::Liter);
    map.insert("liters", UnitTag::Liter);
    map.insert("l", UnitTag::Liter);

    // Weight units
    map.insert("pound", UnitTag::Pound);
    map.insert("pounds", UnitTag::Pound);
    map.insert("lb", UnitTag::Pound);
    map.insert("lbs", UnitTag::Pound);
    map.insert("ounce", UnitTag::Ounce);
    map.insert("ounces", UnitTag::Ounce);
    map.insert("oz", UnitTag::Ounce);
    map.insert("gram", UnitTag::Gram);
    map.insert("grams", UnitTag::Gram);
    map.insert("g", UnitTag::Gram);
    map.insert("kilogram", UnitTag::Kilogram);
    map.insert("kilograms", UnitTag::Kilogram);
    map.insert("kg", UnitTag::Kilogram);

    // Count-like container words (default tag)
    map.insert("piece", UnitTag::Count);
    map.insert("pieces", UnitTag::Count);
    map.insert("clove", UnitTag::Count);
    map.insert("cloves", UnitTag::Count);
    map.insert("can", UnitTag::Count);
    map.insert("cans", UnitTag::Count);
    map.insert("jar", UnitTag::Count);
    map.insert("jars", UnitTag::Count);
    map.insert("package", UnitTag::Count);
    map.insert("packages", UnitTag::Count);
    map.insert("pkg", UnitTag::Count);
    map.insert("bag", UnitTag::Count);
    map.insert("bags", UnitTag::Count);
    map.insert("box", UnitTag::Count);
    map.insert("boxes", UnitTag::Count);
    map.insert("bunch", UnitTag::Count);
    map.insert("bunches", UnitTag::Count);
    map.insert("head", UnitTag::Count);
    map.insert("heads", UnitTag::Count);
    map.insert("stalk", UnitTag::Count);
    map.insert("stalks", UnitTag::Count);

    map
});

/// Normalize a free-text unit word or phrase to its canonical tag.
///
/// Lookup is case-insensitive and tolerant of surrounding whitespace.
/// Returns `None` for unrecognized words; callers decide the fallback.
pub fn normalize_unit(text: &str) -> Option<UnitTag> {
    let unit_str = text.trim().to_lowercase();
    UNIT_MAPPINGS.get(unit_str.as_str()).copied()
}

/// All accepted synonyms, longest first.
///
/// Consumers that embed synonyms into larger patterns must try them in this
/// order so that "fluid ounce" wins over "ounce" and "cups" over "cup".
/// Equal-length synonyms are ordered lexicographically to keep the list
/// deterministic.
pub fn synonyms_longest_first() -> Vec<&'static str> {
    let mut synonyms: Vec<&'static str> = UNIT_MAPPINGS.keys().copied().collect();
    synonyms.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    synonyms
}
