//! # AFX Ingredient Data Model
//!
//! This module defines the data structures for ingredients parsed into the
//! AFX catalog format: a cleaned ingredient name plus a quantity list of
//! `(unit, amount)` pairs.
//!
//! ## Core Concepts
//!
//! - **UnitTag**: one value from the closed AFX unit taxonomy
//! - **Quantity**: a unit tag paired with a numeric amount
//! - **ParsedIngredient**: the terminal output record, one per ingredient line
//!
//! The serialized JSON shape is a compatibility contract with the downstream
//! catalog consumer and must stay bit-exact: `name` plus a `quantityList`
//! holding a single `{unit, amount}` element, with the unit rendered as a
//! SCREAMING_SNAKE_CASE string and the amount as a JSON number.
//!
//! ## Usage
//!
//! ```rust
//! use afx_ingredients::afx_model::{ParsedIngredient, Quantity, UnitTag};
//!
//! let paste = ParsedIngredient::new("tomato paste", Quantity::new(UnitTag::Ounce, 12.0));
//! assert_eq!(paste.quantity_list.len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed AFX unit taxonomy.
///
/// `Count` is the default tag for lines with no recognizable unit word and
/// for count-like container words (pieces, cloves, cans, jars, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitTag {
    /// Discrete items (default)
    Count,

    // Volume units
    /// Cups
    Cup,
    /// Tablespoons
    Tablespoon,
    /// Teaspoons
    Teaspoon,
    /// Fluid ounces
    FluidOunce,
    /// Pints
    Pint,
    /// Quarts
    Quart,
    /// Gallons
    Gallon,
    /// Milliliters
    Milliliter,
    /// Liters
    Liter,

    // Weight units
    /// Pounds
    Pound,
    /// Ounces
    Ounce,
    /// Grams
    Gram,
    /// Kilograms
    Kilogram,
}

/// A single quantity: unit tag plus numeric amount.
///
/// The amount is always defined; when no numeric token is found in the
/// source line it defaults to exactly 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    /// The canonical unit of measure
    pub unit: UnitTag,

    /// The numeric amount (fractions evaluated to their decimal value)
    pub amount: f64,
}

/// The terminal output record for one ingredient line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The cleaned ingredient name
    pub name: String,

    /// The quantity list; this parser always produces exactly one element,
    /// but the wire format reserves a list for multi-unit use
    #[serde(rename = "quantityList")]
    pub quantity_list: Vec<Quantity>,
}

impl UnitTag {
    /// The wire name of this tag, identical to its serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitTag::Count => "COUNT",
            UnitTag::Cup => "CUP",
            UnitTag::Tablespoon => "TABLESPOON",
            UnitTag::Teaspoon => "TEASPOON",
            UnitTag::FluidOunce => "FLUID_OUNCE",
            UnitTag::Pint => "PINT",
            UnitTag::Quart => "QUART",
            UnitTag::Gallon => "GALLON",
            UnitTag::Milliliter => "MILLILITER",
            UnitTag::Liter => "LITER",
            UnitTag::Pound => "POUND",
            UnitTag::Ounce => "OUNCE",
            UnitTag::Gram => "GRAM",
            UnitTag::Kilogram => "KILOGRAM",
        }
    }

    /// Check if this is a volume unit
    pub fn is_volume(&self) -> bool {
        matches!(
            self,
            UnitTag::Cup
                | UnitTag::Tablespoon
                | UnitTag::Teaspoon
                | UnitTag::FluidOunce
                | UnitTag::Pint
                | UnitTag::Quart
                | UnitTag::Gallon
                | UnitTag::Milliliter
                | UnitTag::Liter
        )
    }

    /// Check if this is a weight unit
    pub fn is_weight(&self) -> bool {
        matches!(
            self,
            UnitTag::Pound | UnitTag::Ounce | UnitTag::Gram | UnitTag::Kilogram
        )
    }

    /// Check if this is the count/piece unit
    pub fn is_count(&self) -> bool {
        matches!(self, UnitTag::Count)
    }
}

impl Quantity {
    /// Create a quantity from a unit tag and amount.
    pub fn new(unit: UnitTag, amount: f64) -> Self {
        Self { unit, amount }
    }
}

impl ParsedIngredient {
    /// Create a record with a single-element quantity list.
    pub fn new(name: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            quantity_list: vec![quantity],
        }
    }
}

impl fmt::Display for UnitTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.fract() == 0.0 {
            write!(f, "{} {}", self.amount as i64, self.unit)
        } else {
            write!(f, "{} {}", self.amount, self.unit)
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for quantity in &self.quantity_list {
            write!(f, " [{}]", quantity)?;
        }
        Ok(())
    }
}
