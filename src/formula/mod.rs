//! Chemical formula parsing.
//!
//! [`parse_formula`] maps a formula string such as `(CaMg)(CO3)2` or
//! `HCO3-` to its element coefficients, with the charge stored under the
//! reserved symbol `"Z"` when it is nonzero. [`parse_charge`] extracts the
//! charge alone. [`Formula`] keeps both results together with the
//! formula string.
//!
//! Element atoms start with an uppercase letter followed by lowercase
//! letters, so arbitrary symbols such as `Aa` or `Bbb` are accepted.

mod charge;
pub mod error;
mod parser;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use charge::parse_charge;
pub use error::FormulaError;

/// The reserved symbol under which [`parse_formula`] stores the charge.
pub const CHARGE_SYMBOL: &str = "Z";

/// Parse a chemical formula into element symbols and coefficients.
///
/// A nonzero charge is included under [`CHARGE_SYMBOL`]; a neutral
/// formula has no such entry.
pub fn parse_formula(formula: &str) -> Result<BTreeMap<String, f64>, FormulaError> {
    let mut result: BTreeMap<String, f64> = parser::parse_elements(formula)?.into_iter().collect();
    let charge = parse_charge(formula)?;
    if charge != 0.0 {
        result.insert(CHARGE_SYMBOL.to_string(), charge);
    }
    Ok(result)
}

/// A parsed chemical formula.
///
/// Symbols are kept in the order they first appear in the string, with
/// their coefficients in a parallel list. Two formulas compare equal when
/// their strings do; use [`Formula::equivalent`] to compare composition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Formula {
    label: String,
    symbols: Vec<String>,
    coefficients: Vec<f64>,
    charge: f64,
}

impl Formula {
    pub fn new(formula: &str) -> Result<Self, FormulaError> {
        let (symbols, coefficients): (Vec<String>, Vec<f64>) =
            parser::parse_elements(formula)?.into_iter().unzip();
        let charge = parse_charge(formula)?;
        Ok(Self {
            label: formula.to_string(),
            symbols,
            coefficients,
            charge,
        })
    }

    /// The formula string this value was parsed from.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of `symbol`, or 0.0 if it does not occur.
    ///
    /// [`CHARGE_SYMBOL`] returns the charge.
    pub fn coefficient(&self, symbol: &str) -> f64 {
        if symbol == CHARGE_SYMBOL {
            return self.charge;
        }
        self.symbols
            .iter()
            .position(|s| s == symbol)
            .map_or(0.0, |i| self.coefficients[i])
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    /// Symbol and coefficient pairs in first-seen order.
    pub fn elements(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.coefficients.iter().copied())
    }

    /// True if both formulas have the same elements, coefficients and
    /// charge, regardless of how they were written (`Ca++` and `Ca+2`,
    /// `CaCO3` and `Ca(CO3)`).
    pub fn equivalent(&self, other: &Formula) -> bool {
        self.symbols.len() == other.symbols.len()
            && self.charge == other.charge
            && self.elements().all(|(symbol, coeff)| {
                other.symbols.iter().any(|s| s == symbol) && other.coefficient(symbol) == coeff
            })
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::new(s)
    }
}

impl TryFrom<&str> for Formula {
    type Error = FormulaError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Formula::new(s)
    }
}

impl TryFrom<String> for Formula {
    type Error = FormulaError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Formula::new(&s)
    }
}

impl From<Formula> for String {
    fn from(formula: Formula) -> Self {
        formula.label
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Formula {}

impl PartialEq<str> for Formula {
    fn eq(&self, other: &str) -> bool {
        self.label == other
    }
}

impl PartialEq<&str> for Formula {
    fn eq(&self, other: &&str) -> bool {
        self.label == *other
    }
}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

impl PartialOrd for Formula {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Formula {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}
