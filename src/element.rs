use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors produced when looking up or reading chemical elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// No element with the given symbol exists in the database.
    UnknownElement { symbol: String },
    /// A whitespace-separated element record could not be read.
    InvalidRecord { record: String },
}

impl fmt::Display for ElementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownElement { symbol } => {
                write!(f, "unknown element '{}'", symbol)
            }
            Self::InvalidRecord { record } => {
                write!(f, "invalid element record '{}'", record)
            }
        }
    }
}

impl std::error::Error for ElementError {}

/// A chemical element and its attributes.
///
/// Elements are plain values; the `with_*` methods return modified copies.
/// Custom elements (symbols outside the periodic table) are allowed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    symbol: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    atomic_number: u32,
    /// kg/mol
    #[serde(default)]
    atomic_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    electronegativity: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
}

impl Element {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Self::default()
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    /// Atomic weight in kg/mol.
    pub fn atomic_weight(&self) -> f64 {
        self.atomic_weight
    }

    pub fn electronegativity(&self) -> Option<f64> {
        self.electronegativity
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Molar mass in kg/mol, equal to the atomic weight.
    pub fn molar_mass(&self) -> f64 {
        self.atomic_weight
    }

    pub fn with_symbol(self, symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..self
        }
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_atomic_number(self, atomic_number: u32) -> Self {
        Self {
            atomic_number,
            ..self
        }
    }

    pub fn with_atomic_weight(self, atomic_weight: f64) -> Self {
        Self {
            atomic_weight,
            ..self
        }
    }

    pub fn with_electronegativity(self, electronegativity: impl Into<Option<f64>>) -> Self {
        Self {
            electronegativity: electronegativity.into(),
            ..self
        }
    }

    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
            ..self
        }
    }
}

/// Writes the record form `symbol name atomic_number atomic_weight
/// electronegativity`, with 0 for an unknown electronegativity.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.symbol,
            self.name,
            self.atomic_number,
            self.atomic_weight,
            self.electronegativity.unwrap_or(0.0)
        )
    }
}

/// Reads the record form written by `Display`. Tags are not part of the
/// record.
impl FromStr for Element {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ElementError::InvalidRecord {
            record: s.to_string(),
        };

        let fields: Vec<&str> = s.split_whitespace().collect();
        let &[symbol, name, number, weight, en] = fields.as_slice() else {
            return Err(invalid());
        };

        let atomic_number = number.parse::<u32>().map_err(|_| invalid())?;
        let atomic_weight = weight.parse::<f64>().map_err(|_| invalid())?;
        let en = en.parse::<f64>().map_err(|_| invalid())?;

        Ok(Element::new(symbol)
            .with_name(name)
            .with_atomic_number(atomic_number)
            .with_atomic_weight(atomic_weight)
            .with_electronegativity(if en > 0.0 { Some(en) } else { None }))
    }
}
