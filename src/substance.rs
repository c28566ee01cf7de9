//! Chemical substances: a formula resolved against an element database.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::ElementError;
use crate::elements::Elements;
use crate::formula::{Formula, FormulaError};
use crate::periodic_table::default_elements;

/// Errors produced when building or looking up substances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstanceError {
    /// The substance formula could not be parsed.
    Formula(FormulaError),
    /// The formula names an element missing from the element database.
    Element(ElementError),
    /// No substance matches the requested name or formula.
    NotFound { key: String },
}

impl fmt::Display for SubstanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula(e) => write!(f, "invalid chemical formula: {}", e),
            Self::Element(e) => write!(f, "{}", e),
            Self::NotFound { key } => {
                write!(f, "could not find a substance with name or formula '{}'", key)
            }
        }
    }
}

impl std::error::Error for SubstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Formula(e) => Some(e),
            Self::Element(e) => Some(e),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<FormulaError> for SubstanceError {
    fn from(e: FormulaError) -> Self {
        Self::Formula(e)
    }
}

impl From<ElementError> for SubstanceError {
    fn from(e: ElementError) -> Self {
        Self::Element(e)
    }
}

/// The user-supplied description of a substance, and its serialized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceAttributes {
    pub formula: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Free-form kind of substance, e.g. `aqueous` or `gaseous`.
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub substance_type: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl SubstanceAttributes {
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            ..Self::default()
        }
    }
}

/// A chemical substance with its parsed formula, the elements composing
/// it and its molar mass.
///
/// The name defaults to the formula string. Substances compare equal when
/// both name and formula string match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SubstanceAttributes", into = "SubstanceAttributes")]
pub struct Substance {
    attributes: SubstanceAttributes,
    formula: Formula,
    elements: Elements,
    molar_mass: f64,
}

impl Substance {
    /// Build a substance resolving its elements in the periodic table.
    pub fn new(formula: &str) -> Result<Self, SubstanceError> {
        Self::with_database(formula, default_elements())
    }

    /// Build a substance resolving its elements in `db`.
    pub fn with_database(formula: &str, db: &Elements) -> Result<Self, SubstanceError> {
        Self::from_attributes(SubstanceAttributes::new(formula), db)
    }

    pub fn from_attributes(
        mut attributes: SubstanceAttributes,
        db: &Elements,
    ) -> Result<Self, SubstanceError> {
        let formula = Formula::new(&attributes.formula)?;
        if attributes.name.is_empty() {
            attributes.name = attributes.formula.clone();
        }

        let elements = formula
            .symbols()
            .iter()
            .map(|symbol| db.lookup(symbol).cloned())
            .collect::<Result<Elements, ElementError>>()?;

        let molar_mass = formula
            .coefficients()
            .iter()
            .zip(elements.iter())
            .map(|(coeff, e)| coeff * e.molar_mass())
            .sum();

        Ok(Self {
            attributes,
            formula,
            elements,
            molar_mass,
        })
    }

    pub fn name(&self) -> &str {
        &self.attributes.name
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn substance_type(&self) -> &str {
        &self.attributes.substance_type
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.attributes.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.attributes.tags.contains(tag)
    }

    /// The elements of the formula, in the order of [`symbols`](Self::symbols).
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    pub fn symbols(&self) -> &[String] {
        self.formula.symbols()
    }

    pub fn coefficients(&self) -> &[f64] {
        self.formula.coefficients()
    }

    pub fn coefficient(&self, symbol: &str) -> f64 {
        self.formula.coefficient(symbol)
    }

    pub fn charge(&self) -> f64 {
        self.formula.charge()
    }

    /// Molar mass in kg/mol.
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn attributes(&self) -> &SubstanceAttributes {
        &self.attributes
    }

    /// A copy with a different formula, resolved in the periodic table.
    /// The name is kept.
    pub fn with_formula(&self, formula: &str) -> Result<Self, SubstanceError> {
        let attributes = SubstanceAttributes {
            formula: formula.to_string(),
            ..self.attributes.clone()
        };
        Self::from_attributes(attributes, default_elements())
    }

    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut substance = self.clone();
        substance.attributes.name = name.into();
        substance
    }

    pub fn with_type(&self, substance_type: impl Into<String>) -> Self {
        let mut substance = self.clone();
        substance.attributes.substance_type = substance_type.into();
        substance
    }

    pub fn with_tags<I, S>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut substance = self.clone();
        substance.attributes.tags = tags.into_iter().map(Into::into).collect();
        substance
    }
}

impl TryFrom<SubstanceAttributes> for Substance {
    type Error = SubstanceError;

    fn try_from(attributes: SubstanceAttributes) -> Result<Self, Self::Error> {
        Substance::from_attributes(attributes, default_elements())
    }
}

impl From<Substance> for SubstanceAttributes {
    fn from(substance: Substance) -> Self {
        substance.attributes
    }
}

impl fmt::Display for Substance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq for Substance {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.formula == other.formula
    }
}

impl Eq for Substance {}

impl PartialOrd for Substance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Substance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.formula.cmp(&other.formula))
    }
}
