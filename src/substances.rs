//! Collections of substances with selection by name, formula, type, tag and
//! element composition.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::formula::Formula;
use crate::substance::{Substance, SubstanceError};

/// An ordered collection of [`Substance`]s.
///
/// Selection methods return new collections and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Substances {
    data: Vec<Substance>,
}

impl Substances {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build substances from formulas, resolved in the periodic table.
    pub fn from_formulas(formulas: &[&str]) -> Result<Self, SubstanceError> {
        formulas.iter().map(|f| Substance::new(f)).collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Substance> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Substance> {
        self.data.get(index)
    }

    pub fn index_with_name(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|s| s.name() == name)
    }

    /// Index of the first substance written exactly as `formula`, or
    /// failing that, the first with an equivalent formula (`CO3--` finds
    /// `CO3-2`).
    pub fn index_with_formula(&self, formula: &str) -> Option<usize> {
        self.data
            .iter()
            .position(|s| s.formula() == formula)
            .or_else(|| {
                let formula = Formula::new(formula).ok()?;
                self.data
                    .iter()
                    .position(|s| s.formula().equivalent(&formula))
            })
    }

    pub fn get_with_name(&self, name: &str) -> Result<&Substance, SubstanceError> {
        self.index_with_name(name)
            .map(|i| &self.data[i])
            .ok_or_else(|| not_found(name))
    }

    pub fn get_with_formula(&self, formula: &str) -> Result<&Substance, SubstanceError> {
        self.index_with_formula(formula)
            .map(|i| &self.data[i])
            .ok_or_else(|| not_found(formula))
    }

    /// The substances with the given names, in the requested order.
    pub fn with_names(&self, names: &[&str]) -> Result<Substances, SubstanceError> {
        names
            .iter()
            .map(|name| self.get_with_name(name).cloned())
            .collect()
    }

    /// The substances with the given formulas, in the requested order.
    pub fn with_formulas(&self, formulas: &[&str]) -> Result<Substances, SubstanceError> {
        formulas
            .iter()
            .map(|formula| self.get_with_formula(formula).cloned())
            .collect()
    }

    pub fn with_type(&self, substance_type: &str) -> Substances {
        self.select(|s| s.substance_type() == substance_type)
    }

    pub fn with_tag(&self, tag: &str) -> Substances {
        self.select(|s| s.has_tag(tag))
    }

    pub fn without_tag(&self, tag: &str) -> Substances {
        self.select(|s| !s.has_tag(tag))
    }

    /// Substances carrying every one of `tags`.
    pub fn with_tags(&self, tags: &[&str]) -> Substances {
        self.select(|s| tags.iter().all(|t| s.has_tag(t)))
    }

    /// Drops the substances carrying every one of `tags`.
    pub fn without_tags(&self, tags: &[&str]) -> Substances {
        self.select(|s| !tags.iter().all(|t| s.has_tag(t)))
    }

    /// Substances made only of elements among `symbols`.
    pub fn with_elements(&self, symbols: &[&str]) -> Substances {
        self.select(|s| s.symbols().iter().all(|x| symbols.contains(&x.as_str())))
    }

    /// Substances made only of elements found in `formulas`.
    pub fn with_elements_of(&self, formulas: &[&str]) -> Result<Substances, SubstanceError> {
        let mut symbols: Vec<String> = Vec::new();
        for formula in formulas {
            for symbol in Formula::new(formula)?.symbols() {
                if !symbols.contains(symbol) {
                    symbols.push(symbol.clone());
                }
            }
        }
        let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
        Ok(self.with_elements(&symbols))
    }

    pub fn append(&mut self, substance: Substance) {
        self.data.push(substance);
    }

    fn select(&self, predicate: impl Fn(&Substance) -> bool) -> Substances {
        self.data.iter().filter(|s| predicate(s)).cloned().collect()
    }
}

fn not_found(key: &str) -> SubstanceError {
    SubstanceError::NotFound {
        key: key.to_string(),
    }
}

impl Index<usize> for Substances {
    type Output = Substance;

    fn index(&self, index: usize) -> &Substance {
        &self.data[index]
    }
}

impl From<Vec<Substance>> for Substances {
    fn from(data: Vec<Substance>) -> Self {
        Self { data }
    }
}

impl FromIterator<Substance> for Substances {
    fn from_iter<I: IntoIterator<Item = Substance>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Substances {
    type Item = &'a Substance;
    type IntoIter = std::slice::Iter<'a, Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Substances {
    type Item = Substance;
    type IntoIter = std::vec::IntoIter<Substance>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
