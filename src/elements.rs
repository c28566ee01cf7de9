//! A collection of chemical elements used as an element database.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::element::{Element, ElementError};
use crate::periodic_table;

/// An ordered collection of [`Element`]s with unique symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Element>", into = "Vec<Element>")]
pub struct Elements {
    data: Vec<Element>,
}

impl Elements {
    pub fn new() -> Self {
        Self::default()
    }

    /// All 118 elements of the periodic table.
    pub fn periodic_table() -> Self {
        periodic_table::periodic_table()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.data.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.data.get(index)
    }

    pub fn find(&self, symbol: &str) -> Option<&Element> {
        self.data.iter().find(|e| e.symbol() == symbol)
    }

    /// Like [`find`](Self::find), but an absent symbol is an error.
    pub fn lookup(&self, symbol: &str) -> Result<&Element, ElementError> {
        self.find(symbol).ok_or_else(|| ElementError::UnknownElement {
            symbol: symbol.to_string(),
        })
    }

    pub fn index_with_symbol(&self, symbol: &str) -> Option<usize> {
        self.data.iter().position(|e| e.symbol() == symbol)
    }

    pub fn index_with_name(&self, name: &str) -> Option<usize> {
        self.data.iter().position(|e| e.name() == name)
    }

    /// Index of the element whose symbol, or failing that name, is `attribute`.
    pub fn index(&self, attribute: &str) -> Option<usize> {
        self.index_with_symbol(attribute)
            .or_else(|| self.index_with_name(attribute))
    }

    /// Add an element, replacing any existing one with the same symbol.
    pub fn append(&mut self, element: Element) {
        match self.index_with_symbol(element.symbol()) {
            Some(i) => self.data[i] = element,
            None => self.data.push(element),
        }
    }

    /// Elements whose symbol, name or one of whose tags is `attribute`.
    pub fn filter(&self, attribute: &str) -> Elements {
        self.data
            .iter()
            .filter(|e| matches_attribute(e, attribute))
            .cloned()
            .collect()
    }

    /// Elements whose symbol, name and tags all differ from `attribute`.
    pub fn remove(&self, attribute: &str) -> Elements {
        self.data
            .iter()
            .filter(|e| !matches_attribute(e, attribute))
            .cloned()
            .collect()
    }

    /// The elements with the given symbols, in collection order.
    pub fn with_symbols(&self, symbols: &[&str]) -> Elements {
        self.data
            .iter()
            .filter(|e| symbols.contains(&e.symbol()))
            .cloned()
            .collect()
    }
}

fn matches_attribute(element: &Element, attribute: &str) -> bool {
    element.symbol() == attribute || element.name() == attribute || element.has_tag(attribute)
}

impl Index<usize> for Elements {
    type Output = Element;

    fn index(&self, index: usize) -> &Element {
        &self.data[index]
    }
}

impl From<Vec<Element>> for Elements {
    fn from(data: Vec<Element>) -> Self {
        data.into_iter().collect()
    }
}

impl From<Elements> for Vec<Element> {
    fn from(elements: Elements) -> Self {
        elements.data
    }
}

impl FromIterator<Element> for Elements {
    fn from_iter<I: IntoIterator<Item = Element>>(iter: I) -> Self {
        let mut elements = Elements::new();
        for e in iter {
            elements.append(e);
        }
        elements
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
