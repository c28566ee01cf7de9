use std::collections::BTreeSet;

use crate::element::Element;
use crate::formula::Formula;
use crate::substance::Substance;

pub trait HasSymbol {
    fn symbol(&self) -> &str;
}

pub trait HasName {
    fn name(&self) -> &str;
}

/// Molar mass in kg/mol.
pub trait HasMolarMass {
    fn molar_mass(&self) -> f64;
}

pub trait HasCharge {
    fn charge(&self) -> f64;
}

pub trait HasTags {
    fn tags(&self) -> &BTreeSet<String>;

    fn has_tag(&self, tag: &str) -> bool {
        self.tags().contains(tag)
    }
}

impl HasSymbol for Element {
    fn symbol(&self) -> &str {
        Element::symbol(self)
    }
}

impl HasName for Element {
    fn name(&self) -> &str {
        Element::name(self)
    }
}

impl HasMolarMass for Element {
    fn molar_mass(&self) -> f64 {
        Element::molar_mass(self)
    }
}

impl HasTags for Element {
    fn tags(&self) -> &BTreeSet<String> {
        Element::tags(self)
    }
}

impl HasCharge for Formula {
    fn charge(&self) -> f64 {
        Formula::charge(self)
    }
}

impl HasName for Substance {
    fn name(&self) -> &str {
        Substance::name(self)
    }
}

impl HasMolarMass for Substance {
    fn molar_mass(&self) -> f64 {
        Substance::molar_mass(self)
    }
}

impl HasCharge for Substance {
    fn charge(&self) -> f64 {
        Substance::charge(self)
    }
}

impl HasTags for Substance {
    fn tags(&self) -> &BTreeSet<String> {
        Substance::tags(self)
    }
}

pub fn molar_masses<'a, T, I>(items: I) -> Vec<f64>
where
    T: HasMolarMass + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(HasMolarMass::molar_mass).collect()
}

pub fn charges<'a, T, I>(items: I) -> Vec<f64>
where
    T: HasCharge + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(HasCharge::charge).collect()
}

pub fn symbols<'a, T, I>(items: I) -> Vec<String>
where
    T: HasSymbol + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|x| x.symbol().to_string()).collect()
}

pub fn names<'a, T, I>(items: I) -> Vec<String>
where
    T: HasName + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|x| x.name().to_string()).collect()
}
