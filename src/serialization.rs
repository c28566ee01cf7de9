//! YAML and JSON adapters for elements, substances and their collections.
//!
//! Substances are written as their attributes (`formula`, `name`, `type`,
//! `tags`) and resolved against the periodic table when read back;
//! [`substances_from_yaml_with`] resolves them against another table.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::elements::Elements;
use crate::substance::{Substance, SubstanceAttributes, SubstanceError};
use crate::substances::Substances;

#[derive(Debug)]
pub enum SerializationError {
    Yaml(serde_yaml::Error),
    Json(serde_json::Error),
    Substance(SubstanceError),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml(e) => write!(f, "YAML error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
            Self::Substance(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Substance(e) => Some(e),
        }
    }
}

impl From<serde_yaml::Error> for SerializationError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Yaml(e)
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<SubstanceError> for SerializationError {
    fn from(e: SubstanceError) -> Self {
        Self::Substance(e)
    }
}

pub fn from_yaml<T: DeserializeOwned>(text: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_yaml::to_string(value)?)
}

pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, SerializationError> {
    Ok(serde_json::from_str(text)?)
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Read a YAML list of substances, resolving their elements in `db`.
pub fn substances_from_yaml_with(text: &str, db: &Elements) -> Result<Substances, SerializationError> {
    let attributes: Vec<SubstanceAttributes> = serde_yaml::from_str(text)?;
    let substances = attributes
        .into_iter()
        .map(|a| Substance::from_attributes(a, db))
        .collect::<Result<Substances, SubstanceError>>()?;
    Ok(substances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementError};

    const ELEMENT: &str = "
symbol: H
name: Hydrogen
atomicNumber: 1
atomicWeight: 0.001007940
electronegativity: 2.20
tags: [ group1 ]
";

    const SUBSTANCE: &str = "
name: Calcite
formula: CaCO3
tags: [mineral, solid]
";

    const ELEMENTS: &str = "
- name: Hydrogen
  symbol: H
  atomicNumber: 1
  atomicWeight: 0.001007940
  electronegativity: 2.20

- name: Carbon
  symbol: C
  atomicNumber: 6
  atomicWeight: 0.012011000
  electronegativity: 2.55

- name: Oxygen
  symbol: O
  atomicNumber: 8
  atomicWeight: 0.015999400
  electronegativity: 3.44
";

    const SUBSTANCES: &str = "
- name: H2O(aq)
  formula: H2O
  tags: [ aqueous ]

- name: Na+(aq)
  formula: Na+
  tags: [ aqueous ]

- name: Cl-(aq)
  formula: Cl-
  tags: [ aqueous ]

- name: H2O(g)
  formula: H2O
  tags: [ gaseous ]

- name: CO2(g)
  formula: CO2
  tags: [ gaseous ]
";

    #[test]
    fn element_from_yaml() {
        let e: Element = from_yaml(ELEMENT).unwrap();
        assert_eq!(e.symbol(), "H");
        assert_eq!(e.name(), "Hydrogen");
        assert_eq!(e.atomic_number(), 1);
        assert_eq!(e.atomic_weight(), 0.001007940);
        assert_eq!(e.electronegativity(), Some(2.20));
        assert_eq!(e.tags().len(), 1);
        assert!(e.has_tag("group1"));
    }

    #[test]
    fn substance_from_yaml() {
        let s: Substance = from_yaml(SUBSTANCE).unwrap();
        assert_eq!(s.formula().label(), "CaCO3");
        assert_eq!(s.name(), "Calcite");
        let tags: Vec<&str> = s.tags().iter().map(String::as_str).collect();
        assert_eq!(tags, vec!["mineral", "solid"]);
        assert!((s.molar_mass() - 0.100087).abs() < 1e-5);
    }

    #[test]
    fn elements_from_yaml() {
        let elements: Elements = from_yaml(ELEMENTS).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].name(), "Hydrogen");
        assert_eq!(elements[1].symbol(), "C");
        assert_eq!(elements[1].atomic_number(), 6);
        assert_eq!(elements[1].atomic_weight(), 0.012011);
        assert_eq!(elements[2].electronegativity(), Some(3.44));
    }

    #[test]
    fn elements_from_yaml_replace_repeated_symbol() {
        let text = "
- symbol: H
  name: Hydrogen
- symbol: O
  name: Oxygen
- symbol: H
  name: Protium
";
        let elements: Elements = from_yaml(text).unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements.find("H").unwrap().name(), "Protium");
        assert_eq!(elements[0].symbol(), "H");
        assert_eq!(
            elements,
            Elements::from(vec![
                Element::new("H").with_name("Hydrogen"),
                Element::new("O").with_name("Oxygen"),
                Element::new("H").with_name("Protium"),
            ])
        );

        let json = "[{\"symbol\": \"Na\"}, {\"symbol\": \"Na\", \"name\": \"Sodium\"}]";
        let elements: Elements = from_json(json).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].name(), "Sodium");
    }

    #[test]
    fn substances_from_yaml() {
        let substances: Substances = from_yaml(SUBSTANCES).unwrap();
        assert_eq!(substances.len(), 5);
        let expected = [
            ("H2O(aq)", "H2O", "aqueous"),
            ("Na+(aq)", "Na+", "aqueous"),
            ("Cl-(aq)", "Cl-", "aqueous"),
            ("H2O(g)", "H2O", "gaseous"),
            ("CO2(g)", "CO2", "gaseous"),
        ];
        for (s, (name, formula, tag)) in substances.iter().zip(expected) {
            assert_eq!(s.name(), name);
            assert_eq!(s.formula(), formula);
            assert_eq!(s.tags().len(), 1);
            assert!(s.has_tag(tag));
        }
    }

    #[test]
    fn substances_against_custom_table() {
        let db: Elements = from_yaml(ELEMENTS).unwrap();
        let text = "
- formula: CO2
- formula: H2O
  name: Water
";
        let substances = substances_from_yaml_with(text, &db).unwrap();
        assert_eq!(substances.len(), 2);
        assert_eq!(substances[0].name(), "CO2");
        assert_eq!(substances[1].name(), "Water");
        assert!((substances[1].molar_mass() - 0.01801528).abs() < 1e-9);

        let err = substances_from_yaml_with(SUBSTANCES, &db).unwrap_err();
        assert!(matches!(
            err,
            SerializationError::Substance(SubstanceError::Element(
                ElementError::UnknownElement { .. }
            ))
        ));
    }

    #[test]
    fn yaml_round_trip() {
        let substances: Substances = from_yaml(SUBSTANCES).unwrap();
        let text = to_yaml(&substances).unwrap();
        assert!(text.contains("formula: Na+"));
        let back: Substances = from_yaml(&text).unwrap();
        assert_eq!(back, substances);

        let elements = Elements::periodic_table().with_symbols(&["H", "He"]);
        let back: Elements = from_yaml(&to_yaml(&elements).unwrap()).unwrap();
        assert_eq!(back, elements);
    }

    #[test]
    fn json_round_trip() {
        let s = Substance::new("HCO3-")
            .unwrap()
            .with_name("Bicarbonate")
            .with_type("aqueous");
        let text = to_json(&s).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["formula"], "HCO3-");
        assert_eq!(value["type"], "aqueous");
        assert!(value.get("tags").is_none());
        let back: Substance = from_json(&text).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.substance_type(), "aqueous");

        let e = Element::new("Aa").with_atomic_weight(0.5);
        let value: serde_json::Value = serde_json::from_str(&to_json(&e).unwrap()).unwrap();
        assert_eq!(value["atomicWeight"], 0.5);
        assert!(value.get("electronegativity").is_none());
    }

    #[test]
    fn invalid_input() {
        assert!(matches!(
            from_yaml::<Substance>("formula: 2H2O"),
            Err(SerializationError::Yaml(_))
        ));
        assert!(matches!(
            from_json::<Element>("{\"name\": \"X\"}"),
            Err(SerializationError::Json(_))
        ));
    }
}
