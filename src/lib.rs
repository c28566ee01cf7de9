pub mod element;
pub mod elements;
pub mod formula;
pub mod periodic_table;
pub mod serialization;
pub mod substance;
pub mod substances;
pub mod traits;

pub use element::{Element, ElementError};
pub use elements::Elements;
pub use formula::{parse_charge, parse_formula, Formula, FormulaError, CHARGE_SYMBOL};
pub use periodic_table::default_elements;
pub use serialization::SerializationError;
pub use substance::{Substance, SubstanceAttributes, SubstanceError};
pub use substances::Substances;
pub use traits::{HasCharge, HasMolarMass, HasName, HasSymbol, HasTags};
