use std::fmt;

/// Errors produced when parsing a chemical formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// An element atom does not start with an uppercase letter.
    InvalidAtom { pos: usize, ch: char },
    /// A charge magnitude in the formula suffix is not a number.
    InvalidCharge { text: String },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAtom { pos, ch } => write!(
                f,
                "element atom must start with an uppercase letter, found '{}' at position {}",
                ch, pos
            ),
            Self::InvalidCharge { text } => {
                write!(f, "invalid charge magnitude '{}'", text)
            }
        }
    }
}

impl std::error::Error for FormulaError {}
