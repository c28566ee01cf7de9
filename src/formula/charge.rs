//! Electric charge from the suffix of a formula string.
//!
//! Three notations are recognised and tried in this order, the first
//! nonzero result winning:
//!
//! 1. repeated signs: `Fe+++`, `Ca++`, `CO3--`
//! 2. a parenthesized count and sign: `Fe(3+)`, `CO3(2-)`, `H(+)`
//! 3. a sign followed by a count: `Fe+3`, `Na+`, `CO3-2`
//!
//! A formula without any of them has charge zero.

use crate::formula::error::FormulaError;

/// Return the electric charge encoded at the end of `formula`.
pub fn parse_charge(formula: &str) -> Result<f64, FormulaError> {
    let charge = repeated_signs(formula);
    if charge != 0.0 {
        return Ok(charge);
    }

    let charge = parenthesized(formula)?;
    if charge != 0.0 {
        return Ok(charge);
    }

    let charge = sign_then_number(formula)?;
    if charge != 0.0 {
        return Ok(charge);
    }

    Ok(0.0)
}

fn sign_value(b: u8) -> Option<f64> {
    match b {
        b'+' => Some(1.0),
        b'-' => Some(-1.0),
        _ => None,
    }
}

fn repeated_signs(formula: &str) -> f64 {
    let bytes = formula.as_bytes();
    let Some(&last) = bytes.last() else {
        return 0.0;
    };
    let Some(sign) = sign_value(last) else {
        return 0.0;
    };
    let count = bytes.iter().rev().take_while(|&&b| b == last).count();
    sign * count as f64
}

fn parenthesized(formula: &str) -> Result<f64, FormulaError> {
    let bytes = formula.as_bytes();
    if bytes.last() != Some(&b')') {
        return Ok(0.0);
    }
    // The charge group is taken to be the last, unnested one.
    let Some(open) = formula.rfind('(') else {
        return Ok(0.0);
    };

    let isign = bytes.len() - 2;
    let Some(sign) = sign_value(bytes[isign]) else {
        return Ok(0.0);
    };

    let digits = &formula[open + 1..isign];
    if digits.is_empty() {
        return Ok(sign);
    }
    Ok(sign * parse_magnitude(digits)?)
}

fn sign_then_number(formula: &str) -> Result<f64, FormulaError> {
    let (isign, sign) = match (formula.rfind('+'), formula.rfind('-')) {
        (Some(ipos), Some(ineg)) if ipos > ineg => (ipos, 1.0),
        (Some(ipos), None) => (ipos, 1.0),
        (_, Some(ineg)) => (ineg, -1.0),
        (None, None) => return Ok(0.0),
    };

    if isign + 1 == formula.len() {
        return Ok(sign);
    }
    Ok(sign * parse_magnitude(&formula[isign + 1..])?)
}

fn parse_magnitude(text: &str) -> Result<f64, FormulaError> {
    let invalid = || FormulaError::InvalidCharge {
        text: text.to_string(),
    };
    if !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }
    text.parse::<f64>().map_err(|_| invalid())
}
