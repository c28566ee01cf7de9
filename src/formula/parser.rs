//! Element accumulation over a formula string.
//!
//! The parser walks the formula byte by byte. Element atoms add
//! `scalar * count` to their symbol, parenthesized groups recurse with
//! the group multiplier folded into the scalar, and a `.` multiplies
//! everything after it up to the end of the current window. Bytes that
//! start none of these (`)`, charge signs, stray punctuation) are skipped.

use crate::formula::error::FormulaError;

/// Parse the element symbols and coefficients of `formula`, in the order
/// the symbols are first seen. The charge suffix is not included.
pub(crate) fn parse_elements(formula: &str) -> Result<Vec<(String, f64)>, FormulaError> {
    // A formula cannot open with a count or a lowercase continuation.
    if let Some(&first) = formula.as_bytes().first() {
        if first.is_ascii_digit() || first.is_ascii_lowercase() {
            return Err(FormulaError::InvalidAtom {
                pos: 0,
                ch: first as char,
            });
        }
    }

    let mut result = Vec::new();
    parse_window(formula, 0, formula.len(), 1.0, &mut result)?;
    Ok(result)
}

fn parse_window(
    formula: &str,
    start: usize,
    end: usize,
    scalar: f64,
    result: &mut Vec<(String, f64)>,
) -> Result<(), FormulaError> {
    let bytes = formula.as_bytes();
    let mut i = start;
    let mut scalar = scalar;

    while i < end {
        match bytes[i] {
            b'(' => {
                let close = find_matched_paren(formula, i, end);
                let after = (close + 1).min(end);
                let (multiplier, next) = parse_number(formula, after, end).unwrap_or((1.0, after));
                parse_window(formula, i + 1, close, scalar * multiplier, result)?;
                i = next;
            }
            b'.' => {
                // Hydrate or adduct: the rest of the window is one multiplied group.
                let (multiplier, next) = parse_number(formula, i + 1, end).unwrap_or((1.0, i + 1));
                scalar *= multiplier;
                i = next;
            }
            c if c.is_ascii_uppercase() => {
                let (symbol, after) = parse_element_atom(formula, i, end)?;
                let (count, next) = parse_number(formula, after, end).unwrap_or((1.0, after));
                accumulate(result, symbol, scalar * count);
                i = next;
            }
            _ => i += 1,
        }
    }

    Ok(())
}

/// Read one element symbol: an uppercase letter followed by any lowercase
/// letters. Returns the symbol and the index just past it.
fn parse_element_atom(
    formula: &str,
    start: usize,
    end: usize,
) -> Result<(&str, usize), FormulaError> {
    let bytes = formula.as_bytes();
    if !bytes[start].is_ascii_uppercase() {
        return Err(FormulaError::InvalidAtom {
            pos: start,
            ch: bytes[start] as char,
        });
    }

    let mut i = start + 1;
    while i < end && bytes[i].is_ascii_lowercase() {
        i += 1;
    }

    Ok((&formula[start..i], i))
}

/// Read a count or multiplier starting at `start`: the longest run of
/// digits holding at most one decimal point. Returns the value and the
/// index just past it, or `None` when no number starts there. A lone `.`
/// with no digits is not a number.
fn parse_number(formula: &str, start: usize, end: usize) -> Option<(f64, usize)> {
    let bytes = formula.as_bytes();
    let mut i = start;
    let mut seen_point = false;
    let mut seen_digit = false;
    while i < end {
        match bytes[i] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_point => seen_point = true,
            _ => break,
        }
        i += 1;
    }

    if !seen_digit {
        return None;
    }
    formula[start..i].parse::<f64>().ok().map(|value| (value, i))
}

/// Find the `)` closing the `(` at `open`, or `end` if it is never closed.
fn find_matched_paren(formula: &str, open: usize, end: usize) -> usize {
    let mut level = 0i32;
    for (i, &b) in formula.as_bytes().iter().enumerate().take(end).skip(open + 1) {
        match b {
            b'(' => level += 1,
            b')' => {
                level -= 1;
                if level == -1 {
                    return i;
                }
            }
            _ => {}
        }
    }
    end
}

fn accumulate(result: &mut Vec<(String, f64)>, symbol: &str, amount: f64) {
    match result.iter_mut().find(|(s, _)| s == symbol) {
        Some((_, coeff)) => *coeff += amount,
        None => result.push((symbol.to_string(), amount)),
    }
}
