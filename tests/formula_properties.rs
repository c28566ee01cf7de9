use std::collections::BTreeMap;

use atomcrab::{parse_charge, parse_formula, FormulaError};

fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(s, c)| (s.to_string(), *c)).collect()
}

#[test]
fn simple_pairs_one_entry_per_symbol() {
    let cases: &[(&str, &[(&str, f64)])] = &[
        ("H2O", &[("H", 2.0), ("O", 1.0)]),
        ("NaCl", &[("Na", 1.0), ("Cl", 1.0)]),
        ("C6H12O6", &[("C", 6.0), ("H", 12.0), ("O", 6.0)]),
        ("Fe2O3", &[("Fe", 2.0), ("O", 3.0)]),
        ("O", &[("O", 1.0)]),
    ];
    for (formula, expected) in cases {
        assert_eq!(parse_formula(formula).unwrap(), map(expected), "{formula}");
    }
}

#[test]
fn parsing_is_idempotent() {
    for formula in ["(CaMg)(CO3)2", "Al2.5Si0.5O4.75", "HCO3-", "K4(Fe(CN)6)"] {
        let a = parse_formula(formula).unwrap();
        let b = parse_formula(formula).unwrap();
        assert_eq!(a.len(), b.len());
        for (symbol, coeff) in &a {
            assert_eq!(coeff.to_bits(), b[symbol].to_bits(), "{formula} {symbol}");
        }
    }
}

#[test]
fn charge_notations_agree() {
    assert_eq!(parse_charge("Fe+++").unwrap(), 3.0);
    assert_eq!(parse_charge("Fe+3").unwrap(), 3.0);
    assert_eq!(parse_charge("CO3--").unwrap(), -2.0);
    assert_eq!(parse_charge("CO3-2").unwrap(), -2.0);
}

#[test]
fn nested_multipliers() {
    assert_eq!(
        parse_formula("(CaMg)(CO3)2").unwrap(),
        map(&[("Ca", 1.0), ("Mg", 1.0), ("C", 2.0), ("O", 6.0)])
    );
}

#[test]
fn repeated_elements_sum() {
    assert_eq!(
        parse_formula("CH3COOH").unwrap(),
        map(&[("C", 2.0), ("H", 4.0), ("O", 2.0)])
    );
}

#[test]
fn fractional_coefficients() {
    assert_eq!(
        parse_formula("Al2.5Si0.5O4.75").unwrap(),
        map(&[("Al", 2.5), ("Si", 0.5), ("O", 4.75)])
    );
}

#[test]
fn charge_key_only_when_nonzero() {
    assert!(!parse_formula("H2O").unwrap().contains_key("Z"));
    assert_eq!(
        parse_formula("Na+").unwrap(),
        map(&[("Na", 1.0), ("Z", 1.0)])
    );
}

#[test]
fn leading_digit_is_malformed_atom() {
    assert!(matches!(
        parse_formula("2NaCl"),
        Err(FormulaError::InvalidAtom { pos: 0, ch: '2' })
    ));
}

#[test]
fn literal_scenarios() {
    assert_eq!(
        parse_formula("CaCO3").unwrap(),
        map(&[("Ca", 1.0), ("C", 1.0), ("O", 3.0)])
    );
    assert_eq!(
        parse_formula("HCO3-").unwrap(),
        map(&[("H", 1.0), ("C", 1.0), ("O", 3.0), ("Z", -1.0)])
    );
    assert_eq!(parse_charge("Na+").unwrap(), 1.0);
    assert_eq!(parse_charge("H2O").unwrap(), 0.0);
}

// `.` followed by digits reads as part of the preceding count.
#[test]
fn hydrate_number_rule() {
    let parsed = parse_formula("CuSO4.5H2O").unwrap();
    assert_eq!(parsed["O"], 4.5 + 1.0);
    assert_eq!(parsed["H"], 2.0);

    assert_eq!(
        parse_formula("NaCl.H2O").unwrap(),
        map(&[("Na", 1.0), ("Cl", 1.0), ("H", 2.0), ("O", 1.0)])
    );
}

#[test]
fn non_numeric_charge_is_error() {
    assert!(matches!(
        parse_charge("Fe+x"),
        Err(FormulaError::InvalidCharge { .. })
    ));
    assert!(parse_formula("Fe+x").is_err());
}
