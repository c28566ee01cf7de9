use std::process::ExitCode;

use atomcrab::{Substance, SubstanceError};

fn error_message(formula: &str, error: &SubstanceError) -> String {
    match error {
        SubstanceError::Formula(e) => format!("invalid chemical formula: {formula} ({e})"),
        e => format!("{formula}: {e}"),
    }
}

fn main() -> ExitCode {
    let formulas: Vec<String> = std::env::args().skip(1).collect();
    let formulas = if formulas.is_empty() {
        vec!["CaCO3".to_string(), "Fe+3".to_string()]
    } else {
        formulas
    };

    let mut status = ExitCode::SUCCESS;
    for formula in &formulas {
        let substance = match Substance::new(formula) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", error_message(formula, &e));
                status = ExitCode::FAILURE;
                continue;
            }
        };

        println!("\nFormula: {}", formula);
        for (symbol, coeff) in substance.formula().elements() {
            println!("  {}: {}", symbol, coeff);
        }
        println!("  charge: {}", substance.charge());
        println!("  molar mass: {:.6} kg/mol", substance.molar_mass());
        println!("{}", "-".repeat(40));
    }

    status
}
