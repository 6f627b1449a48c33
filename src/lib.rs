//! Integer calculator core: scanning, recursive-descent parsing, and a tree
//! walking evaluator for one line of `+ - * /` arithmetic with parentheses.
//!
//! Values are `i64`. Literals that do not fit, and any step whose result
//! does not fit, are reported as errors rather than wrapping.

pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod printing;
pub mod scanning;

use std::fmt;

use error_handling::Result;
use evaluating::evaluate;
use parsing::{parse, Expr};
use printing::render;
use scanning::tokenize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalOutput {
    pub expression: String,
    pub value: i64,
}

impl fmt::Display for EvalOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Scans and parses a line without evaluating it.
pub fn parse_line(line: &str) -> Result<Expr> {
    let tokens = tokenize(line)?;
    debug!(count = tokens.len(), "scanned line");

    let tree = parse(tokens)?;
    debug!(tree = %tree, "parsed line");
    Ok(tree)
}

/// Evaluates one line of input. Nothing survives between calls.
///
/// ```
/// let output = intcalc::evaluate_line("(2 + 3) * 4").unwrap();
/// assert_eq!(output.to_string(), "(2 + 3) * 4 = 20");
/// ```
pub fn evaluate_line(line: &str) -> Result<EvalOutput> {
    evaluate_tree(&parse_line(line)?)
}

/// Evaluates an already parsed line and renders it for display.
pub fn evaluate_tree(tree: &Expr) -> Result<EvalOutput> {
    let value = evaluate(tree)?;
    debug!(value, "evaluated line");

    Ok(EvalOutput{expression: render(tree), value})
}
