use crate::parsing::*;
use std::fmt::{self, Write};

fn needs_parens(child: &Expr, parent: i32, is_right: bool) -> bool {
    match child {
        Expr::Literal(_) => false,
        Expr::BinaryOp{operator, ..} => {
            let precedence = operator.precedence();
            precedence < parent || (is_right && precedence == parent)
        },
    }
}

fn write_operand(f: &mut fmt::Formatter<'_>, child: &Expr, parent: i32, is_right: bool) -> fmt::Result {
    if needs_parens(child, parent, is_right) {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

/// Infix form with only the parentheses the tree's shape requires.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => write!(f, "{value}"),
            Expr::BinaryOp{operator, left, right} => {
                let precedence = operator.precedence();
                write_operand(f, left, precedence, false)?;
                write!(f, " {} ", operator.symbol())?;
                write_operand(f, right, precedence, true)
            },
        }
    }
}

pub fn render(expression: &Expr) -> String {
    expression.to_string()
}

fn write_tree(out: &mut String, expression: &Expr, depth: usize) -> fmt::Result {
    let indent = depth * 2;
    match expression {
        Expr::Literal(value) => writeln!(out, "{:indent$}{value}", ""),
        Expr::BinaryOp{operator, left, right} => {
            write_tree(out, left, depth + 1)?;
            writeln!(out, "{:indent$}{}", "", operator.symbol())?;
            write_tree(out, right, depth + 1)
        },
    }
}

/// Sideways dump of the tree: left subtree, node, right subtree, one node per
/// line, indented by depth.
pub fn render_tree(expression: &Expr) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_tree(&mut out, expression, 0);
    out
}
