use crate::error_handling::EvalError;
use crate::parsing::*;

pub fn evaluate(expression: &Expr) -> Result<i64, EvalError> {
    match expression {
        Expr::Literal(value) => Ok(*value),

        // The divisor is checked before the dividend is touched.
        Expr::BinaryOp{operator: BinaryOperator::Division, left, right} => {
            let divisor = evaluate(right)?;
            if divisor == 0 {
                return Err(EvalError::DivisionByZero);
            }
            let dividend = evaluate(left)?;
            BinaryOperator::Division.call(dividend, divisor)
        },

        Expr::BinaryOp{operator, left, right} => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            operator.call(left, right)
        },
    }
}
