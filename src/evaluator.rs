use crate::expr::{operand, BinaryOp, EvalError, Expression};

/// Evaluate an expression tree to its integer value.
///
/// Relations yield 1 when they hold and 0 otherwise. Arithmetic wraps on
/// overflow, matching native fixed-width behavior. A tree containing a gap
/// from an incomplete parse fails with [`EvalError::MissingOperand`];
/// a gap is never evaluated as a default value.
pub fn evaluate(expr: &Expression) -> Result<i64, EvalError> {
    match expr {
        Expression::Integer(value) => Ok(*value),
        Expression::Parenthesized(inner) => evaluate(operand(inner, "parenthesized")?),
        Expression::Binary(op, left, right) => {
            let left = evaluate(operand(left, op.name())?)?;
            let right = evaluate(operand(right, op.name())?)?;
            Ok(match op {
                BinaryOp::Plus => left.wrapping_add(right),
                BinaryOp::Minus => left.wrapping_sub(right),
                BinaryOp::Mult => left.wrapping_mul(right),
                BinaryOp::Less => (left < right) as i64,
                BinaryOp::More => (left > right) as i64,
                BinaryOp::Equal => (left == right) as i64,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn eval_str(input: &str) -> Result<i64, Box<dyn std::error::Error>> {
        Ok(evaluate(&parse(input)?)?)
    }

    #[test]
    fn test_arithmetic() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(eval_str("3+4*2")?, 11);
        assert_eq!(eval_str("(1+2)*3")?, 9);
        assert_eq!(eval_str("10-2-3")?, 5);
        assert_eq!(eval_str("-2*3")?, -6);
        Ok(())
    }

    #[test]
    fn test_relations() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(eval_str("5<10")?, 1);
        assert_eq!(eval_str("10>20")?, 0);
        assert_eq!(eval_str("2=1+1")?, 1);
        assert_eq!(eval_str("2=3")?, 0);
        Ok(())
    }

    #[test]
    fn test_nested_parentheses() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(eval_str("(((1)))")?, 1);
        Ok(())
    }

    #[test]
    fn test_missing_operand_fails() {
        let gap = Expression::Binary(
            BinaryOp::Plus,
            Some(Box::new(Expression::Integer(1))),
            None,
        );
        assert_eq!(
            evaluate(&gap),
            Err(EvalError::MissingOperand { context: "plus" })
        );

        let empty_parens = Expression::Parenthesized(None);
        assert_eq!(
            evaluate(&empty_parens),
            Err(EvalError::MissingOperand {
                context: "parenthesized"
            })
        );
    }
}
