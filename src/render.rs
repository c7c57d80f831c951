use crate::expr::{operand, EvalError, Expression};

/// Render an expression tree back to canonical infix text.
///
/// Operators are surrounded by single spaces; parentheses are reproduced
/// exactly where they appeared in the source, never inferred from
/// precedence. Deterministic: re-rendering the same tree yields the same
/// string. Fails on trees with gaps, like the evaluator.
pub fn render(expr: &Expression) -> Result<String, EvalError> {
    match expr {
        Expression::Integer(value) => Ok(value.to_string()),
        Expression::Parenthesized(inner) => {
            Ok(format!("({})", render(operand(inner, "parenthesized")?)?))
        }
        Expression::Binary(op, left, right) => Ok(format!(
            "{} {} {}",
            render(operand(left, op.name())?)?,
            op.symbol(),
            render(operand(right, op.name())?)?
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::BinaryOp;
    use crate::parse::parse;

    fn render_str(input: &str) -> Result<String, Box<dyn std::error::Error>> {
        Ok(render(&parse(input)?)?)
    }

    #[test]
    fn test_operators_single_spaced() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(render_str("3+4*2")?, "3 + 4 * 2");
        assert_eq!(render_str("5<10")?, "5 < 10");
        assert_eq!(render_str("1 =  2")?, "1 = 2");
        Ok(())
    }

    #[test]
    fn test_parentheses_preserved_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(render_str("(1+2)*3")?, "(1 + 2) * 3");
        assert_eq!(render_str("(((1)))")?, "(((1)))");
        // No precedence parentheses are invented.
        assert_eq!(render_str("1+2*3")?, "1 + 2 * 3");
        Ok(())
    }

    #[test]
    fn test_negative_literal() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(render_str("-5+3")?, "-5 + 3");
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result<(), Box<dyn std::error::Error>> {
        let tree = parse("(1+2)*3<100")?;
        let first = render(&tree)?;
        let second = render(&tree)?;
        assert_eq!(first, second);
        // The rendered form parses back to the same tree.
        assert_eq!(parse(&first)?, tree);
        Ok(())
    }

    #[test]
    fn test_missing_operand_fails() {
        let gap = Expression::Binary(BinaryOp::Less, None, None);
        assert_eq!(
            render(&gap),
            Err(EvalError::MissingOperand { context: "less" })
        );
    }
}
