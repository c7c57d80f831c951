use std::fmt;

/// A parsed expression represented as an abstract syntax tree.
///
/// The tree is strictly owned top-down: every child slot holds its subtree
/// exclusively and nothing is shared between nodes. A `None` child is the
/// gap left behind by a failed parse step; [`crate::parse::parse`] never
/// returns a tree containing one, but hand-built trees can, and both walks
/// refuse them with [`EvalError::MissingOperand`] instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Integer(i64),
    Parenthesized(Operand),
    Binary(BinaryOp, Operand, Operand),
}

/// A child slot of a composite node.
pub type Operand = Option<Box<Expression>>;

/// Operator tag of a binary node, covering all three grammar layers
/// (comparison, additive, multiplicative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Less,
    More,
    Equal,
    Plus,
    Minus,
    Mult,
}

impl BinaryOp {
    /// The operator character as it appears in the source text.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Less => '<',
            BinaryOp::More => '>',
            BinaryOp::Equal => '=',
            BinaryOp::Plus => '+',
            BinaryOp::Minus => '-',
            BinaryOp::Mult => '*',
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            BinaryOp::Less => "less",
            BinaryOp::More => "more",
            BinaryOp::Equal => "equal",
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Mult => "mult",
        }
    }
}

impl Expression {
    /// Build a binary node with both operands present.
    pub fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
        Expression::Binary(op, Some(Box::new(left)), Some(Box::new(right)))
    }

    /// Build a parenthesized node around `inner`.
    pub fn parenthesized(inner: Expression) -> Expression {
        Expression::Parenthesized(Some(Box::new(inner)))
    }
}

/// Failure raised when a tree walk reaches a gap left by an incomplete
/// parse. This is a contract violation at the parse/use boundary, so both
/// walks fail fast rather than substitute a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    MissingOperand { context: &'static str },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::MissingOperand { context } => {
                write!(f, "{}: one of the operands is not provided", context)
            }
        }
    }
}

impl std::error::Error for EvalError {}

pub(crate) fn operand<'a>(
    slot: &'a Operand,
    context: &'static str,
) -> Result<&'a Expression, EvalError> {
    slot.as_deref()
        .ok_or(EvalError::MissingOperand { context })
}
