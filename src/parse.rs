use std::fmt;

use log::{debug, warn};
use nom::{
    branch::alt,
    character::complete::{char, digit1, one_of},
    combinator::opt,
    IResult, Offset,
};

use crate::expr::{BinaryOp, Expression};

/// Parse failure, carrying the offending remainder of the space-stripped
/// input and its byte offset within that stripped sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The cursor position cannot start an integer literal or a
    /// parenthesized sub-expression (also covers exhausted input where a
    /// primary is required).
    EmptyOrUnexpectedPrimary { found: String, offset: usize },
    /// A leading `-` with no digits after it.
    SignWithoutDigits { found: String, offset: usize },
    /// An opening `(` whose matching `)` never arrives.
    UnmatchedParenthesis { found: String, offset: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyOrUnexpectedPrimary { found, offset } => {
                if found.is_empty() {
                    write!(f, "expected primary, but input is empty")
                } else {
                    write!(f, "expected primary, found {:?} at offset {}", found, offset)
                }
            }
            ParseError::SignWithoutDigits { found, offset } => write!(
                f,
                "expected digits after sign, found {:?} at offset {}",
                found, offset
            ),
            ParseError::UnmatchedParenthesis { found, offset } => write!(
                f,
                "no closing parenthesis for {:?} at offset {}",
                found, offset
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Internal failure type threaded through the nom parsers. Borrows the
/// parse buffer; converted to an owned [`ParseError`] at the [`parse`]
/// boundary, where offsets are computed against the full buffer.
#[derive(Debug)]
enum Failure<'a> {
    Primary(&'a str),
    SignWithoutDigits(&'a str),
    UnmatchedParenthesis(&'a str),
    /// Soft miss from a nom primitive; only ever used to steer `alt` and
    /// chain loops, never surfaced past `primary`.
    Nom(&'a str),
}

impl<'a> nom::error::ParseError<&'a str> for Failure<'a> {
    fn from_error_kind(input: &'a str, _kind: nom::error::ErrorKind) -> Self {
        Failure::Nom(input)
    }

    fn append(_input: &'a str, _kind: nom::error::ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> Failure<'a> {
    fn into_error(self, buffer: &str) -> ParseError {
        match self {
            Failure::Primary(at) | Failure::Nom(at) => ParseError::EmptyOrUnexpectedPrimary {
                found: at.to_string(),
                offset: buffer.offset(at),
            },
            Failure::SignWithoutDigits(at) => ParseError::SignWithoutDigits {
                found: at.to_string(),
                offset: buffer.offset(at),
            },
            Failure::UnmatchedParenthesis(at) => ParseError::UnmatchedParenthesis {
                found: at.to_string(),
                offset: buffer.offset(at),
            },
        }
    }
}

type PResult<'a, O> = IResult<&'a str, O, Failure<'a>>;

/// Copy `input`, omitting ASCII space characters. Other whitespace is kept
/// as-is and will fail parsing like any other unexpected character.
pub fn remove_spaces(input: &str) -> String {
    input.chars().filter(|&ch| ch != ' ').collect()
}

/// Parse one line into an expression tree: strip spaces, then run the
/// grammar top-down from `relation`. Trailing input left over after the
/// top-level relation is reported as a warning, not an error; the tree
/// built so far is still returned.
pub fn parse(raw: &str) -> Result<Expression, ParseError> {
    let buffer = remove_spaces(raw);
    match relation(&buffer) {
        Ok((leftover, expr)) => {
            if !leftover.is_empty() {
                warn!("not parsed: {:?}", leftover);
            }
            Ok(expr)
        }
        Err(nom::Err::Error(failure)) | Err(nom::Err::Failure(failure)) => {
            Err(failure.into_error(&buffer))
        }
        // All parsers here are `complete`; Incomplete cannot occur.
        Err(nom::Err::Incomplete(_)) => Err(ParseError::EmptyOrUnexpectedPrimary {
            found: String::new(),
            offset: buffer.len(),
        }),
    }
}

/// relation := term ( ('<' | '>' | '=') term )?
///
/// At most one comparison operator is consumed; a second one is left as
/// unconsumed input for the caller to flag.
fn relation(input: &str) -> PResult<'_, Expression> {
    let (rest, left) = term(input)?;
    match one_of::<_, _, Failure>("<>=")(rest) {
        Ok((rest, ch)) => {
            let op = match ch {
                '<' => BinaryOp::Less,
                '>' => BinaryOp::More,
                _ => BinaryOp::Equal,
            };
            let (rest, right) = term(rest)?;
            Ok((rest, Expression::binary(op, left, right)))
        }
        Err(_) => Ok((rest, left)),
    }
}

/// term := factor ( ('+' | '-') factor )*
///
/// Left-folding: the accumulated result becomes the left child of each new
/// node, so `a+b-c` parses as `(a+b)-c`.
fn term(input: &str) -> PResult<'_, Expression> {
    let (mut rest, mut acc) = factor(input)?;
    while let Ok((next, ch)) = one_of::<_, _, Failure>("+-")(rest) {
        let op = if ch == '+' {
            BinaryOp::Plus
        } else {
            BinaryOp::Minus
        };
        let (next, rhs) = factor(next)?;
        acc = Expression::binary(op, acc, rhs);
        rest = next;
    }
    Ok((rest, acc))
}

/// factor := primary ( '*' primary )*
fn factor(input: &str) -> PResult<'_, Expression> {
    let (mut rest, mut acc) = primary(input)?;
    while let Ok((next, _)) = char::<_, Failure>('*')(rest) {
        let (next, rhs) = primary(next)?;
        acc = Expression::binary(BinaryOp::Mult, acc, rhs);
        rest = next;
    }
    Ok((rest, acc))
}

/// primary := ['-'] digit+ | '(' relation ')'
///
/// A soft miss of both alternatives becomes a hard failure here: there is
/// no backtracking past a position where a primary was required.
fn primary(input: &str) -> PResult<'_, Expression> {
    match alt((integer, parenthesized))(input) {
        Err(nom::Err::Error(_)) => Err(nom::Err::Failure(Failure::Primary(input))),
        other => other,
    }
}

fn integer(input: &str) -> PResult<'_, Expression> {
    let (rest, sign) = opt(char('-'))(input)?;
    let (rest, digits) = match digit1::<_, Failure>(rest) {
        Ok(parsed) => parsed,
        Err(_) if sign.is_some() => {
            return Err(nom::Err::Failure(Failure::SignWithoutDigits(input)));
        }
        Err(err) => return Err(err),
    };
    // Wrapping accumulation: overflow follows native fixed-width
    // arithmetic rather than failing the parse.
    let mut value: i64 = 0;
    for digit in digits.bytes() {
        value = value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'));
    }
    if sign.is_some() {
        value = value.wrapping_neg();
    }
    Ok((rest, Expression::Integer(value)))
}

/// Scan from `(` with a nesting counter; the slice up to the matching `)`
/// is parsed as a full relation of its own. Input left over inside the
/// parentheses is dropped, the same leftover rule as at top level but
/// scoped to the inner buffer.
fn parenthesized(input: &str) -> PResult<'_, Expression> {
    let (body, _) = char::<_, Failure>('(')(input)?;
    let mut depth = 1u32;
    for (at, ch) in body.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    let (leftover, inner) = relation(&body[..at])?;
                    if !leftover.is_empty() {
                        debug!("dropped inside parentheses: {:?}", leftover);
                    }
                    return Ok((&body[at + 1..], Expression::parenthesized(inner)));
                }
            }
            _ => {}
        }
    }
    Err(nom::Err::Failure(Failure::UnmatchedParenthesis(input)))
}
