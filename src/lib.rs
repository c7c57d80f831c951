//! relcalc -- parse, render and evaluate relational arithmetic expressions
//!
//! Relcalc reads one line of text holding an integer expression over
//! `+ - * < > =` with parentheses, builds an abstract syntax tree by
//! recursive descent, and offers two walks over it: a canonical infix
//! rendering and integer evaluation (relations yield 1 or 0).
//!
//! Parsing operates directly on the space-stripped character sequence;
//! there is no separate token stream. Precedence comes from grammar
//! layering: primary binds tighter than `*`, which binds tighter than
//! `+`/`-`, which bind tighter than the single optional comparison.
//!
//! ```
//! use relcalc::evaluator::evaluate;
//! use relcalc::parse::parse;
//! use relcalc::render::render;
//!
//! let expr = parse("(1+2)*3 < 10").unwrap();
//! assert_eq!(render(&expr).unwrap(), "(1 + 2) * 3 < 10");
//! assert_eq!(evaluate(&expr).unwrap(), 1);
//! ```

pub mod evaluator;
pub mod expr;
pub mod parse;
pub mod render;
