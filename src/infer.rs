//! Value type inference.
//!
//! The first rule that matches wins:
//!
//! 1. a value containing `,` becomes an array, each piece inferred on its own
//! 2. `true` / `false` become booleans (exact, case-sensitive)
//! 3. an integer literal becomes [`Number::Integer`]
//! 4. a decimal literal becomes [`Number::Decimal`]
//! 5. anything else stays a string
//!
//! Inference never fails and never trims: the caller has already trimmed the
//! whole value, and pieces of a list keep their surrounding spaces.
//!
//! ```rust
//! use serde_props::{infer::infer, props};
//!
//! assert_eq!(infer("1,foo,true"), props!([1, "foo", true]));
//! assert_eq!(infer("1, 2"), props!([1, " 2"]));
//! ```

use crate::{Decimal, Number, Value};

/// Infers a typed value from a trimmed raw property value.
#[must_use]
pub fn infer(raw: &str) -> Value {
    if raw.contains(',') {
        return Value::Array(split_list(raw).map(infer_scalar).collect());
    }
    infer_scalar(raw)
}

/// Infers a scalar (boolean, number, or string); commas are not special.
#[must_use]
pub fn infer_scalar(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }
    if let Some(integer) = Number::parse_integer(raw) {
        return Value::Number(integer);
    }
    if let Ok(decimal) = raw.parse::<Decimal>() {
        return Value::Number(Number::Decimal(decimal));
    }
    Value::String(raw.to_string())
}

/// Splits on every comma, dropping trailing empty pieces (`"1,2,"` has two pieces, `","` none).
fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    let mut pieces: Vec<&str> = raw.split(',').collect();
    while pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    pieces.into_iter()
}
