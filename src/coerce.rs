//! Type-directed coercion of raw string tokens.
//!
//! Rule order is fixed, first match wins:
//!
//! 1. empty token, nullable field → null
//! 2. digit-only token, integer accepted → integer
//! 3. `"true"` / `"false"` (case-insensitive), boolean accepted → boolean
//! 4. text accepted → token unchanged
//! 5. otherwise → [`CoerceError`]
//!
//! A digit-only token in a field accepting both Integer and Boolean
//! always becomes an integer. There is no `"1"`/`"0"` boolean aliasing
//! and no sign handling: negative numbers are never recognized as
//! integers, which mirrors an intentional simplification in the source
//! dataset rather than a general-purpose parser.

use crate::error::CoerceError;
use crate::schema::{FieldKind, FieldSpec};
use crate::value::Value;

/// Convert one raw string token into a typed value per the field's
/// accepted-kind set.
pub fn coerce(token: &str, accepted: FieldSpec) -> Result<Value, CoerceError> {
    if accepted.contains(FieldKind::Null) && token.is_empty() {
        return Ok(Value::Null);
    }

    if accepted.contains(FieldKind::Integer) && is_digits(token) {
        // i64 overflow falls through to the remaining rules
        if let Ok(n) = token.parse::<i64>() {
            return Ok(Value::Integer(n));
        }
    }

    if accepted.contains(FieldKind::Boolean) {
        if token.eq_ignore_ascii_case("true") {
            return Ok(Value::Boolean(true));
        }
        if token.eq_ignore_ascii_case("false") {
            return Ok(Value::Boolean(false));
        }
    }

    if accepted.contains(FieldKind::Text) {
        return Ok(Value::Text(token.into()));
    }

    Err(CoerceError {
        token: token.to_string(),
        accepted,
    })
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}
