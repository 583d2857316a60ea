//! Built-in validators: `min`/`minimum`, `max`/`maximum`, and `required`.
//!
//! Bounds apply to length for text, sequences and maps, and to the value
//! itself for numbers. An absent optional counts as length zero.

use tagrule_grammar::names;

use crate::context::FieldContext;
use crate::error::RuleError;
use crate::registry::Registry;
use crate::value::Value;

/// Registers every built-in validator into `registry`.
pub fn register_builtins(registry: &mut Registry) {
    registry.register(names::MIN, minimum);
    registry.register(names::MINIMUM, minimum);
    registry.register(names::MAX, maximum);
    registry.register(names::MAXIMUM, maximum);
    registry.register(names::REQUIRED, required);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bound {
    Lower,
    Upper,
}

impl Bound {
    fn holds(self, actual: i128, limit: i128) -> bool {
        match self {
            Self::Lower => actual >= limit,
            Self::Upper => actual <= limit,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn holds_float(self, actual: f64, limit: i64) -> bool {
        match self {
            Self::Lower => actual >= limit as f64,
            Self::Upper => actual <= limit as f64,
        }
    }

    fn length_message(self, limit: i64) -> String {
        match self {
            Self::Lower => format!("should have length at least {limit}"),
            Self::Upper => format!("should have length at most {limit}"),
        }
    }

    fn value_message(self, limit: i64) -> String {
        match self {
            Self::Lower => format!("should be >= {limit}"),
            Self::Upper => format!("should be <= {limit}"),
        }
    }
}

fn parse_limit(ctx: &FieldContext<'_>) -> Result<i64, RuleError> {
    let param = ctx.param();
    param.parse().map_err(|source| RuleError::BadParameter {
        validator: ctx.validator_name().to_string(),
        param: param.to_string(),
        source,
    })
}

fn check_bound(ctx: &FieldContext<'_>, bound: Bound) -> Result<(), RuleError> {
    let limit = parse_limit(ctx)?;
    let check_length = |len: usize| {
        let len = i128::try_from(len).unwrap_or(i128::MAX);
        if bound.holds(len, i128::from(limit)) {
            Ok(())
        } else {
            Err(RuleError::Violation(bound.length_message(limit)))
        }
    };
    let check_value = |ok: bool| {
        if ok {
            Ok(())
        } else {
            Err(RuleError::Violation(bound.value_message(limit)))
        }
    };

    match ctx.resolved() {
        Value::Nil => check_length(0),
        value @ (Value::Text(_) | Value::List(_) | Value::Array(_) | Value::Map(_)) => {
            check_length(value.length().unwrap_or_default())
        }
        Value::Int(n) => check_value(bound.holds(i128::from(*n), i128::from(limit))),
        Value::Uint(n) => check_value(bound.holds(i128::from(*n), i128::from(limit))),
        Value::Float(n) => check_value(bound.holds_float(*n, limit)),
        other => Err(RuleError::NotApplicable {
            validator: ctx.validator_name().to_string(),
            kind: other.kind(),
        }),
    }
}

/// Passes when the length (or numeric value) is at least the parameter.
///
/// # Errors
/// Fails when below the bound, when the parameter is not an integer, or when
/// the value has neither a length nor a numeric value.
///
/// # Panics
/// Panics if invoked without a parameter.
pub fn minimum(ctx: &FieldContext<'_>) -> Result<(), RuleError> {
    check_bound(ctx, Bound::Lower)
}

/// Passes when the length (or numeric value) is at most the parameter.
///
/// # Errors
/// Fails when above the bound, when the parameter is not an integer, or when
/// the value has neither a length nor a numeric value.
///
/// # Panics
/// Panics if invoked without a parameter.
pub fn maximum(ctx: &FieldContext<'_>) -> Result<(), RuleError> {
    check_bound(ctx, Bound::Upper)
}

/// Passes unless the value is absent or its type's zero value.
///
/// # Errors
/// Fails with `is required`.
pub fn required(ctx: &FieldContext<'_>) -> Result<(), RuleError> {
    if ctx.value().is_nil() || ctx.resolved().is_zero() {
        Err(RuleError::violation("is required"))
    } else {
        Ok(())
    }
}
