//! Reserved validator names.

/// Fails when the field holds its type's zero value. Takes no parameter.
pub const REQUIRED: &str = "required";

/// Lower bound on length or numeric value.
pub const MIN: &str = "min";

/// Long form of [`MIN`].
pub const MINIMUM: &str = "minimum";

/// Upper bound on length or numeric value.
pub const MAX: &str = "max";

/// Long form of [`MAX`].
pub const MAXIMUM: &str = "maximum";

/// Applies a nested annotation to every element of a sequence.
pub const EACH: &str = "each";

/// Reserved for descending into nested records. Not implemented.
pub const DIVE: &str = "dive";

/// Every reserved name.
pub const RESERVED: &[&str] = &[REQUIRED, MIN, MINIMUM, MAX, MAXIMUM, EACH, DIVE];

/// Validators that take an integer bound.
pub const BOUNDS: &[&str] = &[MIN, MINIMUM, MAX, MAXIMUM];

/// Returns true if `name` is a reserved token.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}
