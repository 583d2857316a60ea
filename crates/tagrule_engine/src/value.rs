//! Value views over record fields.
//!
//! Validators never inspect Rust values directly. Each field is adapted once
//! into a [`Value`], a small closed set of views (text, sequence, number,
//! optional, record), and validators pattern-match over that.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A read-only view of one field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'a> {
    /// An absent optional.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    Uint(u64),
    /// Floating point of any width.
    Float(f64),
    /// Text.
    Text(&'a str),
    /// Growable ordered sequence (`Vec`, `VecDeque`, slices).
    List(Vec<Value<'a>>),
    /// Fixed-size array.
    Array(Vec<Value<'a>>),
    /// Mapping; only its length is visible.
    Map(usize),
    /// A present optional.
    Optional(Box<Value<'a>>),
    /// A record with its own annotated fields.
    Record(RecordView<'a>),
}

/// Field list of a record value.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordView<'a> {
    /// Type name of the record.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: Vec<Field<'a>>,
}

/// One field of a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'a> {
    /// Declared field name (`"0"`, `"1"`, ... for tuple structs).
    pub name: &'static str,
    /// Raw annotation string, if the field carries one.
    pub annotation: Option<&'static str>,
    /// Current value of the field.
    pub value: Value<'a>,
}

/// The kind of a [`Value`], used in error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`Value::Nil`]
    Nil,
    /// [`Value::Bool`]
    Bool,
    /// [`Value::Int`]
    Int,
    /// [`Value::Uint`]
    Uint,
    /// [`Value::Float`]
    Float,
    /// [`Value::Text`]
    Text,
    /// [`Value::List`]
    List,
    /// [`Value::Array`]
    Array,
    /// [`Value::Map`]
    Map,
    /// [`Value::Optional`]
    Optional,
    /// [`Value::Record`]
    Record,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nil => "nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Array => "array",
            Self::Map => "map",
            Self::Optional => "optional",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

impl<'a> Value<'a> {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::Float(_) => Kind::Float,
            Self::Text(_) => Kind::Text,
            Self::List(_) => Kind::List,
            Self::Array(_) => Kind::Array,
            Self::Map(_) => Kind::Map,
            Self::Optional(_) => Kind::Optional,
            Self::Record(_) => Kind::Record,
        }
    }

    /// Returns true if this is an absent optional.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Resolves one level of optional indirection.
    ///
    /// A present optional yields its inner value; everything else (including
    /// [`Value::Nil`]) yields itself.
    #[must_use]
    pub fn resolve(&self) -> &Value<'a> {
        match self {
            Self::Optional(inner) => inner,
            other => other,
        }
    }

    /// Returns the length of text, sequences, and maps.
    ///
    /// Text length is its length in bytes.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.len()),
            Self::List(items) | Self::Array(items) => Some(items.len()),
            Self::Map(len) => Some(*len),
            _ => None,
        }
    }

    /// Returns the elements of a list or array.
    #[must_use]
    pub fn elements(&self) -> Option<&[Value<'a>]> {
        match self {
            Self::List(items) | Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text, if this is a text value.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the record view, if this is a record.
    #[must_use]
    pub const fn as_record(&self) -> Option<&RecordView<'a>> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Returns true if this is its type's zero value.
    ///
    /// Present optionals are never zero; arrays and records are zero when
    /// every element or field is. Negative zero is not a zero float.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::Float(n) => n.to_bits() == 0,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Array(items) => items.iter().all(Value::is_zero),
            Self::Map(len) => *len == 0,
            Self::Optional(_) => false,
            Self::Record(record) => record.fields.iter().all(|field| field.value.is_zero()),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value<'_>]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) | Self::Array(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Map(len) => write!(f, "map[len={len}]"),
            Self::Optional(inner) => write!(f, "{inner}"),
            Self::Record(record) => {
                f.write_str("{")?;
                for (i, field) in record.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", field.value)?;
                }
                f.write_str("}")
            }
        }
    }
}

// =============================================================================
// AsValue
// =============================================================================

/// Adapts a Rust value into a [`Value`] view.
///
/// Implemented for primitives, text, standard collections, smart pointers,
/// and every type deriving [`Record`](crate::Record).
pub trait AsValue {
    /// Returns the view of this value.
    fn as_value(&self) -> Value<'_>;
}

macro_rules! impl_as_value_int {
    ($variant:ident, $target:ty: $($t:ty),*) => {
        $(
            impl AsValue for $t {
                #[allow(
                    clippy::cast_possible_wrap,
                    clippy::cast_possible_truncation,
                    clippy::cast_lossless
                )]
                fn as_value(&self) -> Value<'_> {
                    Value::$variant(*self as $target)
                }
            }
        )*
    };
}

impl_as_value_int!(Int, i64: i8, i16, i32, i64, isize);
impl_as_value_int!(Uint, u64: u8, u16, u32, u64, usize);

impl AsValue for f32 {
    fn as_value(&self) -> Value<'_> {
        Value::Float(f64::from(*self))
    }
}

impl AsValue for f64 {
    fn as_value(&self) -> Value<'_> {
        Value::Float(*self)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::Text(self)
    }
}

impl<T: AsValue> AsValue for [T] {
    fn as_value(&self) -> Value<'_> {
        Value::List(self.iter().map(AsValue::as_value).collect())
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn as_value(&self) -> Value<'_> {
        self.as_slice().as_value()
    }
}

impl<T: AsValue> AsValue for VecDeque<T> {
    fn as_value(&self) -> Value<'_> {
        Value::List(self.iter().map(AsValue::as_value).collect())
    }
}

impl<T: AsValue, const N: usize> AsValue for [T; N] {
    fn as_value(&self) -> Value<'_> {
        Value::Array(self.iter().map(AsValue::as_value).collect())
    }
}

impl<K, V, S> AsValue for HashMap<K, V, S> {
    fn as_value(&self) -> Value<'_> {
        Value::Map(self.len())
    }
}

impl<K, V> AsValue for BTreeMap<K, V> {
    fn as_value(&self) -> Value<'_> {
        Value::Map(self.len())
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(inner) => Value::Optional(Box::new(inner.as_value())),
            None => Value::Nil,
        }
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Rc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Arc<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl AsValue for Value<'_> {
    fn as_value(&self) -> Value<'_> {
        self.clone()
    }
}
