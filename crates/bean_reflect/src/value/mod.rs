//! The dynamic value model.
//!
//! Generated getters hand out a [`Value`] and generated setters take one back,
//! so every operation in this crate talks about property contents in terms of
//! this type. [`ToValue`] and [`FromValue`] convert between field types and
//! values.

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod error;

#[cfg(feature = "serde")]
mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use convert::{FromValue, ToValue};
pub use error::ValueError;

pub use rust_decimal::Decimal;

use core::fmt;

use indexmap::IndexMap;

/// An insertion-ordered map of property values.
///
/// Produced by the map conversion operations, where the order follows the
/// bean's property order.
pub type ValueMap = IndexMap<String, Value>;

// -----------------------------------------------------------------------------
// Value

/// A property value with its type erased.
///
/// [`Value::Null`] is the absent value: an `Option` field holding `None`, a
/// getter that failed, or a property without a getter.
///
/// # Equality
///
/// `PartialEq` is structural. Values of different variants are never equal,
/// even when they hold the same number, and decimals must also agree on
/// their scale:
///
/// ```
/// use bean_reflect::value::{Decimal, Value};
///
/// assert_ne!(Value::I32(1), Value::I64(1));
/// assert_ne!(
///     Value::Decimal(Decimal::new(1, 0)),
///     Value::Decimal(Decimal::new(100, 2)),
/// );
/// ```
///
/// Numeric comparison of decimals is a diff-engine concern, see
/// [`EqualityStrategies`](crate::registry::EqualityStrategies).
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Decimal(Decimal),
    String(String),
    List(Vec<Value>),
    Map(ValueMap),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// A short lowercase name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns the string slice of a [`Value::String`].
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the decimal of a [`Value::Decimal`].
    #[inline]
    pub const fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Widens any integer variant to `i128`.
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Self::I8(v) => Some(i128::from(v)),
            Self::I16(v) => Some(i128::from(v)),
            Self::I32(v) => Some(i128::from(v)),
            Self::I64(v) => Some(i128::from(v)),
            Self::U8(v) => Some(i128::from(v)),
            Self::U16(v) => Some(i128::from(v)),
            Self::U32(v) => Some(i128::from(v)),
            Self::U64(v) => Some(i128::from(v)),
            _ => None,
        }
    }

    /// Converts the value into `T`.
    ///
    /// ```
    /// use bean_reflect::Value;
    ///
    /// let age: Option<u8> = Value::I32(18).into_typed().unwrap();
    /// assert_eq!(age, Some(18));
    /// ```
    #[inline]
    pub fn into_typed<T: FromValue>(self) -> Result<T, ValueError> {
        T::from_value(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::I8(a), Self::I8(b)) => a == b,
            (Self::I16(a), Self::I16(b)) => a == b,
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::U8(a), Self::U8(b)) => a == b,
            (Self::U16(a), Self::U16(b)) => a == b,
            (Self::U32(a), Self::U32(b)) => a == b,
            (Self::U64(a), Self::U64(b)) => a == b,
            // Bitwise, so `NaN` equals itself and `0.0` differs from `-0.0`.
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            // `Decimal`'s own `==` ignores the scale.
            (Self::Decimal(a), Self::Decimal(b)) => a == b && a.scale() == b.scale(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Char(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
            Self::F32(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::Decimal(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {item}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// -----------------------------------------------------------------------------
// From

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    String => String,
    Vec<Value> => List,
    ValueMap => Map,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::{Decimal, Value};

    #[test]
    fn structural_equality_is_strict() {
        assert_eq!(Value::from("a"), Value::String("a".into()));
        assert_ne!(Value::I32(1), Value::U32(1));
        assert_ne!(Value::Null, Value::String(String::new()));
        assert_eq!(
            Value::Decimal(Decimal::new(150, 2)),
            Value::Decimal(Decimal::new(150, 2))
        );
        assert_ne!(
            Value::Decimal(Decimal::new(15, 1)),
            Value::Decimal(Decimal::new(150, 2))
        );
    }

    #[test]
    fn floats_compare_bitwise() {
        assert_eq!(Value::F64(f64::NAN), Value::F64(f64::NAN));
        assert_eq!(Value::F32(f32::NAN), Value::F32(f32::NAN));
        assert_ne!(Value::F64(0.0), Value::F64(-0.0));
        assert_eq!(Value::F64(1.5), Value::F64(1.5));
    }

    #[test]
    fn option_maps_to_null() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some(3_i64)), Value::I64(3));
    }

    #[test]
    fn display_nested() {
        let value = Value::List(vec![Value::I32(1), Value::from("x"), Value::Null]);
        assert_eq!(value.to_string(), "[1, x, null]");
    }
}
