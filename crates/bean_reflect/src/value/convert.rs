use core::str::FromStr;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;

use super::{Value, ValueError};

// -----------------------------------------------------------------------------
// Traits

/// Types that can be read out of a bean property as a [`Value`].
///
/// The derive macro requires it for every property field.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

/// Types that can be written into a bean property from a [`Value`].
///
/// Conversions are lenient where no information is lost: an `i32` field
/// accepts any integer variant that fits, a `String` field accepts a `Char`.
///
/// # Examples
///
/// ```
/// use bean_reflect::value::{FromValue, Value, ValueError};
///
/// assert_eq!(i16::from_value(Value::U8(7)), Ok(7));
/// assert!(matches!(
///     u8::from_value(Value::I32(-1)),
///     Err(ValueError::OutOfRange { .. }),
/// ));
/// ```
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

#[inline]
const fn mismatched(expected: &'static str, found: &Value) -> ValueError {
    ValueError::Mismatched {
        expected,
        found: found.kind(),
    }
}

// -----------------------------------------------------------------------------
// Scalars

impl ToValue for bool {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(mismatched("bool", &other)),
        }
    }
}

impl ToValue for char {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Char(*self)
    }
}

impl FromValue for char {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Char(v) => Ok(v),
            Value::String(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(c),
                    _ => Err(ValueError::Invalid {
                        target: "char",
                        value: s,
                    }),
                }
            }
            other => Err(mismatched("char", &other)),
        }
    }
}

macro_rules! impl_integer {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $wide)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, ValueError> {
                    let Some(wide) = value.as_i128() else {
                        return Err(mismatched(stringify!($ty), &value));
                    };
                    <$ty>::try_from(wide).map_err(|_| ValueError::OutOfRange {
                        target: stringify!($ty),
                        value: wide.to_string(),
                    })
                }
            }
        )*
    };
}

impl_integer! {
    i8 => I8 as i8,
    i16 => I16 as i16,
    i32 => I32 as i32,
    i64 => I64 as i64,
    isize => I64 as i64,
    u8 => U8 as u8,
    u16 => U16 as u16,
    u32 => U32 as u32,
    u64 => U64 as u64,
    usize => U64 as u64,
}

impl ToValue for f32 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::F32(*self)
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            other => match other.as_i128() {
                Some(v) => Ok(v as f32),
                None => Err(mismatched("f32", &other)),
            },
        }
    }
}

impl ToValue for f64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::F64(v) => Ok(v),
            Value::F32(v) => Ok(f64::from(v)),
            other => match other.as_i128() {
                Some(v) => Ok(v as f64),
                None => Err(mismatched("f64", &other)),
            },
        }
    }
}

impl ToValue for Decimal {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl FromValue for Decimal {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        let invalid = |value: String| ValueError::Invalid {
            target: "decimal",
            value,
        };
        match value {
            Value::Decimal(v) => Ok(v),
            Value::F32(v) => Decimal::try_from(v).map_err(|_| invalid(v.to_string())),
            Value::F64(v) => Decimal::try_from(v).map_err(|_| invalid(v.to_string())),
            Value::String(s) => Decimal::from_str(s.trim()).map_err(|_| invalid(s)),
            other => match other.as_i128() {
                Some(v) => Decimal::try_from_i128_with_scale(v, 0).map_err(|_| {
                    ValueError::OutOfRange {
                        target: "decimal",
                        value: v.to_string(),
                    }
                }),
                None => Err(mismatched("decimal", &other)),
            },
        }
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            Value::Char(c) => Ok(c.to_string()),
            other => Err(mismatched("string", &other)),
        }
    }
}

impl ToValue for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// Containers

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatched("list", &other)),
        }
    }
}

impl<T: ToValue> ToValue for IndexMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

impl<T: FromValue> FromValue for IndexMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_value(v)?)))
                .collect(),
            other => Err(mismatched("map", &other)),
        }
    }
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| Ok((k, T::from_value(v)?)))
                .collect(),
            other => Err(mismatched("map", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_and_check_range() {
        assert_eq!(i64::from_value(Value::I32(-5)), Ok(-5));
        assert_eq!(u64::from_value(Value::U64(u64::MAX)), Ok(u64::MAX));
        assert_eq!(
            i8::from_value(Value::I32(300)),
            Err(ValueError::OutOfRange {
                target: "i8",
                value: "300".into(),
            })
        );
        assert_eq!(
            i32::from_value(Value::from("1")),
            Err(ValueError::Mismatched {
                expected: "i32",
                found: "string",
            })
        );
        assert_eq!(12_usize.to_value(), Value::U64(12));
    }

    #[test]
    fn decimals_accept_numbers_and_text() {
        assert_eq!(Decimal::from_value(Value::I32(2)), Ok(Decimal::new(2, 0)));
        assert_eq!(
            Decimal::from_value(Value::from(" 1.50 ")),
            Ok(Decimal::new(150, 2))
        );
        assert!(matches!(
            Decimal::from_value(Value::from("abc")),
            Err(ValueError::Invalid { .. })
        ));
    }

    #[test]
    fn options_and_lists() {
        assert_eq!(Option::<String>::from_value(Value::Null), Ok(None));
        assert_eq!(
            Option::<String>::from_value(Value::Char('x')),
            Ok(Some("x".to_owned()))
        );
        assert!(String::from_value(Value::Null).is_err());

        let list = vec![Some(1_u16), None].to_value();
        assert_eq!(list, Value::List(vec![Value::U16(1), Value::Null]));
        assert_eq!(Vec::<Option<u16>>::from_value(list), Ok(vec![Some(1), None]));
    }

    #[test]
    fn maps_keep_order() {
        let mut map = IndexMap::new();
        map.insert("b".to_owned(), 2_i32);
        map.insert("a".to_owned(), 1_i32);

        let Value::Map(entries) = map.to_value() else {
            panic!("expected a map");
        };
        let keys: Vec<_> = entries.keys().map(String::as_str).collect();
        assert_eq!(keys, ["b", "a"]);

        let sorted = BTreeMap::<String, i64>::from_value(Value::Map(entries)).unwrap();
        assert_eq!(sorted.keys().collect::<Vec<_>>(), ["a", "b"]);
    }
}
