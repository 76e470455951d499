use core::any::TypeId;
use core::fmt;

use bean_utils::TypeIdMap;
use rust_decimal::Decimal;

use crate::info::Type;
use crate::Value;

/// Compares two values of one declared field type.
pub type EqualityFn = fn(&Value, &Value) -> bool;

// -----------------------------------------------------------------------------
// EqualityStrategies

/// Field equality used by the diff engine, keyed by declared field type.
///
/// Types without a registered strategy compare with `Value`'s structural
/// `==`. `Decimal` and `Option<Decimal>` are registered by default with
/// [`decimal_eq`], so `1` and `1.00` are equal.
///
/// # Examples
///
/// ```
/// use bean_reflect::Value;
/// use bean_reflect::info::Type;
/// use bean_reflect::registry::EqualityStrategies;
/// use bean_reflect::value::Decimal;
///
/// let strategies = EqualityStrategies::default();
/// let one = Value::Decimal(Decimal::new(1, 0));
/// let one_00 = Value::Decimal(Decimal::new(100, 2));
///
/// assert!(strategies.equals(Type::of::<Decimal>(), &one, &one_00));
/// assert!(!strategies.equals(Type::of::<Value>(), &one, &one_00));
/// ```
#[derive(Clone)]
pub struct EqualityStrategies {
    table: TypeIdMap<EqualityFn>,
}

impl EqualityStrategies {
    /// A table without any strategy.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            table: TypeIdMap::new(),
        }
    }

    /// Registers `equals` for fields declared as `T`, replacing any previous
    /// strategy.
    pub fn register<T: 'static>(&mut self, equals: EqualityFn) -> &mut Self {
        self.table.insert_type::<T>(equals);
        self
    }

    /// Returns the strategy of `type_id`, if one is registered.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<EqualityFn> {
        self.table.get(&type_id).copied()
    }

    /// Compares `a` and `b` as values of a field declared as `ty`.
    #[inline]
    pub fn equals(&self, ty: Type, a: &Value, b: &Value) -> bool {
        match self.get(ty.id()) {
            Some(equals) => equals(a, b),
            None => a == b,
        }
    }
}

impl Default for EqualityStrategies {
    fn default() -> Self {
        let mut strategies = Self::empty();
        strategies
            .register::<Decimal>(decimal_eq)
            .register::<Option<Decimal>>(decimal_eq);
        strategies
    }
}

impl fmt::Debug for EqualityStrategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualityStrategies")
            .field("len", &self.table.len())
            .finish()
    }
}

/// Numeric equality of decimal values.
///
/// Two nulls are equal, a null and a non-null differ, two decimals are equal
/// when their normalized values are. Anything else falls back to `==`.
pub fn decimal_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Decimal(a), Value::Decimal(b)) => normalized(a) == normalized(b),
        _ => a == b,
    }
}

#[inline]
fn normalized(value: &Decimal) -> (i128, u32) {
    let normal = value.normalize();
    (normal.mantissa(), normal.scale())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_compares_numerically() {
        let dec = |m, s| Value::Decimal(Decimal::new(m, s));

        assert!(decimal_eq(&dec(1, 0), &dec(100, 2)));
        assert!(!decimal_eq(&dec(1, 0), &dec(20, 1)));
        assert!(decimal_eq(&dec(0, 0), &dec(0, 5)));
        assert!(decimal_eq(&Value::Null, &Value::Null));
        assert!(!decimal_eq(&Value::Null, &dec(0, 0)));
    }

    #[test]
    fn custom_strategy_overrides_structural_equality() {
        let mut strategies = EqualityStrategies::default();
        strategies.register::<String>(|a, b| {
            a.as_str().map(str::to_lowercase) == b.as_str().map(str::to_lowercase)
        });

        let ty = Type::of::<String>();
        assert!(strategies.equals(ty, &Value::from("Ab"), &Value::from("aB")));
        assert!(!strategies.equals(Type::of::<i32>(), &Value::I32(1), &Value::I64(1)));
        assert!(strategies.get(TypeId::of::<Option<Decimal>>()).is_some());
    }
}
