//! Field by field comparison of two beans of the same type.
//!
//! Fields come from the [`FieldResolver`](crate::registry::FieldResolver), so
//! the order is: fields of the type itself in declaration order, then each
//! ancestor's. Field values are compared with the context's
//! [`EqualityStrategies`](crate::registry::EqualityStrategies).

use crate::info::Type;
use crate::registry::{FieldFilter, ResolvedField};
use crate::{Bean, BeanContext, BeanError, Value};

// -----------------------------------------------------------------------------
// Difference

/// One field whose values differ between two beans.
///
/// The serialized `fieldType` is [`Type::name`], which follows
/// [`core::any::type_name`] and is meant for diagnostics only: its exact
/// text may change between compiler versions.
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    pub field_name: &'static str,
    pub field_type: Type,
    pub origin_value: Value,
    pub target_value: Value,
}

#[cfg(feature = "serde")]
impl serde_core::Serialize for Difference {
    fn serialize<S: serde_core::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde_core::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Difference", 4)?;
        state.serialize_field("fieldName", self.field_name)?;
        state.serialize_field("fieldType", self.field_type.name())?;
        state.serialize_field("originValue", &self.origin_value)?;
        state.serialize_field("targetValue", &self.target_value)?;
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Engine

fn read_field(field: &ResolvedField, bean: &dyn Bean) -> Result<Value, BeanError> {
    field.read(bean).map_err(|source| BeanError::Read {
        type_path: bean.reflect_bean_info().ty().path(),
        property: field.name(),
        source,
    })
}

impl BeanContext {
    /// Lists every field selected by `filter` whose values differ.
    ///
    /// # Errors
    ///
    /// - [`BeanError::MismatchedTypes`] when the beans have different types.
    /// - [`BeanError::Read`] when a field cannot be read. The whole
    ///   comparison is abandoned.
    pub fn compare_with(
        &self,
        origin: &dyn Bean,
        target: &dyn Bean,
        filter: FieldFilter<'_>,
    ) -> Result<Vec<Difference>, BeanError> {
        let info = origin.reflect_bean_info();
        let target_info = target.reflect_bean_info();
        if info.ty() != target_info.ty() {
            return Err(BeanError::MismatchedTypes {
                origin: info.ty().path(),
                target: target_info.ty().path(),
            });
        }

        let mut differences = Vec::new();
        for field in self.field_resolver().get_fields(info, filter) {
            let origin_value = read_field(&field, origin)?;
            let target_value = read_field(&field, target)?;
            if !self.equality().equals(field.ty(), &origin_value, &target_value) {
                differences.push(Difference {
                    field_name: field.name(),
                    field_type: field.ty(),
                    origin_value,
                    target_value,
                });
            }
        }
        Ok(differences)
    }

    /// Returns `true` as soon as one field selected by `filter` differs.
    ///
    /// A missing `target`, or one of another type, is always different.
    ///
    /// # Errors
    ///
    /// [`BeanError::Read`] when a field cannot be read.
    pub fn is_different_with(
        &self,
        origin: &dyn Bean,
        target: Option<&dyn Bean>,
        filter: FieldFilter<'_>,
    ) -> Result<bool, BeanError> {
        let Some(target) = target else {
            return Ok(true);
        };
        let info = origin.reflect_bean_info();
        if info.ty() != target.reflect_bean_info().ty() {
            return Ok(true);
        }

        for field in self.field_resolver().get_fields(info, filter) {
            let origin_value = read_field(&field, origin)?;
            let target_value = read_field(&field, target)?;
            if !self.equality().equals(field.ty(), &origin_value, &target_value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Compares every field of every level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_reflect::{BeanContext, Value, derive::Bean};
    ///
    /// #[derive(Bean)]
    /// struct Point {
    ///     x: i32,
    ///     y: i32,
    /// }
    ///
    /// let ctx = BeanContext::new();
    /// let diff = ctx.compare(&Point { x: 1, y: 2 }, &Point { x: 1, y: 3 }).unwrap();
    ///
    /// assert_eq!(diff.len(), 1);
    /// assert_eq!(diff[0].field_name, "y");
    /// assert_eq!(diff[0].origin_value, Value::I32(2));
    /// assert_eq!(diff[0].target_value, Value::I32(3));
    /// ```
    #[inline]
    pub fn compare(&self, origin: &dyn Bean, target: &dyn Bean) -> Result<Vec<Difference>, BeanError> {
        self.compare_with(origin, target, FieldFilter::all())
    }

    /// Compares the fields declared on the type itself.
    #[inline]
    pub fn compare_ignore_superclass(
        &self,
        origin: &dyn Bean,
        target: &dyn Bean,
    ) -> Result<Vec<Difference>, BeanError> {
        self.compare_with(origin, target, FieldFilter::all().ignore_superclass())
    }

    /// Compares the fields listed in `properties` when `include` is set, or
    /// every other field otherwise.
    #[inline]
    pub fn compare_selected(
        &self,
        origin: &dyn Bean,
        target: &dyn Bean,
        include: bool,
        properties: &[&str],
    ) -> Result<Vec<Difference>, BeanError> {
        self.compare_with(origin, target, selection(include, properties))
    }

    /// [`compare_selected`](Self::compare_selected) restricted to the type
    /// itself.
    #[inline]
    pub fn compare_selected_ignore_superclass(
        &self,
        origin: &dyn Bean,
        target: &dyn Bean,
        include: bool,
        properties: &[&str],
    ) -> Result<Vec<Difference>, BeanError> {
        self.compare_with(origin, target, selection(include, properties).ignore_superclass())
    }

    /// See [`is_different_with`](Self::is_different_with).
    #[inline]
    pub fn is_different(&self, origin: &dyn Bean, target: Option<&dyn Bean>) -> Result<bool, BeanError> {
        self.is_different_with(origin, target, FieldFilter::all())
    }

    #[inline]
    pub fn is_different_ignore_superclass(
        &self,
        origin: &dyn Bean,
        target: Option<&dyn Bean>,
    ) -> Result<bool, BeanError> {
        self.is_different_with(origin, target, FieldFilter::all().ignore_superclass())
    }

    #[inline]
    pub fn is_different_selected(
        &self,
        origin: &dyn Bean,
        target: Option<&dyn Bean>,
        include: bool,
        properties: &[&str],
    ) -> Result<bool, BeanError> {
        self.is_different_with(origin, target, selection(include, properties))
    }

    #[inline]
    pub fn is_different_selected_ignore_superclass(
        &self,
        origin: &dyn Bean,
        target: Option<&dyn Bean>,
        include: bool,
        properties: &[&str],
    ) -> Result<bool, BeanError> {
        self.is_different_with(origin, target, selection(include, properties).ignore_superclass())
    }
}

#[inline]
fn selection<'a>(include: bool, properties: &'a [&'a str]) -> FieldFilter<'a> {
    if include {
        FieldFilter::include(properties)
    } else {
        FieldFilter::exclude(properties)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::fixtures::{BaseEntity, Demo, Dog, Faulty, Measured, Price, Versioned};
    use crate::registry::FieldFilter;
    use crate::{BeanContext, BeanError, Value};

    #[test]
    fn demo_scenario() {
        let ctx = BeanContext::new();
        let a = Demo::sample(1, "zs", 1);
        let b = Demo::sample(2, "ls", 2);

        let diff = ctx.compare(&a, &b).unwrap();
        let names: Vec<_> = diff.iter().map(|d| d.field_name).collect();
        assert_eq!(names, ["name", "studentId", "id"]);
        assert_eq!(diff[0].origin_value, Value::from("zs"));
        assert_eq!(diff[0].target_value, Value::from("ls"));
        assert_eq!(diff[2].origin_value, Value::I64(1));
        assert!(diff[2].field_type.is::<Option<i64>>());

        let leaf = ctx.compare_ignore_superclass(&a, &b).unwrap();
        assert_eq!(leaf.len(), 2);

        let selected = ctx.compare_selected(&a, &b, true, &["id", "code"]).unwrap();
        assert_eq!(selected.len(), 1);
        let excluded = ctx.compare_selected(&a, &b, false, &["name"]).unwrap();
        assert_eq!(excluded.len(), 2);
        let nothing = ctx
            .compare_selected_ignore_superclass(&a, &b, true, &["id"])
            .unwrap();
        assert!(nothing.is_empty());
    }

    #[test]
    fn is_different_agrees_with_compare() {
        let ctx = BeanContext::new();
        let a = Demo::sample(1, "zs", 1);
        let pairs = [
            (Demo::sample(1, "zs", 1), FieldFilter::all()),
            (Demo::sample(2, "zs", 1), FieldFilter::all()),
            (Demo::sample(2, "zs", 1), FieldFilter::all().ignore_superclass()),
            (Demo::sample(1, "ls", 1), FieldFilter::exclude(&["name"])),
            (Demo::sample(1, "ls", 9), FieldFilter::include(&["studentId"])),
        ];
        for (b, filter) in &pairs {
            let differs = ctx.is_different_with(&a, Some(b), *filter).unwrap();
            let diff = ctx.compare_with(&a, b, *filter).unwrap();
            assert_eq!(differs, !diff.is_empty(), "{filter:?}");
        }
    }

    #[test]
    fn null_or_foreign_target_is_different() {
        let ctx = BeanContext::new();
        let a = Demo::default();

        assert!(ctx.is_different(&a, None).unwrap());
        assert!(ctx.is_different(&a, Some(&BaseEntity::default())).unwrap());
        assert!(!ctx.is_different(&a, Some(&Demo::default())).unwrap());
        assert!(matches!(
            ctx.compare(&a, &BaseEntity::default()),
            Err(BeanError::MismatchedTypes { .. })
        ));
    }

    #[test]
    fn decimals_compare_by_value() {
        let ctx = BeanContext::new();
        let one = Price::new(Decimal::new(1, 0), Some(Decimal::new(1, 0)));
        let one_00 = Price::new(Decimal::new(100, 2), Some(Decimal::new(100, 2)));
        let two = Price::new(Decimal::new(20, 1), None);

        assert!(ctx.compare(&one, &one_00).unwrap().is_empty());
        assert!(!ctx.is_different(&one, Some(&one_00)).unwrap());

        let names: Vec<_> = ctx
            .compare(&one, &two)
            .unwrap()
            .iter()
            .map(|d| d.field_name)
            .collect();
        assert_eq!(names, ["amount", "discount"]);
    }

    #[test]
    fn shadowed_field_compared_once() {
        let ctx = BeanContext::new();
        let mut a = Dog::default();
        let b = Dog::default();
        a.animal.name = Some("hidden".into());

        // the ancestor's `name` is shadowed by the dog's own
        assert!(!ctx.is_different(&a, Some(&b)).unwrap());
        a.name = Some("rex".into());
        assert_eq!(ctx.compare(&a, &b).unwrap().len(), 1);
    }

    #[test]
    fn renamed_version_marker_not_compared() {
        let ctx = BeanContext::new();
        let a = Versioned {
            display_name: Some("x".into()),
            serial_version_uid: 1,
        };
        let b = Versioned {
            display_name: Some("x".into()),
            serial_version_uid: 2,
        };

        assert!(ctx.compare(&a, &b).unwrap().is_empty());
        assert!(!ctx.is_different(&a, Some(&b)).unwrap());
    }

    #[test]
    fn nan_equals_itself() {
        let ctx = BeanContext::new();
        let a = Measured { ratio: f64::NAN };

        assert!(ctx.compare(&a, &a.clone()).unwrap().is_empty());
        let signed = ctx
            .compare(&Measured { ratio: 0.0 }, &Measured { ratio: -0.0 })
            .unwrap();
        assert_eq!(signed.len(), 1);
    }

    #[test]
    fn read_failure_aborts() {
        let ctx = BeanContext::new();
        let a = Faulty::default();
        let err = ctx.compare(&a, &Faulty::default()).unwrap_err();
        assert!(matches!(err, BeanError::Read { property: "broken", .. }));
        assert!(ctx.is_different(&a, Some(&Faulty::default())).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_difference() {
        let ctx = BeanContext::new();
        let diff = ctx
            .compare(&Demo::sample(1, "zs", 1), &Demo::sample(1, "ls", 1))
            .unwrap();

        let json = serde_json::to_value(&diff).unwrap();
        assert_eq!(json[0]["fieldName"], "name");
        assert_eq!(json[0]["fieldType"], diff[0].field_type.name());
        assert_eq!(json[0]["originValue"], "zs");
        assert_eq!(json[0]["targetValue"], "ls");
        assert!(diff[0].field_type.is::<Option<String>>());
    }
}
