//! Generic property access by name.

use crate::{Bean, BeanContext, BeanError, Value};

#[inline]
fn check_name(name: &str) -> Result<(), BeanError> {
    if name.trim().is_empty() {
        Err(BeanError::BlankPropertyName)
    } else {
        Ok(())
    }
}

impl BeanContext {
    /// Reads the property `name` of `bean`.
    ///
    /// Returns [`Value::Null`] when the property does not exist, has no
    /// getter, or its getter fails. Failures are logged and never returned.
    ///
    /// # Errors
    ///
    /// [`BeanError::BlankPropertyName`] when `name` is empty or whitespace.
    pub fn get_property(&self, bean: &dyn Bean, name: &str) -> Result<Value, BeanError> {
        check_name(name)?;
        let info = bean.reflect_bean_info();
        let Some(pair) = self.accessors().resolve(self.descriptors(), info, name) else {
            return Ok(Value::Null);
        };
        let property = pair.property();
        if !property.is_readable() {
            return Ok(Value::Null);
        }
        match property.read(bean) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::warn!("failed to read `{}.{name}`: {err}", info.ty());
                Ok(Value::Null)
            }
        }
    }

    /// Writes `value` into the property `name` of `bean`.
    ///
    /// A property that does not exist or has no setter is logged and left
    /// alone.
    ///
    /// # Errors
    ///
    /// - [`BeanError::BlankPropertyName`] when `name` is empty or whitespace.
    /// - [`BeanError::Write`] when the setter rejects the value.
    ///
    /// ```
    /// use bean_reflect::{BeanContext, BeanError, Value, derive::Bean};
    ///
    /// #[derive(Bean)]
    /// struct Counter {
    ///     hits: u8,
    /// }
    ///
    /// let ctx = BeanContext::new();
    /// let mut counter = Counter { hits: 0 };
    ///
    /// let err = ctx.set_property(&mut counter, "hits", Value::I32(1000));
    /// assert!(matches!(err, Err(BeanError::Write { property: "hits", .. })));
    /// assert_eq!(ctx.set_property(&mut counter, " ", Value::Null), Err(BeanError::BlankPropertyName));
    /// ```
    pub fn set_property(&self, bean: &mut dyn Bean, name: &str, value: Value) -> Result<(), BeanError> {
        check_name(name)?;
        let info = bean.reflect_bean_info();
        let Some(pair) = self.accessors().resolve(self.descriptors(), info, name) else {
            log::warn!("`{}` has no property `{name}`, value dropped", info.ty());
            return Ok(());
        };
        let property = pair.property();
        if !property.is_writable() {
            log::warn!("`{}.{name}` has no setter, value dropped", info.ty());
            return Ok(());
        }
        property.write(bean, value).map_err(|source| BeanError::Write {
            type_path: info.ty().path(),
            property: property.name(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{Demo, Faulty};
    use crate::{BeanContext, BeanError, Value};

    #[test]
    fn reads_own_and_inherited_properties() {
        let ctx = BeanContext::new();
        let demo = Demo::sample(1, "zs", 1);

        assert_eq!(ctx.get_property(&demo, "name").unwrap(), Value::from("zs"));
        assert_eq!(ctx.get_property(&demo, "id").unwrap(), Value::I64(1));
        assert_eq!(ctx.get_property(&demo, "nope").unwrap(), Value::Null);
        assert_eq!(ctx.get_property(&demo, ""), Err(BeanError::BlankPropertyName));
        assert_eq!(ctx.accessors().len(), 2);
    }

    #[test]
    fn writes_inherited_property() {
        let ctx = BeanContext::new();
        let mut demo = Demo::default();

        ctx.set_property(&mut demo, "id", Value::I32(9)).unwrap();
        ctx.set_property(&mut demo, "studentId", Value::I32(3)).unwrap();
        assert_eq!(demo.base.id, Some(9));
        assert_eq!(demo.student_id, Some(3));

        // unknown properties are ignored
        ctx.set_property(&mut demo, "nope", Value::I32(3)).unwrap();
    }

    #[test]
    fn read_failure_is_null_and_write_failure_propagates() {
        let ctx = BeanContext::new();
        let mut faulty = Faulty::default();

        assert_eq!(ctx.get_property(&faulty, "broken").unwrap(), Value::Null);
        assert!(matches!(
            ctx.set_property(&mut faulty, "broken", Value::from("x")),
            Err(BeanError::Write { property: "broken", .. })
        ));
        // read-only
        ctx.set_property(&mut faulty, "label", Value::from("x")).unwrap();
        assert_eq!(ctx.get_property(&faulty, "label").unwrap(), Value::from("fixed"));
    }
}
