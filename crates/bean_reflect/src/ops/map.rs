//! Bean to map conversion.
//!
//! Every conversion funnels through [`BeanContext::to_map_into`], whose key
//! editor decides the output key of each property. Returning `None` or an
//! empty string from the editor drops the property, which is how allow-lists
//! work. The [`key_editor`] module has the common editors.

use crate::value::ValueMap;
use crate::{Bean, BeanContext, BeanError, Value};

/// Ready-made key editors for [`BeanContext::to_map_with`].
pub mod key_editor {
    use bean_utils::case::to_underline_case;

    /// Keeps the property name.
    #[inline]
    pub fn identity(name: &str) -> Option<String> {
        Some(name.to_owned())
    }

    /// Converts the property name to lower underscore case.
    #[inline]
    pub fn underline_case(name: &str) -> Option<String> {
        Some(to_underline_case(name))
    }

    /// Keeps only the listed properties.
    pub fn allow<'a>(fields: &'a [&'a str]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name: &str| fields.iter().any(|f| *f == name).then(|| name.to_owned())
    }

    /// Prepends `prefix` to every property name.
    pub fn prefixed(prefix: &str) -> impl Fn(&str) -> Option<String> + '_ {
        move |name: &str| Some(format!("{prefix}{name}"))
    }
}

impl BeanContext {
    /// Inserts the readable properties of `bean` into `target`.
    ///
    /// Properties are visited in descriptor order and appended in that
    /// order. A getter failure is logged and treated as [`Value::Null`].
    /// Null values are skipped when `ignore_null` is set.
    pub fn to_map_into<F>(&self, bean: &dyn Bean, target: &mut ValueMap, ignore_null: bool, key_editor: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let descriptor = self.descriptor(bean.reflect_bean_info());
        for property in &*descriptor {
            if !property.is_readable() {
                continue;
            }
            let value = property.read(bean).unwrap_or_else(|err| {
                log::warn!("reading `{}.{}` as null: {err}", descriptor.ty(), property.name());
                Value::Null
            });
            if ignore_null && value.is_null() {
                continue;
            }
            match key_editor(property.name()) {
                Some(key) if !key.is_empty() => {
                    target.insert(key, value);
                }
                _ => {}
            }
        }
    }

    /// Converts `bean` into a new map. See [`to_map_into`](Self::to_map_into).
    pub fn to_map_with<F>(&self, bean: &dyn Bean, ignore_null: bool, key_editor: F) -> ValueMap
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut map = ValueMap::new();
        self.to_map_into(bean, &mut map, ignore_null, key_editor);
        map
    }

    /// Every readable property under its own name, nulls included.
    #[inline]
    pub fn to_map(&self, bean: &dyn Bean) -> ValueMap {
        self.to_map_with(bean, false, key_editor::identity)
    }

    /// Optionally converts keys to lower underscore case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_reflect::{BeanContext, Value, derive::Bean};
    ///
    /// #[derive(Bean)]
    /// #[bean(rename_all = "camelCase")]
    /// struct Student {
    ///     age: Option<i32>,
    ///     student_id: Option<i32>,
    ///     name: Option<String>,
    /// }
    ///
    /// let student = Student { age: Some(18), student_id: Some(13231), name: None };
    /// let map = BeanContext::new().to_map_underline(&student, true, true);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map["age"], Value::I32(18));
    /// assert_eq!(map["student_id"], Value::I32(13231));
    /// assert!(!map.contains_key("name"));
    /// ```
    pub fn to_map_underline(&self, bean: &dyn Bean, underline_case: bool, ignore_null: bool) -> ValueMap {
        if underline_case {
            self.to_map_with(bean, ignore_null, key_editor::underline_case)
        } else {
            self.to_map_with(bean, ignore_null, key_editor::identity)
        }
    }

    /// Only the listed properties.
    #[inline]
    pub fn to_map_selected(&self, bean: &dyn Bean, fields: &[&str], ignore_null: bool) -> ValueMap {
        self.to_map_with(bean, ignore_null, key_editor::allow(fields))
    }

    /// Every property with `prefix` prepended to its key.
    #[inline]
    pub fn to_map_prefixed(&self, bean: &dyn Bean, prefix: &str, ignore_null: bool) -> ValueMap {
        self.to_map_with(bean, ignore_null, key_editor::prefixed(prefix))
    }

    /// Applies [`to_map_with`](Self::to_map_with) to each bean.
    pub fn to_map_list<'a, I, F>(&self, beans: I, ignore_null: bool, key_editor: F) -> Vec<ValueMap>
    where
        I: IntoIterator<Item = &'a dyn Bean>,
        F: Fn(&str) -> Option<String>,
    {
        beans
            .into_iter()
            .map(|bean| self.to_map_with(bean, ignore_null, &key_editor))
            .collect()
    }

    /// Writes each entry of `map` through [`set_property`](Self::set_property).
    ///
    /// Keys naming no writable property are skipped. Returns how many
    /// entries were applied.
    ///
    /// # Errors
    ///
    /// The first error [`set_property`](Self::set_property) returns.
    pub fn fill_from_map(&self, bean: &mut dyn Bean, map: &ValueMap) -> Result<usize, BeanError> {
        let descriptor = self.descriptor(bean.reflect_bean_info());
        let mut applied = 0;
        for (key, value) in map {
            if !descriptor.get(key).is_some_and(|p| p.is_writable()) {
                continue;
            }
            self.set_property(bean, key, value.clone())?;
            applied += 1;
        }
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::key_editor;
    use crate::fixtures::{Demo, Faulty};
    use crate::{Bean, BeanContext, Value};

    #[test]
    fn keeps_descriptor_order() {
        let ctx = BeanContext::new();
        let demo = Demo::sample(1, "zs", 2);

        let keys: Vec<_> = ctx.to_map(&demo).into_keys().collect();
        assert_eq!(keys, ["code", "name", "age", "studentId", "id"]);
    }

    #[test]
    fn editors_select_and_prefix() {
        let ctx = BeanContext::new();
        let mut demo = Demo::sample(1, "zs", 2);
        demo.name = None;

        let selected = ctx.to_map_selected(&demo, &["name", "age"], false);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected["name"], Value::Null);

        let prefixed = ctx.to_map_prefixed(&demo, "demo.", true);
        assert_eq!(prefixed.get("demo.code"), Some(&Value::from("a")));
        assert!(!prefixed.contains_key("demo.name"));

        let none = ctx.to_map_with(&demo, false, |_| Some(String::new()));
        assert!(none.is_empty());

        let a = Demo::sample(1, "a", 1);
        let b = Demo::sample(2, "b", 2);
        let beans: [&dyn Bean; 2] = [&a, &b];
        let maps = ctx.to_map_list(beans, true, key_editor::allow(&["id"]));
        assert_eq!(maps[1]["id"], Value::I64(2));
    }

    #[test]
    fn round_trip_through_set_property() {
        let ctx = BeanContext::new();
        let origin = Demo::sample(4, "ls", 8);

        let mut fresh = Demo::default();
        for (key, value) in ctx.to_map(&origin) {
            ctx.set_property(&mut fresh, &key, value).unwrap();
        }
        assert_eq!(fresh, origin);

        let mut again = Demo::default();
        assert_eq!(ctx.fill_from_map(&mut again, &ctx.to_map(&origin)).unwrap(), 5);
        assert_eq!(again, origin);
    }

    #[test]
    fn failing_getter_reads_as_null() {
        let ctx = BeanContext::new();
        let map = ctx.to_map(&Faulty::default());

        assert_eq!(map["broken"], Value::Null);
        assert_eq!(map["label"], Value::from("fixed"));
        assert!(ctx.to_map_underline(&Faulty::default(), false, true).get("broken").is_none());
    }
}
