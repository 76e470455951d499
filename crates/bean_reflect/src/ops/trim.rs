//! Whitespace trimming of text properties.

use crate::registry::{PropertyDescriptor, is_text};
use crate::{Bean, BeanContext, TypeIntrospector, Value};

/// Trims one property in place. Returns `true` when a value was written.
fn trim_one(property: &PropertyDescriptor, bean: &mut dyn Bean) -> bool {
    let value = match property.read(bean) {
        Ok(Value::String(text)) => text,
        Ok(_) => return false,
        Err(err) => {
            log::warn!("trim skipped `{}`: {err}", property.name());
            return false;
        }
    };
    match property.write(bean, Value::String(value.trim().to_owned())) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("trim skipped `{}`: {err}", property.name());
            false
        }
    }
}

impl BeanContext {
    /// Trims leading and trailing whitespace of every text property of
    /// `bean` not listed in `excludes`.
    ///
    /// Text properties are `String` and `Option<String>` properties with a
    /// getter and a setter. Their list is cached per type. Null values are
    /// left alone, failures are logged and skipped.
    ///
    /// Returns the number of properties written.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_reflect::{BeanContext, derive::Bean};
    ///
    /// #[derive(Bean)]
    /// struct Query {
    ///     keyword: String,
    ///     tag: Option<String>,
    ///     page: u32,
    /// }
    ///
    /// let ctx = BeanContext::new();
    /// let mut query = Query { keyword: "  rust ".into(), tag: Some(" x".into()), page: 1 };
    ///
    /// assert_eq!(ctx.trim_property(&mut query, &["tag"]), 1);
    /// assert_eq!(query.keyword, "rust");
    /// assert_eq!(query.tag.as_deref(), Some(" x"));
    /// ```
    pub fn trim_property(&self, bean: &mut dyn Bean, excludes: &[&str]) -> usize {
        let pairs = self
            .string_accessors()
            .get(self.descriptors(), bean.reflect_bean_info());
        pairs
            .iter()
            .filter(|pair| !excludes.contains(&pair.name()))
            .filter(|pair| trim_one(pair.property(), bean))
            .count()
    }
}

/// [`BeanContext::trim_property`] without any cache.
///
/// Reads the property list of `bean`'s type on every call.
pub fn trim_strings(bean: &mut dyn Bean, excludes: &[&str]) -> usize {
    TypeIntrospector::properties(bean.reflect_bean_info())
        .iter()
        .filter(|p| is_text(p.ty()) && p.is_readable() && p.is_writable())
        .filter(|p| !excludes.contains(&p.name()))
        .filter(|p| trim_one(p, bean))
        .count()
}

#[cfg(test)]
mod tests {
    use super::trim_strings;
    use crate::fixtures::{Demo, Faulty};
    use crate::BeanContext;

    #[test]
    fn trims_text_and_honours_excludes() {
        let ctx = BeanContext::new();
        let mut demo = Demo::sample(1, " zs ", 1);
        demo.code = Some(" a, b ".into());

        assert_eq!(ctx.trim_property(&mut demo, &[]), 2);
        assert_eq!(demo.code.as_deref(), Some("a, b"));
        assert_eq!(demo.name.as_deref(), Some("zs"));

        demo.code = Some(" a, b ".into());
        ctx.trim_property(&mut demo, &["code"]);
        assert_eq!(demo.code.as_deref(), Some(" a, b "));
        assert_eq!(ctx.string_accessors().len(), 1);
    }

    #[test]
    fn null_is_left_alone() {
        let ctx = BeanContext::new();
        let mut demo = Demo::default();
        assert_eq!(ctx.trim_property(&mut demo, &[]), 0);
        assert_eq!(demo.code, None);
    }

    #[test]
    fn uncached_path_matches() {
        let mut demo = Demo::sample(1, "zs\n", 1);
        demo.code = Some("\ta".into());

        assert_eq!(trim_strings(&mut demo, &["name"]), 1);
        assert_eq!(demo.code.as_deref(), Some("a"));
        assert_eq!(demo.name.as_deref(), Some("zs\n"));
    }

    #[test]
    fn failures_are_skipped() {
        let ctx = BeanContext::new();
        let mut faulty = Faulty::default();
        // `broken` fails both ways, `label` has no setter
        assert_eq!(ctx.trim_property(&mut faulty, &[]), 0);
        assert_eq!(trim_strings(&mut faulty, &[]), 0);
    }
}
