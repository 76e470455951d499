//! Property copying between beans.

use crate::info::BeanInfo;
use crate::{Bean, BeanContext, BeanError, TypeIntrospector, Typed};

impl BeanContext {
    /// Copies matching properties from `source` into `dest`.
    ///
    /// A property is copied when both types expose it under the same name
    /// with exactly the same declared type (`i32` and `Option<i32>` do not
    /// match), it is readable on `source`, writable on `dest`, and not listed
    /// in `excludes`. Failing reads and writes are logged and skipped.
    ///
    /// Returns the number of properties written.
    ///
    /// # Examples
    ///
    /// ```
    /// use bean_reflect::{BeanContext, derive::Bean};
    ///
    /// #[derive(Bean, Default)]
    /// struct UserForm {
    ///     name: String,
    ///     age: Option<u32>,
    ///     password: String,
    /// }
    ///
    /// #[derive(Bean, Default)]
    /// struct UserView {
    ///     name: String,
    ///     age: u32,
    ///     password: String,
    /// }
    ///
    /// let form = UserForm { name: "ann".into(), age: Some(30), password: "x".into() };
    /// let mut view = UserView::default();
    ///
    /// let copied = BeanContext::new().copy(&form, &mut view, &["password"]);
    /// assert_eq!(copied, 1);
    /// assert_eq!(view.name, "ann");
    /// assert_eq!(view.age, 0);
    /// assert!(view.password.is_empty());
    /// ```
    pub fn copy(&self, source: &dyn Bean, dest: &mut dyn Bean, excludes: &[&str]) -> usize {
        let from = self.descriptor(source.reflect_bean_info());
        let to = self.descriptor(dest.reflect_bean_info());

        let mut copied = 0;
        for target in &*to {
            if !target.is_writable() || excludes.contains(&target.name()) {
                continue;
            }
            let Some(origin) = from.get(target.name()) else {
                continue;
            };
            if !origin.is_readable() || origin.ty() != target.ty() {
                continue;
            }
            let value = match origin.read(source) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("copy skipped `{}.{}`: {err}", from.ty(), origin.name());
                    continue;
                }
            };
            match target.write(dest, value) {
                Ok(()) => copied += 1,
                Err(err) => log::warn!("copy skipped `{}.{}`: {err}", to.ty(), target.name()),
            }
        }
        copied
    }

    /// Creates a `T` with its no-argument constructor and copies `source`
    /// into it.
    ///
    /// # Errors
    ///
    /// [`BeanError::Instantiation`] when `T` registered no constructor.
    pub fn copy_new<T: Typed>(&self, source: &dyn Bean, excludes: &[&str]) -> Result<T, BeanError> {
        let bean = self.copy_new_dyn(source, T::bean_info(), excludes)?;
        bean.take::<T>().map_err(|_| BeanError::Instantiation {
            type_path: T::bean_info().ty().path(),
            reason: "the constructor returned another type",
        })
    }

    /// Type-erased form of [`copy_new`](Self::copy_new).
    pub fn copy_new_dyn(
        &self,
        source: &dyn Bean,
        info: &'static BeanInfo,
        excludes: &[&str],
    ) -> Result<Box<dyn Bean>, BeanError> {
        let mut bean = TypeIntrospector::instantiate(info)?;
        self.copy(source, &mut *bean, excludes);
        Ok(bean)
    }

    /// Applies [`copy_new`](Self::copy_new) to every element of `sources`.
    ///
    /// Stops at the first construction failure.
    pub fn copy_new_list<'a, T, I>(&self, sources: I, excludes: &[&str]) -> Result<Vec<T>, BeanError>
    where
        T: Typed,
        I: IntoIterator<Item = &'a dyn Bean>,
    {
        sources
            .into_iter()
            .map(|source| self.copy_new::<T>(source, excludes))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::{BaseEntity, Demo, Faulty, Snapshot};
    use crate::{Bean, BeanContext, BeanError};

    #[test]
    fn copies_inherited_and_honours_excludes() {
        let ctx = BeanContext::new();
        let source = Demo::sample(7, "zs", 3);

        let copy: Demo = ctx.copy_new(&source, &["code"]).unwrap();
        assert_eq!(copy.base.id, Some(7));
        assert_eq!(copy.name.as_deref(), Some("zs"));
        assert_eq!(copy.code, None);
        assert_eq!(copy.student_id, Some(3));
    }

    #[test]
    fn exact_types_only() {
        let ctx = BeanContext::new();
        let source = Demo::sample(7, "zs", 3);
        let mut snapshot = Snapshot::default();

        // `age` is `Option<i32>` on `Demo` and `i32` on `Snapshot`
        assert_eq!(ctx.copy(&source, &mut snapshot, &[]), 1);
        assert_eq!(snapshot.name.as_deref(), Some("zs"));
        assert_eq!(snapshot.age, 0);
    }

    #[test]
    fn missing_constructor_is_fatal() {
        let ctx = BeanContext::new();
        let err = ctx.copy_new::<Faulty>(&BaseEntity::default(), &[]);
        assert!(matches!(err, Err(BeanError::Instantiation { .. })));
    }

    #[test]
    fn copy_list() {
        let ctx = BeanContext::new();
        let a = Demo::sample(1, "a", 1);
        let b = Demo::sample(2, "b", 2);
        let sources: [&dyn Bean; 2] = [&a, &b];

        let copies: Vec<BaseEntity> = ctx.copy_new_list(sources, &[]).unwrap();
        let ids: Vec<_> = copies.iter().map(|c| c.id).collect();
        assert_eq!(ids, [Some(1), Some(2)]);
    }
}
