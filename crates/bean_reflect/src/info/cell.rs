use std::sync::OnceLock;

use crate::info::BeanInfo;

/// Container for the static [`BeanInfo`] of one type.
///
/// Used to implement [`Typed`](crate::Typed): the table is built on first
/// access and lives for the rest of the program. Internally, there is an
/// [`OnceLock`], almost no additional expenses.
///
/// Only for non-generic types, a `static` inside a generic function is
/// shared by every instantiation.
pub struct BeanInfoCell(OnceLock<BeanInfo>);

impl BeanInfoCell {
    /// Create a empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the table, building it with `f` on first access.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> BeanInfo) -> &BeanInfo {
        self.0.get_or_init(f)
    }
}
