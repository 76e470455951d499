use core::fmt;

use crate::info::{BeanInfo, Type};
use crate::{Bean, Typed};

// -----------------------------------------------------------------------------
// ParentInfo

/// The link from a bean type to the type it extends.
///
/// Inheritance is modelled by composition: the child holds its parent in a
/// field marked `#[bean(parent)]`, and the two upcast functions project a
/// child onto that field.
#[derive(Clone, Copy)]
pub struct ParentInfo {
    info: fn() -> &'static BeanInfo,
    upcast: fn(&dyn Bean) -> Option<&dyn Bean>,
    upcast_mut: fn(&mut dyn Bean) -> Option<&mut dyn Bean>,
}

impl ParentInfo {
    /// Creates a link to the parent type `P`.
    ///
    /// Both functions must return `None` when the bean passed in is not of
    /// the child type.
    #[inline]
    pub fn new<P: Typed>(
        upcast: fn(&dyn Bean) -> Option<&dyn Bean>,
        upcast_mut: fn(&mut dyn Bean) -> Option<&mut dyn Bean>,
    ) -> Self {
        Self {
            info: P::bean_info,
            upcast,
            upcast_mut,
        }
    }

    /// Returns the parent's [`BeanInfo`].
    #[inline]
    pub fn info(&self) -> &'static BeanInfo {
        (self.info)()
    }

    /// Returns the parent type.
    #[inline]
    pub fn ty(&self) -> Type {
        self.info().ty()
    }

    /// Projects a child bean onto its parent part.
    #[inline]
    pub fn upcast<'a>(&self, bean: &'a dyn Bean) -> Option<&'a dyn Bean> {
        (self.upcast)(bean)
    }

    /// Projects a child bean onto its parent part, mutably.
    #[inline]
    pub fn upcast_mut<'a>(&self, bean: &'a mut dyn Bean) -> Option<&'a mut dyn Bean> {
        (self.upcast_mut)(bean)
    }
}

impl fmt::Debug for ParentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ParentInfo").field(&self.ty()).finish()
    }
}
