use crate::info::{BeanInfo, FieldInfo};
use crate::registry::PropertyDescriptor;
use crate::{Bean, BeanError};

// -----------------------------------------------------------------------------
// TypeIntrospector

/// Answers structural questions about a bean type from its [`BeanInfo`].
///
/// Stateless, every call walks the static tables again. The caches of a
/// [`BeanContext`](crate::BeanContext) sit on top of it.
///
/// # Examples
///
/// ```
/// use bean_reflect::{TypeIntrospector, Typed, derive::Bean};
///
/// #[derive(Bean, Default)]
/// struct Base {
///     id: i64,
/// }
///
/// #[derive(Bean, Default)]
/// #[bean(default)]
/// struct Child {
///     #[bean(parent)]
///     base: Base,
///     name: String,
/// }
///
/// let names: Vec<_> = TypeIntrospector::properties(Child::bean_info())
///     .iter()
///     .map(|p| p.name())
///     .collect();
/// assert_eq!(names, ["name", "id"]);
///
/// let parent = TypeIntrospector::parent_type(Child::bean_info()).unwrap();
/// assert_eq!(parent.ty().name(), "Base");
/// assert!(TypeIntrospector::instantiate(parent).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeIntrospector;

impl TypeIntrospector {
    /// Every property reachable on `info`, leaf level first.
    ///
    /// Within a level the declaration order is kept. A property whose name
    /// was already produced by a more derived level is hidden.
    pub fn properties(info: &'static BeanInfo) -> Vec<PropertyDescriptor> {
        let mut out: Vec<PropertyDescriptor> = Vec::new();
        for (depth, level) in info.lineage().enumerate() {
            for property in level.properties() {
                if out.iter().any(|seen| seen.name() == property.name()) {
                    continue;
                }
                out.push(PropertyDescriptor::new(info, level, property, depth));
            }
        }
        out
    }

    /// Raw fields declared directly on `info`, without inherited ones.
    #[inline]
    pub fn declared_fields(info: &'static BeanInfo) -> &'static [FieldInfo] {
        info.fields()
    }

    /// The type `info` extends, if any.
    #[inline]
    pub fn parent_type(info: &'static BeanInfo) -> Option<&'static BeanInfo> {
        info.parent().map(|parent| parent.info())
    }

    /// `info` followed by every ancestor.
    #[inline]
    pub fn lineage(info: &'static BeanInfo) -> impl Iterator<Item = &'static BeanInfo> {
        info.lineage()
    }

    /// Creates an instance through the no-argument constructor.
    ///
    /// Fails with [`BeanError::Instantiation`] when the type registered none.
    pub fn instantiate(info: &'static BeanInfo) -> Result<Box<dyn Bean>, BeanError> {
        info.construct().ok_or(BeanError::Instantiation {
            type_path: info.ty().path(),
            reason: "no no-argument constructor is registered",
        })
    }
}
