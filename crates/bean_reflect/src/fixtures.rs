//! Bean types shared by the operation tests.

use rust_decimal::Decimal;

use crate::__macro_exports::downcast_ref;
use crate::derive::Bean;
use crate::info::{BeanInfo, BeanInfoCell, FieldInfo, PropertyInfo};
use crate::{AccessError, Typed, Value};

#[derive(Bean, Debug, Default, Clone, PartialEq)]
#[bean(default)]
pub(crate) struct BaseEntity {
    pub id: Option<i64>,
}

#[derive(Bean, Debug, Default, Clone, PartialEq)]
#[bean(default, rename_all = "camelCase")]
pub(crate) struct Demo {
    #[bean(parent)]
    pub base: BaseEntity,
    pub code: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub student_id: Option<i32>,
}

impl Demo {
    pub fn sample(id: i64, name: &str, student_id: i32) -> Self {
        Self {
            base: BaseEntity { id: Some(id) },
            code: Some("a".into()),
            name: Some(name.into()),
            age: Some(18),
            student_id: Some(student_id),
        }
    }
}

#[derive(Bean, Debug, Default)]
#[bean(default)]
pub(crate) struct Snapshot {
    pub name: Option<String>,
    pub age: i32,
}

#[derive(Bean, Debug, Default)]
#[bean(default)]
pub(crate) struct Animal {
    pub name: Option<String>,
    pub legs: Option<u8>,
}

#[derive(Bean, Debug, Default)]
#[bean(default)]
pub(crate) struct Dog {
    #[bean(parent)]
    pub animal: Animal,
    pub name: Option<String>,
    #[bean(skip)]
    pub serial_version_uid: i64,
}

#[derive(Bean, Debug, Default)]
#[bean(default, rename_all = "camelCase")]
pub(crate) struct Versioned {
    pub display_name: Option<String>,
    #[bean(skip)]
    pub serial_version_uid: i64,
}

#[derive(Bean, Debug, Default, Clone)]
#[bean(default)]
pub(crate) struct Measured {
    pub ratio: f64,
}

#[derive(Bean, Debug, Default)]
#[bean(default, auto_register)]
pub(crate) struct Price {
    pub amount: Decimal,
    pub discount: Option<Decimal>,
}

impl Price {
    pub fn new(amount: Decimal, discount: Option<Decimal>) -> Self {
        Self { amount, discount }
    }
}

/// Hand-built bean whose `broken` accessors always fail and whose `label`
/// has no setter. No constructor is registered.
#[derive(Debug, Default)]
pub(crate) struct Faulty;

impl crate::Bean for Faulty {
    fn reflect_bean_info(&self) -> &'static BeanInfo {
        Self::bean_info()
    }
}

fn fail_read(_: &dyn crate::Bean) -> Result<Value, AccessError> {
    Err(AccessError::Failed {
        property: "broken",
        reason: "getter failed".into(),
    })
}

fn fail_write(_: &mut dyn crate::Bean, _: Value) -> Result<(), AccessError> {
    Err(AccessError::Failed {
        property: "broken",
        reason: "setter failed".into(),
    })
}

fn read_label(bean: &dyn crate::Bean) -> Result<Value, AccessError> {
    downcast_ref::<Faulty>(bean)?;
    Ok(Value::from("fixed"))
}

impl Typed for Faulty {
    fn bean_info() -> &'static BeanInfo {
        static CELL: BeanInfoCell = BeanInfoCell::new();
        CELL.get_or_init(|| {
            BeanInfo::builder::<Faulty>()
                .field(FieldInfo::new::<String>("broken", fail_read))
                .field(FieldInfo::new::<String>("label", read_label))
                .property(
                    PropertyInfo::new::<String>("broken")
                        .with_getter(fail_read)
                        .with_setter(fail_write),
                )
                .property(PropertyInfo::new::<String>("label").with_getter(read_label))
                .build()
        })
    }
}
