use serde_core::{Serialize, Serializer};

use super::Value;

/// Null becomes `none`, decimals are written as strings to keep their scale.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Char(v) => serializer.serialize_char(*v),
            Value::I8(v) => serializer.serialize_i8(*v),
            Value::I16(v) => serializer.serialize_i16(*v),
            Value::I32(v) => serializer.serialize_i32(*v),
            Value::I64(v) => serializer.serialize_i64(*v),
            Value::U8(v) => serializer.serialize_u8(*v),
            Value::U16(v) => serializer.serialize_u16(*v),
            Value::U32(v) => serializer.serialize_u32(*v),
            Value::U64(v) => serializer.serialize_u64(*v),
            Value::F32(v) => serializer.serialize_f32(*v),
            Value::F64(v) => serializer.serialize_f64(*v),
            Value::Decimal(v) => serializer.collect_str(v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(v) => serializer.collect_seq(v),
            Value::Map(v) => serializer.collect_map(v),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Value;
    use crate::value::{Decimal, ValueMap};

    #[test]
    fn serializes_to_json() {
        let mut map = ValueMap::new();
        map.insert("b".into(), Value::Decimal(Decimal::new(150, 2)));
        map.insert("a".into(), Value::List(vec![Value::Null, Value::U8(3)]));

        let json = serde_json::to_value(Value::Map(map)).unwrap();
        assert_eq!(json, json!({ "b": "1.50", "a": [null, 3] }));
        assert_eq!(serde_json::to_string(&Value::from("x")).unwrap(), "\"x\"");
    }
}
