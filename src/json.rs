/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

//! The legacy JSON encoding.
//!
//! Some older endpoints accept a JSON rendition of EWS values, shaped like the
//! XML with nested objects and a `__type` discriminator naming the EWS type.

use serde_json::{Map, Value};

/// The key holding the EWS type name of a JSON object.
pub const TYPE_KEY: &str = "__type";

/// A value with a legacy JSON representation.
pub trait ToJson {
    fn to_json(&self) -> Value;
}

/// Starts a JSON object carrying the given EWS type name.
pub fn typed_object(type_name: &str) -> Map<String, Value> {
    let mut object = Map::new();
    object.insert(
        TYPE_KEY.to_string(),
        Value::String(format!("{type_name}:#Exchange")),
    );

    object
}

/// Inserts `value` under `key` when it is present.
pub(crate) fn insert_optional(object: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        object.insert(key.to_string(), Value::String(value.to_string()));
    }
}

impl<T> ToJson for [T]
where
    T: ToJson,
{
    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(ToJson::to_json).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_object_carries_discriminator() {
        let mut object = typed_object("ItemId");
        insert_optional(&mut object, "Id", Some("AAA="));
        insert_optional(&mut object, "ChangeKey", None);

        assert_eq!(
            Value::Object(object),
            serde_json::json!({ "__type": "ItemId:#Exchange", "Id": "AAA=" })
        );
    }
}
