use serde::Serialize;
use serde_json::{Map, Value};

/// Attribute that gates whether an item may be listed.
pub const VISIBLE_ATTRIBUTE: &str = "visible";

/// A schemaless record read from the item store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Builds an item from a JSON object, returning `None` for any other value.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Removes the visibility flag, returning its previous value.
    pub fn strip_visibility(&mut self) -> Option<Value> {
        self.0.remove(VISIBLE_ATTRIBUTE)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strip_visibility_leaves_other_fields_untouched() {
        let mut item = Item::from_value(json!({
            "id": "a-1",
            "visible": true,
            "tags": ["x", "y"],
            "meta": {"visible": false}
        }))
        .expect("object");

        assert_eq!(item.strip_visibility(), Some(Value::Bool(true)));
        assert_eq!(
            serde_json::to_value(&item).expect("item should serialize"),
            json!({"id": "a-1", "tags": ["x", "y"], "meta": {"visible": false}})
        );
        assert_eq!(item.strip_visibility(), None);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(Item::from_value(json!([1, 2])).is_none());
        assert!(Item::from_value(Value::Null).is_none());
    }
}
