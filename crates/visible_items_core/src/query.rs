use crate::item::Item;

/// Equality predicate on a boolean attribute, the only filter the item store
/// is asked to evaluate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEquals {
    attribute: String,
    value: bool,
}

impl AttributeEquals {
    pub fn new(attribute: impl Into<String>, value: bool) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// Evaluates the predicate locally. Items lacking the attribute, or holding
    /// a non-boolean value, never match.
    pub fn matches(&self, item: &Item) -> bool {
        item.get(&self.attribute)
            .and_then(serde_json::Value::as_bool)
            .is_some_and(|value| value == self.value)
    }
}
