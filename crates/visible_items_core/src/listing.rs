use serde::Serialize;

use crate::item::{Item, VISIBLE_ATTRIBUTE};
use crate::query::AttributeEquals;

/// Body returned for a listing: `{"message": [item, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub message: Vec<Item>,
}

impl ResponseEnvelope {
    /// Wraps items exactly as the store returned them, dropping the
    /// visibility flag from each. Store order is kept.
    pub fn from_store_items(items: Vec<Item>) -> Self {
        let message = items
            .into_iter()
            .map(|mut item| {
                item.strip_visibility();
                item
            })
            .collect();
        Self { message }
    }
}

pub fn visible_items_query() -> AttributeEquals {
    AttributeEquals::new(VISIBLE_ATTRIBUTE, true)
}
