use std::collections::HashMap;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use visible_items_core::error::StoreError;
use visible_items_core::item::Item;
use visible_items_core::query::AttributeEquals;

use crate::adapters::item_store::ItemStore;

const FILTER_EXPRESSION: &str = "#attr = :value";
const ATTRIBUTE_PLACEHOLDER: &str = "#attr";
const VALUE_PLACEHOLDER: &str = ":value";

/// Scans a DynamoDB table, following `LastEvaluatedKey` until the table is
/// exhausted so a filtered listing never stops at the first page.
#[derive(Debug, Clone)]
pub struct DynamoItemStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl DynamoItemStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            client,
        }
    }

    async fn scan_all(&self, predicate: &AttributeEquals) -> Result<Vec<Item>, StoreError> {
        let mut items = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        let mut pages = 0usize;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .filter_expression(FILTER_EXPRESSION)
                .expression_attribute_names(ATTRIBUTE_PLACEHOLDER, predicate.attribute())
                .expression_attribute_values(
                    VALUE_PLACEHOLDER,
                    AttributeValue::Bool(predicate.value()),
                )
                .set_exclusive_start_key(exclusive_start_key.take())
                .send()
                .await
                .map_err(|error| {
                    StoreError::new(format!(
                        "failed to scan table {}: {}",
                        self.table_name,
                        DisplayErrorContext(&error)
                    ))
                })?;
            pages += 1;

            items.extend(
                output
                    .items
                    .unwrap_or_default()
                    .into_iter()
                    .map(item_from_attributes),
            );

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => exclusive_start_key = Some(key),
                _ => break,
            }
        }

        debug!(
            table = %self.table_name,
            pages,
            item_count = items.len(),
            items = ?items,
            "scanned item table"
        );
        Ok(items)
    }
}

impl ItemStore for DynamoItemStore {
    fn scan_matching(&self, predicate: &AttributeEquals) -> Result<Vec<Item>, StoreError> {
        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(self.scan_all(predicate))
        })
    }
}

pub fn item_from_attributes(attributes: HashMap<String, AttributeValue>) -> Item {
    let fields: Map<String, Value> = attributes
        .into_iter()
        .map(|(name, value)| (name, attribute_to_json(value)))
        .collect();
    Item::new(fields)
}

/// Converts a DynamoDB attribute into plain JSON. Binary data becomes base64
/// text. Numbers are always returned as their stored decimal text, so a field
/// keeps one JSON type across items and no precision is lost.
pub fn attribute_to_json(value: AttributeValue) -> Value {
    match value {
        AttributeValue::S(text) => Value::String(text),
        AttributeValue::N(text) => Value::String(text),
        AttributeValue::Bool(flag) => Value::Bool(flag),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => {
            Value::Array(values.into_iter().map(attribute_to_json).collect())
        }
        AttributeValue::M(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| (name, attribute_to_json(value)))
                .collect(),
        ),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::B(blob) => Value::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::Bs(blobs) => Value::Array(
            blobs
                .into_iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        other => {
            warn!(attribute = ?other, "unsupported DynamoDB attribute type, emitting null");
            Value::Null
        }
    }
}
