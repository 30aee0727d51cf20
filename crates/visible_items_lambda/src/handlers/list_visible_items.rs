use tracing::debug;
use visible_items_core::error::ListError;
use visible_items_core::listing::{visible_items_query, ResponseEnvelope};

use crate::adapters::item_store::ItemStore;

/// Fetches the visible items and strips their visibility flag.
///
/// A store failure is returned as-is; nothing is retried here.
pub fn list_visible_items(store: &dyn ItemStore) -> Result<ResponseEnvelope, ListError> {
    let query = visible_items_query();
    let items = store.scan_matching(&query)?;
    debug!(item_count = items.len(), "visible items fetched");
    Ok(ResponseEnvelope::from_store_items(items))
}
