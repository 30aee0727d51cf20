use visible_items_core::error::StoreError;
use visible_items_core::item::Item;
use visible_items_core::query::AttributeEquals;

/// Read-only access to the backing table.
pub trait ItemStore {
    /// Returns every item matching `predicate`, in store order.
    fn scan_matching(&self, predicate: &AttributeEquals) -> Result<Vec<Item>, StoreError>;
}
