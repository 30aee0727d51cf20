pub mod http;
pub mod list_visible_items;
