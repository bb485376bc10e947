//! Inventory domain module.
//!
//! Item data model, the update contract for user-editable fields, and the
//! repository seam the HTTP layer persists through. Validation is pure; only
//! the repository holds state.

pub mod item;
pub mod repository;
pub mod update;

pub use item::{InventoryGroup, InventoryItem, NewItem};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use update::{ItemUpdateRequest, validate};
