use serde::Deserialize;

use stockroom_core::Entity;
use stockroom_inventory::{InventoryGroup, InventoryItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
}

// Item creation deserializes straight into `stockroom_inventory::NewItem`;
// updates arrive as untyped JSON and go through the validator.

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn group_to_json(group: InventoryGroup) -> serde_json::Value {
    serde_json::json!({
        "id": group.id,
        "name": group.name,
    })
}

pub fn item_to_json(item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id(),
        "inventory_group_id": item.inventory_group_id(),
        "name": item.name(),
        "sku": item.sku(),
        "stock": item.stock(),
        "price": item.price(),
        "default_cogs": item.default_cogs(),
        "platform_metadata": item.platform_metadata(),
        "image": item.image(),
        "created_at": item.created_at().to_rfc3339(),
        "updated_at": item.updated_at().to_rfc3339(),
    })
}
