use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, InventoryGroupId, ItemId};

use crate::update::ItemUpdateRequest;

/// A logical grouping that items belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryGroup {
    pub id: InventoryGroupId,
    pub name: String,
}

/// A sellable unit tracked in inventory.
///
/// Timestamps are owned by the storage layer: `created_at` is set once on
/// insert and `updated_at` on every applied update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    id: ItemId,
    inventory_group_id: InventoryGroupId,
    name: String,
    sku: Option<String>,
    stock: i64,
    price: f64,
    default_cogs: f64,
    /// Per-sales-platform attributes; shape is up to the platform integration.
    platform_metadata: serde_json::Value,
    image: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for creating an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub inventory_group_id: InventoryGroupId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock: i64,
    pub price: f64,
    #[serde(default)]
    pub default_cogs: f64,
    #[serde(default)]
    pub platform_metadata: serde_json::Value,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewItem {
    /// Check creation rules. Group existence is checked by the repository.
    pub fn check(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }
        if self.price.is_nan() || self.price < 0.0 {
            return Err(DomainError::validation("price must be >= 0"));
        }
        if self.default_cogs.is_nan() || self.default_cogs < 0.0 {
            return Err(DomainError::validation("default_cogs must be >= 0"));
        }
        Ok(())
    }
}

impl InventoryItem {
    /// Build a stored item from checked creation input.
    pub fn create(id: ItemId, new: NewItem, at: DateTime<Utc>) -> DomainResult<Self> {
        new.check()?;
        Ok(Self {
            id,
            inventory_group_id: new.inventory_group_id,
            name: new.name,
            sku: new.sku.filter(|s| !s.is_empty()),
            stock: new.stock,
            price: new.price,
            default_cogs: new.default_cogs,
            platform_metadata: new.platform_metadata,
            image: new.image,
            created_at: at,
            updated_at: at,
        })
    }

    pub fn inventory_group_id(&self) -> InventoryGroupId {
        self.inventory_group_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn default_cogs(&self) -> f64 {
        self.default_cogs
    }

    pub fn platform_metadata(&self) -> &serde_json::Value {
        &self.platform_metadata
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrite the user-editable fields from a validated update.
    ///
    /// `group` is the already-resolved group reference. Identity, stock,
    /// metadata, image and `created_at` are left alone.
    pub fn apply_update(
        &mut self,
        update: &ItemUpdateRequest,
        group: InventoryGroupId,
        at: DateTime<Utc>,
    ) {
        self.name = update.name().to_string();
        self.sku = update.sku().map(str::to_string);
        self.price = update.listing_price();
        self.default_cogs = update.default_cogs();
        self.inventory_group_id = group;
        self.updated_at = at;
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn new_item() -> NewItem {
        NewItem {
            inventory_group_id: InventoryGroupId::new(1),
            name: "Widget".to_string(),
            sku: Some("WID-1".to_string()),
            stock: 5,
            price: 10.0,
            default_cogs: 4.0,
            platform_metadata: json!({"ebay": {"listing": "abc"}}),
            image: Some("/img/widget.png".to_string()),
        }
    }

    #[test]
    fn create_sets_both_timestamps() {
        let item = InventoryItem::create(ItemId::new(1), new_item(), t(0)).unwrap();
        assert_eq!(item.id(), ItemId::new(1));
        assert_eq!(item.created_at(), t(0));
        assert_eq!(item.updated_at(), t(0));
        assert_eq!(item.sku(), Some("WID-1"));
    }

    #[test]
    fn create_rejects_blank_name_and_negative_stock() {
        let mut blank = new_item();
        blank.name = "   ".to_string();
        assert!(matches!(
            InventoryItem::create(ItemId::new(1), blank, t(0)),
            Err(DomainError::Validation(_))
        ));

        let mut negative = new_item();
        negative.stock = -1;
        assert!(matches!(
            InventoryItem::create(ItemId::new(1), negative, t(0)),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn create_normalizes_empty_sku() {
        let mut new = new_item();
        new.sku = Some(String::new());
        let item = InventoryItem::create(ItemId::new(1), new, t(0)).unwrap();
        assert_eq!(item.sku(), None);
    }

    #[test]
    fn apply_update_touches_only_editable_fields() {
        let mut item = InventoryItem::create(ItemId::new(9), new_item(), t(0)).unwrap();
        let update = crate::update::validate(&json!({
            "name": "Gadget",
            "sku": "",
            "listing_price": 12.5,
            "default_cogs": 6,
            "inventory_group_id": "2",
        }))
        .unwrap();

        item.apply_update(&update, InventoryGroupId::new(2), t(60));

        assert_eq!(item.id(), ItemId::new(9));
        assert_eq!(item.name(), "Gadget");
        assert_eq!(item.sku(), None);
        assert_eq!(item.price(), 12.5);
        assert_eq!(item.default_cogs(), 6.0);
        assert_eq!(item.inventory_group_id(), InventoryGroupId::new(2));
        assert_eq!(item.stock(), 5);
        assert_eq!(item.image(), Some("/img/widget.png"));
        assert_eq!(item.platform_metadata(), &json!({"ebay": {"listing": "abc"}}));
        assert_eq!(item.created_at(), t(0));
        assert_eq!(item.updated_at(), t(60));
    }
}
