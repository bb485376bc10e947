//! Update contract for the user-editable fields of an inventory item.
//!
//! Input arrives untyped (a parsed form or JSON body). [`validate`] checks
//! every field independently and either returns a normalized
//! [`ItemUpdateRequest`] or the full list of field failures.

use serde::Serialize;
use serde_json::Value;

use stockroom_core::{DomainResult, FieldError, InventoryGroupId, ValidationErrors, ValueObject};

/// Wire names of the update fields, in report order.
pub mod fields {
    pub const NAME: &str = "name";
    pub const SKU: &str = "sku";
    pub const LISTING_PRICE: &str = "listing_price";
    pub const DEFAULT_COGS: &str = "default_cogs";
    pub const INVENTORY_GROUP_ID: &str = "inventory_group_id";
}

const NAME_MIN_CHARS: usize = 2;

/// A validated, normalized change to an item's editable fields.
///
/// Only [`validate`] builds one, so every instance satisfies the field rules.
/// `sku` is `None` when the submission left it out or sent an empty string; it
/// is never `Some("")`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemUpdateRequest {
    name: String,
    sku: Option<String>,
    listing_price: f64,
    default_cogs: f64,
    inventory_group_id: String,
}

impl ValueObject for ItemUpdateRequest {}

impl ItemUpdateRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> Option<&str> {
        self.sku.as_deref()
    }

    pub fn listing_price(&self) -> f64 {
        self.listing_price
    }

    pub fn default_cogs(&self) -> f64 {
        self.default_cogs
    }

    pub fn inventory_group_id(&self) -> &str {
        &self.inventory_group_id
    }

    /// Group reference as a storage identifier.
    ///
    /// The validator only guarantees a non-empty string; whether it names a
    /// real group is for the storage layer to decide.
    pub fn group_id(&self) -> DomainResult<InventoryGroupId> {
        self.inventory_group_id.parse()
    }
}

impl TryFrom<&Value> for ItemUpdateRequest {
    type Error = ValidationErrors;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        validate(value)
    }
}

/// Validate an untyped update payload.
///
/// Every field is checked; failures are collected in field order with at most
/// one entry per field. Unknown fields are ignored and a non-object input is
/// treated as an object with no fields.
pub fn validate(input: &Value) -> Result<ItemUpdateRequest, ValidationErrors> {
    let object = input.as_object();
    let field = |name: &str| object.and_then(|o| o.get(name));

    let mut errors = ValidationErrors::new();
    let name = record(&mut errors, check_name(field(fields::NAME)));
    let sku = record(&mut errors, check_sku(field(fields::SKU)));
    let listing_price = record(
        &mut errors,
        check_non_negative(fields::LISTING_PRICE, field(fields::LISTING_PRICE)),
    );
    let default_cogs = record(
        &mut errors,
        check_non_negative(fields::DEFAULT_COGS, field(fields::DEFAULT_COGS)),
    );
    let inventory_group_id = record(
        &mut errors,
        check_group_id(field(fields::INVENTORY_GROUP_ID)),
    );

    let (
        Some(name),
        Some(sku),
        Some(listing_price),
        Some(default_cogs),
        Some(inventory_group_id),
    ) = (name, sku, listing_price, default_cogs, inventory_group_id)
    else {
        tracing::debug!(fields = ?errors.fields(), "item update rejected");
        return Err(errors);
    };

    Ok(ItemUpdateRequest {
        name,
        sku,
        listing_price,
        default_cogs,
        inventory_group_id,
    })
}

fn record<T>(errors: &mut ValidationErrors, checked: Result<T, FieldError>) -> Option<T> {
    match checked {
        Ok(v) => Some(v),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn check_name(value: Option<&Value>) -> Result<String, FieldError> {
    match value {
        None => Err(FieldError::missing(fields::NAME)),
        Some(Value::String(s)) if s.chars().count() < NAME_MIN_CHARS => {
            Err(FieldError::constraint(fields::NAME, "too short"))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::type_mismatch(fields::NAME, "string")),
    }
}

// `null` is accepted so that a serialized request validates again.
fn check_sku(value: Option<&Value>) -> Result<Option<String>, FieldError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(FieldError::type_mismatch(fields::SKU, "string")),
    }
}

fn check_non_negative(field: &'static str, value: Option<&Value>) -> Result<f64, FieldError> {
    let n = match value {
        None => return Err(FieldError::missing(field)),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| FieldError::type_mismatch(field, "number"))?,
        Some(_) => return Err(FieldError::type_mismatch(field, "number")),
    };
    if n < 0.0 {
        return Err(FieldError::constraint(field, "must be >= 0"));
    }
    Ok(n)
}

fn check_group_id(value: Option<&Value>) -> Result<String, FieldError> {
    match value {
        None => Err(FieldError::missing(fields::INVENTORY_GROUP_ID)),
        Some(Value::String(s)) if s.is_empty() => {
            Err(FieldError::constraint(fields::INVENTORY_GROUP_ID, "required"))
        }
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(FieldError::type_mismatch(fields::INVENTORY_GROUP_ID, "string")),
    }
}
