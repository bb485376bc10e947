//! Field-level validation failures.
//!
//! Validators collect every failing field of a payload instead of stopping at
//! the first one, so a form can show all problems in a single pass.

use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// A required field was absent.
    Missing,
    /// The field was present but not of the expected primitive type.
    TypeMismatch,
    /// The field had the right type but violated a value constraint.
    ConstraintViolation,
}

/// One rejected field: `{ field, message }` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::Missing, "required")
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str) -> Self {
        Self::new(field, FieldErrorKind::TypeMismatch, format!("expected {expected}"))
    }

    pub fn constraint(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, FieldErrorKind::ConstraintViolation, message)
    }
}

impl core::fmt::Display for FieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

// The kind is an in-process detail; callers render `field` and `message`.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FieldError", 2)?;
        s.serialize_field("field", &self.field)?;
        s.serialize_field("message", &self.message)?;
        s.end()
    }
}

/// Ordered collection of field failures from a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
#[serde(transparent)]
#[error("invalid fields: {}", summary(.0))]
pub struct ValidationErrors(Vec<FieldError>);

fn summary(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First failure recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Failing field names in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(value: Vec<FieldError>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_field_message_pairs() {
        let errors = ValidationErrors::from(vec![
            FieldError::constraint("name", "too short"),
            FieldError::missing("inventory_group_id"),
        ]);

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"field": "name", "message": "too short"},
                {"field": "inventory_group_id", "message": "required"},
            ])
        );
    }

    #[test]
    fn lookup_by_field_returns_first_entry() {
        let errors = ValidationErrors::from(vec![
            FieldError::type_mismatch("listing_price", "number"),
            FieldError::constraint("listing_price", "must be >= 0"),
        ]);

        let e = errors.get("listing_price").unwrap();
        assert_eq!(e.kind, FieldErrorKind::TypeMismatch);
        assert_eq!(e.message, "expected number");
        assert!(!errors.contains("name"));
        assert_eq!(errors.fields(), vec!["listing_price", "listing_price"]);
    }

    #[test]
    fn display_lists_every_field() {
        let errors = ValidationErrors::from(vec![
            FieldError::missing("name"),
            FieldError::missing("default_cogs"),
        ]);
        assert_eq!(
            errors.to_string(),
            "invalid fields: name: required; default_cogs: required"
        );
    }

    #[test]
    fn into_result_is_ok_only_when_empty() {
        assert_eq!(ValidationErrors::new().into_result(|| 1), Ok(1));

        let mut errors = ValidationErrors::new();
        errors.push(FieldError::missing("name"));
        assert!(errors.into_result(|| 1).is_err());
    }
}
