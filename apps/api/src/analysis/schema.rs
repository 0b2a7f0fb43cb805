//! Output contracts. Every responder validates its result before returning it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("schema violation at '{field}': {reason}")]
pub struct SchemaViolation {
    pub field: String,
    pub reason: String,
}

impl SchemaViolation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Implemented by every feature result.
pub trait Schema {
    fn validate(&self) -> Result<(), SchemaViolation>;
}

pub fn check_score(field: &str, value: u32) -> Result<(), SchemaViolation> {
    if value > 100 {
        return Err(SchemaViolation::new(field, format!("{value} exceeds 100")));
    }
    Ok(())
}

pub fn check_non_empty<T>(field: &str, values: &[T]) -> Result<(), SchemaViolation> {
    if values.is_empty() {
        return Err(SchemaViolation::new(field, "must not be empty"));
    }
    Ok(())
}

pub fn check_max_len<T>(field: &str, values: &[T], max: usize) -> Result<(), SchemaViolation> {
    if values.len() > max {
        return Err(SchemaViolation::new(
            field,
            format!("{} entries exceeds limit of {max}", values.len()),
        ));
    }
    Ok(())
}

pub fn check_text(field: &str, value: &str) -> Result<(), SchemaViolation> {
    if value.trim().is_empty() {
        return Err(SchemaViolation::new(field, "must not be blank"));
    }
    Ok(())
}

pub fn check_texts(field: &str, values: &[String]) -> Result<(), SchemaViolation> {
    for (i, v) in values.iter().enumerate() {
        check_text(&format!("{field}[{i}]"), v)?;
    }
    Ok(())
}
