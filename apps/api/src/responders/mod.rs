// Feature responders: one per analysis feature.
// Each validates its input, runs the engine, and checks the result against its
// own schema before handing it back. Axum wiring lives in `handlers`.

pub mod chat;
pub mod github;
pub mod handlers;
pub mod interview;
pub mod job_match;
pub mod resume_check;
pub mod roadmap;

use crate::analysis::schema::Schema;
use crate::errors::AppError;

/// Returns the trimmed value, or a missing-input error naming the field.
pub(crate) fn require<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// Passes `result` through its schema; a violation becomes an opaque failure.
pub(crate) fn validated<T: Schema>(result: T, failure: &'static str) -> Result<T, AppError> {
    result
        .validate()
        .map_err(|violation| AppError::AnalysisFailed {
            message: failure,
            detail: violation.to_string(),
        })?;
    Ok(result)
}

/// Dictionary terms are lowercase; responses show them with a leading capital.
pub(crate) fn display_name(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
