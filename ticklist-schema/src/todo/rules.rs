//! Rules the `validator` derive can't express on its own.

use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

/// Upper bound for `title`, counted in chars. Mirrors `length(max = 255)` on the payloads.
pub const TITLE_MAX_CHARS: usize = 255;

/// Upper bound for `description`, counted in chars. Mirrors `length(max = 1000)`.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Title must contain a non-whitespace char and no NUL (SQLite text functions stop at NUL).
pub(crate) fn title_text(title: &str) -> Result<(), ValidationError> {
    if title.contains('\0') {
        return Err(coded("invalid_char", "title must not contain NUL characters"));
    }
    if title.trim().is_empty() {
        return Err(coded("blank", "title must not be blank"));
    }
    Ok(())
}

pub(crate) fn missing(field: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, coded("required", "field is required"));
    errors
}

fn coded(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}
