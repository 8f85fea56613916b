use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::rules::{missing, title_text};

/// Inbound payload for `POST /todos`.
///
/// Every field is optional at the serde level so that a missing `title` is reported as a
/// field error by [`Validate`] rather than as an opaque deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct TodoCreateRequest {
    #[serde(default)]
    #[validate(
        required(message = "title is required"),
        length(max = 255, message = "title must be at most 255 characters"),
        custom(function = "title_text")
    )]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
}

/// Inbound payload for `PUT /todos/{id}`. Full replacement: `completed` is required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Validate)]
pub struct TodoUpdateRequest {
    #[serde(default)]
    #[validate(
        required(message = "title is required"),
        length(max = 255, message = "title must be at most 255 characters"),
        custom(function = "title_text")
    )]
    pub title: Option<String>,

    #[serde(default)]
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(required(message = "completed is required"))]
    pub completed: Option<bool>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
}

/// An update payload that passed validation. Overwrites all three mutable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Conversion from an untrusted payload into its validated counterpart.
pub trait IntoValid: Validate {
    type Valid;

    fn into_valid(self) -> Result<Self::Valid, ValidationErrors>;
}

impl IntoValid for TodoCreateRequest {
    type Valid = TodoDraft;

    fn into_valid(self) -> Result<TodoDraft, ValidationErrors> {
        self.validate()?;
        let title = self.title.ok_or_else(|| missing("title"))?;
        Ok(TodoDraft {
            title,
            description: self.description,
        })
    }
}

impl IntoValid for TodoUpdateRequest {
    type Valid = TodoChanges;

    fn into_valid(self) -> Result<TodoChanges, ValidationErrors> {
        self.validate()?;
        let title = self.title.ok_or_else(|| missing("title"))?;
        let completed = self.completed.ok_or_else(|| missing("completed"))?;
        Ok(TodoChanges {
            title,
            description: self.description,
            completed,
        })
    }
}
