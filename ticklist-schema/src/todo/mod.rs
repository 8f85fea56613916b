mod rules;
mod todo_request;
mod todo_response;

pub use rules::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
pub use todo_request::{IntoValid, TodoChanges, TodoCreateRequest, TodoDraft, TodoUpdateRequest};
pub use todo_response::TodoResponse;
