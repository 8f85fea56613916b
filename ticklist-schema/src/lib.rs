pub mod todo;

pub use todo::{
    DESCRIPTION_MAX_CHARS, IntoValid, TITLE_MAX_CHARS, TodoChanges, TodoCreateRequest, TodoDraft,
    TodoResponse, TodoUpdateRequest,
};
