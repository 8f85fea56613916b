pub mod mapper;
mod todo_service;

pub use todo_service::TodoService;
