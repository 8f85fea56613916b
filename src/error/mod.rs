mod ticklist;

pub use ticklist::{ApiErrorBody, ApiErrorObject, TicklistError};
