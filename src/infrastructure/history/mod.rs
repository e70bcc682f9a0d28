//! History repository implementations

mod json;

pub use json::JsonHistoryStore;
