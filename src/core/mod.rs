pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::TermdeckError;
pub use models::{Category, CategoryFilter, FetchStatus, TermRecord};
