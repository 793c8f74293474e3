//! Request extractors that reject with [`crate::error::AppError`].

pub mod json_body;
pub use json_body::JsonBody;
