//! Request validation shared by the resource handlers.

mod validation;
pub use validation::RequestValidator;
