//! Server settings read from the environment.

pub mod settings;

pub use settings::*;
