pub mod errors;
pub mod types;

pub use errors::{ConfigError, StarfieldError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, StarfieldError>;
