//! Core types and error taxonomy for sum256.

#![forbid(unsafe_code)]

mod error;
mod mode;

pub use error::Error;
pub use mode::InputMode;

pub type Result<T> = std::result::Result<T, Error>;
