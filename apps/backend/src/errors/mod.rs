//! Error handling for the solver backend.

pub mod error_code;

pub use error_code::ErrorCode;
