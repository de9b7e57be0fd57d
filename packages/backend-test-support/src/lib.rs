//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing, including
//! problem details assertions and unified logging initialization.

pub mod logging;
pub mod problem_details;
