#![cfg(test)]

//! Shared bootstrap helpers for unit tests.

pub mod logging;
