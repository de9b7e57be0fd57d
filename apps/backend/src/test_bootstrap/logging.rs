#![cfg(test)]

//! Logging bootstrap for in-crate unit tests.
//!
//! Integration test binaries install the subscriber through their own
//! `ctor` hook; unit tests go through this alias so both end up with the
//! same configuration.

pub fn init() {
    backend_test_support::logging::init();
}
