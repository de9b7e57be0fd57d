//! Binding layer for the libdds double-dummy solver.
//!
//! Encodes deals into the engine's bit-packed structs, drives its
//! entry points through a dynamically loaded library, and decodes the
//! binary results back into domain values. All analysis happens inside
//! the engine; this crate only translates.

pub mod cards;
pub mod cards_parsing;
pub mod cards_serde;
pub mod decode;
pub mod encode;
pub mod error;
pub mod ffi;
pub mod results;
pub mod solver;

pub use cards::{Card, Direction, Hands, Rank, Strain, Suit};
pub use cards_parsing::{try_parse_cards, ParseError};
pub use error::DdsError;
pub use results::{CardScore, DdTable, ParScore};
pub use solver::{Dds, DoubleDummySolver, EngineLimits};
