//! The engine handle and the solver trait it implements.
//!
//! A process runs one [`Dds`] handle. Construction loads the shared
//! library, resolves every entry point, and applies resource limits
//! before the handle is shared; after that the engine manages its own
//! thread safety and calls go through without any locking here.

use std::ffi::OsStr;

use libloading::Library;

use super::cards::{Card, Direction, Hands, Strain};
use super::decode::{decode_dd_table, decode_future_tricks, decode_par};
use super::encode::{encode_dd_table, encode_deal, encode_table_deal};
use super::error::DdsError;
use super::ffi;
use super::results::{CardScore, DdTable, ParScore};

/// Upper bounds handed to the engine before any solving starts. Zero
/// means the engine picks its own value for that dimension.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct EngineLimits {
    pub max_memory_mb: i32,
    pub max_threads: i32,
}

impl EngineLimits {
    fn is_unlimited(self) -> bool {
        self.max_memory_mb == 0 && self.max_threads == 0
    }
}

/// Double-dummy analysis operations.
///
/// The seam between the HTTP layer and the engine: handlers hold an
/// `Arc<dyn DoubleDummySolver>` so tests can substitute a stub for the
/// real engine.
pub trait DoubleDummySolver: Send + Sync {
    /// Score every card the side to move can legally play, with the
    /// trick already on the table.
    fn solve_trick(
        &self,
        strain: Strain,
        leader: Direction,
        current_trick: &[Card],
        hands: &Hands,
    ) -> Result<Vec<CardScore>, DdsError>;

    /// Makeable tricks for all twenty strain/declarer pairs.
    fn calc_table(&self, hands: &Hands) -> Result<DdTable, DdsError>;

    /// Par result for a table under the given vulnerability. The
    /// vulnerability integer is the engine's own encoding and passes
    /// through unexamined.
    fn calc_par(&self, table: &DdTable, vulnerability: i32) -> Result<ParScore, DdsError>;
}

/// Handle to a loaded libdds artifact.
#[derive(Debug)]
pub struct Dds {
    lib: Library,
}

impl Dds {
    /// Load the engine from its default location (a local build tree if
    /// present, else the system loader's search path).
    pub fn load(limits: EngineLimits) -> Result<Self, DdsError> {
        Self::load_from(ffi::default_library_path(), limits)
    }

    /// Load the engine from an explicit artifact path.
    pub fn load_from(path: impl AsRef<OsStr>, limits: EngineLimits) -> Result<Self, DdsError> {
        let lib = unsafe { Library::new(path.as_ref()) }?;
        unsafe {
            // Resolve every entry point now so a stale or mismatched
            // artifact fails construction, not a request.
            lib.get::<ffi::SolveBoardFn>(ffi::SYM_SOLVE_BOARD)?;
            lib.get::<ffi::CalcDdTableFn>(ffi::SYM_CALC_DD_TABLE)?;
            lib.get::<ffi::ParFn>(ffi::SYM_PAR)?;
            let set_resources = lib.get::<ffi::SetResourcesFn>(ffi::SYM_SET_RESOURCES)?;
            // Must happen before the handle is shared: the engine does
            // not tolerate other calls racing a resource change.
            if !limits.is_unlimited() {
                set_resources(limits.max_memory_mb, limits.max_threads);
            }
        }
        Ok(Self { lib })
    }
}

impl DoubleDummySolver for Dds {
    fn solve_trick(
        &self,
        strain: Strain,
        leader: Direction,
        current_trick: &[Card],
        hands: &Hands,
    ) -> Result<Vec<CardScore>, DdsError> {
        let deal = encode_deal(strain, leader, current_trick, hands);
        let mut fut = ffi::FutureTricks::zeroed();
        // target -1, solutions 3: best score for every legal card.
        let status = unsafe {
            let solve_board = self.lib.get::<ffi::SolveBoardFn>(ffi::SYM_SOLVE_BOARD)?;
            solve_board(deal, -1, 3, 0, &mut fut, 0)
        };
        if status != ffi::RETURN_NO_FAULT {
            return Err(DdsError::engine(status));
        }
        decode_future_tricks(&fut)
    }

    fn calc_table(&self, hands: &Hands) -> Result<DdTable, DdsError> {
        let table_deal = encode_table_deal(hands);
        let mut res = ffi::DdTableResults::zeroed();
        let status = unsafe {
            let calc_dd_table = self.lib.get::<ffi::CalcDdTableFn>(ffi::SYM_CALC_DD_TABLE)?;
            calc_dd_table(table_deal, &mut res)
        };
        if status != ffi::RETURN_NO_FAULT {
            return Err(DdsError::engine(status));
        }
        Ok(decode_dd_table(&res))
    }

    fn calc_par(&self, table: &DdTable, vulnerability: i32) -> Result<ParScore, DdsError> {
        let mut res = encode_dd_table(table);
        let mut par = ffi::ParResults::zeroed();
        let status = unsafe {
            let par_fn = self.lib.get::<ffi::ParFn>(ffi::SYM_PAR)?;
            par_fn(&mut res, &mut par, vulnerability)
        };
        if status != ffi::RETURN_NO_FAULT {
            return Err(DdsError::engine(status));
        }
        decode_par(&par)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_are_unlimited() {
        assert!(EngineLimits::default().is_unlimited());
        assert!(!EngineLimits {
            max_memory_mb: 0,
            max_threads: 4
        }
        .is_unlimited());
    }

    #[test]
    fn missing_artifact_is_a_library_error() {
        let err = Dds::load_from("no-such-library.so.0", EngineLimits::default()).unwrap_err();
        assert!(matches!(err, DdsError::Library(_)));
    }
}
