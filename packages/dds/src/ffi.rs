//! Raw ABI surface of the libdds engine.
//!
//! The structs here mirror the engine's C structs field for field and are
//! the only place its memory layout is spelled out. `deal` and
//! `ddTableDeal` are passed by value; results come back through out
//! pointers. A status of [`RETURN_NO_FAULT`] is the engine's only success
//! code.

use std::os::raw::{c_char, c_int, c_uint};
use std::path::PathBuf;

/// The engine's success status. Every other value is a fault code.
pub const RETURN_NO_FAULT: c_int = 1;

/// Mirror of the engine's `deal` struct.
///
/// `remain_cards` is indexed `[hand][suit]`; each entry is a rank bitset
/// with bit `r` set when that hand still holds the rank-`r` card.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Deal {
    pub trump: c_int,
    pub first: c_int,
    pub current_trick_suit: [c_int; 3],
    pub current_trick_rank: [c_int; 3],
    pub remain_cards: [[c_uint; 4]; 4],
}

/// Mirror of the engine's `futureTricks` struct. The parallel arrays hold
/// one playable card per entry in the first `cards` slots.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FutureTricks {
    pub nodes: c_int,
    pub cards: c_int,
    pub suit: [c_int; 13],
    pub rank: [c_int; 13],
    pub equals: [c_int; 13],
    pub score: [c_int; 13],
}

impl FutureTricks {
    pub fn zeroed() -> Self {
        Self {
            nodes: 0,
            cards: 0,
            suit: [0; 13],
            rank: [0; 13],
            equals: [0; 13],
            score: [0; 13],
        }
    }
}

/// Mirror of the engine's `ddTableDeal` struct, indexed `[hand][suit]`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DdTableDeal {
    pub cards: [[c_uint; 4]; 4],
}

/// Mirror of the engine's `ddTableResults` struct, indexed
/// `[strain][hand]`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DdTableResults {
    pub res_table: [[c_int; 4]; 5],
}

impl DdTableResults {
    pub fn zeroed() -> Self {
        Self {
            res_table: [[0; 4]; 5],
        }
    }
}

/// Mirror of the engine's `parResults` struct. Both partnership scores
/// arrive as NUL-padded text, e.g. `"NS 2220"`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ParResults {
    pub par_score: [[c_char; 16]; 2],
    pub par_contracts_string: [[c_char; 128]; 2],
}

impl ParResults {
    pub fn zeroed() -> Self {
        Self {
            par_score: [[0; 16]; 2],
            par_contracts_string: [[0; 128]; 2],
        }
    }
}

pub const SYM_SET_RESOURCES: &[u8] = b"SetResources";
pub const SYM_SOLVE_BOARD: &[u8] = b"SolveBoard";
pub const SYM_CALC_DD_TABLE: &[u8] = b"CalcDDtable";
pub const SYM_PAR: &[u8] = b"Par";

pub type SetResourcesFn = unsafe extern "C" fn(max_memory_mb: c_int, max_threads: c_int);
pub type SolveBoardFn = unsafe extern "C" fn(
    deal: Deal,
    target: c_int,
    solutions: c_int,
    mode: c_int,
    futp: *mut FutureTricks,
    thread_index: c_int,
) -> c_int;
pub type CalcDdTableFn =
    unsafe extern "C" fn(table_deal: DdTableDeal, tablep: *mut DdTableResults) -> c_int;
pub type ParFn = unsafe extern "C" fn(
    tablep: *mut DdTableResults,
    presp: *mut ParResults,
    vulnerable: c_int,
) -> c_int;

/// Shared-library file name for the current platform.
pub fn soname() -> &'static str {
    if cfg!(target_os = "windows") {
        "libdds.dll"
    } else if cfg!(target_os = "macos") {
        "libdds.2.dylib"
    } else {
        "libdds.so.2"
    }
}

/// Default location of the engine artifact: a source checkout's build
/// directory if one sits next to the process, otherwise the bare soname
/// for the system loader to resolve.
pub fn default_library_path() -> PathBuf {
    let local = PathBuf::from("libdds/.build/src").join(soname());
    if local.exists() {
        local
    } else {
        PathBuf::from(soname())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    // The engine reads and writes these structs by layout, not by name.
    // Pin the sizes so a field edit cannot silently shift the ABI.
    #[test]
    fn struct_sizes_match_the_abi() {
        assert_eq!(size_of::<Deal>(), 96);
        assert_eq!(size_of::<FutureTricks>(), 216);
        assert_eq!(size_of::<DdTableDeal>(), 64);
        assert_eq!(size_of::<DdTableResults>(), 80);
        assert_eq!(size_of::<ParResults>(), 288);
    }

    #[test]
    fn soname_is_platform_specific() {
        let name = soname();
        assert!(name.starts_with("libdds"));
    }
}
