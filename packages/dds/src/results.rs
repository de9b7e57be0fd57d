//! Decoded solver results in domain terms.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::cards::{Card, Direction, Strain};

/// One legal card together with the tricks the side to move takes by
/// playing it, assuming best play all round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct CardScore {
    pub card: Card,
    pub tricks: i32,
}

/// Makeable-tricks table: for each strain and each declaring seat, the
/// tricks that seat's side takes double-dummy. Indexed `[strain][seat]`
/// in the canonical orders.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DdTable(pub [[i32; 4]; 5]);

impl DdTable {
    pub fn tricks(&self, strain: Strain, declarer: Direction) -> i32 {
        self.0[strain.index() as usize][declarer.index() as usize]
    }
}

// Emitted as nested maps with stable key order: strains S,H,D,C,N and
// seats N,E,S,W.
impl Serialize for DdTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Row<'a>(&'a [i32; 4]);

        impl Serialize for Row<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(Direction::ALL.len()))?;
                for direction in Direction::ALL {
                    map.serialize_entry(direction.letter(), &self.0[direction.index() as usize])?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(Strain::ALL.len()))?;
        for strain in Strain::ALL {
            map.serialize_entry(
                strain.letter(),
                &Row(&self.0[strain.index() as usize]),
            )?;
        }
        map.end()
    }
}

/// Par scores for the two partnerships. The values are a single result
/// seen from each side, so they are negatives of each other.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ParScore {
    #[serde(rename = "NS")]
    pub ns: i32,
    #[serde(rename = "EW")]
    pub ew: i32,
}
