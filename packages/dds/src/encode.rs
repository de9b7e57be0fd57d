//! Encoding of domain values into the engine's input structs.

use std::os::raw::c_uint;

use super::cards::{Card, Direction, Hands, Strain};
use super::ffi;
use super::results::DdTable;

/// Pack four hands into the engine's `[hand][suit]` rank bitsets.
///
/// Pure accumulation: every card ORs one bit in, duplicates and uneven
/// hands included. Deal validity is the caller's (and the engine's)
/// problem.
pub fn encode_hands(hands: &Hands) -> [[c_uint; 4]; 4] {
    let mut cards = [[0 as c_uint; 4]; 4];
    for direction in Direction::ALL {
        for card in hands.hand(direction) {
            cards[direction.index() as usize][card.suit.index() as usize] |=
                1 << card.rank.index();
        }
    }
    cards
}

/// Build a `deal` for the trick solver. Unused trick slots keep the 0
/// sentinel; at most three cards of `current_trick` are encoded.
pub fn encode_deal(
    strain: Strain,
    leader: Direction,
    current_trick: &[Card],
    hands: &Hands,
) -> ffi::Deal {
    let mut current_trick_suit = [0; 3];
    let mut current_trick_rank = [0; 3];
    for (slot, card) in current_trick.iter().take(3).enumerate() {
        current_trick_suit[slot] = card.suit.index();
        current_trick_rank[slot] = card.rank.index();
    }
    ffi::Deal {
        trump: strain.index(),
        first: leader.index(),
        current_trick_suit,
        current_trick_rank,
        remain_cards: encode_hands(hands),
    }
}

pub fn encode_table_deal(hands: &Hands) -> ffi::DdTableDeal {
    ffi::DdTableDeal {
        cards: encode_hands(hands),
    }
}

/// Re-encode a decoded table for the par calculation. Lossless inverse of
/// [`crate::decode::decode_dd_table`].
pub fn encode_dd_table(table: &DdTable) -> ffi::DdTableResults {
    let mut res_table = [[0; 4]; 5];
    for (strain, row) in table.0.iter().enumerate() {
        for (seat, &tricks) in row.iter().enumerate() {
            res_table[strain][seat] = tricks;
        }
    }
    ffi::DdTableResults { res_table }
}
