//! Decoding of the engine's output structs into domain values.
//!
//! The engine is trusted but the shapes are checked: an index or buffer
//! that does not fit the documented layout means the binding and the
//! loaded artifact disagree about the ABI, which surfaces as
//! [`DdsError::Decode`].

use std::os::raw::c_char;

use super::cards::{Card, Rank, Suit};
use super::error::DdsError;
use super::ffi;
use super::results::{CardScore, DdTable, ParScore};

/// Unpack the first `cards` entries of the parallel arrays, preserving
/// the engine's order.
pub fn decode_future_tricks(fut: &ffi::FutureTricks) -> Result<Vec<CardScore>, DdsError> {
    if !(0..=13).contains(&fut.cards) {
        return Err(DdsError::decode(format!(
            "future tricks card count {} out of range",
            fut.cards
        )));
    }
    let count = fut.cards as usize;
    let mut scores = Vec::with_capacity(count);
    for slot in 0..count {
        let suit = Suit::from_index(fut.suit[slot]).ok_or_else(|| {
            DdsError::decode(format!("future tricks suit index {} out of range", fut.suit[slot]))
        })?;
        let rank = Rank::from_index(fut.rank[slot]).ok_or_else(|| {
            DdsError::decode(format!("future tricks rank index {} out of range", fut.rank[slot]))
        })?;
        scores.push(CardScore {
            card: Card { suit, rank },
            tricks: fut.score[slot],
        });
    }
    Ok(scores)
}

/// Relabel the `[strain][hand]` result table 1:1 into domain indices.
pub fn decode_dd_table(res: &ffi::DdTableResults) -> DdTable {
    let mut cells = [[0i32; 4]; 5];
    for (strain, row) in res.res_table.iter().enumerate() {
        for (seat, &tricks) in row.iter().enumerate() {
            cells[strain][seat] = tricks;
        }
    }
    DdTable(cells)
}

pub fn decode_par(res: &ffi::ParResults) -> Result<ParScore, DdsError> {
    let ns = parse_par_score(&res.par_score[0], "NS")?;
    let ew = parse_par_score(&res.par_score[1], "EW")?;
    Ok(ParScore { ns, ew })
}

/// One partnership's par buffer: the label, a space, then a signed
/// decimal, NUL-padded to the end of the field.
fn parse_par_score(buf: &[c_char; 16], label: &str) -> Result<i32, DdsError> {
    let bytes: Vec<u8> = buf
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| b as u8)
        .collect();
    let text = std::str::from_utf8(&bytes)
        .map_err(|_| DdsError::decode(format!("par score for {label} is not valid UTF-8")))?;
    let value = text
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(' '))
        .ok_or_else(|| {
            DdsError::decode(format!("par score {text:?} is missing the {label} label"))
        })?;
    value
        .parse::<i32>()
        .map_err(|_| DdsError::decode(format!("par score {text:?} does not contain an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Direction, Strain};

    fn par_buf(text: &[u8]) -> [c_char; 16] {
        let mut buf = [0 as c_char; 16];
        for (slot, &b) in text.iter().enumerate() {
            buf[slot] = b as c_char;
        }
        buf
    }

    #[test]
    fn future_tricks_preserve_engine_order() {
        let mut fut = ffi::FutureTricks::zeroed();
        fut.cards = 3;
        fut.suit[..3].copy_from_slice(&[0, 1, 2]);
        fut.rank[..3].copy_from_slice(&[14, 2, 10]);
        fut.score[..3].copy_from_slice(&[5, 0, 3]);

        let scores = decode_future_tricks(&fut).unwrap();
        let rendered: Vec<String> = scores
            .iter()
            .map(|s| format!("{}:{}", s.card, s.tricks))
            .collect();
        assert_eq!(rendered, vec!["SA:5", "H2:0", "DT:3"]);
    }

    #[test]
    fn future_tricks_empty_result() {
        let fut = ffi::FutureTricks::zeroed();
        assert_eq!(decode_future_tricks(&fut).unwrap(), Vec::new());
    }

    #[test]
    fn future_tricks_ignore_slots_past_count() {
        let mut fut = ffi::FutureTricks::zeroed();
        fut.cards = 1;
        fut.suit[0] = 3;
        fut.rank[0] = 11;
        fut.score[0] = 7;
        // Garbage beyond `cards` must not be read.
        fut.suit[1] = 99;
        fut.rank[1] = -5;

        let scores = decode_future_tricks(&fut).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].card.to_string(), "CJ");
    }

    #[test]
    fn future_tricks_reject_bad_indices() {
        let mut fut = ffi::FutureTricks::zeroed();
        fut.cards = 1;
        fut.suit[0] = 7;
        fut.rank[0] = 5;
        assert!(matches!(
            decode_future_tricks(&fut),
            Err(DdsError::Decode { .. })
        ));

        fut.suit[0] = 2;
        fut.rank[0] = 1;
        assert!(matches!(
            decode_future_tricks(&fut),
            Err(DdsError::Decode { .. })
        ));
    }

    #[test]
    fn future_tricks_reject_bad_count() {
        let mut fut = ffi::FutureTricks::zeroed();
        fut.cards = 14;
        assert!(matches!(
            decode_future_tricks(&fut),
            Err(DdsError::Decode { .. })
        ));
        fut.cards = -1;
        assert!(matches!(
            decode_future_tricks(&fut),
            Err(DdsError::Decode { .. })
        ));
    }

    #[test]
    fn dd_table_relabels_cells() {
        let mut res = ffi::DdTableResults::zeroed();
        for (strain, row) in res.res_table.iter_mut().enumerate() {
            for (seat, cell) in row.iter_mut().enumerate() {
                *cell = (strain * 10 + seat) as i32;
            }
        }
        let table = decode_dd_table(&res);
        assert_eq!(table.tricks(Strain::Spades, Direction::North), 0);
        assert_eq!(table.tricks(Strain::NoTrump, Direction::West), 43);
        assert_eq!(table.tricks(Strain::Diamonds, Direction::East), 21);
    }

    #[test]
    fn par_scores_parse_both_sides() {
        let mut res = ffi::ParResults::zeroed();
        res.par_score[0] = par_buf(b"NS 2220");
        res.par_score[1] = par_buf(b"EW -2220");
        let par = decode_par(&res).unwrap();
        assert_eq!(par, ParScore { ns: 2220, ew: -2220 });
    }

    #[test]
    fn par_score_zero() {
        let mut res = ffi::ParResults::zeroed();
        res.par_score[0] = par_buf(b"NS 0");
        res.par_score[1] = par_buf(b"EW 0");
        let par = decode_par(&res).unwrap();
        assert_eq!(par, ParScore { ns: 0, ew: 0 });
    }

    #[test]
    fn corrupted_par_buffer_is_a_decode_error() {
        let mut res = ffi::ParResults::zeroed();
        res.par_score[0] = par_buf(b"XX 100");
        res.par_score[1] = par_buf(b"EW 100");
        assert!(matches!(decode_par(&res), Err(DdsError::Decode { .. })));

        res.par_score[0] = par_buf(b"NS abc");
        assert!(matches!(decode_par(&res), Err(DdsError::Decode { .. })));

        res.par_score[0] = par_buf(b"");
        assert!(matches!(decode_par(&res), Err(DdsError::Decode { .. })));

        res.par_score[0] = par_buf(&[0x4e, 0x53, 0x20, 0xff, 0xfe]);
        assert!(matches!(decode_par(&res), Err(DdsError::Decode { .. })));
    }
}
