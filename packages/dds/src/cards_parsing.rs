//! Parsing of the textual card, seat and strain codes (e.g. "ST", "N").
//!
//! Card codes are two characters, suit letter first: "ST" is the ten of
//! spades. Seats use the compass letters and strains the suit letters
//! plus "N" for notrump.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::cards::{Card, Direction, Rank, Strain, Suit};

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("invalid {kind} token: {token:?}")]
pub struct ParseError {
    kind: &'static str,
    token: String,
}

impl ParseError {
    fn new(kind: &'static str, token: &str) -> Self {
        Self {
            kind,
            token: token.to_string(),
        }
    }
}

impl FromStr for Card {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (suit_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(suit_ch), Some(rank_ch), None) => (suit_ch, rank_ch),
            _ => return Err(ParseError::new("card", s)),
        };
        let suit = match suit_ch {
            'S' => Suit::Spades,
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            _ => return Err(ParseError::new("card", s)),
        };
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(ParseError::new("card", s)),
        };
        Ok(Card { suit, rank })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank.letter())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::North),
            "E" => Ok(Direction::East),
            "S" => Ok(Direction::South),
            "W" => Ok(Direction::West),
            _ => Err(ParseError::new("direction", s)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Strain {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Strain::Spades),
            "H" => Ok(Strain::Hearts),
            "D" => Ok(Strain::Diamonds),
            "C" => Ok(Strain::Clubs),
            "N" => Ok(Strain::NoTrump),
            _ => Err(ParseError::new("strain", s)),
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Parse a sequence of card tokens, failing on the first invalid one.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
