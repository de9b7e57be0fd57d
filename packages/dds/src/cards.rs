//! Core card, seat and strain types shared by the codecs and the solver API.
//!
//! Enum discriminants are the engine's encoding indices and must not be
//! reordered: suits are S=0 H=1 D=2 C=3, seats are N=0 E=1 S=2 W=3,
//! strains add notrump as 4, and ranks occupy 2..=14 (0 and 1 are the
//! engine's empty-slot sentinel band and are never inhabited).

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(i32)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            5 => Some(Self::Five),
            6 => Some(Self::Six),
            7 => Some(Self::Seven),
            8 => Some(Self::Eight),
            9 => Some(Self::Nine),
            10 => Some(Self::Ten),
            11 => Some(Self::Jack),
            12 => Some(Self::Queen),
            13 => Some(Self::King),
            14 => Some(Self::Ace),
            _ => None,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            _ => None,
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::East => "E",
            Self::South => "S",
            Self::West => "W",
        }
    }
}

/// Denomination a deal is scored in: one of the four suits or notrump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(i32)]
pub enum Strain {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
    NoTrump = 4,
}

impl Strain {
    pub const ALL: [Strain; 5] = [
        Strain::Spades,
        Strain::Hearts,
        Strain::Diamonds,
        Strain::Clubs,
        Strain::NoTrump,
    ];

    pub const fn index(self) -> i32 {
        self as i32
    }

    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Spades),
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            4 => Some(Self::NoTrump),
            _ => None,
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::Spades => "S",
            Self::Hearts => "H",
            Self::Diamonds => "D",
            Self::Clubs => "C",
            Self::NoTrump => "N",
        }
    }
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Strain::Spades,
            Suit::Hearts => Strain::Hearts,
            Suit::Diamonds => Strain::Diamonds,
            Suit::Clubs => Strain::Clubs,
        }
    }
}

/// The four hands of a deal, keyed by seat in the JSON representation.
///
/// Holdings are plain card lists; nothing here checks that the four hands
/// partition a 52-card deck. Malformed deals encode deterministically and
/// the engine reports on them as it sees fit.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hands {
    #[serde(rename = "N")]
    pub north: Vec<Card>,
    #[serde(rename = "E")]
    pub east: Vec<Card>,
    #[serde(rename = "S")]
    pub south: Vec<Card>,
    #[serde(rename = "W")]
    pub west: Vec<Card>,
}

impl Hands {
    pub fn hand(&self, direction: Direction) -> &[Card] {
        match direction {
            Direction::North => &self.north,
            Direction::East => &self.east,
            Direction::South => &self.south,
            Direction::West => &self.west,
        }
    }

    pub fn hand_mut(&mut self, direction: Direction) -> &mut Vec<Card> {
        match direction {
            Direction::North => &mut self.north,
            Direction::East => &mut self.east,
            Direction::South => &mut self.south,
            Direction::West => &mut self.west,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_round_trip() {
        for suit in Suit::ALL {
            assert_eq!(Suit::from_index(suit.index()), Some(suit));
        }
        for rank in Rank::ALL {
            assert_eq!(Rank::from_index(rank.index()), Some(rank));
        }
        for direction in Direction::ALL {
            assert_eq!(Direction::from_index(direction.index()), Some(direction));
        }
        for strain in Strain::ALL {
            assert_eq!(Strain::from_index(strain.index()), Some(strain));
        }
    }

    #[test]
    fn canonical_orders() {
        let suit_indices: Vec<i32> = Suit::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(suit_indices, vec![0, 1, 2, 3]);

        let direction_indices: Vec<i32> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(direction_indices, vec![0, 1, 2, 3]);

        let strain_indices: Vec<i32> = Strain::ALL.iter().map(|s| s.index()).collect();
        assert_eq!(strain_indices, vec![0, 1, 2, 3, 4]);

        // Ranks occupy 2..=14; 0 and 1 stay reserved for empty slots.
        let rank_indices: Vec<i32> = Rank::ALL.iter().map(|r| r.index()).collect();
        assert_eq!(rank_indices, (2..=14).collect::<Vec<i32>>());
        assert_eq!(Rank::from_index(0), None);
        assert_eq!(Rank::from_index(1), None);
    }

    #[test]
    fn out_of_range_indices_rejected() {
        assert_eq!(Suit::from_index(4), None);
        assert_eq!(Suit::from_index(-1), None);
        assert_eq!(Rank::from_index(15), None);
        assert_eq!(Direction::from_index(4), None);
        assert_eq!(Strain::from_index(5), None);
    }

    #[test]
    fn hand_accessor_matches_fields() {
        let mut hands = Hands::default();
        hands.hand_mut(Direction::East).push(Card {
            suit: Suit::Hearts,
            rank: Rank::Ace,
        });
        assert_eq!(hands.hand(Direction::East), &hands.east[..]);
        assert!(hands.hand(Direction::North).is_empty());
    }
}
