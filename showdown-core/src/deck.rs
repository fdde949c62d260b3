use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

pub const ALL_RANKS: [Rank; 13] = [
    Rank::R2,
    Rank::R3,
    Rank::R4,
    Rank::R5,
    Rank::R6,
    Rank::R7,
    Rank::R8,
    Rank::R9,
    Rank::RT,
    Rank::RJ,
    Rank::RQ,
    Rank::RK,
    Rank::RA,
];
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];
/// Textual ranks in ordinal order, as accepted by [`rank_index`].
const RANK_NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];
const SPADE: char = 's';
const HEART: char = 'h';
const DIAMOND: char = 'd';
const CLUB: char = 'c';

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum CardError {
    UnknownRank(String),
    UnknownSuit(String),
    Malformed(String),
}

impl Error for CardError {}

impl fmt::Display for CardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRank(r) => write!(f, "Unknown rank {:?}", r),
            Self::UnknownSuit(s) => write!(f, "Unknown suit {:?}", s),
            Self::Malformed(c) => write!(f, "Can't read a card out of {:?}", c),
        }
    }
}

/// Ordinal (0 for a deuce up to 12 for an ace) of a textual rank.
///
/// Anything outside the 13 known ranks is an error, never a number that could take part in a
/// rank comparison.
pub fn rank_index(rank: &str) -> Result<usize, CardError> {
    rank.parse::<Rank>().map(Rank::index)
}

#[derive(Hash, Enum, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// The plural name used in long card notation, e.g. "hearts".
    pub fn name(self) -> &'static str {
        match self {
            Self::Club => "clubs",
            Self::Diamond => "diamonds",
            Self::Heart => "hearts",
            Self::Spade => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Club => write!(f, "{}", CLUB),
            Self::Diamond => write!(f, "{}", DIAMOND),
            Self::Heart => write!(f, "{}", HEART),
            Self::Spade => write!(f, "{}", SPADE),
        }
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "c" | "club" | "clubs" | "♣" => Ok(Self::Club),
            "d" | "diamond" | "diamonds" | "♦" => Ok(Self::Diamond),
            "h" | "heart" | "hearts" | "♥" => Ok(Self::Heart),
            "s" | "spade" | "spades" | "♠" => Ok(Self::Spade),
            _ => Err(CardError::UnknownSuit(s.to_string())),
        }
    }
}

/// Card rank, declared from lowest to highest so the derived order is the poker order.
#[derive(
    Hash, Enum, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Serialize, Deserialize,
)]
pub enum Rank {
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    RT,
    RJ,
    RQ,
    RK,
    RA,
}

impl Rank {
    /// Ordinal of this rank, 0 for a deuce up to 12 for an ace.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        ALL_RANKS.get(i).copied()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", RANK_NAMES[self.index()])
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANK_NAMES
            .iter()
            .position(|r| *r == s)
            .and_then(Rank::from_index)
            .ok_or_else(|| CardError::UnknownRank(s.to_string()))
    }
}

#[derive(Hash, PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Reads either the long notation ("3 of hearts") or the short one ("3h", "10h", "Th").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let words: Vec<&str> = s.split_whitespace().collect();
        match words.as_slice() {
            [rank, "of", suit] => Ok(Card::new(rank.parse()?, suit.parse()?)),
            [short] => {
                let split = short
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .filter(|i| *i > 0)
                    .ok_or_else(|| CardError::Malformed(s.to_string()))?;
                let (rank, suit) = short.split_at(split);
                let rank = match rank {
                    "T" => Rank::RT,
                    r => r.parse()?,
                };
                Ok(Card::new(rank, suit.parse()?))
            }
            _ => Err(CardError::Malformed(s.to_string())),
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> Rank {
        self.rank
    }

    /// Long notation, e.g. "5 of hearts".
    pub fn pretty(self) -> String {
        format!("{} of {}", self.rank, self.suit.name())
    }
}

/// Orders two cards by rank alone. Suits never matter.
pub fn compare_rank(a: Card, b: Card) -> Ordering {
    a.rank.cmp(&b.rank)
}

/// Signed distance between the ranks of two cards, e.g. -3 for a three against a six.
pub fn rank_difference(a: Card, b: Card) -> i32 {
    a.rank.index() as i32 - b.rank.index() as i32
}

#[cfg(test)]
pub fn cards_from_str(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| c.parse().expect("Bad card in test input"))
        .collect()
}
