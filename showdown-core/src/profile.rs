//! Rank histograms and the shape ("profile") of a hand.
//!
//! A profile keeps only the multiplicities of the ranks in a hand, sorted ascending, so AAK44
//! and 33J22 both have the profile `122`. Most of the hand classes are recognized by their
//! profile alone.
use crate::deck::{Card, Rank, ALL_RANKS};
use enum_map::EnumMap;
use itertools::Itertools;
use std::fmt;

/// Number of cards of each rank in a hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram(EnumMap<Rank, u8>);

impl Histogram {
    pub fn of(cards: &[Card]) -> Self {
        let mut em: EnumMap<Rank, u8> = EnumMap::from_array([0u8; 13]);
        for rank in ALL_RANKS {
            em[rank] = cards.iter().filter(|c| c.rank() == rank).count() as u8;
        }
        Self(em)
    }

    pub fn count(&self, rank: Rank) -> u8 {
        self.0[rank]
    }

    pub fn profile(&self) -> Profile {
        Profile(
            self.0
                .values()
                .filter(|&&n| n > 0)
                .sorted_unstable()
                .map(|n| char::from(b'0' + n))
                .collect(),
        )
    }

    /// The lowest rank held exactly `n` times, if any.
    pub fn rank_of_multiples(&self, n: u8) -> Option<Rank> {
        self.0
            .iter()
            .find(|(_, count)| **count == n)
            .map(|(rank, _)| rank)
    }

    /// Every rank held exactly `n` times, highest first.
    pub fn ranks_with(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        ALL_RANKS
            .into_iter()
            .rev()
            .filter(move |r| self.0[*r] == n)
    }

    /// The unpaired ranks, highest first.
    pub fn kickers(&self) -> Vec<Rank> {
        self.ranks_with(1).collect()
    }
}

/// Sorted multiplicities of a hand, e.g. `1112` for a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Profile(String);

impl Profile {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for Profile {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
