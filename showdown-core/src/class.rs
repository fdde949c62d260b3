use crate::choose;
use crate::deck::Rank;
use crate::hand::Hand;
use itertools::Itertools;
use log::trace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine hand classes, best first. The declaration order is the priority order, so a class's
/// discriminant is its priority index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandClass {
    StraightFlush,
    FourOfAKind,
    FullHouse,
    Flush,
    Straight,
    ThreeOfAKind,
    TwoPair,
    Pair,
    Nothing,
}

/// One row of the ranking table: how to recognize a class and how to settle a tie inside it.
pub struct Ranking {
    pub class: HandClass,
    pub label: &'static str,
    pub has: fn(&Hand) -> bool,
    pub choose: fn(&Hand, &Hand) -> i32,
}

/// The ranking table, best class first.
///
/// The predicates are not mutually exclusive (every straight flush is also a flush and a
/// straight), so the table must be walked in this order and the first match taken.
pub static RANKINGS: [Ranking; 9] = [
    Ranking {
        class: HandClass::StraightFlush,
        label: "straight flush",
        has: has_straight_flush,
        choose: choose::straight_flush,
    },
    Ranking {
        class: HandClass::FourOfAKind,
        label: "four of a kind",
        has: has_four_of_a_kind,
        choose: choose::fours,
    },
    Ranking {
        class: HandClass::FullHouse,
        label: "full house",
        has: has_full_house,
        choose: choose::full_house,
    },
    Ranking {
        class: HandClass::Flush,
        label: "flush",
        has: has_flush,
        choose: choose::flush,
    },
    Ranking {
        class: HandClass::Straight,
        label: "straight",
        has: has_straight,
        choose: choose::straight,
    },
    Ranking {
        class: HandClass::ThreeOfAKind,
        label: "three of a kind",
        has: has_three_of_a_kind,
        choose: choose::trips,
    },
    Ranking {
        class: HandClass::TwoPair,
        label: "two pair",
        has: has_two_pair,
        choose: choose::two_pair,
    },
    Ranking {
        class: HandClass::Pair,
        label: "pair",
        has: has_pair,
        choose: choose::pair,
    },
    Ranking {
        class: HandClass::Nothing,
        label: "nothing",
        has: has_nothing,
        choose: choose::high_card,
    },
];

impl HandClass {
    pub fn which(hand: &Hand) -> HandClass {
        match RANKINGS.iter().find(|r| (r.has)(hand)) {
            Some(r) => {
                trace!("{} has profile {}: {}", hand, hand.profile(), r.label);
                r.class
            }
            // Five distinct cards always have one of the six profiles the table knows about
            None => unreachable!("No hand class matched {}", hand),
        }
    }

    /// Position in the ranking table, 0 for a straight flush down to 8 for nothing.
    pub fn priority(self) -> usize {
        self as usize
    }

    pub fn ranking(self) -> &'static Ranking {
        &RANKINGS[self.priority()]
    }

    pub fn label(self) -> &'static str {
        self.ranking().label
    }

    pub fn from_label(label: &str) -> Option<HandClass> {
        RANKINGS.iter().find(|r| r.label == label).map(|r| r.class)
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Priority index and label of the best class the hand belongs to.
pub fn classify(hand: &Hand) -> (usize, &'static str) {
    let class = HandClass::which(hand);
    (class.priority(), class.label())
}

fn has_profile(hand: &Hand, profile: &str) -> bool {
    hand.profile() == profile
}

fn has_straight_flush(hand: &Hand) -> bool {
    has_straight(hand) && has_flush(hand)
}

fn has_four_of_a_kind(hand: &Hand) -> bool {
    has_profile(hand, "14")
}

fn has_full_house(hand: &Hand) -> bool {
    has_profile(hand, "23")
}

fn has_flush(hand: &Hand) -> bool {
    hand.cards().iter().map(|c| c.suit()).all_equal()
}

fn has_straight(hand: &Hand) -> bool {
    if !has_profile(hand, "11111") {
        return false;
    }
    let ranks = hand.sorted_ranks();
    gap(ranks[4], ranks[0]) == 4 || is_wheel(&ranks)
}

/// A2345, where the ace plays low. Expects distinct ranks sorted ascending.
fn is_wheel(ranks: &[Rank; 5]) -> bool {
    ranks[0] == Rank::R2 && ranks[4] == Rank::RA && gap(ranks[3], ranks[0]) == 3
}

fn has_three_of_a_kind(hand: &Hand) -> bool {
    has_profile(hand, "113")
}

fn has_two_pair(hand: &Hand) -> bool {
    has_profile(hand, "122")
}

fn has_pair(hand: &Hand) -> bool {
    has_profile(hand, "1112")
}

fn has_nothing(hand: &Hand) -> bool {
    has_profile(hand, "11111")
}

fn gap(high: Rank, low: Rank) -> i32 {
    high.index() as i32 - low.index() as i32
}
