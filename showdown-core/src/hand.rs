use crate::class::HandClass;
use crate::deck::{Card, Rank, Suit};
use crate::profile::{Histogram, Profile};
use crate::ShowdownError;
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WinState {
    Win,
    Tie,
    Lose,
}

impl From<Ordering> for WinState {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => WinState::Lose,
            Ordering::Greater => WinState::Win,
            Ordering::Equal => WinState::Tie,
        }
    }
}

#[derive(PartialEq, Eq, Debug)]
pub enum HandError {
    NotFiveCards(usize),
    DuplicateCard(Card),
    NoSuchPosition(usize),
}

impl Error for HandError {}

impl fmt::Display for HandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFiveCards(n) => write!(f, "Five cards are required, but {} were given", n),
            Self::DuplicateCard(c) => write!(f, "{} appears more than once", c.pretty()),
            Self::NoSuchPosition(i) => write!(f, "A hand has no card at position {}", i),
        }
    }
}

/// Five distinct cards, kept in the order they were given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: [Card; 5],
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cards.iter().join(" "))
    }
}

impl FromStr for Hand {
    type Err = ShowdownError;

    /// Reads comma separated cards in either notation ("3 of hearts, 4 of diamonds, ...") or
    /// whitespace separated short cards ("3h 4d ...").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = if s.contains(',') || s.contains(" of ") {
            s.split(',').map(str::parse).collect::<Result<Vec<Card>, _>>()?
        } else {
            s.split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<Card>, _>>()?
        };
        Ok(Hand::new(&cards)?)
    }
}

impl Hand {
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; 5] = cards
            .try_into()
            .map_err(|_| HandError::NotFiveCards(cards.len()))?;
        if let Some(c) = cards.iter().duplicates().next() {
            return Err(HandError::DuplicateCard(*c));
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    /// A copy of this hand with the card at `idx` swapped for `card`.
    pub fn with_card(&self, idx: usize, card: Card) -> Result<Self, HandError> {
        let mut cards = self.cards;
        *cards.get_mut(idx).ok_or(HandError::NoSuchPosition(idx))? = card;
        Self::new(&cards)
    }

    /// A copy of this hand with the card at `idx` changed to `rank`, keeping its suit.
    pub fn with_rank(&self, idx: usize, rank: Rank) -> Result<Self, HandError> {
        let old = self.card(idx)?;
        self.with_card(idx, Card::new(rank, old.suit()))
    }

    /// A copy of this hand with the card at `idx` changed to `suit`, keeping its rank.
    pub fn with_suit(&self, idx: usize, suit: Suit) -> Result<Self, HandError> {
        let old = self.card(idx)?;
        self.with_card(idx, Card::new(old.rank(), suit))
    }

    fn card(&self, idx: usize) -> Result<Card, HandError> {
        self.cards
            .get(idx)
            .copied()
            .ok_or(HandError::NoSuchPosition(idx))
    }

    /// Long notation, e.g. "3 of hearts, 4 of diamonds, ...".
    pub fn pretty(&self) -> String {
        self.cards.iter().map(|c| c.pretty()).join(", ")
    }

    pub fn histogram(&self) -> Histogram {
        Histogram::of(&self.cards)
    }

    pub fn profile(&self) -> Profile {
        self.histogram().profile()
    }

    /// Ranks of the cards, lowest first.
    pub fn sorted_ranks(&self) -> [Rank; 5] {
        let mut ranks = self.cards.map(Card::rank);
        ranks.sort_unstable();
        ranks
    }

    /// The highest ranked card. When several share the top rank, the first one in the hand.
    pub fn high_card(&self) -> Card {
        let mut high = self.cards[0];
        for c in &self.cards[1..] {
            if c.rank() > high.rank() {
                high = *c;
            }
        }
        high
    }

    pub fn class(&self) -> HandClass {
        HandClass::which(self)
    }

    pub fn description(&self) -> &'static str {
        self.class().label()
    }

    pub fn beats(&self, other: &Self) -> bool {
        compare(self, other) > 0
    }

    pub fn ties(&self, other: &Self) -> bool {
        compare(self, other) == 0
    }

    pub fn showdown(&self, other: &Self) -> WinState {
        compare(self, other).cmp(&0).into()
    }
}

/// Positive when `h1` is the better hand, negative when `h2` is, zero for a tie.
///
/// Hands of different classes are ordered by class alone. The lower the priority index the
/// better the class, hence the subtraction is backwards.
pub fn compare(h1: &Hand, h2: &Hand) -> i32 {
    let (c1, c2) = (h1.class(), h2.class());
    let comp = c2.priority() as i32 - c1.priority() as i32;
    let result = if comp == 0 {
        (c1.ranking().choose)(h1, h2)
    } else {
        comp
    };
    debug!("{} ({}) vs {} ({}): {}", h1, c1, h2, c2, result);
    result
}

#[cfg(test)]
mod test_hand {
    use super::*;
    use crate::deck::cards_from_str;
    use crate::CardError;

    fn sample_hand() -> Hand {
        "3 of hearts, 4 of diamonds, 5 of spades, K of spades, 5 of clubs"
            .parse()
            .unwrap()
    }

    #[test]
    fn wrong_sizes() {
        let cards = cards_from_str("2c 3c 4c 5c 6c 7c 8c");
        for n in [0, 1, 2, 3, 4, 6, 7] {
            assert_eq!(Hand::new(&cards[..n]), Err(HandError::NotFiveCards(n)));
        }
        assert!(Hand::new(&cards[..5]).is_ok());
    }

    #[test]
    fn duplicates() {
        let cards = cards_from_str("2c 3c 4c 2c 6c");
        assert_eq!(
            Hand::new(&cards),
            Err(HandError::DuplicateCard(Card::new(Rank::R2, Suit::Club)))
        );
    }

    #[test]
    fn batch_creation() {
        let h = sample_hand();
        assert_eq!(h.cards()[1], Card::new(Rank::R4, Suit::Diamond));
        assert_eq!(h.cards()[3].rank(), Rank::RK);
        assert_eq!(h.cards()[3].suit(), Suit::Spade);
        assert_eq!(h, "3h 4d 5s Ks 5c".parse::<Hand>().unwrap());
        assert_eq!(h.to_string(), "3h 4d 5s Ks 5c");
        assert_eq!(
            h.pretty(),
            "3 of hearts, 4 of diamonds, 5 of spades, K of spades, 5 of clubs"
        );
    }

    #[test]
    fn batch_errors() {
        let e = "A of diamonds, 3 of spades, 2 of hearts, 5 of clubs".parse::<Hand>();
        assert!(matches!(
            e,
            Err(ShowdownError::Hand(HandError::NotFiveCards(4)))
        ));
        let e = "A of diamonds, 3 of spades, 2 of hearts, 5 of clubs, Z of clubs".parse::<Hand>();
        assert!(matches!(
            e,
            Err(ShowdownError::Card(CardError::UnknownRank(_)))
        ));
    }

    #[test]
    fn replacing_cards() {
        let h = sample_hand();
        let h2 = h.with_rank(0, Rank::R7).unwrap();
        assert_eq!(h2.cards()[0], Card::new(Rank::R7, Suit::Heart));
        // the original is untouched
        assert_eq!(h.cards()[0], Card::new(Rank::R3, Suit::Heart));
        let h3 = h.with_suit(1, Suit::Club).unwrap();
        assert_eq!(h3.cards()[1], Card::new(Rank::R4, Suit::Club));
        assert_eq!(
            h.with_rank(5, Rank::R2),
            Err(HandError::NoSuchPosition(5))
        );
        // 5s is already in the hand
        assert_eq!(
            h.with_card(0, Card::new(Rank::R5, Suit::Spade)),
            Err(HandError::DuplicateCard(Card::new(Rank::R5, Suit::Spade)))
        );
    }

    #[test]
    fn high_card_and_ranks() {
        let h = sample_hand();
        assert_eq!(h.high_card(), Card::new(Rank::RK, Suit::Spade));
        assert_eq!(
            h.sorted_ranks(),
            [Rank::R3, Rank::R4, Rank::R5, Rank::R5, Rank::RK]
        );
    }

    #[test]
    fn ties_itself() {
        let h1 = sample_hand();
        let h2 = sample_hand();
        assert!(h1.ties(&h2));
        assert_eq!(compare(&h1, &h2), 0);
        assert_eq!(h1.showdown(&h2), WinState::Tie);
        assert_eq!(h1.description(), "pair");
    }

    #[test]
    fn class_beats_class() {
        let sf = "2c 3c 4c 5c 6c".parse::<Hand>().unwrap();
        let quads = "Ac Ad Ah As Kc".parse::<Hand>().unwrap();
        assert!(sf.beats(&quads));
        assert!(!quads.beats(&sf));
        assert_eq!(quads.showdown(&sf), WinState::Lose);
        assert_eq!(compare(&sf, &quads), 1);
        assert_eq!(compare(&quads, &sf), -1);
    }

    #[test]
    fn serde_roundtrip() {
        let h = sample_hand();
        let s = serde_json::to_string(&h).unwrap();
        assert_eq!(serde_json::from_str::<Hand>(&s).unwrap(), h);
    }
}
