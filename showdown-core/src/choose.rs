//! Choosers settle a tie between two hands of the same class.
//!
//! Each returns a positive number when the first hand wins, a negative one when it loses, and
//! zero for a tie. Only ranks are looked at; a suit never breaks a tie.
use crate::deck::{rank_difference, Rank};
use crate::hand::Hand;

/// Compares the single highest card of each hand.
///
/// Nothing below the top card is looked at, so AK752 and AQJ98 tie. An A2345 straight counts
/// its ace as the top card here.
pub fn high_card(h1: &Hand, h2: &Hand) -> i32 {
    rank_difference(h1.high_card(), h2.high_card())
}

pub fn straight_flush(h1: &Hand, h2: &Hand) -> i32 {
    high_card(h1, h2)
}

pub fn fours(h1: &Hand, h2: &Hand) -> i32 {
    multiples(h1, h2, 4)
}

pub fn full_house(h1: &Hand, h2: &Hand) -> i32 {
    let (b1, b2) = (h1.histogram(), h2.histogram());
    match gap(b1.rank_of_multiples(3), b2.rank_of_multiples(3)) {
        0 => gap(b1.rank_of_multiples(2), b2.rank_of_multiples(2)),
        d => d,
    }
}

pub fn flush(h1: &Hand, h2: &Hand) -> i32 {
    high_card(h1, h2)
}

pub fn straight(h1: &Hand, h2: &Hand) -> i32 {
    high_card(h1, h2)
}

pub fn trips(h1: &Hand, h2: &Hand) -> i32 {
    multiples(h1, h2, 3)
}

pub fn two_pair(h1: &Hand, h2: &Hand) -> i32 {
    two_pair_key(h1) as i32 - two_pair_key(h2) as i32
}

pub fn pair(h1: &Hand, h2: &Hand) -> i32 {
    multiples(h1, h2, 2)
}

/// Packs the high pair, the low pair and the kicker of a two pair hand into the hex digits of
/// one number, e.g. 0x429 for sixes and fours with a jack.
pub fn two_pair_key(hand: &Hand) -> u16 {
    let hist = hand.histogram();
    // highest pair first
    let mut pairs = hist.ranks_with(2);
    let high = pairs.next().map_or(0, Rank::index);
    let low = pairs.next().map_or(0, Rank::index);
    let kicker = hist.ranks_with(1).next().map_or(0, Rank::index);
    ((high << 8) | (low << 4) | kicker) as u16
}

/// The rank held `n` times decides; if it's the same for both hands, the kickers are compared
/// from the highest down. Hands with fewer than three kickers only compare the ones they have.
fn multiples(h1: &Hand, h2: &Hand, n: u8) -> i32 {
    let (b1, b2) = (h1.histogram(), h2.histogram());
    match gap(b1.rank_of_multiples(n), b2.rank_of_multiples(n)) {
        0 => high_kickers(&b1.kickers(), &b2.kickers(), 3),
        d => d,
    }
}

fn high_kickers(k1: &[Rank], k2: &[Rank], len: usize) -> i32 {
    k1.iter()
        .zip(k2.iter())
        .take(len)
        .map(|(a, b)| a.index() as i32 - b.index() as i32)
        .find(|d| *d != 0)
        .unwrap_or(0)
}

fn gap(r1: Option<Rank>, r2: Option<Rank>) -> i32 {
    match (r1, r2) {
        (Some(a), Some(b)) => a.index() as i32 - b.index() as i32,
        // only reachable when the hands aren't of the class being settled
        (a, b) => a.cmp(&b) as i32,
    }
}
