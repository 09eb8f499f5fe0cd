use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{load_cards_from_json, Card, CardId};
use crate::error::CardError;
use crate::hand::Hand;
use crate::types::Owner;

pub const CARD_NAMES: [&str; 12] = [
    "Bomb",
    "Cactuar",
    "Fat Chocobo",
    "Flan",
    "Ifrit",
    "Imp",
    "Iron Giant",
    "Lamia",
    "Lich",
    "Magic Pot",
    "Tiamat",
    "Tonberry",
];

const HIGH_RANKS: std::ops::RangeInclusive<u8> = 6..=10;
const LOW_RANKS: std::ops::RangeInclusive<u8> = 1..=5;
const BOSS_HIGH_SIDES: usize = 3;

/// Even positions 4..=10 of the name list are bosses.
#[inline]
fn is_boss(position: usize) -> bool {
    (4..=10).contains(&position) && position % 2 == 0
}

/// Random ranks with exactly `high_sides` sides drawn from the high band,
/// the rest from the low band, in shuffled side order.
pub fn generate_ranks<R: Rng + ?Sized>(high_sides: usize, rng: &mut R) -> [u8; 4] {
    let high_sides = high_sides.min(4);
    let mut ranks = [0u8; 4];
    for (i, r) in ranks.iter_mut().enumerate() {
        *r = if i < high_sides {
            rng.gen_range(HIGH_RANKS)
        } else {
            rng.gen_range(LOW_RANKS)
        };
    }
    ranks.shuffle(rng);
    ranks
}

/// Face-down deck cards are dealt from. Cards in the pool are neutral.
#[derive(Debug, Clone, Default)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let cards = cards
            .into_iter()
            .map(|mut c| {
                c.set_owner(Owner::Neutral);
                c
            })
            .collect();
        Self { cards }
    }

    /// Generate `size` random cards (at least one per name) and shuffle them.
    /// Names cycle when `size` exceeds the name list.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, CardError> {
        let size = size.max(CARD_NAMES.len());
        let mut cards = Vec::with_capacity(size);
        for i in 0..size {
            let position = i % CARD_NAMES.len();
            let high = if is_boss(position) {
                BOSS_HIGH_SIDES
            } else {
                rng.gen_range(1..=4)
            };
            let ranks = generate_ranks(high, rng);
            cards.push(Card::new(
                CardId(i as u32),
                CARD_NAMES[position],
                ranks,
                Owner::Neutral,
            )?);
        }
        let mut pool = Self { cards };
        pool.shuffle(rng);
        Ok(pool)
    }

    pub fn load<P: AsRef<Path>, R: Rng + ?Sized>(path: P, rng: &mut R) -> Result<Self, CardError> {
        let mut pool = Self::from_cards(load_cards_from_json(path)?);
        pool.shuffle(rng);
        Ok(pool)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Take the card at the end of the pool.
    #[inline]
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Move `n` cards from the end of the pool into `hand`. Nothing moves
    /// when fewer than `n` remain.
    pub fn deal(&mut self, hand: &mut Hand, n: usize) -> Result<(), CardError> {
        if self.cards.len() < n {
            return Err(CardError::PoolExhausted {
                needed: n,
                available: self.cards.len(),
            });
        }
        for _ in 0..n {
            if let Some(card) = self.pop() {
                hand.add(card);
            }
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}
