use crate::cards::{Card, CardId};
use crate::error::PlayError;
use crate::types::PlayerId;

/// Cards held by one player. Order is insertion order and only matters for
/// slot indexing.
#[derive(Debug, Clone)]
pub struct Hand {
    player: PlayerId,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            cards: Vec::new(),
        }
    }

    /// Build a hand from `cards`, claiming each for `player`.
    pub fn with_cards(player: PlayerId, cards: Vec<Card>) -> Self {
        let mut hand = Self::new(player);
        for card in cards {
            hand.add(card);
        }
        hand
    }

    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.player.label()
    }

    /// Append a card; it now belongs to this hand's player.
    pub fn add(&mut self, mut card: Card) {
        card.set_owner(self.player.into());
        self.cards.push(card);
    }

    #[inline]
    pub fn get(&self, slot: usize) -> Option<&Card> {
        self.cards.get(slot)
    }

    #[inline]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    pub fn check_slot(&self, slot: usize) -> Result<(), PlayError> {
        if slot < self.cards.len() {
            Ok(())
        } else {
            Err(PlayError::InvalidHandIndex {
                index: slot,
                len: self.cards.len(),
            })
        }
    }

    /// Remove and return the card at `slot`; later cards shift down one slot.
    pub fn take(&mut self, slot: usize) -> Result<Card, PlayError> {
        self.check_slot(slot)?;
        Ok(self.cards.remove(slot))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Owner;

    fn neutral(id: u32) -> Card {
        Card::new(CardId(id), format!("c{id}"), [1, 2, 3, 4], Owner::Neutral).unwrap()
    }

    #[test]
    fn take_shifts_later_slots() {
        let mut hand = Hand::with_cards(PlayerId::One, vec![neutral(0), neutral(1), neutral(2)]);
        let taken = hand.take(1).unwrap();
        assert_eq!(taken.id(), CardId(1));
        assert_eq!(hand.get(1).map(Card::id), Some(CardId(2)));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn take_out_of_range_leaves_hand_alone() {
        let mut hand = Hand::with_cards(PlayerId::Two, vec![neutral(0)]);
        assert_eq!(
            hand.take(1).unwrap_err(),
            PlayError::InvalidHandIndex { index: 1, len: 1 }
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn added_cards_are_claimed() {
        let hand = Hand::with_cards(PlayerId::Two, vec![neutral(0), neutral(1)]);
        assert!(hand.iter().all(|c| c.owner() == Owner::Player(PlayerId::Two)));
        assert_eq!(hand.position(CardId(1)), Some(1));
    }

    #[test]
    fn iterates_from_either_end() {
        let hand = Hand::with_cards(PlayerId::One, vec![neutral(0), neutral(1), neutral(2)]);
        let newest: Vec<CardId> = hand.iter().rev().take(2).map(Card::id).collect();
        assert_eq!(newest, vec![CardId(2), CardId(1)]);
    }
}
