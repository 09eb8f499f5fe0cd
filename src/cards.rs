use std::fmt;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

use serde::Deserialize;

use crate::error::CardError;
use crate::types::{Dir, Owner};

pub const MIN_RANK: u8 = 1;
pub const MAX_RANK: u8 = 10;

/// Stable identity of a card within one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A card: fixed name and ranks, mutable owner.
///
/// Equality and hashing use the id only, so a captured card is still the
/// same card.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    name: String,
    ranks: [u8; 4],
    owner: Owner,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Card {
    /// Build a card with ranks in [Top, Right, Bottom, Left] order.
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        ranks: [u8; 4],
        owner: Owner,
    ) -> Result<Self, CardError> {
        let name = name.into();
        if let Some(&rank) = ranks.iter().find(|r| !(MIN_RANK..=MAX_RANK).contains(*r)) {
            return Err(CardError::InvalidRank { name, rank });
        }
        Ok(Self {
            id,
            name,
            ranks,
            owner,
        })
    }

    #[inline]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ranks(&self) -> [u8; 4] {
        self.ranks
    }

    #[inline]
    pub fn rank(&self, side: Dir) -> u8 {
        self.ranks[side.index()]
    }

    #[inline]
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Hands take ownership of dealt cards through this; captures go
    /// through [`Card::capture`].
    #[inline]
    pub(crate) fn set_owner(&mut self, owner: Owner) {
        self.owner = owner;
    }

    /// True iff this card's `side` strictly beats the defender's opposite side.
    #[inline]
    pub fn compare_wins(&self, side: Dir, defender: &Card) -> bool {
        self.rank(side) > defender.rank(side.opposite())
    }

    /// Hand the defender to this card's owner. The defender keeps its identity.
    #[inline]
    pub fn capture<'a>(&self, defender: &'a mut Card) -> &'a mut Card {
        defender.owner = self.owner;
        defender
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [t, r, b, l] = self.ranks;
        write!(f, "{} [{} {} {} {}]", self.name, rank_glyph(t), rank_glyph(r), rank_glyph(b), rank_glyph(l))
    }
}

/// Printed rank: 10 is shown as `A`.
pub fn rank_glyph(rank: u8) -> String {
    if rank == MAX_RANK {
        "A".to_string()
    } else {
        rank.to_string()
    }
}

/// On-disk card definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardDef {
    pub name: String,
    pub top: u8,
    pub right: u8,
    pub bottom: u8,
    pub left: u8,
}

impl CardDef {
    #[inline]
    pub fn sides(&self) -> [u8; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Parse a JSON array of card definitions into neutral cards.
/// Ids are assigned by position, starting at 0.
pub fn parse_cards_json(data: &str) -> Result<Vec<Card>, CardError> {
    let raw: Vec<CardDef> = serde_json::from_str(data)?;
    if raw.is_empty() {
        return Err(CardError::Empty);
    }
    raw.into_iter()
        .enumerate()
        .map(|(i, def)| {
            let sides = def.sides();
            Card::new(CardId(i as u32), def.name, sides, Owner::Neutral)
        })
        .collect()
}

/// Load cards from a JSON file at runtime.
pub fn load_cards_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Card>, CardError> {
    let data = fs::read_to_string(path.as_ref()).map_err(|source| CardError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    parse_cards_json(&data)
}
