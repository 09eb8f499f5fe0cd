use tracing::debug;

use crate::cards::Card;
use crate::error::{ConfigError, PlayError};
use crate::types::{Dir, Owner, PlayerId};

/// A board cell.
#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    occupant: Option<Card>,
}

impl Node {
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn occupant(&self) -> Option<&Card> {
        self.occupant.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Directed adjacency between two cells, by arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Dir,
}

impl Edge {
    /// Stored edge weight: Up=1, Right=2, Down=3, Left=4.
    #[inline]
    pub fn weight(&self) -> u8 {
        self.direction.weight()
    }
}

/// Grid of nodes plus a static adjacency graph built once at construction.
/// Only node occupancy (and occupant ownership) changes afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    height: usize,
    width: usize,
    // Cells laid out row-major (r*width + c)
    nodes: Vec<Node>,
    // Outgoing edges per node, in [Up, Right, Down, Left] order
    adjacency: Vec<Vec<Edge>>,
}

impl Board {
    pub fn new(height: usize, width: usize) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidDimensions { height, width };
        if height == 0 || width == 0 {
            return Err(invalid);
        }
        let total = height.checked_mul(width).ok_or(invalid)?;
        Ok(Self::build(height, width, total))
    }

    /// The reference 3x3 board.
    pub fn standard() -> Self {
        Self::build(3, 3, 9)
    }

    fn build(height: usize, width: usize, total: usize) -> Self {
        let nodes = (0..total)
            .map(|index| Node {
                index,
                occupant: None,
            })
            .collect();
        let adjacency = (0..total).map(|i| build_edges(i, width, total)).collect();
        Self {
            height,
            width,
            nodes,
            adjacency,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.nodes.get(index).and_then(Node::occupant)
    }

    /// Outgoing edges of `index`; empty for an out-of-range index.
    #[inline]
    pub fn adjacencies(&self, index: usize) -> &[Edge] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// True iff the cell is empty. Out-of-range indices are never playable.
    #[inline]
    pub fn is_playable(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(Node::is_empty)
    }

    pub fn check_index(&self, index: usize) -> Result<(), PlayError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(PlayError::InvalidBoardIndex {
                index,
                cells: self.nodes.len(),
            })
        }
    }

    /// Place `card` at `index` and resolve captures.
    /// Returns the captured cell indices in ascending order.
    pub fn play(&mut self, index: usize, card: Card) -> Result<Vec<usize>, PlayError> {
        self.check_index(index)?;
        if !self.is_playable(index) {
            return Err(PlayError::CellOccupied(index));
        }
        debug!(cell = index, card = %card, "placing card");
        self.nodes[index].occupant = Some(card);
        Ok(self.capture_adjacent_cards(index))
    }

    /// Single pass over the placed card's outgoing edges. Each neighbor is
    /// compared once against the placed card; captured cards do not attack
    /// in turn.
    pub fn capture_adjacent_cards(&mut self, index: usize) -> Vec<usize> {
        let Some(attacker) = self.nodes.get(index).and_then(|n| n.occupant.clone()) else {
            return Vec::new();
        };
        let mut captured = Vec::new();
        for edge in &self.adjacency[index] {
            let Some(target) = self.nodes[edge.to].occupant.as_mut() else { continue };
            if attacker.compare_wins(edge.direction, target) {
                let previous = target.owner();
                attacker.capture(target);
                if previous != attacker.owner() {
                    debug!(
                        from = index,
                        to = edge.to,
                        direction = ?edge.direction,
                        attack = attacker.rank(edge.direction),
                        defend = target.rank(edge.direction.opposite()),
                        "captured"
                    );
                    captured.push(edge.to);
                }
            }
        }
        captured.sort_unstable();
        captured
    }

    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.nodes
            .iter()
            .filter_map(Node::occupant)
            .filter(|c| c.owner() == Owner::Player(player))
            .count()
    }

    #[inline]
    pub fn filled_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_empty()).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.nodes.iter().all(|n| !n.is_empty())
    }
}

/// Outgoing edges for cell `i`, skipping directions that leave the grid.
fn build_edges(i: usize, width: usize, total: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(4);
    let neighbours = [
        (i >= width).then(|| i - width),
        ((i + 1) % width != 0).then(|| i + 1),
        (i + width < total).then(|| i + width),
        (i % width != 0).then(|| i - 1),
    ];
    for (dir, to) in Dir::all().into_iter().zip(neighbours) {
        if let Some(to) = to {
            edges.push(Edge {
                from: i,
                to,
                direction: dir,
            });
        }
    }
    edges
}
