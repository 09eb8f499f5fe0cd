use tracing::debug;

use crate::types::PlayerId;

/// An already-classified input event: a hand slot or a board cell was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selection {
    Hand { player: PlayerId, slot: usize },
    Board { cell: usize },
}

impl Selection {
    #[inline]
    pub fn hand(player: PlayerId, slot: usize) -> Self {
        Selection::Hand { player, slot }
    }

    #[inline]
    pub fn board(cell: usize) -> Self {
        Selection::Board { cell }
    }
}

/// Two-click gate: a play becomes possible once a hand slot has been picked
/// and the most recent pick was a board cell.
///
/// Indices are recorded as given; range and occupancy checks belong to the
/// owning game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayState {
    hand_slot: Option<usize>,
    board_cell: Option<usize>,
    last_selection_was_board: bool,
}

impl PlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection and report whether a play is now possible.
    pub fn select(&mut self, selection: Selection) -> bool {
        match selection {
            Selection::Hand { slot, .. } => self.select_hand(slot),
            Selection::Board { cell } => self.select_board(cell),
        }
    }

    pub fn select_hand(&mut self, slot: usize) -> bool {
        self.hand_slot = Some(slot);
        self.last_selection_was_board = false;
        debug!(slot, "hand slot selected");
        self.play_possible()
    }

    pub fn select_board(&mut self, cell: usize) -> bool {
        self.board_cell = Some(cell);
        self.last_selection_was_board = true;
        debug!(cell, possible = self.play_possible(), "board cell selected");
        self.play_possible()
    }

    #[inline]
    pub fn has_hand_selection(&self) -> bool {
        self.hand_slot.is_some()
    }

    #[inline]
    pub fn has_board_selection(&self) -> bool {
        self.board_cell.is_some()
    }

    #[inline]
    pub fn last_selection_was_board(&self) -> bool {
        self.last_selection_was_board
    }

    /// Derived on every call, so a stale pair can never leave it stuck true.
    #[inline]
    pub fn play_possible(&self) -> bool {
        self.hand_slot.is_some() && self.board_cell.is_some() && self.last_selection_was_board
    }

    #[inline]
    pub fn hand_slot(&self) -> Option<usize> {
        self.hand_slot
    }

    #[inline]
    pub fn board_cell(&self) -> Option<usize> {
        self.board_cell
    }

    /// The (hand slot, board cell) pair when a play is possible.
    #[inline]
    pub fn pending_play(&self) -> Option<(usize, usize)> {
        if self.play_possible() {
            self.hand_slot.zip(self.board_cell)
        } else {
            None
        }
    }

    /// Called after a committed play; both selections must be made afresh.
    pub fn play_made(&mut self) {
        self.hand_slot = None;
        self.board_cell = None;
    }

    /// Abandon any partial selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
