use rand::Rng;
use tracing::info;

use crate::board::Board;
use crate::cards::{Card, CardId};
use crate::config::{check_fillable, GameConfig};
use crate::engine::apply::apply_play;
use crate::engine::score::recompute;
use crate::error::{ConfigError, PlayError};
use crate::hand::Hand;
use crate::play_state::{PlayState, Selection};
use crate::pool::CardPool;
use crate::types::PlayerId;

/// A candidate play for the active player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub hand_slot: usize,
    pub cell: usize,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) id: PlayerId,
    pub(crate) hand: Hand,
    pub(crate) score: usize,
    // Column the hand is drawn in, relative to the board's left edge
    pub(crate) anchor_column: usize,
    pub(crate) active: bool,
}

impl Player {
    fn new(id: PlayerId, hand: Hand, board_width: usize) -> Self {
        let anchor_column = match id {
            PlayerId::One => board_width + 1,
            PlayerId::Two => 0,
        };
        Self {
            id,
            hand,
            score: 0,
            anchor_column,
            active: false,
        }
    }

    #[inline]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    #[inline]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[inline]
    pub fn score(&self) -> usize {
        self.score
    }

    #[inline]
    pub fn anchor_column(&self) -> usize {
        self.anchor_column
    }

    #[inline]
    pub fn is_active_turn(&self) -> bool {
        self.active
    }
}

/// Who is ahead on score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Leader(PlayerId),
    Draw,
}

/// What a committed play did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub player: PlayerId,
    pub hand_slot: usize,
    pub cell: usize,
    pub card: CardId,
    pub captured: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) players: [Player; 2],
    pub(crate) board: Board,
    pub(crate) scores: [usize; 2],
    pub(crate) standing: Standing,
    pub(crate) finished: bool,
    pub(crate) play_state: PlayState,
}

impl GameState {
    /// Deal a fresh game: build the board, deal `hand_size` cards to each
    /// player from a generated (or loaded) pool, pick the first player at random.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut pool = match &config.cards {
            Some(path) => CardPool::load(path, rng)?,
            None => CardPool::generate(2 * config.hand_size, rng)?,
        };
        let mut hand_one = Hand::new(PlayerId::One);
        let mut hand_two = Hand::new(PlayerId::Two);
        pool.deal(&mut hand_one, config.hand_size)?;
        pool.deal(&mut hand_two, config.hand_size)?;
        let first = choose_first(rng);
        let state = Self::from_parts(Board::new(config.height, config.width)?, hand_one, hand_two, first);
        info!(
            height = config.height,
            width = config.width,
            first = first.label(),
            "new game dealt"
        );
        Ok(state)
    }

    /// Deterministic construction with explicit hands and first player.
    /// The two hands together must hold at least one card per cell.
    pub fn with_hands(
        height: usize,
        width: usize,
        hand_one: Vec<Card>,
        hand_two: Vec<Card>,
        first: PlayerId,
    ) -> Result<Self, ConfigError> {
        let board = Board::new(height, width)?;
        check_fillable(hand_one.len() + hand_two.len(), board.cell_count(), height, width)?;
        Ok(Self::from_parts(
            board,
            Hand::with_cards(PlayerId::One, hand_one),
            Hand::with_cards(PlayerId::Two, hand_two),
            first,
        ))
    }

    fn from_parts(board: Board, hand_one: Hand, hand_two: Hand, first: PlayerId) -> Self {
        let width = board.width();
        let mut players = [
            Player::new(PlayerId::One, hand_one, width),
            Player::new(PlayerId::Two, hand_two, width),
        ];
        players[first.index()].active = true;
        let mut state = Self {
            players,
            board,
            scores: [0; 2],
            standing: Standing::Draw,
            finished: false,
            play_state: PlayState::new(),
        };
        recompute(&mut state);
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[inline]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[inline]
    pub fn hand(&self, id: PlayerId) -> &Hand {
        &self.players[id.index()].hand
    }

    /// The player whose turn it is.
    #[inline]
    pub fn active_player(&self) -> PlayerId {
        if self.players[0].active {
            PlayerId::One
        } else {
            PlayerId::Two
        }
    }

    #[inline]
    pub fn scores(&self) -> [usize; 2] {
        self.scores
    }

    #[inline]
    pub fn standing(&self) -> Standing {
        self.standing
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn play_state(&self) -> &PlayState {
        &self.play_state
    }

    pub(crate) fn toggle_active_player(&mut self) {
        for p in &mut self.players {
            p.active = !p.active;
        }
    }

    /// Validate a selection against the current game and record it.
    /// Rejected selections leave the recorded selection untouched.
    fn feed(&mut self, selection: Selection) -> Result<bool, PlayError> {
        if self.finished {
            return Err(PlayError::GameFinished);
        }
        match selection {
            Selection::Hand { player, slot } => {
                if player != self.active_player() {
                    return Err(PlayError::NotYourTurn(player));
                }
                self.hand(player).check_slot(slot)?;
            }
            Selection::Board { cell } => {
                self.board.check_index(cell)?;
                if !self.board.is_playable(cell) {
                    return Err(PlayError::CellOccupied(cell));
                }
            }
        }
        Ok(self.play_state.select(selection))
    }

    /// Record a selection and report whether a play is now legal.
    /// Never touches the board or the hands.
    pub fn attempt_play(&mut self, selection: Selection) -> Result<bool, PlayError> {
        self.feed(selection)
    }

    /// Record a selection and, if that completes a hand-then-board pair,
    /// commit the play.
    pub fn commit_play(&mut self, selection: Selection) -> Result<PlayReport, PlayError> {
        self.feed(selection)?;
        let (hand_slot, cell) = self
            .play_state
            .pending_play()
            .ok_or(PlayError::SelectionIncomplete)?;
        apply_play(self, Move { hand_slot, cell })
    }

    /// Controller entry point: `Ok(None)` while a selection is still partial.
    pub fn handle_selection(&mut self, selection: Selection) -> Result<Option<PlayReport>, PlayError> {
        if !self.attempt_play(selection)? {
            return Ok(None);
        }
        match self.play_state.pending_play() {
            Some((hand_slot, cell)) => apply_play(self, Move { hand_slot, cell }).map(Some),
            None => Ok(None),
        }
    }

    /// Abandon the current partial selection.
    pub fn reset_selection(&mut self) {
        self.play_state.reset();
    }

    /// Every play open to the active player, ordered by cell then hand slot.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.finished {
            return Vec::new();
        }
        let n = self.hand(self.active_player()).len();
        (0..self.board.cell_count())
            .filter(|&cell| self.board.is_playable(cell))
            .flat_map(|cell| (0..n).map(move |hand_slot| Move { hand_slot, cell }))
            .collect()
    }
}

/// Pick the first player uniformly at random.
pub fn choose_first<R: Rng + ?Sized>(rng: &mut R) -> PlayerId {
    if rng.gen_bool(0.5) {
        PlayerId::One
    } else {
        PlayerId::Two
    }
}
