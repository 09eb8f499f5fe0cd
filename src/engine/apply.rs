use tracing::info;

use crate::engine::score::recompute;
use crate::error::PlayError;
use crate::state::{GameState, Move, PlayReport};

/// Validate a play for the active player without touching anything.
pub fn check_move(state: &GameState, mv: Move) -> Result<(), PlayError> {
    if state.finished {
        return Err(PlayError::GameFinished);
    }
    state.board.check_index(mv.cell)?;
    if !state.board.is_playable(mv.cell) {
        return Err(PlayError::CellOccupied(mv.cell));
    }
    state.hand(state.active_player()).check_slot(mv.hand_slot)
}

/// Commit one play in place: move the card from the active hand onto the
/// board, resolve captures, clear the selection, pass the turn and refresh
/// the derived state. All checks run before the first mutation.
pub fn apply_play(state: &mut GameState, mv: Move) -> Result<PlayReport, PlayError> {
    check_move(state, mv)?;
    let player = state.active_player();
    let card = state.players[player.index()].hand.take(mv.hand_slot)?;
    let card_id = card.id();
    let captured = state.board.play(mv.cell, card)?;

    state.play_state.play_made();
    state.toggle_active_player();
    recompute(state);

    info!(
        player = player.label(),
        card = %card_id,
        cell = mv.cell,
        captured = captured.len(),
        scores = ?state.scores,
        "play committed"
    );
    if state.finished {
        info!(standing = ?state.standing, "game finished");
    }

    Ok(PlayReport {
        player,
        hand_slot: mv.hand_slot,
        cell: mv.cell,
        card: card_id,
        captured,
    })
}

/// Apply a play as a pure transform: returns a new GameState on success.
pub fn apply_move(state: &GameState, mv: Move) -> Result<(GameState, PlayReport), PlayError> {
    let mut ns = state.clone();
    let report = apply_play(&mut ns, mv)?;
    Ok((ns, report))
}
