use crate::state::{GameState, Standing};
use crate::types::PlayerId;

/// Score = cards owned on the board + cards still in hand.
#[inline]
pub fn score(state: &GameState, player: PlayerId) -> usize {
    state.board.count_owned(player) + state.players[player.index()].hand.len()
}

#[inline]
pub fn standing(scores: [usize; 2]) -> Standing {
    match scores[0].cmp(&scores[1]) {
        std::cmp::Ordering::Greater => Standing::Leader(PlayerId::One),
        std::cmp::Ordering::Less => Standing::Leader(PlayerId::Two),
        std::cmp::Ordering::Equal => Standing::Draw,
    }
}

/// Refresh scores, standing and the finished flag after the board changed.
pub fn recompute(state: &mut GameState) {
    let view: &GameState = state;
    let scores = PlayerId::both().map(|p| score(view, p));
    for p in PlayerId::both() {
        state.players[p.index()].score = scores[p.index()];
    }
    state.scores = scores;
    state.standing = standing(scores);
    state.finished = state.board.is_full();
}
