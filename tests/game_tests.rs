use triadgraph::{
    apply_move, score, Card, CardId, ConfigError, GameState, Move, Owner, PlayError, PlayerId, Selection,
    Standing,
};

fn cards(first_id: u32, ranks: [[u8; 4]; 5]) -> Vec<Card> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let id = first_id + i as u32;
            Card::new(CardId(id), format!("card{id}"), *r, Owner::Neutral).expect("valid ranks")
        })
        .collect()
}

/// Every card ties every other, so nothing is ever captured.
fn flat_game(first: PlayerId) -> GameState {
    GameState::with_hands(3, 3, cards(0, [[5; 4]; 5]), cards(10, [[5; 4]; 5]), first)
        .expect("game")
}

/// Select slot then cell for whoever is active.
fn play(state: &mut GameState, slot: usize, cell: usize) -> Result<triadgraph::PlayReport, PlayError> {
    let active = state.active_player();
    assert!(!state.attempt_play(Selection::hand(active, slot))?);
    state.commit_play(Selection::board(cell))
}

fn assert_scores_consistent(state: &GameState) {
    for p in PlayerId::both() {
        let expected = state.board().count_owned(p) + state.hand(p).len();
        assert_eq!(state.scores()[p.index()], expected);
        assert_eq!(state.player(p).score(), expected);
        assert_eq!(score(state, p), expected);
    }
}

#[test]
fn fresh_game_is_a_draw_in_progress() {
    let state = flat_game(PlayerId::One);
    assert_eq!(state.scores(), [5, 5]);
    assert_eq!(state.standing(), Standing::Draw);
    assert!(!state.is_finished());
    assert_eq!(state.active_player(), PlayerId::One);
    assert!(state.player(PlayerId::One).is_active_turn());
    assert!(!state.player(PlayerId::Two).is_active_turn());
    // Dealt cards belong to their holder
    assert!(state
        .hand(PlayerId::Two)
        .iter()
        .all(|c| c.owner() == Owner::Player(PlayerId::Two)));
}

#[test]
fn anchor_columns_flank_the_board() {
    let state = flat_game(PlayerId::One);
    assert_eq!(state.player(PlayerId::One).anchor_column(), 4);
    assert_eq!(state.player(PlayerId::Two).anchor_column(), 0);
    assert_eq!(state.player(PlayerId::One).label(), "Player 1");
}

#[test]
fn attempt_play_does_not_mutate_board_or_hand() {
    let mut state = flat_game(PlayerId::One);
    assert!(!state.attempt_play(Selection::hand(PlayerId::One, 0)).expect("hand"));
    assert!(state.attempt_play(Selection::board(4)).expect("board"));
    assert!(state.board().is_playable(4));
    assert_eq!(state.hand(PlayerId::One).len(), 5);
    assert_eq!(state.active_player(), PlayerId::One);
}

#[test]
fn commit_moves_card_and_toggles_turn() {
    let mut state = flat_game(PlayerId::Two);
    let report = play(&mut state, 1, 4).expect("play");
    assert_eq!(report.player, PlayerId::Two);
    assert_eq!(report.card, CardId(11));
    assert_eq!(report.cell, 4);
    assert!(report.captured.is_empty());
    assert_eq!(state.board().get(4).map(Card::id), Some(CardId(11)));
    assert_eq!(state.hand(PlayerId::Two).len(), 4);
    assert_eq!(state.active_player(), PlayerId::One);
    assert!(!state.play_state().play_possible());
    assert!(!state.play_state().has_hand_selection());
    assert_scores_consistent(&state);
}

#[test]
fn commit_before_pair_is_complete_is_rejected() {
    let mut state = flat_game(PlayerId::One);
    assert_eq!(
        state.commit_play(Selection::board(0)).unwrap_err(),
        PlayError::SelectionIncomplete
    );
    assert_eq!(
        state.commit_play(Selection::hand(PlayerId::One, 0)).unwrap_err(),
        PlayError::SelectionIncomplete
    );
    assert!(state.board().is_playable(0));
    assert_eq!(state.active_player(), PlayerId::One);
}

#[test]
fn wrong_player_and_bad_indices_leave_state_alone() {
    let mut state = flat_game(PlayerId::One);
    assert_eq!(
        state.attempt_play(Selection::hand(PlayerId::Two, 0)).unwrap_err(),
        PlayError::NotYourTurn(PlayerId::Two)
    );
    let err = state.attempt_play(Selection::hand(PlayerId::One, 5)).unwrap_err();
    assert_eq!(err, PlayError::InvalidHandIndex { index: 5, len: 5 });
    assert!(err.is_invalid_index());
    let err = state.attempt_play(Selection::board(9)).unwrap_err();
    assert_eq!(err, PlayError::InvalidBoardIndex { index: 9, cells: 9 });
    assert!(!state.play_state().has_hand_selection());
    assert!(!state.play_state().has_board_selection());
}

#[test]
fn occupied_cell_does_not_toggle_turn() {
    let mut state = flat_game(PlayerId::One);
    play(&mut state, 0, 4).expect("play");
    assert_eq!(state.active_player(), PlayerId::Two);
    state
        .attempt_play(Selection::hand(PlayerId::Two, 0))
        .expect("hand");
    assert_eq!(
        state.commit_play(Selection::board(4)).unwrap_err(),
        PlayError::CellOccupied(4)
    );
    assert_eq!(state.active_player(), PlayerId::Two);
    assert_eq!(state.hand(PlayerId::Two).len(), 5);
    // Hand pick is still pending; a free cell completes the play
    let report = state.commit_play(Selection::board(5)).expect("play");
    assert_eq!(report.player, PlayerId::Two);
}

#[test]
fn reset_selection_abandons_partial_input() {
    let mut state = flat_game(PlayerId::One);
    state.attempt_play(Selection::hand(PlayerId::One, 0)).expect("hand");
    state.reset_selection();
    assert!(!state.attempt_play(Selection::board(0)).expect("board"));
    assert!(state.board().is_playable(0));
}

#[test]
fn handle_selection_commits_on_the_board_click() {
    let mut state = flat_game(PlayerId::One);
    assert_eq!(
        state.handle_selection(Selection::hand(PlayerId::One, 0)).expect("hand"),
        None
    );
    let report = state
        .handle_selection(Selection::board(8))
        .expect("board")
        .expect("play committed");
    assert_eq!(report.cell, 8);
    assert_eq!(state.active_player(), PlayerId::Two);
}

#[test]
fn capture_shifts_scores() {
    let hand_one = cards(0, [[9, 9, 9, 9], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1]]);
    let hand_two = cards(10, [[2, 2, 2, 2], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1]]);
    let mut state = GameState::with_hands(3, 3, hand_one, hand_two, PlayerId::Two).expect("game");

    // Player 2 takes the top middle, Player 1 drops the 9s under it
    play(&mut state, 0, 1).expect("play");
    let report = play(&mut state, 0, 4).expect("play");
    assert_eq!(report.captured, vec![1]);
    assert_eq!(state.board().get(1).map(Card::id), Some(CardId(10)));
    assert_eq!(state.board().count_owned(PlayerId::One), 2);
    assert_eq!(state.scores(), [6, 4]);
    assert_eq!(state.standing(), Standing::Leader(PlayerId::One));
    assert_scores_consistent(&state);
}

#[test]
fn game_finishes_exactly_when_the_ninth_cell_fills() {
    let mut state = flat_game(PlayerId::One);
    for cell in 0..9 {
        assert!(!state.is_finished(), "finished early at cell {cell}");
        play(&mut state, 0, cell).expect("play");
        assert_scores_consistent(&state);
    }
    assert!(state.is_finished());
    assert!(state.board().is_full());
    // First player placed 5, second 4 and kept one card
    assert_eq!(state.hand(PlayerId::One).len(), 0);
    assert_eq!(state.hand(PlayerId::Two).len(), 1);
    assert_eq!(state.scores(), [5, 5]);
    assert_eq!(state.standing(), Standing::Draw);
    assert!(state.legal_moves().is_empty());
    assert_eq!(
        state.attempt_play(Selection::hand(state.active_player(), 0)).unwrap_err(),
        PlayError::GameFinished
    );
}

#[test]
fn legal_moves_ordering() {
    let mut state = flat_game(PlayerId::One);
    let moves = state.legal_moves();
    // 9 empty cells * 5 cards = 45 moves
    assert_eq!(moves.len(), 45);
    assert_eq!(moves[0], Move { hand_slot: 0, cell: 0 });
    assert_eq!(moves[4], Move { hand_slot: 4, cell: 0 });
    assert_eq!(moves[5], Move { hand_slot: 0, cell: 1 });

    play(&mut state, 0, 0).expect("play");
    let moves = state.legal_moves();
    assert_eq!(moves.len(), 8 * 5);
    assert!(moves.iter().all(|m| m.cell != 0));
}

#[test]
fn apply_move_is_a_pure_transform() {
    let state = flat_game(PlayerId::One);
    let (ns, report) = apply_move(&state, Move { hand_slot: 2, cell: 3 }).expect("apply_move");
    assert_eq!(report.card, CardId(2));
    assert!(state.board().is_playable(3));
    assert!(!ns.board().is_playable(3));
    assert_eq!(ns.active_player(), PlayerId::Two);

    let err = apply_move(&ns, Move { hand_slot: 0, cell: 3 }).unwrap_err();
    assert_eq!(err, PlayError::CellOccupied(3));
}

#[test]
fn hands_too_short_to_fill_the_board_are_rejected() {
    let hand_one = cards(0, [[5; 4]; 5]);
    let hand_two: Vec<Card> = cards(10, [[5; 4]; 5]).into_iter().take(3).collect();
    let err = GameState::with_hands(3, 3, hand_one, hand_two, PlayerId::One).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));

    // Exactly one card per cell is enough
    let hand_one: Vec<Card> = cards(0, [[5; 4]; 5]).into_iter().take(2).collect();
    let hand_two: Vec<Card> = cards(10, [[5; 4]; 5]).into_iter().take(2).collect();
    let mut state = GameState::with_hands(2, 2, hand_one, hand_two, PlayerId::One).expect("game");
    for cell in 0..4 {
        play(&mut state, 0, cell).expect("play");
    }
    assert!(state.is_finished());
}
