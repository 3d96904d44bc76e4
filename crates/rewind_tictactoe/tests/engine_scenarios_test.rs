//! Tests for full games played through the engine.

use rewind_tictactoe::{
    GameEngine, HistoryOrder, Intent, MoveRejection, MoveResult, Outcome, Player, Position,
    SeekError, Square, Step,
};

fn play(engine: &mut GameEngine, indices: &[usize]) {
    for index in indices {
        let pos = Position::from_index(*index).unwrap();
        assert!(
            engine.apply_move(pos).is_applied(),
            "move {} should be legal",
            index
        );
    }
}

#[test]
fn test_top_row_win_then_branch_from_step_two() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 3, 2]);

    assert_eq!(engine.cursor(), Step::new(5));
    match engine.outcome() {
        Outcome::Won { player, line } => {
            assert_eq!(player, Player::X);
            assert_eq!(line.indices(), [0, 1, 2]);
        }
        other => panic!("Expected X to win, got {:?}", other),
    }
    assert_eq!(engine.status().to_string(), "Winner: X");
    assert_eq!(
        engine.view().highlighted(),
        &vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );

    engine.seek(Step::new(2)).unwrap();
    assert_eq!(engine.latest(), Step::new(5));
    assert_eq!(
        engine.apply_move(Position::MiddleLeft),
        MoveResult::Applied(Step::new(3))
    );

    assert_eq!(engine.cursor(), Step::new(3));
    assert_eq!(engine.latest(), Step::new(3));
    assert_eq!(engine.outcome(), Outcome::InProgress);
    let entry = engine.entry(Step::new(3)).unwrap();
    assert_eq!(entry.origin(), Some(Position::MiddleLeft));
    assert_eq!(entry.mover(), Some(Player::X));
    assert!(matches!(
        engine.seek(Step::new(4)),
        Err(SeekError::OutOfRange { .. })
    ));
    assert!(engine.view().highlighted().is_empty());
}

#[test]
fn test_draw_rejects_every_square() {
    // X O X / X O O / O X X
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.status().to_string(), "Draw");
    assert!(engine.valid_moves().is_empty());

    let before = engine.clone();
    for pos in Position::ALL {
        assert_eq!(
            engine.apply_move(pos),
            MoveResult::Ignored(MoveRejection::SquareOccupied(pos))
        );
    }
    assert_eq!(engine, before);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4, 1, 3, 2]);
    let before = engine.clone();

    assert_eq!(
        engine.apply_move(Position::BottomRight),
        MoveResult::Ignored(MoveRejection::GameOver)
    );
    assert_eq!(
        engine.apply_move(Position::TopLeft),
        MoveResult::Ignored(MoveRejection::GameOver)
    );
    assert_eq!(engine, before);
}

#[test]
fn test_seek_preserves_forward_history() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8]);

    engine.seek(Step::START).unwrap();
    assert_eq!(*engine.board(), rewind_tictactoe::Board::new());
    assert_eq!(engine.status().to_string(), "Next player: X");

    engine.seek(Step::new(2)).unwrap();
    assert_eq!(engine.to_move(), Player::X);
    assert_eq!(
        engine.board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );

    engine.seek(Step::new(3)).unwrap();
    assert_eq!(engine.board().occupied_count(), 3);
    assert_eq!(engine.status().to_string(), "Next player: O");
}

#[test]
fn test_reversed_listing_keeps_step_labels() {
    let mut engine = GameEngine::with_order(HistoryOrder::Reversed);
    play(&mut engine, &[4, 0, 8]);
    engine.seek(Step::new(1)).unwrap();

    let view = engine.view();
    let labels: Vec<_> = view.history().iter().map(|item| item.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Go to move #3",
            "Go to move #2",
            "Go to move #1",
            "Go to move start"
        ]
    );
    let current: Vec<_> = view
        .history()
        .iter()
        .filter(|item| *item.current())
        .map(|item| *item.step())
        .collect();
    assert_eq!(current, vec![Step::new(1)]);
    assert_eq!(*view.order(), HistoryOrder::Reversed);
}

#[test]
fn test_text_intents_drive_engine() {
    let mut engine = GameEngine::new();
    for line in ["move 4", "m 0", "toggle", "seek 1", "play top-right"] {
        let intent: Intent = line.parse().unwrap();
        engine.dispatch(intent).unwrap();
    }
    assert_eq!(engine.latest(), Step::new(2));
    assert_eq!(engine.order(), HistoryOrder::Reversed);
    assert_eq!(
        engine.entry(Step::new(2)).unwrap().origin(),
        Some(Position::TopRight)
    );
}
