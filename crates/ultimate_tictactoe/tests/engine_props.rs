use proptest::prelude::*;
use ultimate_tictactoe::{
    ActiveBoard, GameEngine, LocalStatus, MoveError, MoveOutcome, Player, Position, Rejection,
    Square, WinRule, invariants, rules,
};

fn win_rule() -> impl Strategy<Value = WinRule> {
    prop_oneof![Just(WinRule::FirstLocalWin), Just(WinRule::MetaBoard)]
}

/// One step of a random game: a pick among legal moves, or a raw attempt
/// that may well be illegal.
#[derive(Debug, Clone)]
enum Step {
    Legal(usize),
    Attempt(usize, usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<usize>().prop_map(Step::Legal),
        1 => (0usize..9, 0usize..9).prop_map(|(b, c)| Step::Attempt(b, c)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every transition either leaves the state alone or obeys the turn,
    /// monotonic-cell and active-board rules.
    #[test]
    fn transitions_respect_rules(
        rule in win_rule(),
        steps in prop::collection::vec(step(), 1..120),
    ) {
        let mut engine = GameEngine::with_rule(rule);

        for step in steps {
            let (board, cell) = match step {
                Step::Legal(pick) => {
                    let moves = engine.legal_moves();
                    if moves.is_empty() {
                        break;
                    }
                    let mv = moves[pick % moves.len()];
                    (*mv.board(), *mv.cell())
                }
                Step::Attempt(b, c) => (
                    Position::from_index(b).unwrap(),
                    Position::from_index(c).unwrap(),
                ),
            };

            let before = engine.state().clone();
            let playable = engine.is_cell_playable(board, cell);
            let result = engine.apply_move(board, cell);
            prop_assert_eq!(playable, result.is_ok());

            let after = engine.state();
            match result {
                Err(_) => prop_assert_eq!(after, &before),
                Ok(outcome) => {
                    let mover = before.current_player();
                    prop_assert_eq!(before.boards().square(board, cell), Square::Empty);
                    prop_assert_eq!(after.boards().square(board, cell), Square::Occupied(mover));

                    // Exactly one square changed.
                    for b in Position::ALL {
                        for c in Position::ALL {
                            if (b, c) != (board, cell) {
                                prop_assert_eq!(
                                    after.boards().square(b, c),
                                    before.boards().square(b, c)
                                );
                            }
                        }
                    }

                    match outcome {
                        MoveOutcome::Continue { next, active } => {
                            prop_assert_eq!(next, mover.opponent());
                            prop_assert_eq!(after.current_player(), next);
                            prop_assert_eq!(after.active_board(), active);
                            let target_closed = rule.is_closed(after.boards().board(cell));
                            if target_closed {
                                prop_assert_eq!(active, ActiveBoard::Any);
                            } else {
                                prop_assert_eq!(active, ActiveBoard::Board(cell));
                            }
                        }
                        MoveOutcome::Won(_) | MoveOutcome::Drawn => {
                            prop_assert_eq!(after.current_player(), mover);
                            prop_assert_eq!(after.active_board(), ActiveBoard::Any);
                            prop_assert!(after.phase().is_over());
                        }
                    }
                }
            }

            if let ActiveBoard::Board(k) = engine.state().active_board() {
                prop_assert!(!engine.state().boards().board(k).is_full());
            }
            prop_assert!(invariants::check_engine(&engine).is_ok());
        }
    }

    /// A constrained player can never leave the required board.
    #[test]
    fn wrong_board_always_rejected(
        rule in win_rule(),
        picks in prop::collection::vec(any::<usize>(), 1..40),
        board in 0usize..9,
        cell in 0usize..9,
    ) {
        let mut engine = GameEngine::with_rule(rule);
        for pick in picks {
            let moves = engine.legal_moves();
            if moves.is_empty() {
                break;
            }
            engine.play(moves[pick % moves.len()]).unwrap();
        }

        let board = Position::from_index(board).unwrap();
        let cell = Position::from_index(cell).unwrap();
        if let ActiveBoard::Board(required) = engine.state().active_board()
            && required != board
            && engine.state().boards().board(board).is_empty(cell)
        {
            let before = engine.state().clone();
            prop_assert_eq!(
                engine.apply_move(board, cell),
                Err(MoveError::Rejected(Rejection::WrongBoard { required }))
            );
            prop_assert_eq!(engine.state(), &before);
        }
    }
}

/// Orders a triple so that `board`'s own index, if present, comes last.
fn order_triple(board: Position, triple: [Position; 3]) -> [Position; 3] {
    let mut ordered = triple;
    ordered.sort_by_key(|c| *c == board);
    ordered
}

/// Legal moves with which `player` completes `triple` on `board`: the
/// opponent answers each mark by playing cell `board` elsewhere, which
/// sends the mover straight back.
fn triple_sequence(
    board: Position,
    triple: [Position; 3],
    player: Player,
) -> Vec<(Position, Position)> {
    let [a, b, c] = order_triple(board, triple);
    let mut moves = Vec::new();
    if player == Player::O {
        let opener = Position::ALL
            .into_iter()
            .find(|s| ![a, b, board].contains(s))
            .unwrap();
        moves.push((opener, board));
    }
    moves.extend([(board, a), (a, board), (board, b), (b, board), (board, c)]);
    moves
}

#[test]
fn every_triple_wins_for_either_mark() {
    for triple in rules::LINES {
        for board in Position::ALL {
            for player in [Player::X, Player::O] {
                let mut engine = GameEngine::new();
                let mut last = None;
                for (b, c) in triple_sequence(board, triple, player) {
                    last = Some(engine.apply_move(b, c).unwrap());
                }

                assert_eq!(last, Some(MoveOutcome::Won(player)), "{triple:?} on {board}");
                assert_eq!(
                    engine.state().boards().board(board).status(),
                    LocalStatus::Won(player)
                );
                assert_eq!(engine.state().winner(), Some(player));
            }
        }
    }
}
