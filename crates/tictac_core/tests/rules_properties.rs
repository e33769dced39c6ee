//! Property tests for the rule engine and game state invariants.

use proptest::prelude::*;
use tictac_core::{
    Board, Cell, GameInvariants, GameState, InvalidMove, InvariantSet, Move, MoveError, Outcome,
    Player, rules,
};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::X), Just(Cell::O)]
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

fn board_from(cells: [Cell; 9]) -> Board {
    let mut board = Board::new();
    for (mv, cell) in Move::all().zip(cells) {
        board.set(mv.row, mv.col, cell).expect("fresh cell");
    }
    board
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(cell()).prop_map(board_from)
}

/// Boards with every cell claimed.
fn full_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(prop_oneof![Just(Cell::X), Just(Cell::O)]).prop_map(board_from)
}

/// A random order in which to visit all nine cells.
fn move_order() -> impl Strategy<Value = Vec<Move>> {
    Just(Move::all().collect::<Vec<_>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn early_turns_never_decide(board in board(), player in player(), turn in 0usize..4) {
        prop_assert_eq!(rules::evaluate(&board, player, turn), Outcome::InProgress);
    }

    #[test]
    fn owned_line_always_wins(
        line in prop::sample::select(rules::LINES.to_vec()),
        player in player(),
        turn in 4usize..=9,
    ) {
        let mut board = Board::new();
        for (row, col) in line {
            board.set(row, col, player.into()).expect("fresh cell");
        }
        prop_assert_eq!(rules::evaluate(&board, player, turn), Outcome::Win(player));
    }

    #[test]
    fn full_board_without_mover_line_draws_on_final_turn(
        (board, player) in (full_board(), player())
            .prop_filter("mover owns no line", |(board, player)| {
                rules::winning_line(board, *player).is_none()
            }),
    ) {
        prop_assert!(board.is_full());
        prop_assert_eq!(rules::evaluate(&board, player, 9), Outcome::Draw);
        for turn in 4..9 {
            prop_assert_eq!(rules::evaluate(&board, player, turn), Outcome::InProgress);
        }
    }

    #[test]
    fn random_games_keep_invariants(order in move_order()) {
        let mut state = GameState::new();
        let mut accepted = 0usize;

        for mv in order {
            if state.is_over() {
                prop_assert_eq!(state.apply_move(mv), Err(MoveError::GameOver));
                break;
            }
            let before_player = state.current_player();
            state = state.apply_move(mv).expect("unvisited cell");
            accepted += 1;

            prop_assert_eq!(state.turn(), state.history().len() + 1);
            prop_assert_eq!(state.board().get(mv.row, mv.col), Ok(Cell::from(before_player)));
            prop_assert!(GameInvariants::check_all(&state).is_ok());

            if !state.is_over() {
                let expected = if accepted % 2 == 0 { Player::X } else { Player::O };
                prop_assert_eq!(state.current_player(), expected);

                let again = state.apply_move(mv);
                prop_assert_eq!(again, Err(MoveError::InvalidMove(InvalidMove::Occupied(mv))));
            }
        }

        prop_assert!(state.is_over());
        if state.outcome() == Outcome::Draw {
            prop_assert_eq!(state.turn(), 10);
        }
    }
}
