//! Property tests for board invariants.

use proptest::prelude::*;
use rust_ttt::core::{
    is_full, terminal_status, Board, Cell, Cells, Status, Symbol, WINNING_LINES,
};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Symbol::X)),
        Just(Cell::Occupied(Symbol::O)),
    ]
}

fn cells() -> impl Strategy<Value = Cells> {
    prop::array::uniform9(cell())
}

fn symbol() -> impl Strategy<Value = Symbol> {
    prop_oneof![Just(Symbol::X), Just(Symbol::O)]
}

fn has_line(cells: &Cells, symbol: Symbol) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Occupied(symbol)))
}

/// Replay `moves` alternately from `X`, skipping illegal ones and stopping
/// once the game ends.
fn reachable(moves: &[usize]) -> Board {
    let mut board = Board::new();
    let mut to_move = Symbol::X;
    for &index in moves {
        if board.status().is_terminal() {
            break;
        }
        if board.place(index, to_move) {
            to_move = to_move.opponent();
        }
    }
    board
}

proptest! {
    #[test]
    fn place_on_occupied_never_mutates(cells in cells(), index in 0usize..9, s in symbol()) {
        prop_assume!(!cells[index].is_empty());
        let mut board = Board::from_cells(cells);
        prop_assert!(!board.place(index, s));
        prop_assert_eq!(board.snapshot(), cells);
    }

    #[test]
    fn place_out_of_range_never_mutates(cells in cells(), index in 9usize..1000, s in symbol()) {
        let mut board = Board::from_cells(cells);
        prop_assert!(!board.place(index, s));
        board.clear(index);
        prop_assert_eq!(board.snapshot(), cells);
    }

    #[test]
    fn place_then_clear_restores(cells in cells(), index in 0usize..9, s in symbol()) {
        let mut board = Board::from_cells(cells);
        let before = board.clone();
        if board.place(index, s) {
            prop_assert_eq!(board.cell(index), Some(Cell::Occupied(s)));
            board.clear(index);
        }
        prop_assert_eq!(board, before);
    }

    #[test]
    fn snapshot_is_independent(cells in cells(), index in 0usize..9) {
        let board = Board::from_cells(cells);
        let mut copy = board.snapshot();
        copy[index] = match copy[index] {
            Cell::Empty => Cell::Occupied(Symbol::X),
            _ => Cell::Empty,
        };
        prop_assert_eq!(board.snapshot(), cells);
    }

    #[test]
    fn status_is_consistent(cells in cells()) {
        match terminal_status(&cells) {
            Status::Win(s) => prop_assert!(has_line(&cells, s)),
            Status::Draw => {
                prop_assert!(is_full(&cells));
                prop_assert!(!has_line(&cells, Symbol::X) && !has_line(&cells, Symbol::O));
            }
            Status::Ongoing => {
                prop_assert!(!is_full(&cells));
                prop_assert!(!has_line(&cells, Symbol::X) && !has_line(&cells, Symbol::O));
            }
        }
    }

    #[test]
    fn reachable_boards_have_one_winner_at_most(moves in prop::collection::vec(0usize..9, 0..20)) {
        let board = reachable(&moves);
        let cells = board.snapshot();
        prop_assert!(!(has_line(&cells, Symbol::X) && has_line(&cells, Symbol::O)));

        let x = board.count(Symbol::X);
        let o = board.count(Symbol::O);
        prop_assert!(x == o || x == o + 1);
    }

    #[test]
    fn status_is_pure(cells in cells()) {
        let copy = cells;
        let first = terminal_status(&cells);
        prop_assert_eq!(terminal_status(&cells), first);
        prop_assert_eq!(cells, copy);
    }
}
