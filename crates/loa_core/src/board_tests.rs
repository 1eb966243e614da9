use super::*;
use std::sync::{Arc, Mutex};

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

/// Records a tag plus the board's piece total on every notification.
struct Recorder {
    tag: u8,
    seen: Arc<Mutex<Vec<(u8, u32)>>>,
}

impl BoardObserver for Recorder {
    fn on_board_changed(&mut self, board: &Board) {
        let counts = board.count_pieces();
        self.seen
            .lock()
            .unwrap()
            .push((self.tag, counts.black + counts.white));
    }
}

fn recorder(tag: u8, seen: &Arc<Mutex<Vec<(u8, u32)>>>) -> Box<dyn BoardObserver> {
    Box::new(Recorder {
        tag,
        seen: Arc::clone(seen),
    })
}

#[test]
fn test_startpos_layout() {
    let board = Board::startpos();
    let counts = board.count_pieces();
    assert_eq!(counts.black, 12);
    assert_eq!(counts.white, 12);
    assert_eq!(counts.empty(), 40);

    for corner in [sq(0, 0), sq(0, 7), sq(7, 0), sq(7, 7)] {
        assert!(board.is_empty_at(corner), "corner {corner} should be empty");
    }
    for i in 1..7 {
        assert_eq!(board.color_at(sq(0, i)), Some(Color::Black));
        assert_eq!(board.color_at(sq(7, i)), Some(Color::Black));
        assert_eq!(board.color_at(sq(i, 0)), Some(Color::White));
        assert_eq!(board.color_at(sq(i, 7)), Some(Color::White));
    }
    assert!(board.is_empty_at(sq(3, 3)));
}

#[test]
fn test_display_startpos() {
    let text = Board::startpos().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], ". B B B B B B .");
    assert_eq!(lines[1], "W . . . . . . W");
    assert_eq!(lines[7], ". B B B B B B .");
}

#[test]
fn test_cell_out_of_bounds() {
    let board = Board::startpos();
    assert_eq!(board.cell(sq(-1, 0)), None);
    assert_eq!(board.cell(sq(0, 8)), None);
    assert_eq!(board.color_at(sq(8, 8)), None);
    assert!(!board.is_empty_at(sq(8, 0)));
}

#[test]
fn test_set_cell_out_of_bounds_is_ignored() {
    let mut board = Board::startpos();
    let before = board.clone();
    assert!(!board.set_cell(sq(8, 0), Cell::Black));
    assert!(!board.set_cell(sq(0, -1), Cell::White));
    assert_eq!(board, before);
}

#[test]
fn test_move_piece_has_no_legality_checks() {
    let mut board = Board::startpos();
    // Not a legal move, but the board only moves what it is told to.
    assert!(board.move_piece(sq(0, 1), sq(4, 4)));
    assert!(board.is_empty_at(sq(0, 1)));
    assert_eq!(board.color_at(sq(4, 4)), Some(Color::Black));
    assert_eq!(board.last_move(), Some((sq(0, 1), sq(4, 4))));

    // Landing on an occupied square overwrites it.
    assert!(board.move_piece(sq(4, 4), sq(1, 0)));
    assert_eq!(board.color_at(sq(1, 0)), Some(Color::Black));
    assert_eq!(board.count(Color::White), 11);
    assert_eq!(board.count(Color::Black), 12);

    assert!(!board.move_piece(sq(1, 0), sq(1, -1)));
    assert_eq!(board.color_at(sq(1, 0)), Some(Color::Black));
}

#[test]
fn test_clear_and_reset() {
    let mut board = Board::startpos();
    board.move_piece(sq(0, 1), sq(1, 1));
    board.clear();
    assert_eq!(board.count_pieces(), PieceCounts::default());
    assert_eq!(board.last_move(), None);

    board.reset();
    assert_eq!(board, Board::startpos());
    assert_eq!(board.last_move(), None);
}

#[test]
fn test_squares_of_row_major() {
    let board = Board::startpos();
    let white: Vec<Square> = board.squares_of(Color::White).collect();
    assert_eq!(white.len(), 12);
    assert_eq!(white[0], sq(1, 0));
    assert_eq!(white[1], sq(1, 7));
    assert_eq!(white[11], sq(6, 7));
}

#[test]
fn test_observers_notified_in_registration_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::startpos();
    board.add_observer(recorder(1, &seen));
    board.add_observer(recorder(2, &seen));
    assert_eq!(board.observer_count(), 2);

    board.move_piece(sq(1, 0), sq(0, 1));
    // Observers see the board after the change: one piece was captured.
    assert_eq!(*seen.lock().unwrap(), vec![(1, 23), (2, 23)]);
}

#[test]
fn test_every_mutation_notifies() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::empty();
    board.add_observer(recorder(7, &seen));

    board.set_cell(sq(3, 3), Cell::Black);
    board.move_piece(sq(3, 3), sq(3, 4));
    board.reset();
    board.load_preset(Preset::Case5);
    // Rejected writes stay silent.
    board.set_cell(sq(9, 9), Cell::White);
    board.clear();

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(7, 1), (7, 1), (7, 24), (7, 16), (7, 0)]
    );
}

#[test]
fn test_remove_observer() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::startpos();
    let first = board.add_observer(recorder(1, &seen));
    board.add_observer(recorder(2, &seen));

    assert!(board.remove_observer(first));
    assert!(!board.remove_observer(first));
    board.set_cell(sq(3, 3), Cell::White);
    assert_eq!(*seen.lock().unwrap(), vec![(2, 25)]);
}

#[test]
fn test_clone_drops_observers() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut board = Board::startpos();
    board.add_observer(recorder(1, &seen));

    let mut copy = board.clone();
    assert_eq!(copy.observer_count(), 0);
    assert_eq!(copy, board);
    copy.set_cell(sq(3, 3), Cell::Black);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_preset_layouts() {
    let case1 = Board::from_preset(Preset::Case1);
    assert_eq!(case1.count(Color::Black), 9);
    assert_eq!(case1.count(Color::White), 7);
    assert_eq!(case1.color_at(sq(1, 0)), Some(Color::White));
    assert_eq!(case1.color_at(sq(3, 5)), Some(Color::Black));
    assert_eq!(case1.color_at(sq(6, 7)), Some(Color::White));

    let case3 = Board::from_preset(Preset::Case3);
    assert_eq!(case3.count(Color::Black), 9);
    assert_eq!(case3.count(Color::White), 6);
    assert_eq!(case3.color_at(sq(3, 2)), Some(Color::Black));
    assert_eq!(case3.color_at(sq(4, 5)), Some(Color::White));

    let case5 = Board::from_preset(Preset::Case5);
    assert_eq!(case5.count(Color::Black), 9);
    assert_eq!(case5.count(Color::White), 7);
    assert_eq!(case5.color_at(sq(0, 3)), Some(Color::White));
    assert_eq!(case5.color_at(sq(1, 2)), Some(Color::Black));
    assert_eq!(case5.color_at(sq(5, 7)), Some(Color::White));
}

#[test]
fn test_paired_presets_share_layout() {
    assert_eq!(
        Board::from_preset(Preset::Case1),
        Board::from_preset(Preset::Case2)
    );
    assert_eq!(
        Board::from_preset(Preset::Case3),
        Board::from_preset(Preset::Case4)
    );
    assert_ne!(
        Board::from_preset(Preset::Case1),
        Board::from_preset(Preset::Case3)
    );
}

#[test]
fn test_preset_round_setup() {
    assert_eq!(Preset::Case1.player1_color(), Color::Black);
    assert_eq!(Preset::Case2.player1_color(), Color::White);
    assert_eq!(Preset::Case3.player1_color(), Color::White);
    assert_eq!(Preset::Case4.player1_color(), Color::Black);
    assert!(Preset::Case4.player1_starts());
    assert!(!Preset::Case5.player1_starts());
}

#[test]
fn test_preset_numbers() {
    for p in Preset::ALL {
        assert_eq!(Preset::from_number(p.number()), Some(p));
    }
    assert_eq!(Preset::from_number(0), None);
    assert_eq!(Preset::from_number(6), None);
}
