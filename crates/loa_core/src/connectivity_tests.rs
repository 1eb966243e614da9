use super::*;

fn board_with(pieces: &[(i8, i8, Color)]) -> Board {
    let mut board = Board::empty();
    for &(r, c, color) in pieces {
        board.set_cell(Square::new(r, c), Cell::from(color));
    }
    board
}

#[test]
fn test_diagonal_chain_is_connected() {
    let mut board = board_with(&[
        (0, 0, Color::Black),
        (1, 1, Color::Black),
        (2, 2, Color::Black),
    ]);
    assert!(is_fully_connected(&board, Color::Black));
    assert_eq!(group_count(&board, Color::Black), 1);

    board.set_cell(Square::new(7, 7), Cell::Black);
    assert!(!is_fully_connected(&board, Color::Black));
    assert_eq!(group_count(&board, Color::Black), 2);
}

#[test]
fn test_no_pieces_is_not_connected() {
    let board = Board::empty();
    assert!(!is_fully_connected(&board, Color::Black));
    assert!(!is_fully_connected(&board, Color::White));
    assert_eq!(group_count(&board, Color::White), 0);
    assert_eq!(evaluate(&board), WinCheck::Undecided);
}

#[test]
fn test_single_piece_is_connected() {
    let board = board_with(&[(4, 4, Color::White)]);
    assert!(is_fully_connected(&board, Color::White));
}

#[test]
fn test_other_color_does_not_bridge() {
    let board = board_with(&[
        (3, 2, Color::Black),
        (3, 3, Color::White),
        (3, 4, Color::Black),
    ]);
    assert!(!is_fully_connected(&board, Color::Black));
    assert!(is_fully_connected(&board, Color::White));
    assert_eq!(evaluate(&board), WinCheck::Connected(Color::White));
}

#[test]
fn test_winding_group() {
    // An S-shape touching only through orthogonal and diagonal steps.
    let board = board_with(&[
        (0, 0, Color::White),
        (0, 1, Color::White),
        (1, 2, Color::White),
        (2, 2, Color::White),
        (3, 1, Color::White),
        (4, 0, Color::White),
        (5, 1, Color::White),
        (6, 2, Color::White),
        (7, 3, Color::White),
    ]);
    assert!(is_fully_connected(&board, Color::White));
}

#[test]
fn test_startpos_groups() {
    let board = Board::startpos();
    assert_eq!(group_count(&board, Color::Black), 2);
    assert_eq!(group_count(&board, Color::White), 2);
    assert_eq!(evaluate(&board), WinCheck::Undecided);
}

#[test]
fn test_both_connected_is_reported() {
    let board = board_with(&[(0, 0, Color::Black), (7, 7, Color::White)]);
    assert_eq!(evaluate(&board), WinCheck::BothConnected);
}

#[test]
fn test_evaluate_black_connected() {
    let board = board_with(&[
        (3, 3, Color::Black),
        (3, 4, Color::Black),
        (0, 0, Color::White),
        (0, 7, Color::White),
    ]);
    assert_eq!(evaluate(&board), WinCheck::Connected(Color::Black));
}
