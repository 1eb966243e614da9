use super::*;
use loa_core::{is_valid_move, legal_moves, Cell, Square};

fn sq(row: i8, col: i8) -> Square {
    Square::new(row, col)
}

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let board = Board::startpos();

    let mv = engine.choose_move(&board, Color::Black).unwrap();

    assert!(is_valid_move(&board, Color::Black, mv.from, mv.to));
    assert!(legal_moves(&board, Color::Black).contains(&mv));
}

#[test]
fn random_engine_handles_no_moves() {
    let mut engine = RandomEngine::new();
    assert!(engine.choose_move(&Board::empty(), Color::White).is_none());

    // A lone piece has nothing on any of its lines and cannot move.
    let mut board = Board::empty();
    board.set_cell(sq(4, 4), Cell::White);
    assert!(engine.choose_move(&board, Color::White).is_none());
}

#[test]
fn random_engine_prefers_the_only_capture() {
    // White at D5 sees one piece on its row and one on its column. Only the
    // row move lands on Black.
    let mut board = Board::empty();
    board.set_cell(sq(3, 3), Cell::White);
    board.set_cell(sq(3, 4), Cell::Black);
    board.set_cell(sq(6, 3), Cell::White);

    let moves = legal_moves(&board, Color::White);
    assert!(moves.len() > 1);
    assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 1);

    for seed in 0..32 {
        let mut engine = RandomEngine::with_seed(seed);
        let mv = engine.choose_move(&board, Color::White).unwrap();
        assert_eq!((mv.from, mv.to), (sq(3, 3), sq(3, 4)));
        assert_eq!(mv.captures, vec![sq(3, 4)]);
    }
}

#[test]
fn select_move_picks_among_captures() {
    let board = Board::startpos();
    let moves = legal_moves(&board, Color::White);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let mv = select_move(&moves, &mut rng).unwrap();
        assert!(mv.is_capture());
    }
}

#[test]
fn select_move_without_captures_uses_whole_list() {
    let quiet: Vec<Move> = legal_moves(&Board::startpos(), Color::White)
        .into_iter()
        .filter(|m| !m.is_capture())
        .collect();
    let mut rng = StdRng::seed_from_u64(3);

    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        let mv = select_move(&quiet, &mut rng).unwrap();
        seen.insert((mv.from, mv.to));
    }
    // 32 quiet moves; 500 draws should hit nearly all of them.
    assert!(seen.len() > 16);
    assert!(select_move(&[], &mut rng).is_none());
}

#[test]
fn seeded_engines_agree() {
    let board = Board::from_preset(loa_core::Preset::Case3);
    let mut a = RandomEngine::with_seed(42);
    let mut b = RandomEngine::with_seed(42);
    for _ in 0..10 {
        assert_eq!(
            a.choose_move(&board, Color::Black),
            b.choose_move(&board, Color::Black)
        );
    }
}
