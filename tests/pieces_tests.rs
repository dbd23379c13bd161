//! Piece tests: shapes, letters and rotation against the board

use lettergrid::core::pieces::{generate_letters, PieceLetters};
use lettergrid::core::{Board, Piece, PieceShape, SimpleRng};

const ALLOWED: [char; 9] = ['М', 'Е', 'Т', 'Р', 'О', 'П', 'Л', 'И', 'С'];

#[test]
fn test_letters_come_from_allowed_set() {
    let mut rng = SimpleRng::new(99);
    for shape in [PieceShape::Single, PieceShape::I, PieceShape::T, PieceShape::L] {
        for _ in 0..50 {
            let letters = generate_letters(shape, &ALLOWED, &mut rng);
            assert_eq!(letters.len(), shape.cell_count());
            assert!(letters.iter().all(|c| ALLOWED.contains(c)), "{letters:?}");
        }
    }
}

#[test]
fn test_single_letters_mix_vowels_and_consonants() {
    let mut rng = SimpleRng::new(5);
    let singles: Vec<char> = (0..200)
        .map(|_| generate_letters(PieceShape::Single, &ALLOWED, &mut rng)[0])
        .collect();
    let vowels = singles.iter().filter(|c| matches!(c, 'Е' | 'О' | 'И')).count();
    assert!(vowels > 40 && vowels < 160, "vowels: {vowels}");
}

#[test]
fn test_piece_cells_carry_letters_in_order() {
    let letters: PieceLetters = ['К', 'О', 'Т', 'Ы'].into_iter().collect();
    let piece = Piece::new(PieceShape::I, 2, 0, letters);
    let cells: Vec<(i32, i32, char)> = piece.cells().into_iter().collect();
    assert_eq!(cells, vec![(2, 1, 'К'), (3, 1, 'О'), (4, 1, 'Т'), (5, 1, 'Ы')]);
}

#[test]
fn test_rotation_cycles_back_to_spawn() {
    let board = Board::new(10, 20);
    let letters: PieceLetters = ['А', 'Б', 'В', 'Г'].into_iter().collect();
    let start = Piece::new(PieceShape::T, 4, 4, letters);
    let mut piece = start.clone();
    for _ in 0..4 {
        piece = piece.try_rotate(&board).unwrap();
    }
    assert_eq!(piece, start);
}

#[test]
fn test_rotation_blocked_when_no_kick_fits() {
    // A 3-wide well: an I piece standing upright can't lie down anywhere.
    let mut board = Board::new(3, 6);
    for y in 0..6 {
        board.set_letter(0, y, 'Ж');
        board.set_letter(2, y, 'Ж');
    }
    let letters: PieceLetters = ['А', 'Б', 'В', 'Г'].into_iter().collect();
    let open = Board::new(10, 20);
    let mut piece = Piece::new(PieceShape::I, 0, 0, letters);
    // Rotation 3 of I stands in column x + 1.
    for _ in 0..3 {
        piece = piece.try_rotate(&open).unwrap();
    }
    assert_eq!(piece.x, 0);
    assert_eq!(piece.rotation(), 3);
    assert!(piece.fits(&board, 0, 0));
    assert!(piece.try_rotate(&board).is_none());
}

#[test]
fn test_o_piece_does_not_rotate() {
    let board = Board::new(10, 20);
    let letters: PieceLetters = ['А', 'Б', 'В', 'Г'].into_iter().collect();
    assert!(Piece::new(PieceShape::O, 3, 3, letters).try_rotate(&board).is_none());
}
