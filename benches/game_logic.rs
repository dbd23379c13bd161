use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lettergrid::core::{
    Board, FallingConfig, FallingLetters, SlideRule, WordFinder, WordList,
};
use lettergrid::types::Direction;

fn filled_board() -> Board {
    Board::from_rows(&[
        "СТОЛБЛАМПА",
        "КНИГАШТУКА",
        "ГРУШАМЕТРО",
        "КОТИКТЕЛОЛ",
        "ПОЛИСКРИКА",
        "..........",
        "ЛЕСДОМСОКЕ",
        "МОРЕРАМАРО",
    ])
}

fn bench_scan_board(c: &mut Criterion) {
    let board = filled_board();
    let dict = WordList::builtin();
    let finder = WordFinder::default();

    c.bench_function("scan_board_10x8", |b| {
        b.iter(|| finder.scan_board(black_box(&board), &dict))
    });
}

fn bench_rotate_with_locks(c: &mut Criterion) {
    let mut board = filled_board();

    c.bench_function("rotate_row_with_locks", |b| {
        b.iter(|| board.rotate_with_locks(black_box(3), Direction::Left, |offset| offset % 3 == 0))
    });
}

fn bench_cyclic_shift(c: &mut Criterion) {
    let mut board = filled_board();

    c.bench_function("cyclic_shift_down", |b| {
        b.iter(|| board.shift(black_box(Direction::Down), SlideRule::Cyclic))
    });
}

fn bench_falling_tick(c: &mut Criterion) {
    let mut game = FallingLetters::new(FallingConfig::default(), WordList::builtin(), 12345)
        .expect("default config is valid");
    game.start();

    c.bench_function("falling_tick_16ms", |b| {
        b.iter(|| {
            if game.is_game_over() {
                game.restart();
            }
            game.tick(black_box(16), false);
        })
    });
}

criterion_group!(
    benches,
    bench_scan_board,
    bench_rotate_with_locks,
    bench_cyclic_shift,
    bench_falling_tick
);
criterion_main!(benches);
