use biggle::{is_traceable, locate, Board, Grid, Wordlist};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

const WORDS: &[&str] = &[
    "foe", "idea", "feet", "toe", "ten", "fend", "of", "vat", "feta", "fate", "tone", "dent",
];

// a saturated grid is the worst case for the search
const SATURATED: &[&str] = &["E E E E", "E E E E", "E E E E", "E E E E"];

fn bench_is_traceable(c: &mut Criterion, name: &str, grid: &Grid, word: &[&str]) {
    c.bench_function(&format!("path.{}", name), |b| {
        b.iter(|| is_traceable(word, &locate(word, grid)))
    });
}

fn bench_check_word(c: &mut Criterion) {
    let board = Board::default();
    c.bench_function("board.check_word", |b| b.iter(|| board.check_word("feta")));
}

fn bench_traceable_words(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(123);
    let board = Board::random(&mut rng).unwrap();
    let wordlist = Wordlist::from_words(WORDS, board.codec());
    c.bench_function("board.find_words", |b| b.iter(|| board.find_words(&wordlist)));
}

fn criterion_benchmark(c: &mut Criterion) {
    let grid = Grid::default();
    bench_is_traceable(c, "1", &grid, &["F", "E", "T", "A"]);
    bench_is_traceable(c, "2", &grid, &["D", "O", "L", "E"]);
    bench_check_word(c);
    bench_traceable_words(c);
}

fn slow_benchmarks(c: &mut Criterion) {
    let grid = Grid::from_strings(SATURATED).unwrap();
    bench_is_traceable(c, "saturated.8", &grid, &["E"; 8]);
    bench_is_traceable(c, "saturated.12", &grid, &["E"; 12]);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
