use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

fn placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for difficulty in Difficulty::ALL {
        group.bench_function(difficulty.name(), |b| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                let mut board = Board::from_config(difficulty.config()).unwrap();
                board
                    .place_mines(&mut RandomMinePlacer::new(black_box(seed)))
                    .unwrap();
                board
            })
        });
    }
    group.finish();
}

fn full_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");

    group.bench_function("empty_255x255", |b| {
        let mut board = Board::new(Coord::MAX, Coord::MAX, 0).unwrap();
        board.place_mines(&mut FixedMinePlacer::new(&[])).unwrap();
        b.iter_batched(
            || board.clone(),
            |mut board| {
                let mut updates = Vec::new();
                cascade(&mut board, black_box((127, 127)), &mut updates).unwrap()
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("hard_first_click", |b| {
        let config = Difficulty::Hard.config();
        b.iter_batched(
            || GameSession::new(config, 7).unwrap(),
            |mut game| game.reveal(black_box((8, 15))).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, placement, full_cascade);
criterion_main!(benches);
