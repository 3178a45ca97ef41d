use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vote_tetris::core::{Game, Piece, Playfield, Snapshot};
use vote_tetris::input::Ballot;
use vote_tetris::types::{ColorTag, ResolvedAction, RotateDir, ShapeKind, VoteKind, BOARD_HEIGHT};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick(black_box(ResolvedAction::default()));
        })
    });
}

fn bench_hard_drop_tick(c: &mut Criterion) {
    let action = ResolvedAction {
        hard_drop: true,
        ..Default::default()
    };

    c.bench_function("hard_drop_tick", |b| {
        b.iter(|| {
            let mut game = Game::new(12345);
            game.tick(black_box(action));
        })
    });
}

fn bench_rotation(c: &mut Criterion) {
    let piece = Piece::new(ShapeKind::T, ColorTag::Blue);

    c.bench_function("rotate_candidate", |b| {
        b.iter(|| black_box(&piece).rotated(RotateDir::Cw))
    });
}

fn bench_validity_scan(c: &mut Criterion) {
    // A tall stack: worst case for the linear occupancy scan.
    let mut pieces = Vec::new();
    for y in 5..BOARD_HEIGHT {
        for x in (0..8).step_by(4) {
            let cells: Vec<(i8, i8)> = (x..x + 4).map(|cx| (cx, y)).collect();
            pieces.push(Piece::from_parts(&cells, (0, 0), ColorTag::Green));
        }
    }
    let falling = Piece::new(ShapeKind::I, ColorTag::Red);
    pieces.push(falling);
    let last = pieces.len() - 1;

    c.bench_function("is_valid_on_full_stack", |b| {
        b.iter(|| {
            let field = Playfield::new(black_box(&pieces));
            field.is_valid(last, &pieces[last].fallen())
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let game = Game::new(777);

    c.bench_function("snapshot_capture", |b| {
        b.iter(|| Snapshot::capture(black_box(&game)))
    });
}

fn bench_ballot_resolve(c: &mut Criterion) {
    let mut ballot = Ballot::default();
    for _ in 0..100 {
        ballot.cast(VoteKind::Left1);
        ballot.cast(VoteKind::RotateCw);
        ballot.cast(VoteKind::HardDrop);
    }

    c.bench_function("ballot_resolve", |b| {
        b.iter(|| black_box(&ballot).resolve())
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_tick,
    bench_rotation,
    bench_validity_scan,
    bench_snapshot,
    bench_ballot_resolve
);
criterion_main!(benches);
