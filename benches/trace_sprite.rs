use pixelhull::prelude::*;

use criterion::{Criterion, criterion_group, criterion_main};

fn trace_sprite(c: &mut Criterion) {
    // A ring around a filled block, enough rows to exercise both passes.
    let mut sprite = shapes::circle(0, 0, 64);
    sprite.merge(&shapes::filled_rect(40, 40, 49, 49));

    let synth = ColliderSynth::default();

    c.bench_function("contour", |b| {
        b.iter(|| synth.contour(&sprite));
    });

    c.bench_function("synthesize", |b| {
        b.iter(|| synth.synthesize(&sprite));
    });

    let sprites: Vec<Sprite> = (4..68).map(|r| shapes::circle(0, 0, r)).collect();
    c.bench_function("synthesize_all", |b| {
        b.iter(|| synth.synthesize_all(&sprites));
    });
}

criterion_group!(benches, trace_sprite);
criterion_main!(benches);
