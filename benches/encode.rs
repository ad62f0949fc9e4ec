use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qrgrid::{encode, Mask};
use qrgrid::{EncodeOptions, QrCode};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_hello_v1", |b| b.iter(|| encode(black_box("HELLO"))));
}

fn bench_encode_medium(c: &mut Criterion) {
    let text = "A".repeat(200);
    c.bench_function("encode_200_bytes_v12", |b| b.iter(|| encode(black_box(&text))));
}

fn bench_encode_max(c: &mut Criterion) {
    let text = "x".repeat(1663);
    c.bench_function("encode_1663_bytes_v40", |b| b.iter(|| encode(black_box(&text))));
}

// Skips the eight-way mask search
fn bench_encode_forced_mask(c: &mut Criterion) {
    let text = "x".repeat(1663);
    let options = EncodeOptions {
        mask: Some(Mask::new(0)),
        ..EncodeOptions::default()
    };
    c.bench_function("encode_1663_bytes_v40_forced_mask", |b| {
        b.iter(|| QrCode::encode_text_with(black_box(&text), &options))
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_medium,
    bench_encode_max,
    bench_encode_forced_mask
);
criterion_main!(benches);
