use criterion::{criterion_group, criterion_main, Criterion};
use wavemark_core::{embed, extract, GrayMatrix, WatermarkOptions};

pub fn extraction(c: &mut Criterion) {
    let host = GrayMatrix::from_shape_fn((512, 512), |(r, c)| ((r * 7 + c * 13) % 200 + 20) as u8);
    let payload = GrayMatrix::from_elem((128, 128), 200);
    let options = WatermarkOptions::default();
    let watermarked = embed(&host, &payload, &options).expect("Failed to embed watermark");

    c.bench_function("Extraction with reference", |b| {
        b.iter(|| extract(&watermarked, Some(&host), &options).expect("Failed to extract"))
    });
    c.bench_function("Blind extraction", |b| {
        b.iter(|| extract(&watermarked, None, &options).expect("Failed to extract"))
    });
}

criterion_group!(benches, extraction);
criterion_main!(benches);
