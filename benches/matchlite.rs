use criterion::{criterion_group, criterion_main, Criterion};
use matchlite::{match_template, min_max_location, PixelBuffer};
use std::hint::black_box;

fn make_image(width: usize, height: usize) -> PixelBuffer<u8> {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) & 0xFF;
            data.push(value as u8);
        }
    }
    PixelBuffer::from_samples(data, width, height, 1).unwrap()
}

fn extract_patch(
    src: &PixelBuffer<u8>,
    x0: usize,
    y0: usize,
    width: usize,
    height: usize,
) -> PixelBuffer<u8> {
    let mut out = Vec::with_capacity(width * height);
    for y in 0..height {
        let row = src.row(y0 + y);
        out.extend_from_slice(&row[x0..x0 + width]);
    }
    PixelBuffer::from_samples(out, width, height, 1).unwrap()
}

fn bench_match_template(c: &mut Criterion) {
    let source = make_image(512, 512);
    let template = extract_patch(&source, 120, 100, 64, 64);

    c.bench_function("match_template_512x512_tpl64", |b| {
        b.iter(|| {
            let map = match_template(black_box(&source), black_box(&template)).unwrap();
            black_box(min_max_location(&map).unwrap())
        })
    });

    let small_tpl = extract_patch(&source, 40, 60, 16, 16);
    c.bench_function("match_template_512x512_tpl16", |b| {
        b.iter(|| {
            let map = match_template(black_box(&source), black_box(&small_tpl)).unwrap();
            black_box(min_max_location(&map).unwrap())
        })
    });
}

criterion_group!(benches, bench_match_template);
criterion_main!(benches);
