// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the bilevel-image crate. Covers binarization with
// the default and the finest threshold map, and whitespace cropping, on a
// synthetic page-sized image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use bilevel_image::{BinarizeOptions, BinaryImageProcessor, ThresholdMap};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// 640x480 color gradient with a dark block in the middle and a white margin.
fn synthetic_page() -> DynamicImage {
    let (width, height) = (640u32, 480u32);
    let mut img = RgbImage::from_fn(width, height, |x, y| {
        if x < 40 || y < 40 || x >= width - 40 || y >= height - 40 {
            return Rgb([255, 255, 255]);
        }
        let v = (x * 255 / width) as u8;
        Rgb([v, (y * 255 / height) as u8, 255 - v])
    });
    draw_filled_rect_mut(&mut img, Rect::at(200, 150).of_size(240, 180), Rgb([0, 0, 0]));
    DynamicImage::ImageRgb8(img)
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_to_binary(c: &mut Criterion) {
    let processor = BinaryImageProcessor::from_dynamic(synthetic_page());
    let default_options = BinarizeOptions::default();
    let bayer_options = BinarizeOptions::default().with_threshold_map(ThresholdMap::O8x8);

    c.bench_function("to_binary o2x2 (640x480)", |b| {
        b.iter(|| black_box(processor.to_binary(black_box(&default_options))));
    });

    c.bench_function("to_binary o8x8 (640x480)", |b| {
        b.iter(|| black_box(processor.to_binary(black_box(&bayer_options))));
    });
}

/// Crop a binarized page. Dominated by the single content scan.
fn bench_crop_whitespace(c: &mut Criterion) {
    let binary = BinaryImageProcessor::from_dynamic(synthetic_page())
        .to_binary(&BinarizeOptions::default());

    c.bench_function("crop_whitespace (640x480)", |b| {
        b.iter(|| black_box(binary.crop_whitespace()));
    });
}

criterion_group!(benches, bench_to_binary, bench_crop_whitespace);
criterion_main!(benches);
