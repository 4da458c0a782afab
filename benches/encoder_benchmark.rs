#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for output encoders (TGA, PNG).

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use meshraster::color::Bgra;
use meshraster::framebuffer::Framebuffer;
use meshraster::mesh::Mesh;
use meshraster::output::{PngEncoder, TgaEncoder};
use meshraster::prelude::{RenderConfig, RenderMode, Renderer};
use std::hint::black_box;

/// Gradient pattern: few runs, worst case for RLE.
fn gradient(width: u32, height: u32) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height).expect("framebuffer creation should succeed");
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            fb.set_pixel(x, y, Bgra::rgb(r, g, 128));
        }
    }
    fb
}

/// A filled triangle on a flat background: long runs.
fn rendered(size: u32) -> Framebuffer {
    let mesh = Mesh::parse("v -0.9 -0.9 0\nv 0.9 -0.5 0\nv 0 0.9 0\nf 1 2 3\n")
        .expect("mesh should parse");
    let renderer = Renderer::new(
        RenderConfig::new().with_size(size).with_mode(RenderMode::Filled),
    )
    .expect("renderer creation should succeed");
    renderer.render_to_framebuffer(&mesh).expect("render should succeed").0
}

fn tga_encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tga_encoder");

    for (name, fb) in [("gradient", gradient(644, 644)), ("rendered", rendered(644))] {
        for rle in [false, true] {
            let encoder = TgaEncoder::new().with_rle(rle);
            group.bench_with_input(
                BenchmarkId::new(name, if rle { "rle" } else { "raw" }),
                &fb,
                |b, fb| {
                    b.iter(|| encoder.to_bytes(black_box(fb)).expect("encoding should succeed"));
                },
            );
        }
    }

    group.finish();
}

fn png_encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoder");

    for (width, height) in [(644, 644), (1920, 1080)] {
        let fb = gradient(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| PngEncoder::to_bytes(black_box(&fb)).expect("encoding should succeed"));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, tga_encoder_benchmark, png_encoder_benchmark);
criterion_main!(benches);
