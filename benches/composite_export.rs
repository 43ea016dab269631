// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_vitrine::application::port::Rasterizer;
use iced_vitrine::domain::compositor::{LogoImage, LogoOverlay, LogoSize, Scene};
use iced_vitrine::domain::media::RawImage;
use iced_vitrine::infrastructure::raster::Filter;
use iced_vitrine::infrastructure::SoftwareRasterizer;
use iced_vitrine::media::{background, export};
use std::hint::black_box;

fn logo_scene() -> Scene {
    let pixels: Vec<u8> = (0..256u32 * 256)
        .flat_map(|i| [(i % 256) as u8, (i / 256) as u8, 128, 255])
        .collect();
    let mut overlay = LogoOverlay::new(LogoSize::new(200));
    overlay.place(LogoImage {
        data_uri: String::new(),
        pixels: RawImage::from_rgba(256, 256, pixels),
    });
    let stage = background::builtin_shirt().expect("shirt");
    Scene::compose(stage, &overlay)
}

fn composite_export_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("composite_export");
    let scene = logo_scene();

    for (name, filter) in [
        ("render_nearest", Filter::Nearest),
        ("render_triangle", Filter::Triangle),
        ("render_lanczos3", Filter::Lanczos3),
    ] {
        let rasterizer = SoftwareRasterizer::new(filter);
        group.bench_function(name, |b| {
            b.iter(|| black_box(rasterizer.render(black_box(&scene)).expect("render")));
        });
    }

    let rendered = SoftwareRasterizer::default()
        .render(&scene)
        .expect("render");
    group.bench_function("encode_png", |b| {
        b.iter(|| black_box(export::encode_png(black_box(&rendered)).expect("encode")));
    });

    group.finish();
}

criterion_group!(benches, composite_export_benchmark);
criterion_main!(benches);
