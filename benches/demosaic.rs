use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use bayer_demosaic::image_pipeline::{
    BayerPattern, DemosaicConfig, DemosaicPipeline, Method, sample_mosaic,
};
use ndarray::{Array2, Array3};

fn generate_mock_mosaic(width: usize, height: usize) -> Array2<f64> {
    let scene = Array3::from_shape_fn((height, width, 3), |(y, x, ch)| {
        ((x * (ch + 1) + y * 3) % 256) as f64
    });
    sample_mosaic(scene.view(), BayerPattern::Rggb).expect("sampling an RGB scene")
}

fn benchmark_method_sizes(c: &mut Criterion) {
    let sizes = vec![
        (128, 128, "128x128"),
        (512, 512, "512x512"),
        (1024, 1024, "1024x1024"),
    ];

    for method in Method::ALL {
        let mut group = c.benchmark_group(format!("{method}_by_size"));
        for (width, height, label) in &sizes {
            let mosaic = generate_mock_mosaic(*width, *height);

            group.bench_with_input(
                BenchmarkId::from_parameter(label),
                &mosaic,
                |b, mosaic| {
                    let config = DemosaicConfig::builder().method(method).build();
                    let pipeline = DemosaicPipeline::new(config);

                    b.iter(|| {
                        black_box(pipeline.process(black_box(mosaic.view()), BayerPattern::Rggb).unwrap());
                    });
                },
            );
        }
        group.finish();
    }
}

fn benchmark_refinement(c: &mut Criterion) {
    let mut group = c.benchmark_group("menon_refinement");
    let mosaic = generate_mock_mosaic(512, 512);

    for (refine, label) in [(false, "no_refine"), (true, "refine")] {
        group.bench_function(label, |b| {
            let config = DemosaicConfig::builder()
                .method(Method::Menon2007)
                .refine(refine)
                .build();
            let pipeline = DemosaicPipeline::new(config);

            b.iter(|| {
                black_box(pipeline.process(black_box(mosaic.view()), BayerPattern::Rggb).unwrap());
            });
        });
    }

    group.finish();
}

fn benchmark_mask_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("mask_cache");
    let mosaic = generate_mock_mosaic(512, 512);

    for (cache, label) in [(true, "cached"), (false, "uncached")] {
        group.bench_function(label, |b| {
            let config = DemosaicConfig::builder()
                .method(Method::Bilinear)
                .cache_masks(cache)
                .build();
            let pipeline = DemosaicPipeline::new(config);

            b.iter(|| {
                black_box(pipeline.process(black_box(mosaic.view()), BayerPattern::Rggb).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_method_sizes,
    benchmark_refinement,
    benchmark_mask_cache
);
criterion_main!(benches);
