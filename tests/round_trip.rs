mod common;

use bayer_demosaic::image_pipeline::{
    BayerPattern, DemosaicConfig, DemosaicError, DemosaicPipeline, Method, demosaic, demosaic_named,
    generate_masks, sample_mosaic,
};
use common::{channels, init_logging, flat, gray_ramp, max_interior_error, mean_abs_error, smooth_scene};
use ndarray::Axis;

const PLAIN: [BayerPattern; 4] = [
    BayerPattern::Rggb,
    BayerPattern::Bggr,
    BayerPattern::Grbg,
    BayerPattern::Gbrg,
];

#[test]
fn constant_six_by_six_scenario() {
    let image = flat(6, 6, 254.0);
    let mosaic = sample_mosaic(image.view(), BayerPattern::Rggb).unwrap();
    for method in Method::ALL {
        let rgb = demosaic(mosaic.view(), BayerPattern::Rggb, method, true).unwrap();
        assert_eq!(rgb.dim(), (6, 6, 3));
        for &v in rgb.iter() {
            assert!((v - 254.0).abs() < 1e-9, "{method}: got {v}");
        }
    }
}

#[test]
fn flat_colour_survives_every_pattern() {
    let image = ndarray::Array3::from_shape_fn((8, 10, 3), |(_, _, ch)| [30.0, 120.0, 210.0][ch]);
    for pattern in PLAIN {
        let mosaic = sample_mosaic(image.view(), pattern).unwrap();
        for method in Method::ALL {
            for refine in [false, true] {
                let rgb = demosaic(mosaic.view(), pattern, method, refine).unwrap();
                let err = max_interior_error(rgb.view(), image.view(), 0);
                assert!(err < 1e-9, "{method} {pattern} refine={refine}: {err}");
            }
        }
    }
}

#[test]
fn linear_gray_ramp_is_exact_inside() {
    let image = gray_ramp(24, 24);
    for pattern in PLAIN {
        let mosaic = sample_mosaic(image.view(), pattern).unwrap();

        let rgb = demosaic(mosaic.view(), pattern, Method::Bilinear, false).unwrap();
        assert!(max_interior_error(rgb.view(), image.view(), 1) < 1e-9, "bilinear {pattern}");

        let rgb = demosaic(mosaic.view(), pattern, Method::Malvar2004, false).unwrap();
        assert!(max_interior_error(rgb.view(), image.view(), 2) < 1e-9, "malvar {pattern}");

        for refine in [false, true] {
            let rgb = demosaic(mosaic.view(), pattern, Method::Menon2007, refine).unwrap();
            assert!(
                max_interior_error(rgb.view(), image.view(), 10) < 1e-9,
                "menon {pattern} refine={refine}"
            );
        }
    }
}

#[test]
fn smooth_scene_has_small_error() {
    let image = smooth_scene(64, 64);
    let mosaic = sample_mosaic(image.view(), BayerPattern::Grbg).unwrap();
    for method in Method::ALL {
        let rgb = demosaic(mosaic.view(), BayerPattern::Grbg, method, true).unwrap();
        let mae = mean_abs_error(rgb.view(), image.view());
        assert!(mae < 2.0, "{method}: mean absolute error {mae}");
    }
}

#[test]
fn sampled_positions_are_kept() {
    let image = smooth_scene(12, 14);
    let pattern = BayerPattern::Bggr;
    let masks = generate_masks(pattern, (12, 14));
    let mosaic = sample_mosaic(image.view(), pattern).unwrap();
    for method in Method::ALL {
        let rgb = demosaic(mosaic.view(), pattern, method, true).unwrap();
        for ((r, c), &v) in mosaic.indexed_iter() {
            let ch = masks.pattern().channel_at(r, c).index();
            assert_eq!(rgb[[r, c, ch]], v, "{method} at ({r},{c})");
        }
    }
}

#[test]
fn aux_pattern_round_trip() {
    let image = flat(6, 6, 80.0);
    let mosaic = sample_mosaic(image.view(), BayerPattern::Rgxb).unwrap();
    let rgb = demosaic(mosaic.view(), BayerPattern::Rgxb, Method::Bilinear, false).unwrap();
    assert_eq!(channels(&rgb), 4);
    // Dead photosites read as zero, so the aux plane is empty.
    assert!(rgb.index_axis(Axis(2), 3).iter().all(|&v| v == 0.0));

    for method in [Method::Malvar2004, Method::Menon2007] {
        let err = demosaic(mosaic.view(), BayerPattern::Rgxb, method, true).unwrap_err();
        assert!(matches!(err, DemosaicError::UnsupportedPattern { .. }));
    }
}

#[test]
fn unknown_pattern_is_rejected() {
    let mosaic = ndarray::Array2::<f64>::zeros((4, 4));
    let err = demosaic_named(mosaic.view(), "ABCD", "bilinear", false).unwrap_err();
    assert!(matches!(err, DemosaicError::InvalidPattern(ref name) if name == "ABCD"));
    assert!(err.to_string().contains("ABCD"));
}

#[test]
fn pipeline_reuses_masks_across_calls() {
    init_logging();
    let pipeline = DemosaicPipeline::new(DemosaicConfig::builder().method(Method::Malvar2004).build());
    let image = smooth_scene(16, 16);
    for _ in 0..3 {
        let mosaic = pipeline.sample(image.view(), BayerPattern::Gbrg).unwrap();
        pipeline.process(mosaic.view(), BayerPattern::Gbrg).unwrap();
    }
    assert_eq!(pipeline.cache().len(), 1);
}

#[test]
fn every_benchmarked_configuration_succeeds() {
    let scene = ndarray::Array3::from_shape_fn((128, 128, 3), |(y, x, ch)| ((x * (ch + 1) + y * 3) % 256) as f64);
    let mosaic = sample_mosaic(scene.view(), BayerPattern::Rggb).unwrap();
    for method in Method::ALL {
        for refine in [false, true] {
            for cache in [false, true] {
                let config = DemosaicConfig::builder()
                    .method(method)
                    .refine(refine)
                    .cache_masks(cache)
                    .build();
                let rgb = DemosaicPipeline::new(config)
                    .process(mosaic.view(), BayerPattern::Rggb)
                    .unwrap();
                assert_eq!(rgb.dim(), (128, 128, 3));
                assert!(rgb.iter().all(|v| v.is_finite()), "{method}");
            }
        }
    }
}
