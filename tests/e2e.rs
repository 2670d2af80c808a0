mod common;

use common::synthetic_image::{disc_mask, gradient_rgba, point_mask};
use edge_bleed::classify::classify;
use edge_bleed::mask::{ShellMaskProvider, UvMesh, UvRasterizer};
use edge_bleed::propagate::{propagate_with_options, PropagateOptions};
use edge_bleed::resample::resample;
use edge_bleed::task::BleedTask;
use edge_bleed::{bleed, bleed_buffers, BleedError, EdgeBleeder, ImageRgba, Rgba};
use nalgebra::Vector2;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bits(img: &ImageRgba) -> Vec<[u32; 4]> {
    img.data.iter().map(|p| p.0.map(f32::to_bits)).collect()
}

#[test]
fn fully_opaque_mask_is_identity() {
    init_logging();
    let source = gradient_rgba(17, 9);
    let mask = ImageRgba::filled(17, 9, Rgba::new(0.0, 0.0, 0.0, 0.5));
    let out = bleed(&source, &mask, 17, 9).unwrap();
    assert_eq!(bits(&out), bits(&source));
}

#[test]
fn center_seed_resolves_all_neighbors_in_one_round() {
    init_logging();
    let mut source = ImageRgba::new(3, 3);
    source.set(1, 1, Rgba::RED);
    let mask = point_mask(3, 3, &[(1, 1)]);
    let report = EdgeBleeder::default()
        .process_with_diagnostics(&source, &mask, 3, 3)
        .unwrap();
    assert_eq!(report.trace.propagation.as_ref().unwrap().rounds, 1);
    assert!(report.image.data.iter().all(|&c| c == Rgba::RED));
}

#[test]
fn gap_between_two_seeds_takes_their_mean() {
    let source = ImageRgba::from_pixels(3, 1, vec![Rgba::RED, Rgba::BLUE, Rgba::GREEN]).unwrap();
    let mask = point_mask(3, 1, &[(0, 0), (2, 0)]);
    let out = bleed(&source, &mask, 3, 1).unwrap();
    assert_eq!(out.data[1], Rgba::new(0.5, 0.5, 0.0, 1.0));
}

#[test]
fn propagation_finishes_within_max_dimension_rounds() {
    init_logging();
    let cases = [
        (32, 20, vec![(0, 0)]),
        (20, 32, vec![(19, 31)]),
        (25, 25, vec![(12, 12)]),
        (40, 7, vec![(3, 1), (36, 5)]),
    ];
    for (w, h, seeds) in cases {
        let source = gradient_rgba(w, h);
        let mask = point_mask(w, h, &seeds);
        let c = classify(&mask).unwrap();
        let p = propagate_with_options(&c.states, &source, w, h, &PropagateOptions::default())
            .unwrap_or_else(|e| panic!("{w}x{h} failed: {e}"));
        assert!(
            p.stats.rounds <= w.max(h),
            "{w}x{h}: {} rounds exceeds bound",
            p.stats.rounds
        );
        assert_eq!(p.stats.resolved_total, w * h - seeds.len());
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let source = gradient_rgba(48, 40);
    let mask = disc_mask(48, 40, 30.0, 12.0, 6.5);
    let a = bleed(&source, &mask, 48, 40).unwrap();
    let b = bleed(&source, &mask, 48, 40).unwrap();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn bled_colors_stay_within_shell_color_range() {
    let source = gradient_rgba(32, 32);
    let mask = disc_mask(32, 32, 16.0, 16.0, 5.0);
    let out = bleed(&source, &mask, 32, 32).unwrap();

    let (mut lo, mut hi) = ([f32::MAX; 4], [f32::MIN; 4]);
    for (i, px) in source.data.iter().enumerate() {
        if mask.alpha_at(i) >= 0.5 {
            for c in 0..4 {
                lo[c] = lo[c].min(px.0[c]);
                hi[c] = hi[c].max(px.0[c]);
            }
        }
    }
    for px in &out.data {
        for c in 0..4 {
            assert!(px.0[c] >= lo[c] - 1e-5 && px.0[c] <= hi[c] + 1e-5);
        }
        assert!((px.a() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn all_background_mask_reports_no_seed_region() {
    let source = gradient_rgba(8, 8);
    let mask = ImageRgba::new(8, 8);
    assert_eq!(
        bleed(&source, &mask, 8, 8).unwrap_err(),
        BleedError::NoSeedRegion
    );
}

#[test]
fn upsampled_quad_never_leaves_source_bounds() {
    let quad = ImageRgba::from_pixels(
        2,
        2,
        vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE, Rgba::WHITE],
    )
    .unwrap();
    let out = resample(&quad, 4, 4).unwrap();
    assert_eq!(out.get(0, 0), Rgba::RED);
    assert_eq!(out.get(3, 0), Rgba::GREEN);
    assert_eq!(out.get(0, 3), Rgba::BLUE);
    assert_eq!(out.get(3, 3), Rgba::WHITE);
    assert!(out
        .data
        .iter()
        .all(|p| p.0.iter().all(|c| (0.0..=1.0).contains(c))));
}

#[test]
fn mismatched_buffers_report_shape_mismatch() {
    let source = vec![Rgba::RED; 6];
    let mask = vec![Rgba::WHITE; 4];
    assert!(matches!(
        bleed_buffers(&source, &mask, 3, 2),
        Err(BleedError::ShapeMismatch { color: 6, mask: 4, expected: 6 })
    ));
}

#[test]
fn rasterized_island_bleeds_to_the_border() {
    init_logging();
    let island = UvMesh::new(
        vec![
            Vector2::new(0.25, 0.25),
            Vector2::new(0.75, 0.25),
            Vector2::new(0.75, 0.75),
            Vector2::new(0.25, 0.75),
        ],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();
    let mask = UvRasterizer::default().render_mask(&island, 16, 16).unwrap();
    let source = ImageRgba::filled(32, 32, Rgba::new(0.1, 0.6, 0.3, 1.0));

    // Source is authored at twice the bleed resolution.
    let out = bleed(&source, &mask, 16, 16).unwrap();
    assert_eq!(out.dimensions(), (16, 16));
    for px in &out.data {
        for (c, expected) in px.0.iter().zip([0.1f32, 0.6, 0.3, 1.0]) {
            assert!((c - expected).abs() < 1e-5);
        }
    }
}

#[test]
fn background_task_matches_synchronous_bleed() {
    let source = gradient_rgba(24, 24);
    let mask = disc_mask(24, 24, 6.0, 18.0, 4.0);
    let expected = bleed(&source, &mask, 24, 24).unwrap();
    let task = BleedTask::spawn(EdgeBleeder::default(), source, mask, 24, 24);
    let out = task.wait().unwrap();
    assert_eq!(bits(&out), bits(&expected));
}
