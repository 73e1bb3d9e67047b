// Host-side tests for the simplex noise kernel.

#![allow(dead_code)]
mod common;

use common::engine::noise::noise3;
use glam::Vec3;

fn samples() -> impl Iterator<Item = Vec3> {
    (0..20).flat_map(|i| {
        (0..20).map(move |j| Vec3::new(i as f32 * 0.37 - 3.1, j as f32 * 0.29 + 0.4, 1.7 + i as f32 * 0.05))
    })
}

#[test]
fn noise_is_deterministic() {
    for p in samples() {
        assert_eq!(noise3(p).to_bits(), noise3(p).to_bits());
    }
}

#[test]
fn noise_vanishes_on_lattice_origin() {
    assert!(noise3(Vec3::ZERO).abs() < 1e-6);
}

#[test]
fn noise_stays_in_unit_range() {
    for p in samples() {
        let n = noise3(p);
        assert!(n.is_finite());
        assert!(n.abs() <= 1.05, "noise({:?}) = {}", p, n);
    }
}

#[test]
fn noise_varies_across_space() {
    let (lo, hi) = samples()
        .map(noise3)
        .fold((f32::MAX, f32::MIN), |(lo, hi), n| (lo.min(n), hi.max(n)));
    assert!(hi - lo > 0.5, "range too flat: {}..{}", lo, hi);
}

#[test]
fn noise_is_continuous() {
    let d = Vec3::splat(1e-3);
    for p in samples() {
        assert!((noise3(p) - noise3(p + d)).abs() < 0.05);
    }
}

#[test]
fn noise_handles_large_coordinates() {
    let n = noise3(Vec3::new(1.0e4, -2.5e3, 777.0));
    assert!(n.is_finite());
    assert!(n.abs() <= 1.05);
}

// Points where x0 has tied components: the main diagonal and the x = y plane
fn tie_points() -> impl Iterator<Item = Vec3> {
    (0..60).flat_map(|i| {
        let t = i as f32 * 0.173 - 5.0;
        [Vec3::splat(t), Vec3::new(t, t, 0.61 - t * 0.4)]
    })
}

#[test]
fn noise_is_continuous_across_tied_components() {
    let nudges = [
        Vec3::new(1e-4, 0.0, 0.0),
        Vec3::new(0.0, -1e-4, 0.0),
        Vec3::new(0.0, 0.0, 1e-4),
        Vec3::splat(-1e-4),
    ];
    for p in tie_points() {
        for d in nudges {
            let (a, b) = (noise3(p), noise3(p + d));
            assert!((a - b).abs() < 0.01, "noise jumps at {:?}: {} vs {}", p, a, b);
        }
    }
}

#[test]
fn noise_is_odd_around_lattice_points() {
    for corner in [Vec3::ZERO, Vec3::splat(2.0), Vec3::new(0.0, 1.0, 2.0)] {
        let d = Vec3::splat(1e-4);
        assert!(noise3(corner).abs() < 1e-4, "{:?}", corner);
        assert!((noise3(corner + d) - noise3(corner - d)).abs() < 1e-2);
    }
}
