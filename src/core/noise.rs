// 3D simplex noise.
//
// This is the classic skewed-lattice construction (the same one the WGSL
// shader uses), written with `glam` vectors so the CPU reference and the GPU
// agree to within float rounding. The function is pure, allocation-free and
// returns values in roughly `[-1, 1]`.

use super::constants::NOISE_NORMALIZATION;
use glam::{Vec3, Vec4};

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + Vec4::ONE) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

// 1.0 where x >= edge
#[inline]
fn step(edge: f32, x: f32) -> f32 {
    if x >= edge {
        1.0
    } else {
        0.0
    }
}

/// Simplex gradient noise at `v`.
pub fn noise3(v: Vec3) -> f32 {
    const C: [f32; 2] = [1.0 / 6.0, 1.0 / 3.0];

    // First corner of the skewed cell
    let i = (v + Vec3::splat(v.dot(Vec3::splat(C[1])))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C[0])));

    // Remaining corners, ordered by the rank of x0's components. One comparison
    // per pair keeps the ranks distinct when components tie.
    let xy = step(x0.y, x0.x);
    let xz = step(x0.z, x0.x);
    let yz = step(x0.z, x0.y);
    let rank = Vec3::new(xy + xz, 1.0 - xy + yz, 2.0 - xz - yz);
    let i1 = Vec3::new(step(2.0, rank.x), step(2.0, rank.y), step(2.0, rank.z));
    let i2 = Vec3::new(step(1.0, rank.x), step(1.0, rank.y), step(1.0, rank.z));

    let x1 = x0 - i1 + Vec3::splat(C[0]);
    let x2 = x0 - i2 + Vec3::splat(C[1]);
    let x3 = x0 - Vec3::splat(0.5);

    // Hash the four corners
    let i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Gradients: 7x7 points over a square, mapped onto an octahedron
    let n_ = 0.142_857_15_f32; // 1/7
    let ns = Vec3::new(n_ * 2.0, n_ * 0.5 - 1.0, n_ * 1.0 - 0.0);
    let j = p - (p * ns.z * ns.z).floor() * 49.0;

    let x_ = (j * ns.z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = Vec4::new(
        if h.x <= 0.0 { -1.0 } else { 0.0 },
        if h.y <= 0.0 { -1.0 } else { 0.0 },
        if h.z <= 0.0 { -1.0 } else { 0.0 },
        if h.w <= 0.0 { -1.0 } else { 0.0 },
    );

    let a0 = Vec4::new(b0.x, b0.z, b0.y, b0.w)
        + Vec4::new(s0.x, s0.z, s0.y, s0.w) * Vec4::new(sh.x, sh.x, sh.y, sh.y);
    let a1 = Vec4::new(b1.x, b1.z, b1.y, b1.w)
        + Vec4::new(s1.x, s1.z, s1.y, s1.w) * Vec4::new(sh.z, sh.z, sh.w, sh.w);

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    let norm = taylor_inv_sqrt(Vec4::new(p0.dot(p0), p1.dot(p1), p2.dot(p2), p3.dot(p3)));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Radial falloff (0.6 - |d|^2)^4 per corner
    let m = (Vec4::splat(0.6) - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
        .max(Vec4::ZERO);
    let m = m * m;
    NOISE_NORMALIZATION * (m * m).dot(Vec4::new(p0.dot(x0), p1.dot(x1), p2.dot(x2), p3.dot(x3)))
}
