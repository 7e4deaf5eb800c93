//! Vector arithmetic on top of `nalgebra`.
//!
//! `Vector3<f32>` is used for points, directions and RGB triples alike; callers
//! keep track of which one they are holding. The free functions below name
//! the exact operations the tracer relies on, so each one can be checked on its
//! own.

use na::{Vector2, Vector3};

/// The two parametric roots of a ray/sphere quadratic, `x <= y`.
pub type Roots = Vector2<f32>;

pub fn add(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a + b
}

pub fn subtract(a: &Vector3<f32>, b: &Vector3<f32>) -> Vector3<f32> {
    a - b
}

pub fn scale(v: &Vector3<f32>, s: f32) -> Vector3<f32> {
    v * s
}

/// Sum of componentwise products. `dot(v, v)` is the squared length.
pub fn dot(a: &Vector3<f32>, b: &Vector3<f32>) -> f32 {
    a.dot(b)
}

pub fn length(v: &Vector3<f32>) -> f32 {
    v.norm()
}

/// Unit vector pointing along `v`.
///
/// Returns `None` when `v` has zero (or non-finite) length instead of
/// producing NaN components.
pub fn normalize(v: &Vector3<f32>) -> Option<Vector3<f32>> {
    if !length(v).is_finite() {
        return None;
    }
    v.try_normalize(0.0)
}

pub fn negate(v: &Vector3<f32>) -> Vector3<f32> {
    scale(v, -1.0)
}
