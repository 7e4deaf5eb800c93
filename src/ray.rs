use na::Vector3;

use crate::error::TraceError;
use crate::vector;

/// A half-line `origin + t * direction`.
///
/// The direction does not have to be unit length, but it is never zero:
/// `Ray::new` rejects degenerate directions, so every intersection test
/// downstream can divide by `dot(direction, direction)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Vector3<f32>,
    direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Result<Ray, TraceError> {
        let squared = vector::dot(&direction, &direction);
        if squared == 0.0 || !squared.is_finite() {
            return Err(TraceError::DegenerateRay {
                x: direction.x,
                y: direction.y,
                z: direction.z,
            });
        }
        Ok(Ray { origin, direction })
    }

    pub fn origin(&self) -> Vector3<f32> {
        self.origin
    }

    pub fn direction(&self) -> Vector3<f32> {
        self.direction
    }

    /// Point at parameter `t` along the ray.
    pub fn at(&self, t: f32) -> Vector3<f32> {
        vector::add(&self.origin, &vector::scale(&self.direction, t))
    }
}
