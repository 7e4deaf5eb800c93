//! Pinhole camera looking down +z through a rectangular viewport.

use na::Vector3;

use crate::error::TraceError;
use crate::ray::Ray;
use crate::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vector3<f32>,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub viewport_distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            origin: Vector3::zeros(),
            viewport_width: 1.0,
            viewport_height: 1.0,
            viewport_distance: 1.0,
        }
    }
}

impl Camera {
    /// Ray through pixel `(x, y)` of a `width` x `height` image.
    ///
    /// Row 0 is the top of the image, so `y` grows downwards while the
    /// viewport's vertical axis grows upwards. The direction is the unit
    /// vector towards the viewport point; `origin` only moves where the ray
    /// starts, and the camera always looks down +z.
    pub fn ray_for_pixel(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Result<Ray, TraceError> {
        let (w, h) = (width as f32, height as f32);
        let vx = (x as f32 - w / 2.0) * (self.viewport_width / w);
        let vy = -(y as f32 - h / 2.0) * (self.viewport_height / h);
        let on_viewport = Vector3::new(vx, vy, self.viewport_distance);
        let direction = vector::normalize(&on_viewport).ok_or(TraceError::DegenerateRay {
            x: vx,
            y: vy,
            z: self.viewport_distance,
        })?;
        Ray::new(self.origin, direction)
    }
}
