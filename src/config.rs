use std::path::PathBuf;

use crate::camera::Camera;

/// Everything the driver needs besides the scene itself.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub camera: Camera,
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 256,
            height: 256,
            camera: Camera::default(),
            output: PathBuf::from("image.ppm"),
        }
    }
}

impl RenderConfig {
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
}
