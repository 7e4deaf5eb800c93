use std::time::Instant;

use na::Vector3;
use rayon::prelude::*;

use crate::camera::Camera;
use crate::error::TraceError;
use crate::scene::Scene;
use crate::tracer::trace_ray;

/// Primary rays start at the viewport, not at the eye.
pub const PRIMARY_T_MIN: f32 = 1.0;

/// Render `scene` as seen by `camera` at `dimensions` (width, height).
///
/// The result holds one RGB triple per pixel in top-left to bottom-right
/// scanline order. Rows are traced in parallel; every pixel depends only on
/// the read-only scene, so the output does not depend on scheduling.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    dimensions: (usize, usize),
) -> Result<Vec<Vector3<f32>>, TraceError> {
    let (width, height) = dimensions;
    info!(
        "rendering {}x{} with {} spheres and {} lights",
        width,
        height,
        scene.spheres().len(),
        scene.lights().len()
    );
    let start = Instant::now();

    let rows: Vec<Vec<Vector3<f32>>> = (0..height)
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| -> Result<Vector3<f32>, TraceError> {
                    let ray = camera.ray_for_pixel(x, y, width, height)?;
                    Ok(trace_ray(scene, &ray, PRIMARY_T_MIN, f32::INFINITY))
                })
                .collect::<Result<Vec<_>, TraceError>>()
        })
        .collect::<Result<Vec<_>, TraceError>>()?;

    info!("traced {} pixels in {:.2?}", width * height, start.elapsed());
    Ok(rows.concat())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::to_image;
    use crate::tracer::BACKGROUND;

    #[test]
    fn empty_scene_is_all_background() {
        let pixels = render(&Scene::default(), &Camera::default(), (3, 2)).unwrap();
        assert_eq!(pixels.len(), 6);
        assert!(pixels.iter().all(|p| *p == BACKGROUND));
    }

    #[test]
    fn zero_sized_image_has_no_pixels() {
        let pixels = render(&Scene::default(), &Camera::default(), (0, 5)).unwrap();
        assert!(pixels.is_empty());
    }

    #[test]
    fn reference_scene_is_deterministic() {
        let scene = Scene::reference().unwrap();
        let first = render(&scene, &Camera::default(), (4, 4)).unwrap();
        let second = render(&scene, &Camera::default(), (4, 4)).unwrap();
        assert_eq!(first.len(), 16);
        for (a, b) in first.iter().zip(second.iter()) {
            for i in 0..3 {
                assert_eq!(a[i].to_bits(), b[i].to_bits());
            }
        }
    }

    #[test]
    fn reference_scene_pixels() {
        let scene = Scene::reference().unwrap();
        let pixels = render(&scene, &Camera::default(), (4, 4)).unwrap();
        assert!(pixels
            .iter()
            .all(|p| p.iter().all(|c| c.is_finite() && *c >= 0.0 && *c <= 255.0)));

        // Top-left looks up into the sky.
        assert_eq!(pixels[0], BACKGROUND);

        // Just below the image center lies the red sphere.
        let red = pixels[3 * 4 + 2];
        assert!(red.x >= 50.0);
        assert_eq!(red.y, 0.0);
        assert_eq!(red.z, 0.0);

        // Bottom-left falls on the yellow ground.
        let ground = pixels[3 * 4];
        assert!(ground.x >= 50.0);
        assert_eq!(ground.x, ground.y);
        assert_eq!(ground.z, 0.0);
    }

    #[test]
    fn reference_scene_exact_pixels() {
        const WHITE: [u8; 3] = [255, 255, 255];
        let expected: [[u8; 3]; 16] = [
            WHITE, WHITE, WHITE, WHITE,
            WHITE, WHITE, WHITE, WHITE,
            WHITE, WHITE, [127, 0, 0], WHITE,
            [86, 86, 0], [83, 0, 0], [171, 0, 0], [202, 0, 0],
        ];
        let scene = Scene::reference().unwrap();
        let pixels = render(&scene, &Camera::default(), (4, 4)).unwrap();
        let image = to_image(&pixels, (4, 4)).unwrap();
        let got: Vec<[u8; 3]> = image.pixels().map(|p| p.0).collect();
        assert_eq!(got, expected.to_vec());
    }
}
