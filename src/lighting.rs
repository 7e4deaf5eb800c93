//! Local illumination: ambient, diffuse and specular terms with hard shadows.

use na::Vector3;

use crate::intersect::closest_intersection;
use crate::ray::Ray;
use crate::scene::{Light, Scene};
use crate::vector;

/// Minimum shadow-ray parameter, keeps a surface from shadowing itself.
pub const SHADOW_EPSILON: f32 = 0.001;

/// Light intensity arriving at `point`, clamped to at most 1.
///
/// `view` points from the surface back towards the viewer. A light
/// contributes nothing when any sphere blocks it, when it sits exactly on
/// `point`, or when it shines on the back of the surface.
pub fn compute_lighting(
    scene: &Scene,
    point: &Vector3<f32>,
    normal: &Vector3<f32>,
    view: &Vector3<f32>,
    specular: f32,
) -> f32 {
    let mut intensity: f32 = 0.0;

    for light in scene.lights() {
        // Shadow rays run along the unit light vector; a point light only
        // counts occluders closer than the light itself.
        let (l, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient;
                continue;
            }
            Light::Point { position, .. } => {
                let to_light = vector::subtract(&position, point);
                match vector::normalize(&to_light) {
                    Some(l) => (l, vector::length(&to_light)),
                    None => continue,
                }
            }
            Light::Directional { direction, .. } => match vector::normalize(&direction) {
                Some(l) => (l, f32::INFINITY),
                None => continue,
            },
        };
        let shadow_ray = match Ray::new(*point, l) {
            Ok(ray) => ray,
            Err(_) => continue,
        };

        if closest_intersection(scene.spheres(), &shadow_ray, SHADOW_EPSILON, t_max).is_hit() {
            continue;
        }

        intensity += diffuse(light.intensity(), normal, &l);
        if specular > 0.0 {
            intensity += specular_highlight(light.intensity(), normal, &l, view, specular);
        }
    }

    intensity.min(1.0)
}

fn diffuse(light_intensity: f32, normal: &Vector3<f32>, l: &Vector3<f32>) -> f32 {
    let n_dot_l = vector::dot(normal, l);
    if n_dot_l > 0.0 {
        light_intensity * n_dot_l / (vector::length(normal) * vector::length(l))
    } else {
        0.0
    }
}

fn specular_highlight(
    light_intensity: f32,
    normal: &Vector3<f32>,
    l: &Vector3<f32>,
    view: &Vector3<f32>,
    exponent: f32,
) -> f32 {
    // Reflect L about the normal.
    let r = vector::subtract(&vector::scale(normal, 2.0 * vector::dot(normal, l)), l);
    let r_dot_v = vector::dot(&r, view);
    if r_dot_v > 0.0 {
        light_intensity * (r_dot_v / (vector::length(&r) * vector::length(view))).powf(exponent)
    } else {
        0.0
    }
}
