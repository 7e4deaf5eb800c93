use na::Vector3;

use crate::intersect::{closest_intersection, surface_normal};
use crate::lighting::compute_lighting;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector;

/// The color returned for rays that hit nothing.
pub const BACKGROUND: Vector3<f32> = Vector3::new(255.0, 255.0, 255.0);

/// Color seen along `ray` within `[t_min, t_max]`.
///
/// The sphere's flat color is scaled uniformly by the light intensity at the
/// hit point; there is no recursion and no per-channel light color.
pub fn trace_ray(scene: &Scene, ray: &Ray, t_min: f32, t_max: f32) -> Vector3<f32> {
    let hit = closest_intersection(scene.spheres(), ray, t_min, t_max);
    let sphere = match hit.sphere {
        Some(sphere) => sphere,
        None => return BACKGROUND,
    };

    let point = ray.at(hit.t);
    let normal = match surface_normal(sphere, &point) {
        Some(normal) => normal,
        // Only possible for a zero radius, which scene setup rejects.
        None => Vector3::zeros(),
    };
    let view = vector::negate(&ray.direction());
    vector::scale(
        &sphere.color,
        compute_lighting(scene, &point, &normal, &view, sphere.specular),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Light, Sphere};

    const EPSILON: f32 = 0.0001;

    fn single_sphere_scene(lights: Vec<Light>) -> Scene {
        let mut scene = Scene::default();
        scene
            .add_sphere(Sphere::new(
                Vector3::new(0.0, 0.0, 5.0),
                1.0,
                Vector3::new(200.0, 100.0, 50.0),
                0.0,
            ))
            .unwrap();
        for light in lights {
            scene.add_light(light).unwrap();
        }
        scene
    }

    #[test]
    fn ray_pointing_away_sees_background() {
        let scene = single_sphere_scene(vec![Light::Ambient { intensity: 1.0 }]);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0)).unwrap();
        assert_eq!(trace_ray(&scene, &ray, 1.0, f32::INFINITY), BACKGROUND);
    }

    #[test]
    fn ambient_only_scales_sphere_color() {
        let scene = single_sphere_scene(vec![Light::Ambient { intensity: 0.5 }]);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let color = trace_ray(&scene, &ray, 1.0, f32::INFINITY);
        for (got, want) in color.iter().zip([100.0, 50.0, 25.0].iter()) {
            assert!((got - want).abs() < EPSILON);
        }
    }

    #[test]
    fn strong_ambient_is_clamped() {
        let scene = single_sphere_scene(vec![
            Light::Ambient { intensity: 0.9 },
            Light::Ambient { intensity: 0.9 },
        ]);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let color = trace_ray(&scene, &ray, 1.0, f32::INFINITY);
        assert_eq!(color, Vector3::new(200.0, 100.0, 50.0));
    }

    #[test]
    fn facing_light_adds_diffuse() {
        // Light sits between the camera and the sphere, on the view axis.
        let scene = single_sphere_scene(vec![Light::Point {
            intensity: 0.5,
            position: Vector3::new(0.0, 0.0, 1.0),
        }]);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let color = trace_ray(&scene, &ray, 1.0, f32::INFINITY);
        assert!((color.x - 100.0).abs() < EPSILON);
    }

    #[test]
    fn tangent_hit_gets_no_diffuse() {
        // The ray skims the top of the sphere; the light runs back along the
        // ray, perpendicular to the normal there.
        let scene = single_sphere_scene(vec![
            Light::Ambient { intensity: 0.25 },
            Light::Directional {
                intensity: 0.5,
                direction: Vector3::new(0.0, 0.0, -1.0),
            },
        ]);
        let ray = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        let color = trace_ray(&scene, &ray, 1.0, f32::INFINITY);
        assert_eq!(color, Vector3::new(50.0, 25.0, 12.5));
    }

    #[test]
    fn no_lights_renders_black_sphere() {
        let scene = single_sphere_scene(vec![]);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(trace_ray(&scene, &ray, 1.0, f32::INFINITY), Vector3::zeros());
    }
}
