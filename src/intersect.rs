//! Ray/sphere intersection and closest-hit search.

use na::Vector3;

use crate::ray::Ray;
use crate::scene::Sphere;
use crate::vector::{self, Roots};

/// Returned when the ray misses. Both values fail every `t <= t_max` test.
pub const NO_ROOTS: Roots = Roots::new(f32::INFINITY, f32::INFINITY);

/// Solve `a·t² + b·t + c = 0` for the ray against `sphere`.
///
/// Roots come back ordered (`x <= y`). A miss yields `NO_ROOTS`. `a` is
/// never zero because `Ray` refuses zero directions.
pub fn intersect_ray_sphere(ray: &Ray, sphere: &Sphere) -> Roots {
    let direction = ray.direction();
    let co = vector::subtract(&ray.origin(), &sphere.center);

    let a = vector::dot(&direction, &direction);
    let b = 2.0 * vector::dot(&direction, &co);
    let c = vector::dot(&co, &co) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return NO_ROOTS;
    }
    let root = discriminant.sqrt();
    Roots::new((-b - root) / (2.0 * a), (-b + root) / (2.0 * a))
}

/// Result of a closest-hit query.
///
/// When nothing was hit, `sphere` is `None` and `t` equals the `t_max` the
/// query was made with.
#[derive(Debug, Clone, Copy)]
pub struct ClosestHit<'a> {
    pub sphere: Option<&'a Sphere>,
    pub t: f32,
}

impl<'a> ClosestHit<'a> {
    pub fn is_hit(&self) -> bool {
        self.sphere.is_some()
    }
}

/// Find the sphere whose nearest root lies in `[t_min, t_max]`.
///
/// Both roots of every sphere are checked. A candidate only replaces the
/// current best when it is strictly closer, so on ties the sphere added
/// first wins.
pub fn closest_intersection<'a>(
    spheres: &'a [Sphere],
    ray: &Ray,
    t_min: f32,
    t_max: f32,
) -> ClosestHit<'a> {
    let mut closest = ClosestHit {
        sphere: None,
        t: t_max,
    };
    for sphere in spheres {
        let roots = intersect_ray_sphere(ray, sphere);
        for &t in [roots.x, roots.y].iter() {
            if t >= t_min && t <= t_max && t < closest.t {
                closest = ClosestHit {
                    sphere: Some(sphere),
                    t,
                };
            }
        }
    }
    closest
}

/// Outward unit normal of `sphere` at a point on its surface.
pub fn surface_normal(sphere: &Sphere, point: &Vector3<f32>) -> Option<Vector3<f32>> {
    vector::normalize(&vector::subtract(point, &sphere.center))
}
