//! Spheres, lights and the fixed-capacity tables that hold them.

use na::Vector3;

use crate::error::{SceneError, TableKind};
use crate::vector;

pub const MAX_SPHERES: usize = 10;
pub const MAX_LIGHTS: usize = 10;

/// A sphere with a flat RGB color (channels in `[0, 255]`) and a specular
/// exponent. A specular exponent of 0 turns highlights off.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f32>,
    pub radius: f32,
    pub color: Vector3<f32>,
    pub specular: f32,
}

impl Sphere {
    pub fn new(center: Vector3<f32>, radius: f32, color: Vector3<f32>, specular: f32) -> Sphere {
        Sphere {
            center,
            radius,
            color,
            specular,
        }
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return Err(SceneError::InvalidSphere(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.center.iter().all(|c| c.is_finite()) {
            return Err(SceneError::InvalidSphere("center must be finite".to_string()));
        }
        if !self.color.iter().all(|c| (0.0..=255.0).contains(c)) {
            return Err(SceneError::InvalidSphere(format!(
                "color channels must lie in [0, 255], got ({}, {}, {})",
                self.color.x, self.color.y, self.color.z
            )));
        }
        if !(self.specular >= 0.0 && self.specular.is_finite()) {
            return Err(SceneError::InvalidSphere(format!(
                "specular exponent must be non-negative, got {}",
                self.specular
            )));
        }
        Ok(())
    }
}

/// Light sources. Each variant carries only the data it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient {
        intensity: f32,
    },
    Point {
        intensity: f32,
        position: Vector3<f32>,
    },
    Directional {
        intensity: f32,
        direction: Vector3<f32>,
    },
}

impl Light {
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    fn validate(&self) -> Result<(), SceneError> {
        let intensity = self.intensity();
        if !(intensity >= 0.0 && intensity.is_finite()) {
            return Err(SceneError::InvalidLight(format!(
                "intensity must be non-negative, got {}",
                intensity
            )));
        }
        match self {
            Light::Ambient { .. } => Ok(()),
            Light::Point { position, .. } => {
                if position.iter().all(|c| c.is_finite()) {
                    Ok(())
                } else {
                    Err(SceneError::InvalidLight("position must be finite".to_string()))
                }
            }
            Light::Directional { direction, .. } => match vector::normalize(direction) {
                Some(_) => Ok(()),
                None => Err(SceneError::InvalidLight(
                    "direction must be finite and non-zero".to_string(),
                )),
            },
        }
    }
}

/// The read-only world a render works on.
///
/// Both tables have a maximum size fixed at construction; only entries that
/// were actually added are ever iterated.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Light>,
    sphere_capacity: usize,
    light_capacity: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::with_capacity(MAX_SPHERES, MAX_LIGHTS)
    }
}

impl Scene {
    pub fn with_capacity(sphere_capacity: usize, light_capacity: usize) -> Scene {
        Scene {
            spheres: Vec::with_capacity(sphere_capacity),
            lights: Vec::with_capacity(light_capacity),
            sphere_capacity,
            light_capacity,
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> Result<(), SceneError> {
        if self.spheres.len() >= self.sphere_capacity {
            return Err(SceneError::CapacityExceeded {
                kind: TableKind::Spheres,
                capacity: self.sphere_capacity,
            });
        }
        sphere.validate()?;
        debug!(
            "sphere #{}: center {:?}, radius {}",
            self.spheres.len(),
            sphere.center.as_slice(),
            sphere.radius
        );
        self.spheres.push(sphere);
        Ok(())
    }

    pub fn add_light(&mut self, light: Light) -> Result<(), SceneError> {
        if self.lights.len() >= self.light_capacity {
            return Err(SceneError::CapacityExceeded {
                kind: TableKind::Lights,
                capacity: self.light_capacity,
            });
        }
        light.validate()?;
        debug!("light #{}: {:?}", self.lights.len(), light);
        self.lights.push(light);
        Ok(())
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Two spheres (a red ball resting on a huge yellow ground sphere)
    /// lit by an ambient, a point and a directional light.
    pub fn reference() -> Result<Scene, SceneError> {
        let mut scene = Scene::default();
        scene.add_sphere(Sphere::new(
            Vector3::new(0.0, -1.0, 3.0),
            1.0,
            Vector3::new(255.0, 0.0, 0.0),
            500.0,
        ))?;
        scene.add_sphere(Sphere::new(
            Vector3::new(0.0, -5001.0, 0.0),
            5000.0,
            Vector3::new(255.0, 255.0, 0.0),
            1000.0,
        ))?;
        scene.add_light(Light::Ambient { intensity: 0.2 })?;
        scene.add_light(Light::Point {
            intensity: 0.6,
            position: Vector3::new(2.0, 1.0, 0.0),
        })?;
        scene.add_light(Light::Directional {
            intensity: 0.2,
            direction: Vector3::new(1.0, 4.0, 4.0),
        })?;
        Ok(scene)
    }
}
