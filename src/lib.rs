//! A small Whitted-style ray caster for scenes made of spheres.
//!
//! Rays leave a pinhole camera at the origin, find the closest sphere, and are
//! shaded with ambient, diffuse and specular terms from ambient, point and
//! directional lights. Non-ambient lights are tested for hard shadows.

extern crate image;
#[macro_use]
extern crate log;
extern crate nalgebra as na;
extern crate rayon;

pub mod camera;
pub mod config;
pub mod error;
pub mod intersect;
pub mod lighting;
pub mod output;
pub mod ray;
pub mod render;
pub mod scene;
pub mod tracer;
pub mod vector;

pub use camera::Camera;
pub use config::RenderConfig;
pub use error::{OutputError, SceneError, TraceError};
pub use ray::Ray;
pub use render::render;
pub use scene::{Light, Scene, Sphere};
pub use tracer::trace_ray;
