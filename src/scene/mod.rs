//! Scene-side helpers: meshes paired with spatial transforms, and builders
//! for the handful of primitive shapes the sandbox demos draw.

pub mod geometry;
pub mod primitives;

pub use self::geometry::Geometry;
