//! Math types, re-exported from `cgmath`. We use a right handed, y-up world
//! coordinate system, and Euler rotations are specified in degrees.

pub use cgmath::*;
