//! The mesh core never compiles or links shader programs itself; it
//! receives a handle of a program built by the surrounding demo and only
//! asks the backend to activate it and to set sampler uniforms on it.

use std::fmt;

/// An opaque handle of a linked shader program.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

impl fmt::Display for ShaderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ShaderHandle({})", self.0)
    }
}
