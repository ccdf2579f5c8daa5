//! `charcoal` is the reusable core of a tutorial-style OpenGL rendering
//! sandbox. It bridges CPU-side descriptions of triangulated surfaces to
//! GPU-resident drawables, ties the lifetime of driver handles to object
//! lifetime, and pairs every mesh with a lazily cached model transform.
//!
//! The crate deliberately stays out of the presentation layer: it opens no
//! windows, polls no input, compiles no shaders and decodes no images.
//! Instead it consumes an injected graphics [`Context`] and opaque handles
//! of shader programs and textures pre-loaded by the surrounding demo.
//!
//! ```no_run
//! use charcoal::prelude::*;
//!
//! let ctx = Context::headless();
//! let mut cube = Geometry::new(charcoal::scene::primitives::cube(&ctx).unwrap());
//! cube.set_position([1.0, 0.0, 0.0]);
//! cube.set_rotation([0.0, 90.0, 0.0]);
//!
//! let model = cube.model_matrix();
//! cube.draw(ShaderHandle(1)).unwrap();
//! # let _ = model;
//! ```
//!
//! [`Context`]: video/struct.Context.html

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;
extern crate cgmath;
extern crate gl;
extern crate smallvec;

pub mod errors;
pub mod math;
pub mod prelude;
pub mod scene;
pub mod video;

pub use crate::errors::{Error, Result};
pub use crate::video::Context;
