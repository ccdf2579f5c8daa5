//! Error types shared across the crate.
//!
//! None of these are fatal: every fallible operation hands the error back to
//! the caller, which decides whether to retry the setup, skip the draw for
//! the frame, or give up.

/// Everything that can go wrong while bridging mesh data to the GPU.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    /// Attempted to set up or draw a mesh with no vertex or index data.
    #[fail(display = "Mesh has no vertex or index data.")]
    EmptyBuffers,
    /// Attempted to draw a mesh before a successful buffer setup.
    #[fail(display = "Vertex array object is not initialized.")]
    Uninitialized,
    /// No live graphics context on the calling thread.
    #[fail(display = "No active graphics context.")]
    ContextLost,
    /// The graphics driver reported an error code.
    #[fail(display = "[GL] {}", _0)]
    Driver(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
