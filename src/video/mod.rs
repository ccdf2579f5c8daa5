//! The video subsystem: the graphics-context seam and the mesh assets that
//! live behind it.
//!
//! All GPU traffic goes through a [`Visitor`], a trait covering the narrow
//! capability set meshes actually need from a graphics driver. The real
//! implementation talks OpenGL; a headless one hands out fake identifiers
//! and records every call, which is what the test-suite runs against.
//!
//! [`Visitor`]: backends/trait.Visitor.html

pub mod assets;
pub mod backends;

use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use crate::errors::*;

use self::backends::Visitor;

/// A cheap-to-clone handle of the process-wide active graphics context.
///
/// Meshes keep a clone of the context they were created against so that
/// their destructors can release driver resources. All instances are meant
/// to live on the one thread that owns the underlying context; the `Rc`
/// makes that single-threaded contract explicit at the type level.
#[derive(Clone)]
pub struct Context {
    visitor: Rc<RefCell<Box<dyn Visitor>>>,
}

impl Context {
    /// Wraps whichever OpenGL context is current on the calling thread.
    ///
    /// # Safety
    ///
    /// A live OpenGL context must be current on this thread, and must stay
    /// current for every subsequent operation on meshes created against it.
    pub unsafe fn gl() -> Result<Self> {
        let visitor = backends::gl::GLVisitor::new()?;
        Ok(Context::from_visitor(Box::new(visitor)))
    }

    /// Creates a context that talks to no GPU at all.
    pub fn headless() -> Self {
        Context::from_visitor(Box::new(backends::headless::HeadlessVisitor::new()))
    }

    /// Headless context plus the trace of backend calls it records.
    pub fn headless_traced() -> (Self, Rc<RefCell<backends::headless::Trace>>) {
        let visitor = backends::headless::HeadlessVisitor::new();
        let trace = visitor.trace();
        (Context::from_visitor(Box::new(visitor)), trace)
    }

    /// Headless context that reports its graphics context as lost, for
    /// exercising failure paths.
    pub fn headless_lost() -> Self {
        Context::from_visitor(Box::new(backends::headless::HeadlessVisitor::lost()))
    }

    /// Headless context whose allocations fail after the first `n`, for
    /// exercising rollback on driver errors. Also returns the call trace.
    pub fn headless_failing(n: usize) -> (Self, Rc<RefCell<backends::headless::Trace>>) {
        let visitor = backends::headless::HeadlessVisitor::failing_after(n);
        let trace = visitor.trace();
        (Context::from_visitor(Box::new(visitor)), trace)
    }

    pub fn from_visitor(visitor: Box<dyn Visitor>) -> Self {
        Context {
            visitor: Rc::new(RefCell::new(visitor)),
        }
    }

    pub(crate) fn visitor_mut(&self) -> RefMut<'_, Box<dyn Visitor>> {
        self.visitor.borrow_mut()
    }
}
