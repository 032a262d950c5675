//! The contracts between the adapter and the GL plumbing of a backend.

use std::os::raw::c_void;

use crate::math::prelude::Vector2;

use super::capabilities::GlCapabilities;
use super::errors::Result;

/// The rendering API a context talks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlApi {
    OpenGl,
    OpenGlEs,
    WebGl,
}

/// Produces GL drawables for the window it is bound to.
pub trait DrawableFactory {
    /// Creates a drawable with the given capabilities for the window this
    /// factory was obtained from.
    fn create_drawable(&self, caps: &GlCapabilities) -> Result<Box<dyn Drawable>>;
}

/// An on-screen or off-screen surface capable of hosting a GL-rendered
/// image.
pub trait Drawable {
    /// Allocates or releases the native resources backing this drawable.
    /// A drawable must be realized before it can host rendering.
    fn set_realized(&self, realized: bool) -> Result<()>;

    fn is_realized(&self) -> bool;

    /// Releases this drawable. Rendering through it afterwards is an
    /// error.
    fn destroy(&mut self);

    /// Swaps the buffers in case of double or triple buffering.
    ///
    /// **Warning**: if you enabled vsync, this function will block until
    /// the next time the screen is refreshed. However drivers can choose
    /// to override your vsync settings, which means that you can't know in
    /// advance whether swap_buffers will block or not.
    fn swap_buffers(&self) -> Result<()>;

    /// Applies a new size to the surface and the GL viewport.
    fn resize(&self, dimensions: Vector2<u32>);

    /// Returns the capabilities that were actually granted, or `None` if
    /// the drawable has not been realized yet.
    fn chosen_capabilities(&self) -> Option<GlCapabilities>;

    /// Locks the surface for exclusive access. Fails if the surface is
    /// unavailable or already locked.
    fn lock_surface(&self) -> Result<()>;

    fn unlock_surface(&self);

    fn is_surface_locked(&self) -> bool;

    /// Creates a GL context rendering into this drawable, optionally
    /// sharing object state with an existing context.
    fn create_context(&self, share: Option<&dyn Context>) -> Result<Box<dyn Context>>;
}

/// A GL state container. A context must be "current" on a thread before
/// GL calls from that thread are valid, and can be current on at most one
/// thread at a time.
pub trait Context {
    /// Sets the context as the active context in this thread.
    fn make_current(&self) -> Result<()>;

    /// Gives up the current binding of this context, if it holds one.
    fn release(&self) -> Result<()>;

    /// Returns true if this context is the current one in this thread.
    fn is_current(&self) -> bool;

    /// Destroys the context. It must not be current on any thread.
    fn destroy(&mut self);

    /// Returns the rendering API this context talks.
    fn api(&self) -> GlApi;

    /// Returns the address of the named GL function, for loading a
    /// function table.
    fn proc_address(&self, symbol: &str) -> *const c_void;
}
