//! The OpenGL side of the adapter: capability descriptors, the drawable
//! and context contracts, the listener dispatch helper, and the GL-aware
//! window itself.

pub mod capabilities;
pub mod drawable;
pub mod errors;
pub mod helper;
pub mod window;

pub mod prelude {
    pub use super::capabilities::GlCapabilities;
    pub use super::drawable::{Context, Drawable, DrawableFactory, GlApi};
    pub use super::helper::{DrawableHelper, GlEventListener, GlEventListenerHandle};
    pub use super::window::GlWindow;
    pub use super::DispatchMode;
}

pub use self::capabilities::GlCapabilities;
pub use self::drawable::{Context, Drawable, DrawableFactory, GlApi};
pub use self::helper::{DrawableHelper, GlEventListener, GlEventListenerHandle};
pub use self::window::GlWindow;

/// Determines whether the GL context is bound before user event callbacks
/// are invoked while pumping messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// No GL context is current while calling the listeners. This might
    /// be inconvenient, but does not impact the performance.
    NoContext,
    /// The GL context is made current while calling the listeners. This
    /// might be convenient, but impacts the performance due to context
    /// switches.
    ///
    /// This is the default setting.
    ContextCurrent,
}

impl Default for DispatchMode {
    fn default() -> Self {
        DispatchMode::ContextCurrent
    }
}
