//! Dispatches GL notifications to the registered listeners, with the
//! context made current for the duration of the dispatch.

use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::math::prelude::Vector2;
use crate::utils::prelude::Registry;

use super::drawable::{Context, Drawable};

impl_handle!(GlEventListenerHandle);

/// Receives rendering notifications from a GL-aware window. The GL
/// context is guaranteed to be current inside every callback, so
/// listeners may issue GL calls freely.
pub trait GlEventListener {
    /// Called once, before any other notification, after the drawable has
    /// been realized. Listeners registered later are initialized on the
    /// next dispatch.
    fn on_init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the drawable's dimensions changed, after the viewport
    /// has been updated and before the next `on_display`.
    fn on_reshape(&mut self, _: Vector2<u32>) -> Result<()> {
        Ok(())
    }

    /// Called once per display cycle to draw the frame.
    fn on_display(&mut self) -> Result<()> {
        Ok(())
    }
}

struct Entry {
    listener: Arc<Mutex<dyn GlEventListener>>,
    initialized: bool,
}

/// Owns the GL-content listener set and the auto-swap-buffer mode, and
/// runs actions within a context-current scope.
pub struct DrawableHelper {
    listeners: Registry<GlEventListenerHandle, Entry>,
    auto_swap: bool,
}

impl DrawableHelper {
    pub fn new() -> Self {
        DrawableHelper {
            listeners: Registry::new(),
            auto_swap: true,
        }
    }

    /// Adds a GL listener. It will receive `on_init` on the next dispatch
    /// with a context current.
    pub fn attach<T: GlEventListener + 'static>(&mut self, lis: T) -> GlEventListenerHandle {
        self.listeners.register(Entry {
            listener: Arc::new(Mutex::new(lis)),
            initialized: false,
        })
    }

    /// Removes a GL listener, returning true if it was registered.
    pub fn detach(&mut self, handle: GlEventListenerHandle) -> bool {
        self.listeners.unregister(handle).is_some()
    }

    /// Returns the handles of the registered GL listeners.
    pub fn handles(&self) -> Vec<GlEventListenerHandle> {
        self.listeners.handles().collect()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn auto_swap_buffer_mode(&self) -> bool {
        self.auto_swap
    }

    pub fn set_auto_swap_buffer_mode(&mut self, on: bool) {
        self.auto_swap = on;
    }

    /// Runs `action` with `context` current: pending listener inits are
    /// dispatched first, and the buffers are swapped afterwards if the
    /// auto-swap mode is on. The context is released again when the scope
    /// ends, whether or not the action succeeded.
    pub fn invoke<F>(&mut self, drawable: &dyn Drawable, context: &dyn Context, action: F) -> Result<()>
    where
        F: FnOnce() -> Result<()>,
    {
        let _guard = CurrentGuard::acquire(context)?;

        self.dispatch_init()?;
        action()?;

        if self.auto_swap {
            drawable.swap_buffers()?;
        }

        Ok(())
    }

    /// The display cycle: pending inits, then the optional reshape (the
    /// viewport is updated before listeners hear about it), then the
    /// display notification, then the swap if the auto-swap mode is on.
    pub fn display(
        &mut self,
        drawable: &dyn Drawable,
        context: &dyn Context,
        reshape: Option<Vector2<u32>>,
    ) -> Result<()> {
        let _guard = CurrentGuard::acquire(context)?;

        self.dispatch_init()?;

        if let Some(dimensions) = reshape {
            drawable.resize(dimensions);
            self.dispatch_reshape(dimensions)?;
        }

        self.dispatch_display()?;

        if self.auto_swap {
            drawable.swap_buffers()?;
        }

        Ok(())
    }

    fn dispatch_init(&mut self) -> Result<()> {
        for entry in self.listeners.values_mut() {
            if !entry.initialized {
                entry.listener.lock().unwrap().on_init()?;
                entry.initialized = true;
            }
        }

        Ok(())
    }

    fn dispatch_reshape(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        for entry in self.listeners.values_mut() {
            entry.listener.lock().unwrap().on_reshape(dimensions)?;
        }

        Ok(())
    }

    fn dispatch_display(&mut self) -> Result<()> {
        for entry in self.listeners.values_mut() {
            entry.listener.lock().unwrap().on_display()?;
        }

        Ok(())
    }
}

impl Default for DrawableHelper {
    fn default() -> Self {
        DrawableHelper::new()
    }
}

/// Scoped acquisition of a GL context: binds on entry if the context was
/// not already current, and releases on drop.
struct CurrentGuard<'a> {
    context: &'a dyn Context,
    bound: bool,
}

impl<'a> CurrentGuard<'a> {
    fn acquire(context: &'a dyn Context) -> Result<CurrentGuard<'a>> {
        let bound = !context.is_current();
        if bound {
            context.make_current()?;
        }

        Ok(CurrentGuard { context, bound })
    }
}

impl<'a> Drop for CurrentGuard<'a> {
    fn drop(&mut self) {
        if self.bound {
            if let Err(err) = self.context.release() {
                warn!("failed to release GL context: {}", err);
            }
        }
    }
}
