use std::os::raw::c_void;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::Result;
use crate::math::prelude::Vector2;
use crate::window::backends::Visitor;
use crate::window::events::{Event, EventMask};
use crate::window::listeners::{
    KeyListener, KeyListenerHandle, MouseListener, MouseListenerHandle, WindowListener,
    WindowListenerHandle,
};
use crate::window::{Window, WindowParams};

use super::capabilities::GlCapabilities;
use super::drawable::{Context, Drawable, DrawableFactory, GlApi};
use super::errors::{Error, Result as GlResult};
use super::helper::{DrawableHelper, GlEventListener, GlEventListenerHandle};
use super::DispatchMode;

/// A window which is customized for OpenGL use. For convenience, this
/// window guarantees that its GL context is current inside the registered
/// listeners' callbacks.
///
/// The GL drawable and context are created lazily, the first time the
/// window becomes visible, and destroyed together by `close`. Window
/// operations with no GL flavor forward to the wrapped [`Window`]
/// unmodified.
pub struct GlWindow {
    window: Window,
    caps: GlCapabilities,
    factory: Option<Rc<dyn DrawableFactory>>,
    drawable: Option<Box<dyn Drawable>>,
    context: Option<Box<dyn Context>>,
    helper: DrawableHelper,
    dispatch_mode: DispatchMode,
    pending_reshape: Arc<AtomicBool>,
}

/// Arms the pending-reshape flag whenever the wrapped window reports a
/// resize, so that the next display cycle updates the viewport first.
struct ReshapeHook {
    pending: Arc<AtomicBool>,
}

impl WindowListener for ReshapeHook {
    fn on_resized(&mut self, _: Vector2<u32>) -> Result<()> {
        self.pending.store(true, Ordering::Relaxed);
        Ok(())
    }
}

impl GlWindow {
    /// Creates a new `GlWindow` over a default window, with the default
    /// capabilities.
    pub fn new() -> Result<Self> {
        Ok(Self::from_window(
            Window::new(WindowParams::default())?,
            GlCapabilities::default(),
        ))
    }

    /// Creates a new `GlWindow` over a default window built from the
    /// given parameters.
    pub fn with_params(params: WindowParams, caps: GlCapabilities) -> Result<Self> {
        Ok(Self::from_window(Window::new(params)?, caps))
    }

    /// Creates a new `GlWindow` over a headless window, for tests and CI
    /// environments.
    pub fn headless() -> Self {
        Self::from_window(Window::headless(), GlCapabilities::default())
    }

    /// Creates a new `GlWindow` referring to the given window. No GL
    /// resources are allocated until the window becomes visible.
    pub fn from_window(window: Window, caps: GlCapabilities) -> Self {
        let pending_reshape = Arc::new(AtomicBool::new(false));
        window.add_window_listener(ReshapeHook {
            pending: pending_reshape.clone(),
        });

        GlWindow {
            window,
            caps,
            factory: None,
            drawable: None,
            context: None,
            helper: DrawableHelper::new(),
            dispatch_mode: DispatchMode::default(),
            pending_reshape,
        }
    }

    /// Shows or hides the window. On the first transition to visible the
    /// GL drawable is created and realized and a context is built for it;
    /// later visibility toggles keep the GL resources alive.
    pub fn set_visible(&mut self, visible: bool) -> Result<()> {
        self.window.set_visible(visible);

        if visible && self.context.is_none() {
            let factory = self.window.drawable_factory();
            let drawable = factory.create_drawable(&self.caps)?;
            drawable.set_realized(true)?;
            let context = drawable.create_context(None)?;

            info!(
                "realized GL drawable and context ({:?}).",
                drawable.chosen_capabilities()
            );

            self.factory = Some(factory);
            self.drawable = Some(drawable);
            self.context = Some(context);
        }

        Ok(())
    }

    /// Destroys the GL context and drawable, then closes the wrapped
    /// window. Safe to call whether or not the window was ever visible,
    /// and safe to call repeatedly.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut context) = self.context.take() {
            if context.is_current() {
                context.release()?;
            }
            context.destroy();
        }

        if let Some(mut drawable) = self.drawable.take() {
            drawable.destroy();
        }

        self.factory = None;
        self.window.close();
        Ok(())
    }

    /// Pumps pending window messages, then runs one display cycle with
    /// the GL context current: pending listener inits, the deferred
    /// reshape if a resize arrived since the last cycle, the display
    /// notification, and the buffer swap if the auto-swap mode is on.
    pub fn display(&mut self) -> Result<()> {
        self.pump_events()?;

        let pending = self.pending_reshape.load(Ordering::Relaxed);
        let reshape = if pending {
            Some(self.window.dimensions())
        } else {
            None
        };

        let drawable = match self.drawable.as_ref() {
            Some(v) => &**v,
            None => return Err(Error::NotRealized.into()),
        };
        let context = match self.context.as_ref() {
            Some(v) => &**v,
            None => return Err(Error::NotRealized.into()),
        };

        self.helper.display(drawable, context, reshape)?;

        if pending {
            self.pending_reshape.store(false, Ordering::Relaxed);
        }

        Ok(())
    }

    /// Pumps all pending window messages once, dispatching them to the
    /// registered listeners according to the dispatch mode.
    pub fn pump_events(&mut self) -> Result<()> {
        self.pump_events_masked(EventMask::ALL)
    }

    /// Pumps the pending window messages within `mask`. In
    /// `DispatchMode::NoContext` the pump forwards straight to the
    /// wrapped window. In `DispatchMode::ContextCurrent` the pump runs
    /// with the GL context current, and with the auto-swap-buffer mode
    /// forced off for the duration and restored afterwards, whether or
    /// not a listener failed.
    pub fn pump_events_masked(&mut self, mask: EventMask) -> Result<()> {
        match self.dispatch_mode {
            DispatchMode::NoContext => self.window.pump_events(mask),
            DispatchMode::ContextCurrent => {
                let (drawable, context) = match (self.drawable.as_ref(), self.context.as_ref()) {
                    (Some(d), Some(c)) => (&**d, &**c),
                    // Nothing to bind before realization.
                    _ => return self.window.pump_events(mask),
                };

                let window = &self.window;
                let helper = &mut self.helper;

                let auto_swap = helper.auto_swap_buffer_mode();
                helper.set_auto_swap_buffer_mode(false);
                let result = helper.invoke(drawable, context, || window.pump_events(mask));
                helper.set_auto_swap_buffer_mode(auto_swap);

                result
            }
        }
    }

    /// Sets the event dispatch mode.
    pub fn set_dispatch_mode(&mut self, mode: DispatchMode) {
        self.dispatch_mode = mode;
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.dispatch_mode
    }

    /// Returns true when a resize notification has been received and the
    /// matching viewport update has not been applied yet.
    pub fn is_reshape_pending(&self) -> bool {
        self.pending_reshape.load(Ordering::Relaxed)
    }

    //
    // GL accessors.
    //

    /// Returns the GL context, once the window has been realized.
    pub fn context(&self) -> Option<&dyn Context> {
        self.context.as_ref().map(|v| &**v)
    }

    /// Returns the GL drawable, once the window has been realized.
    pub fn drawable(&self) -> Option<&dyn Drawable> {
        self.drawable.as_ref().map(|v| &**v)
    }

    /// Returns the drawable factory the GL resources were built from.
    pub fn factory(&self) -> Option<&Rc<dyn DrawableFactory>> {
        self.factory.as_ref()
    }

    /// Returns the capabilities that were requested at creation.
    pub fn requested_capabilities(&self) -> &GlCapabilities {
        &self.caps
    }

    /// Returns the capabilities that were actually granted, or `None` if
    /// the drawable has not been created yet.
    pub fn chosen_capabilities(&self) -> Option<GlCapabilities> {
        self.drawable.as_ref().and_then(|v| v.chosen_capabilities())
    }

    /// Returns the rendering API of the context, once realized.
    pub fn api(&self) -> Option<GlApi> {
        self.context.as_ref().map(|v| v.api())
    }

    /// Returns the address of the named GL function, once realized. Use
    /// it to load a function table for the context.
    pub fn proc_address(&self, symbol: &str) -> Option<*const c_void> {
        self.context.as_ref().map(|v| v.proc_address(symbol))
    }

    pub fn auto_swap_buffer_mode(&self) -> bool {
        self.helper.auto_swap_buffer_mode()
    }

    /// Enables or disables the automatic buffer swap at the end of every
    /// display cycle.
    pub fn set_auto_swap_buffer_mode(&mut self, on: bool) {
        self.helper.set_auto_swap_buffer_mode(on);
    }

    /// Swaps the front and back buffers of the drawable.
    pub fn swap_buffers(&self) -> Result<()> {
        match self.drawable.as_ref() {
            Some(v) => Ok(v.swap_buffers()?),
            None => Err(Error::NotRealized.into()),
        }
    }

    /// Adds a listener for GL rendering notifications.
    pub fn add_gl_event_listener<T: GlEventListener + 'static>(
        &mut self,
        lis: T,
    ) -> GlEventListenerHandle {
        self.helper.attach(lis)
    }

    /// Removes a GL listener.
    pub fn remove_gl_event_listener(&mut self, handle: GlEventListenerHandle) {
        self.helper.detach(handle);
    }

    /// Returns the handles of the registered GL listeners.
    pub fn gl_event_listeners(&self) -> Vec<GlEventListenerHandle> {
        self.helper.handles()
    }

    //
    // Forwarded window operations.
    //

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    #[inline]
    pub fn position(&self) -> Vector2<i32> {
        self.window.position()
    }

    #[inline]
    pub fn set_position(&self, position: Vector2<i32>) {
        self.window.set_position(position);
    }

    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.window.dimensions()
    }

    #[inline]
    pub fn resize(&self, dimensions: Vector2<u32>) {
        self.window.resize(dimensions);
    }

    #[inline]
    pub fn display_dimensions(&self) -> Vector2<u32> {
        self.window.display_dimensions()
    }

    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.window.device_pixel_ratio()
    }

    #[inline]
    pub fn set_fullscreen(&self, fullscreen: bool) -> bool {
        self.window.set_fullscreen(fullscreen)
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.window.is_fullscreen()
    }

    #[inline]
    pub fn set_title(&self, title: &str) {
        self.window.set_title(title);
    }

    pub fn add_window_listener<T: WindowListener + 'static>(&self, lis: T) -> WindowListenerHandle {
        self.window.add_window_listener(lis)
    }

    pub fn remove_window_listener(&self, handle: WindowListenerHandle) {
        self.window.remove_window_listener(handle);
    }

    pub fn window_listeners(&self) -> Vec<WindowListenerHandle> {
        self.window.window_listeners()
    }

    pub fn add_mouse_listener<T: MouseListener + 'static>(&self, lis: T) -> MouseListenerHandle {
        self.window.add_mouse_listener(lis)
    }

    pub fn remove_mouse_listener(&self, handle: MouseListenerHandle) {
        self.window.remove_mouse_listener(handle);
    }

    pub fn mouse_listeners(&self) -> Vec<MouseListenerHandle> {
        self.window.mouse_listeners()
    }

    pub fn add_key_listener<T: KeyListener + 'static>(&self, lis: T) -> KeyListenerHandle {
        self.window.add_key_listener(lis)
    }

    pub fn remove_key_listener(&self, handle: KeyListenerHandle) {
        self.window.remove_key_listener(handle);
    }

    pub fn key_listeners(&self) -> Vec<KeyListenerHandle> {
        self.window.key_listeners()
    }
}

impl Drop for GlWindow {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("failed to close GL window: {}", err);
        }
    }
}

/// The auto-drawable role of the adapter: the GL-flavored operations
/// forward to the inner drawable once it exists.
impl Drawable for GlWindow {
    fn set_realized(&self, _: bool) -> GlResult<()> {
        // Realization is driven by visibility instead.
        Ok(())
    }

    fn is_realized(&self) -> bool {
        self.context.is_some()
    }

    fn destroy(&mut self) {
        if let Err(err) = self.close() {
            warn!("failed to close GL window: {}", err);
        }
    }

    fn swap_buffers(&self) -> GlResult<()> {
        match self.drawable.as_ref() {
            Some(v) => v.swap_buffers(),
            None => Err(Error::NotRealized),
        }
    }

    fn resize(&self, dimensions: Vector2<u32>) {
        if let Some(v) = self.drawable.as_ref() {
            v.resize(dimensions);
        }
    }

    fn chosen_capabilities(&self) -> Option<GlCapabilities> {
        self.drawable.as_ref().and_then(|v| v.chosen_capabilities())
    }

    fn lock_surface(&self) -> GlResult<()> {
        match self.drawable.as_ref() {
            Some(v) => v.lock_surface(),
            None => Err(Error::SurfaceUnavailable),
        }
    }

    fn unlock_surface(&self) {
        if let Some(v) = self.drawable.as_ref() {
            v.unlock_surface();
        }
    }

    fn is_surface_locked(&self) -> bool {
        self.drawable
            .as_ref()
            .map(|v| v.is_surface_locked())
            .unwrap_or(false)
    }

    fn create_context(&self, share: Option<&dyn Context>) -> GlResult<Box<dyn Context>> {
        match self.drawable.as_ref() {
            Some(v) => v.create_context(share),
            None => Err(Error::NotRealized),
        }
    }
}

/// The window-backend role of the adapter. Geometry and visibility
/// forward to the wrapped window; the native lifecycle operations exist
/// only to satisfy the contract and must never be called.
impl Visitor for GlWindow {
    fn is_terminal(&self) -> bool {
        misuse("is_terminal")
    }

    fn create_native(&mut self) -> Result<()> {
        misuse("create_native")
    }

    fn close_native(&mut self) {
        misuse("close_native")
    }

    fn show(&mut self) {
        if let Err(err) = self.set_visible(true) {
            warn!("failed to show GL window: {}", err);
        }
    }

    fn hide(&mut self) {
        if let Err(err) = self.set_visible(false) {
            warn!("failed to hide GL window: {}", err);
        }
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn position(&self) -> Vector2<i32> {
        self.window.position()
    }

    fn set_position(&mut self, position: Vector2<i32>) {
        self.window.set_position(position);
    }

    fn dimensions(&self) -> Vector2<u32> {
        self.window.dimensions()
    }

    fn resize(&mut self, dimensions: Vector2<u32>) {
        self.window.resize(dimensions);
    }

    fn display_dimensions(&self) -> Vector2<u32> {
        self.window.display_dimensions()
    }

    fn device_pixel_ratio(&self) -> f32 {
        self.window.device_pixel_ratio()
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        self.window.set_fullscreen(fullscreen)
    }

    fn is_fullscreen(&self) -> bool {
        self.window.is_fullscreen()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn poll_events(&mut self, _: &mut Vec<Event>) {
        // Raw dispatch would bypass the dispatch mode.
        misuse("poll_events")
    }

    fn close(&mut self) {
        if let Err(err) = GlWindow::close(self) {
            warn!("failed to close GL window: {}", err);
        }
    }

    fn drawable_factory(&self) -> Rc<dyn DrawableFactory> {
        self.window.drawable_factory()
    }
}

fn misuse(op: &str) -> ! {
    panic!("`{}` must not be called on a GL window adapter", op);
}
