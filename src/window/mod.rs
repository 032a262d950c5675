//! Represents a window and the event plumbing around it.
//!
//! A `Window` is a thin facade over a backend `Visitor`, which stands for
//! the native window of the host platform. The facade adds the listener
//! registries for the three event categories and drives the message pump:
//! pumping drains the backend's pending events and dispatches them to the
//! matching listeners, filtered by an `EventMask`.

pub mod backends;
pub mod events;
pub mod listeners;

pub mod prelude {
    pub use super::events::{Event, EventMask, InputEvent, Key, MouseButton, WindowEvent};
    pub use super::listeners::{KeyListener, MouseListener, WindowListener};
    pub use super::{Window, WindowParams};
}

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::errors::Result;
use crate::gl::drawable::DrawableFactory;
use crate::math::prelude::Vector2;

use self::backends::Visitor;
use self::events::{Event, EventMask, InputEvent, WindowEvent};
use self::listeners::{
    KeyListener, KeyListenerHandle, ListenerSet, MouseListener, MouseListenerHandle,
    WindowListener, WindowListenerHandle,
};

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "Window".to_owned(),
            size: Vector2::new(640, 320),
            multisample: 2,
            vsync: false,
        }
    }
}

/// The window of the host platform, with listener registries for window,
/// mouse and keyboard events.
pub struct Window {
    visitor: RwLock<Box<dyn Visitor>>,
    scratch: Mutex<Vec<Event>>,
    window_listeners: ListenerSet<WindowListenerHandle, dyn WindowListener>,
    mouse_listeners: ListenerSet<MouseListenerHandle, dyn MouseListener>,
    key_listeners: ListenerSet<KeyListenerHandle, dyn KeyListener>,
    closed: AtomicBool,
}

impl Window {
    /// Creates a new `Window` from the default backend of the host
    /// platform.
    pub fn new(params: WindowParams) -> Result<Self> {
        Ok(Self::from_backend(backends::new(params)?))
    }

    /// Creates a new `Window` with a headless backend.
    pub fn headless() -> Self {
        Self::from_backend(backends::new_headless())
    }

    /// Wraps an existing backend.
    pub fn from_backend(visitor: Box<dyn Visitor>) -> Self {
        Window {
            visitor: RwLock::new(visitor),
            scratch: Mutex::new(Vec::new()),
            window_listeners: ListenerSet::new(),
            mouse_listeners: ListenerSet::new(),
            key_listeners: ListenerSet::new(),
            closed: AtomicBool::new(false),
        }
    }

    /// Shows or hides the window.
    ///
    /// # Platform-specific
    ///
    /// Has no effect on mobile platform.
    pub fn set_visible(&self, visible: bool) {
        let mut visitor = self.visitor.write().unwrap();
        if visible {
            visitor.show();
        } else {
            visitor.hide();
        }
    }

    /// Returns true if the window is currently shown.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visitor.read().unwrap().is_visible()
    }

    /// Returns the position of the lower-left hand corner of the window
    /// relative to the lower-left hand corner of the desktop. The
    /// coordinates can be negative if the corner is outside of the visible
    /// screen region.
    #[inline]
    pub fn position(&self) -> Vector2<i32> {
        self.visitor.read().unwrap().position()
    }

    /// Moves the window to the given desktop position.
    #[inline]
    pub fn set_position(&self, position: Vector2<i32>) {
        self.visitor.write().unwrap().set_position(position);
    }

    /// Returns the size in *points* of the client area of the window.
    ///
    /// The client area is the content of the window, excluding the title
    /// bar and borders.
    #[inline]
    pub fn dimensions(&self) -> Vector2<u32> {
        self.visitor.read().unwrap().dimensions()
    }

    /// Requests a new size for the client area of the window.
    #[inline]
    pub fn resize(&self, dimensions: Vector2<u32>) {
        self.visitor.write().unwrap().resize(dimensions);
    }

    /// Returns the size in *points* of the display the window lives on.
    #[inline]
    pub fn display_dimensions(&self) -> Vector2<u32> {
        self.visitor.read().unwrap().display_dimensions()
    }

    /// Returns the ratio between the backing framebuffer resolution and
    /// the window size in screen pixels. This is typically one for a
    /// normal display and two for a retina display.
    #[inline]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.visitor.read().unwrap().device_pixel_ratio()
    }

    /// Toggles fullscreen mode, returning true if the backend honored the
    /// request.
    #[inline]
    pub fn set_fullscreen(&self, fullscreen: bool) -> bool {
        self.visitor.write().unwrap().set_fullscreen(fullscreen)
    }

    /// Returns true if the window is in fullscreen mode.
    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.visitor.read().unwrap().is_fullscreen()
    }

    /// Sets the title of window.
    #[inline]
    pub fn set_title(&self, title: &str) {
        self.visitor.write().unwrap().set_title(title);
    }

    /// Returns the factory that produces GL drawables for this window.
    #[inline]
    pub fn drawable_factory(&self) -> Rc<dyn DrawableFactory> {
        self.visitor.read().unwrap().drawable_factory()
    }

    /// Drains the pending events of the backend and dispatches the ones
    /// within `mask` to the registered listeners.
    pub fn pump_events(&self, mask: EventMask) -> Result<()> {
        if self.is_closed() {
            return Err(err_format!("the window has been closed."));
        }

        let mut scratch = self.scratch.lock().unwrap();
        scratch.clear();
        self.visitor.write().unwrap().poll_events(&mut scratch);

        for v in scratch.iter() {
            if mask.accepts(v) {
                self.dispatch(v)?;
            }
        }

        Ok(())
    }

    fn dispatch(&self, event: &Event) -> Result<()> {
        match *event {
            Event::Window(v) => self.window_listeners.each(|lis| match v {
                WindowEvent::Resized(w, h) => lis.on_resized(Vector2::new(w, h)),
                WindowEvent::Moved(x, y) => lis.on_moved(Vector2::new(x, y)),
                WindowEvent::Closed => lis.on_closed(),
                WindowEvent::GainFocus => lis.on_focus_changed(true),
                WindowEvent::LostFocus => lis.on_focus_changed(false),
            }),
            Event::InputDevice(v) => match v {
                InputEvent::MouseMoved { position } => self
                    .mouse_listeners
                    .each(|lis| lis.on_cursor_moved(position.into())),
                InputEvent::MousePressed { button } => {
                    self.mouse_listeners.each(|lis| lis.on_pressed(button))
                }
                InputEvent::MouseReleased { button } => {
                    self.mouse_listeners.each(|lis| lis.on_released(button))
                }
                InputEvent::MouseWheel { delta } => self
                    .mouse_listeners
                    .each(|lis| lis.on_wheel(delta.into())),
                InputEvent::KeyboardPressed { key } => {
                    self.key_listeners.each(|lis| lis.on_pressed(key))
                }
                InputEvent::KeyboardReleased { key } => {
                    self.key_listeners.each(|lis| lis.on_released(key))
                }
                InputEvent::ReceivedCharacter { character } => {
                    self.key_listeners.each(|lis| lis.on_character(character))
                }
            },
        }
    }

    /// Closes the native window. Repeated calls are no-ops.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::Relaxed) {
            self.visitor.write().unwrap().close();
            info!("closed window.");
        }
    }

    /// Returns true once `close` has been called.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Relaxed)
    }

    /// Adds a listener for window events.
    pub fn add_window_listener<T: WindowListener + 'static>(&self, lis: T) -> WindowListenerHandle {
        self.window_listeners.attach(Arc::new(Mutex::new(lis)))
    }

    /// Removes a window listener.
    pub fn remove_window_listener(&self, handle: WindowListenerHandle) {
        self.window_listeners.detach(handle);
    }

    /// Returns the handles of the registered window listeners.
    pub fn window_listeners(&self) -> Vec<WindowListenerHandle> {
        self.window_listeners.handles()
    }

    /// Adds a listener for mouse events.
    pub fn add_mouse_listener<T: MouseListener + 'static>(&self, lis: T) -> MouseListenerHandle {
        self.mouse_listeners.attach(Arc::new(Mutex::new(lis)))
    }

    /// Removes a mouse listener.
    pub fn remove_mouse_listener(&self, handle: MouseListenerHandle) {
        self.mouse_listeners.detach(handle);
    }

    /// Returns the handles of the registered mouse listeners.
    pub fn mouse_listeners(&self) -> Vec<MouseListenerHandle> {
        self.mouse_listeners.handles()
    }

    /// Adds a listener for keyboard events.
    pub fn add_key_listener<T: KeyListener + 'static>(&self, lis: T) -> KeyListenerHandle {
        self.key_listeners.attach(Arc::new(Mutex::new(lis)))
    }

    /// Removes a keyboard listener.
    pub fn remove_key_listener(&self, handle: KeyListenerHandle) {
        self.key_listeners.detach(handle);
    }

    /// Returns the handles of the registered keyboard listeners.
    pub fn key_listeners(&self) -> Vec<KeyListenerHandle> {
        self.key_listeners.handles()
    }
}
