//! A fully scripted backend for tests and CI environments. The window,
//! drawable and context all share one state block, observable from the
//! outside through a [`HeadlessHandle`].
//!
//! The mock models the "current context" rule with a plain flag, which is
//! only meaningful under the single-threaded model the adapter assumes.

use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::gl::capabilities::GlCapabilities;
use crate::gl::drawable::{Context, Drawable, DrawableFactory, GlApi};
use crate::gl::errors::{Error, Result as GlResult};
use crate::math::prelude::Vector2;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

#[derive(Debug)]
struct HeadlessState {
    native_alive: AtomicBool,
    visible: AtomicBool,
    fullscreen: AtomicBool,
    closed: AtomicBool,
    position: Mutex<Vector2<i32>>,
    dimensions: Mutex<Vector2<u32>>,
    title: Mutex<String>,
    queue: Mutex<Vec<Event>>,

    drawables_created: AtomicUsize,
    contexts_created: AtomicUsize,
    realized: AtomicBool,
    surface_locked: AtomicBool,
    viewport: Mutex<Option<Vector2<u32>>>,
    swaps: AtomicUsize,

    context_current: AtomicBool,
    binds: AtomicUsize,
    releases: AtomicUsize,
    context_destroyed: AtomicBool,
    drawable_destroyed: AtomicBool,
}

impl Default for HeadlessState {
    fn default() -> Self {
        HeadlessState {
            native_alive: AtomicBool::new(true),
            visible: AtomicBool::new(false),
            fullscreen: AtomicBool::new(false),
            closed: AtomicBool::new(false),
            position: Mutex::new(Vector2::new(0, 0)),
            dimensions: Mutex::new(Vector2::new(640, 320)),
            title: Mutex::new("Window".to_owned()),
            queue: Mutex::new(Vec::new()),

            drawables_created: AtomicUsize::new(0),
            contexts_created: AtomicUsize::new(0),
            realized: AtomicBool::new(false),
            surface_locked: AtomicBool::new(false),
            viewport: Mutex::new(None),
            swaps: AtomicUsize::new(0),

            context_current: AtomicBool::new(false),
            binds: AtomicUsize::new(0),
            releases: AtomicUsize::new(0),
            context_destroyed: AtomicBool::new(false),
            drawable_destroyed: AtomicBool::new(false),
        }
    }
}

/// The observer half of the headless backend. Cloneable; use it to script
/// native events and to assert on the GL side effects the adapter caused.
#[derive(Debug, Clone)]
pub struct HeadlessHandle {
    state: Arc<HeadlessState>,
}

impl HeadlessHandle {
    /// Queues a native event for the next pump.
    pub fn push_event(&self, event: Event) {
        self.state.queue.lock().unwrap().push(event);
    }

    /// Simulates a native resize: updates the reported dimensions and
    /// queues the matching `Resized` event.
    pub fn resize(&self, dimensions: Vector2<u32>) {
        *self.state.dimensions.lock().unwrap() = dimensions;
        self.push_event(Event::Window(WindowEvent::Resized(
            dimensions.x,
            dimensions.y,
        )));
    }

    /// Simulates a native move: updates the reported position and queues
    /// the matching `Moved` event.
    pub fn move_to(&self, position: Vector2<i32>) {
        *self.state.position.lock().unwrap() = position;
        self.push_event(Event::Window(WindowEvent::Moved(position.x, position.y)));
    }

    pub fn drawables_created(&self) -> usize {
        self.state.drawables_created.load(Ordering::Relaxed)
    }

    pub fn contexts_created(&self) -> usize {
        self.state.contexts_created.load(Ordering::Relaxed)
    }

    pub fn is_context_current(&self) -> bool {
        self.state.context_current.load(Ordering::Relaxed)
    }

    /// Returns how many times the context has been made current.
    pub fn bind_count(&self) -> usize {
        self.state.binds.load(Ordering::Relaxed)
    }

    /// Returns how many times the context has been released.
    pub fn release_count(&self) -> usize {
        self.state.releases.load(Ordering::Relaxed)
    }

    pub fn swap_count(&self) -> usize {
        self.state.swaps.load(Ordering::Relaxed)
    }

    /// Returns the last viewport the adapter applied, if any.
    pub fn viewport(&self) -> Option<Vector2<u32>> {
        *self.state.viewport.lock().unwrap()
    }

    pub fn is_realized(&self) -> bool {
        self.state.realized.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::Relaxed)
    }

    pub fn is_context_destroyed(&self) -> bool {
        self.state.context_destroyed.load(Ordering::Relaxed)
    }

    pub fn is_drawable_destroyed(&self) -> bool {
        self.state.drawable_destroyed.load(Ordering::Relaxed)
    }

    pub fn title(&self) -> String {
        self.state.title.lock().unwrap().clone()
    }
}

/// The window half of the headless backend.
#[derive(Debug, Default)]
pub struct HeadlessVisitor {
    state: Arc<HeadlessState>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            state: Arc::new(HeadlessState::default()),
        }
    }

    /// Returns the observer handle of this backend.
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            state: self.state.clone(),
        }
    }
}

impl Visitor for HeadlessVisitor {
    fn is_terminal(&self) -> bool {
        true
    }

    fn create_native(&mut self) -> Result<()> {
        self.state.native_alive.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn close_native(&mut self) {
        self.state.native_alive.store(false, Ordering::Relaxed);
    }

    fn show(&mut self) {
        self.state.visible.store(true, Ordering::Relaxed);
    }

    fn hide(&mut self) {
        self.state.visible.store(false, Ordering::Relaxed);
    }

    fn is_visible(&self) -> bool {
        self.state.visible.load(Ordering::Relaxed)
    }

    fn position(&self) -> Vector2<i32> {
        *self.state.position.lock().unwrap()
    }

    fn set_position(&mut self, position: Vector2<i32>) {
        *self.state.position.lock().unwrap() = position;
    }

    fn dimensions(&self) -> Vector2<u32> {
        *self.state.dimensions.lock().unwrap()
    }

    fn resize(&mut self, dimensions: Vector2<u32>) {
        *self.state.dimensions.lock().unwrap() = dimensions;
        self.state
            .queue
            .lock()
            .unwrap()
            .push(Event::Window(WindowEvent::Resized(
                dimensions.x,
                dimensions.y,
            )));
    }

    fn display_dimensions(&self) -> Vector2<u32> {
        Vector2::new(1920, 1080)
    }

    fn device_pixel_ratio(&self) -> f32 {
        1.0
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        self.state.fullscreen.store(fullscreen, Ordering::Relaxed);
        true
    }

    fn is_fullscreen(&self) -> bool {
        self.state.fullscreen.load(Ordering::Relaxed)
    }

    fn set_title(&mut self, title: &str) {
        *self.state.title.lock().unwrap() = title.to_owned();
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        events.extend(self.state.queue.lock().unwrap().drain(..));
    }

    fn close(&mut self) {
        self.state.closed.store(true, Ordering::Relaxed);
        self.state.native_alive.store(false, Ordering::Relaxed);
        self.state.visible.store(false, Ordering::Relaxed);
    }

    fn drawable_factory(&self) -> Rc<dyn DrawableFactory> {
        Rc::new(HeadlessFactory {
            state: self.state.clone(),
        })
    }
}

struct HeadlessFactory {
    state: Arc<HeadlessState>,
}

impl DrawableFactory for HeadlessFactory {
    fn create_drawable(&self, caps: &GlCapabilities) -> GlResult<Box<dyn Drawable>> {
        self.state.drawables_created.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(HeadlessDrawable {
            state: self.state.clone(),
            caps: *caps,
        }))
    }
}

struct HeadlessDrawable {
    state: Arc<HeadlessState>,
    caps: GlCapabilities,
}

impl Drawable for HeadlessDrawable {
    fn set_realized(&self, realized: bool) -> GlResult<()> {
        self.state.realized.store(realized, Ordering::Relaxed);
        Ok(())
    }

    fn is_realized(&self) -> bool {
        self.state.realized.load(Ordering::Relaxed)
    }

    fn destroy(&mut self) {
        self.state.drawable_destroyed.store(true, Ordering::Relaxed);
        self.state.realized.store(false, Ordering::Relaxed);
    }

    fn swap_buffers(&self) -> GlResult<()> {
        if !self.is_realized() {
            return Err(Error::NotRealized);
        }

        self.state.swaps.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn resize(&self, dimensions: Vector2<u32>) {
        *self.state.viewport.lock().unwrap() = Some(dimensions);
    }

    fn chosen_capabilities(&self) -> Option<GlCapabilities> {
        // The mock always grants exactly what was requested.
        if self.is_realized() {
            Some(self.caps)
        } else {
            None
        }
    }

    fn lock_surface(&self) -> GlResult<()> {
        if !self.is_realized() {
            return Err(Error::SurfaceUnavailable);
        }

        if self.state.surface_locked.swap(true, Ordering::Relaxed) {
            return Err(Error::SurfaceAlreadyLocked);
        }

        Ok(())
    }

    fn unlock_surface(&self) {
        self.state.surface_locked.store(false, Ordering::Relaxed);
    }

    fn is_surface_locked(&self) -> bool {
        self.state.surface_locked.load(Ordering::Relaxed)
    }

    fn create_context(&self, share: Option<&dyn Context>) -> GlResult<Box<dyn Context>> {
        if share.is_some() {
            return Err(Error::SharedContextUnsupported);
        }

        self.state.contexts_created.fetch_add(1, Ordering::Relaxed);
        Ok(Box::new(HeadlessContext {
            state: self.state.clone(),
        }))
    }
}

struct HeadlessContext {
    state: Arc<HeadlessState>,
}

impl Context for HeadlessContext {
    fn make_current(&self) -> GlResult<()> {
        self.state.binds.fetch_add(1, Ordering::Relaxed);
        self.state.context_current.store(true, Ordering::Relaxed);
        Ok(())
    }

    fn release(&self) -> GlResult<()> {
        if self.state.context_current.swap(false, Ordering::Relaxed) {
            self.state.releases.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    fn is_current(&self) -> bool {
        self.state.context_current.load(Ordering::Relaxed)
    }

    fn destroy(&mut self) {
        self.state.context_destroyed.store(true, Ordering::Relaxed);
        self.state.context_current.store(false, Ordering::Relaxed);
    }

    fn api(&self) -> GlApi {
        GlApi::OpenGl
    }

    fn proc_address(&self, _: &str) -> *const ::std::os::raw::c_void {
        ::std::ptr::null()
    }
}
