//! The backend contract a native window has to fulfill, together with the
//! built-in implementations.

pub mod headless;

mod glutin;

use std::rc::Rc;

use crate::errors::Result;
use crate::gl::drawable::DrawableFactory;
use crate::math::prelude::Vector2;

use super::events::Event;
use super::WindowParams;

/// The operations a native window backend provides. The facade `Window`
/// forwards to these, and the GL window adapter re-exposes the contract
/// while refusing the native lifecycle parts it cannot perform itself.
pub trait Visitor {
    /// Returns true if this backend owns the native resources it stands
    /// for.
    fn is_terminal(&self) -> bool;

    /// Allocates the native resources backing the window.
    fn create_native(&mut self) -> Result<()>;

    /// Releases the native resources backing the window.
    fn close_native(&mut self);

    /// Shows the window if it was hidden.
    fn show(&mut self);

    /// Hides the window if it was visible.
    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    fn position(&self) -> Vector2<i32>;

    fn set_position(&mut self, position: Vector2<i32>);

    fn dimensions(&self) -> Vector2<u32>;

    fn resize(&mut self, dimensions: Vector2<u32>);

    fn display_dimensions(&self) -> Vector2<u32>;

    fn device_pixel_ratio(&self) -> f32;

    fn set_fullscreen(&mut self, fullscreen: bool) -> bool;

    fn is_fullscreen(&self) -> bool;

    fn set_title(&mut self, title: &str);

    /// Drains the pending native events into `events`.
    fn poll_events(&mut self, events: &mut Vec<Event>);

    /// Closes the native window.
    fn close(&mut self);

    /// Returns the factory that produces GL drawables for this window.
    fn drawable_factory(&self) -> Rc<dyn DrawableFactory>;
}

/// Creates the default backend of the host platform.
pub fn new(params: WindowParams) -> Result<Box<dyn Visitor>> {
    let visitor = self::glutin::new(params)?;
    Ok(visitor)
}

/// Creates a headless backend.
pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
