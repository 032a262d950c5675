use std::cell::Cell;
use std::os::raw::c_void;
use std::rc::Rc;

use gl;
use glutin;
use glutin::GlContext;

use crate::errors::Result;
use crate::gl::capabilities::GlCapabilities;
use crate::gl::drawable::{Context, Drawable, DrawableFactory, GlApi};
use crate::gl::errors::{Error, Result as GlResult};
use crate::math::prelude::Vector2;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: Rc<glutin::GlWindow>,
    events_loop: glutin::EventsLoop,
    visible: bool,
    fullscreen: bool,
}

impl GlutinVisitor {
    pub fn new(params: WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ))
            .with_visibility(false);

        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample as u16)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Latest)
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(|e| err_format!("{}", e))?;

        debug!(
            "created {}x{} window ({}).",
            params.size.x, params.size.y, params.title
        );

        Ok(GlutinVisitor {
            window: Rc::new(window),
            events_loop,
            visible: false,
            fullscreen: false,
        })
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn is_terminal(&self) -> bool {
        true
    }

    #[inline]
    fn create_native(&mut self) -> Result<()> {
        // The toolkit allocates the native resources when the window is
        // built.
        Ok(())
    }

    #[inline]
    fn close_native(&mut self) {
        self.window.hide();
        self.visible = false;
    }

    #[inline]
    fn show(&mut self) {
        self.window.show();
        self.visible = true;
    }

    #[inline]
    fn hide(&mut self) {
        self.window.hide();
        self.visible = false;
    }

    #[inline]
    fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    fn position(&self) -> Vector2<i32> {
        let pos = self.window.get_position().unwrap();
        Vector2::new(pos.x as i32, pos.y as i32)
    }

    #[inline]
    fn set_position(&mut self, position: Vector2<i32>) {
        self.window.set_position(glutin::dpi::LogicalPosition::new(
            f64::from(position.x),
            f64::from(position.y),
        ));
    }

    #[inline]
    fn dimensions(&self) -> Vector2<u32> {
        let size = self.window.get_inner_size().unwrap();
        Vector2::new(size.width as u32, size.height as u32)
    }

    #[inline]
    fn resize(&mut self, dimensions: Vector2<u32>) {
        self.window.set_inner_size(glutin::dpi::LogicalSize::new(
            f64::from(dimensions.x),
            f64::from(dimensions.y),
        ));
    }

    #[inline]
    fn display_dimensions(&self) -> Vector2<u32> {
        let size = self.window.get_current_monitor().get_dimensions();
        Vector2::new(size.width as u32, size.height as u32)
    }

    #[inline]
    fn device_pixel_ratio(&self) -> f32 {
        self.window.get_hidpi_factor() as f32
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> bool {
        if fullscreen {
            self.window
                .set_fullscreen(Some(self.window.get_current_monitor()));
        } else {
            self.window.set_fullscreen(None);
        }

        self.fullscreen = fullscreen;
        true
    }

    #[inline]
    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[inline]
    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let dims = self.dimensions();
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v, dims) {
                events.push(e);
            }
        });
    }

    fn close(&mut self) {
        self.window.hide();
        self.visible = false;
    }

    fn drawable_factory(&self) -> Rc<dyn DrawableFactory> {
        Rc::new(GlutinFactory {
            window: Rc::clone(&self.window),
        })
    }
}

struct GlutinFactory {
    window: Rc<glutin::GlWindow>,
}

impl DrawableFactory for GlutinFactory {
    fn create_drawable(&self, _: &GlCapabilities) -> GlResult<Box<dyn Drawable>> {
        // The toolkit fuses surface and context creation with the window
        // itself; the format that was actually granted is queried from the
        // realized drawable, not from the requested descriptor.
        Ok(Box::new(GlutinDrawable {
            window: Rc::clone(&self.window),
            realized: Cell::new(false),
            locked: Cell::new(false),
        }))
    }
}

struct GlutinDrawable {
    window: Rc<glutin::GlWindow>,
    realized: Cell<bool>,
    locked: Cell<bool>,
}

impl Drawable for GlutinDrawable {
    #[inline]
    fn set_realized(&self, realized: bool) -> GlResult<()> {
        self.realized.set(realized);
        Ok(())
    }

    #[inline]
    fn is_realized(&self) -> bool {
        self.realized.get()
    }

    fn destroy(&mut self) {
        // The surface itself lives and dies with the toolkit window.
        self.realized.set(false);
        self.locked.set(false);
    }

    #[inline]
    fn swap_buffers(&self) -> GlResult<()> {
        self.window.swap_buffers()?;
        Ok(())
    }

    fn resize(&self, dimensions: Vector2<u32>) {
        let size =
            glutin::dpi::PhysicalSize::new(f64::from(dimensions.x), f64::from(dimensions.y));
        self.window.resize(size);

        unsafe {
            gl::Viewport(0, 0, dimensions.x as i32, dimensions.y as i32);
        }
    }

    fn chosen_capabilities(&self) -> Option<GlCapabilities> {
        if !self.realized.get() {
            return None;
        }

        let format = self.window.get_pixel_format();
        Some(GlCapabilities {
            color_bits: format.color_bits,
            alpha_bits: format.alpha_bits,
            depth_bits: format.depth_bits,
            stencil_bits: format.stencil_bits,
            double_buffered: format.double_buffer,
            multisample: format.multisampling,
            hardware_accelerated: format.hardware_accelerated,
            stereo: format.stereoscopy,
            srgb: format.srgb,
        })
    }

    fn lock_surface(&self) -> GlResult<()> {
        if !self.realized.get() {
            return Err(Error::SurfaceUnavailable);
        }

        if self.locked.get() {
            return Err(Error::SurfaceAlreadyLocked);
        }

        self.locked.set(true);
        Ok(())
    }

    #[inline]
    fn unlock_surface(&self) {
        self.locked.set(false);
    }

    #[inline]
    fn is_surface_locked(&self) -> bool {
        self.locked.get()
    }

    fn create_context(&self, share: Option<&dyn Context>) -> GlResult<Box<dyn Context>> {
        if share.is_some() {
            return Err(Error::SharedContextUnsupported);
        }

        gl::load_with(|symbol| self.window.get_proc_address(symbol) as *const _);

        Ok(Box::new(GlutinContext {
            window: Rc::clone(&self.window),
        }))
    }
}

struct GlutinContext {
    window: Rc<glutin::GlWindow>,
}

impl Context for GlutinContext {
    #[inline]
    fn make_current(&self) -> GlResult<()> {
        unsafe {
            self.window.make_current()?;
        }
        Ok(())
    }

    #[inline]
    fn release(&self) -> GlResult<()> {
        // The toolkit keeps a context bound to the thread until another
        // one takes over.
        Ok(())
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    fn destroy(&mut self) {}

    fn api(&self) -> GlApi {
        match self.window.get_api() {
            glutin::Api::OpenGl => GlApi::OpenGl,
            glutin::Api::OpenGlEs => GlApi::OpenGlEs,
            glutin::Api::WebGl => GlApi::WebGl,
        }
    }

    #[inline]
    fn proc_address(&self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const _
    }
}
