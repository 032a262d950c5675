//! # What is this?
//!
//! Sash is a small window adapter which is customized for OpenGL use. It
//! wraps a plain window behind a pluggable backend, manages the lifecycle
//! of the OpenGL drawable and context around it, and guarantees that the
//! context is current inside the registered listeners' callbacks.
//!
//! ## Window
//!
//! The `Window` facade forwards visibility, geometry, fullscreen and
//! listener registration to an underlying windowing backend. Backends are
//! pluggable through the `window::backends::Visitor` trait; a `glutin`
//! based backend is provided for desktop platforms, and a fully scripted
//! `headless` backend is provided for tests and CI environments.
//!
//! ## GlWindow
//!
//! `GlWindow` is the OpenGL-aware facade around a `Window`. The GL
//! drawable and context are created lazily the first time the window
//! becomes visible, and destroyed together on `close`. A two-variant
//! `DispatchMode` decides whether the context is made current around
//! user event callbacks while pumping messages.
//!
//! ```rust,ignore
//! use sash::prelude::*;
//!
//! let mut window = GlWindow::new()?;
//! window.add_gl_event_listener(renderer);
//! window.set_visible(true)?;
//!
//! loop {
//!     window.display()?;
//! }
//! ```

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

#[macro_use]
pub mod errors;
#[macro_use]
pub mod utils;

pub mod math;
pub mod window;
pub mod gl;

pub mod prelude;

pub use crate::errors::Result;
pub use crate::gl::{DispatchMode, GlCapabilities, GlWindow};
pub use crate::window::{Window, WindowParams};
