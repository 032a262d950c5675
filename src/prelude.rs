pub use crate::errors::Result;

pub use crate::math::prelude::{vec2, Vector2};

pub use crate::gl::prelude::*;
pub use crate::window::prelude::*;

pub use crate::utils::prelude::{Handle, Registry};
