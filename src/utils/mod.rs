//! Commonly used utilities: typed handles and versioned registries.

#[macro_use]
pub mod handle;
pub mod registry;

pub mod prelude {
    pub use super::handle::{Handle, HandleIndex, HandleLike};
    pub use super::registry::Registry;
}

pub use self::handle::{Handle, HandleIndex, HandleLike};
pub use self::registry::Registry;
