//! Listener capabilities for the three window event categories, and the
//! registry they are stored in.

use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::math::prelude::Vector2;
use crate::utils::prelude::{HandleLike, Registry};

use super::events::{Key, MouseButton};

impl_handle!(WindowListenerHandle);
impl_handle!(MouseListenerHandle);
impl_handle!(KeyListenerHandle);

/// Receives notifications about the window itself. All methods default to
/// doing nothing, implement the ones you care about.
pub trait WindowListener {
    fn on_resized(&mut self, _: Vector2<u32>) -> Result<()> {
        Ok(())
    }

    fn on_moved(&mut self, _: Vector2<i32>) -> Result<()> {
        Ok(())
    }

    fn on_closed(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_focus_changed(&mut self, _: bool) -> Result<()> {
        Ok(())
    }
}

/// Receives notifications from the mouse attached to the window.
pub trait MouseListener {
    fn on_cursor_moved(&mut self, _: Vector2<f32>) -> Result<()> {
        Ok(())
    }

    fn on_pressed(&mut self, _: MouseButton) -> Result<()> {
        Ok(())
    }

    fn on_released(&mut self, _: MouseButton) -> Result<()> {
        Ok(())
    }

    fn on_wheel(&mut self, _: Vector2<f32>) -> Result<()> {
        Ok(())
    }
}

/// Receives notifications from the keyboard attached to the window.
pub trait KeyListener {
    fn on_pressed(&mut self, _: Key) -> Result<()> {
        Ok(())
    }

    fn on_released(&mut self, _: Key) -> Result<()> {
        Ok(())
    }

    fn on_character(&mut self, _: char) -> Result<()> {
        Ok(())
    }
}

/// An ordered collection of listeners of one event category, named by
/// typed handles. The set is shared between the window and its callers,
/// so attaching and detaching go through interior locking.
pub struct ListenerSet<H: HandleLike, L: ?Sized> {
    registry: Mutex<Registry<H, Arc<Mutex<L>>>>,
    scratch: Mutex<Vec<Arc<Mutex<L>>>>,
}

impl<H: HandleLike, L: ?Sized> ListenerSet<H, L> {
    pub fn new() -> Self {
        ListenerSet {
            registry: Mutex::new(Registry::new()),
            scratch: Mutex::new(Vec::new()),
        }
    }

    /// Adds a listener, returning the handle that names it.
    pub fn attach(&self, listener: Arc<Mutex<L>>) -> H {
        self.registry.lock().unwrap().register(listener)
    }

    /// Removes a listener from the set.
    pub fn detach(&self, handle: H) -> Option<Arc<Mutex<L>>> {
        self.registry.lock().unwrap().unregister(handle)
    }

    /// Returns the handles of the listeners in this set, in registration
    /// order.
    pub fn handles(&self) -> Vec<H> {
        self.registry.lock().unwrap().handles().collect()
    }

    /// Returns the number of listeners in this set.
    pub fn len(&self) -> usize {
        self.registry.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes `func` once per listener. The registry lock is not held
    /// while listeners run, so a listener may attach or detach others.
    pub fn each<F>(&self, mut func: F) -> Result<()>
    where
        F: FnMut(&mut L) -> Result<()>,
    {
        let mut scratch = self.scratch.lock().unwrap();
        scratch.clear();

        {
            let registry = self.registry.lock().unwrap();
            scratch.extend(registry.values().cloned());
        }

        for listener in scratch.drain(..) {
            func(&mut *listener.lock().unwrap())?;
        }

        Ok(())
    }
}

impl<H: HandleLike, L: ?Sized> Default for ListenerSet<H, L> {
    fn default() -> Self {
        ListenerSet::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Counter {
        hits: usize,
    }

    impl WindowListener for Counter {
        fn on_closed(&mut self) -> Result<()> {
            self.hits += 1;
            Ok(())
        }
    }

    #[test]
    fn attach_detach() {
        let set: ListenerSet<WindowListenerHandle, dyn WindowListener> = ListenerSet::new();

        let h1 = set.attach(Arc::new(Mutex::new(Counter { hits: 0 })));
        let h2 = set.attach(Arc::new(Mutex::new(Counter { hits: 0 })));
        assert_eq!(set.len(), 2);
        assert_eq!(set.handles(), vec![h1, h2]);

        let detached = set.detach(h1);
        assert!(detached.is_some());
        assert_eq!(set.len(), 1);
        assert!(set.detach(h1).is_none());
    }

    #[test]
    fn dispatch() {
        let set: ListenerSet<WindowListenerHandle, dyn WindowListener> = ListenerSet::new();
        let counter = Arc::new(Mutex::new(Counter { hits: 0 }));

        set.attach(counter.clone());
        set.each(|lis| lis.on_closed()).unwrap();
        set.each(|lis| lis.on_closed()).unwrap();

        assert_eq!(counter.lock().unwrap().hits, 2);
    }
}
