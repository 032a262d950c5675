use std::sync::{Arc, Mutex};

use sash::prelude::*;
use sash::window::backends::headless::{HeadlessHandle, HeadlessVisitor};

fn headless_gl_window() -> (GlWindow, HeadlessHandle) {
    let _ = env_logger::try_init();

    let visitor = HeadlessVisitor::new();
    let handle = visitor.handle();
    let window = Window::from_backend(Box::new(visitor));
    (
        GlWindow::from_window(window, GlCapabilities::default()),
        handle,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Note {
    Init,
    Reshape(u32, u32),
    Display,
}

struct Recorder {
    tape: Arc<Mutex<Vec<Note>>>,
}

impl GlEventListener for Recorder {
    fn on_init(&mut self) -> Result<()> {
        self.tape.lock().unwrap().push(Note::Init);
        Ok(())
    }

    fn on_reshape(&mut self, dimensions: Vector2<u32>) -> Result<()> {
        self.tape
            .lock()
            .unwrap()
            .push(Note::Reshape(dimensions.x, dimensions.y));
        Ok(())
    }

    fn on_display(&mut self) -> Result<()> {
        self.tape.lock().unwrap().push(Note::Display);
        Ok(())
    }
}

#[test]
fn realizes_once_on_first_visibility() {
    let (mut window, handle) = headless_gl_window();

    assert!(window.context().is_none());
    assert!(window.drawable().is_none());
    assert!(window.factory().is_none());
    assert_eq!(window.chosen_capabilities(), None);

    window.set_visible(true).unwrap();
    window.set_visible(true).unwrap();
    window.set_visible(false).unwrap();
    window.set_visible(true).unwrap();

    assert_eq!(handle.drawables_created(), 1);
    assert_eq!(handle.contexts_created(), 1);
    assert!(handle.is_realized());
}

#[test]
fn default_capabilities_are_granted() {
    let (mut window, _) = headless_gl_window();

    window.set_visible(true).unwrap();

    assert!(window.context().is_some());
    assert!(window.drawable().is_some());
    assert!(window.factory().is_some());
    assert_eq!(window.chosen_capabilities(), Some(GlCapabilities::default()));
    assert_eq!(window.api(), Some(GlApi::OpenGl));
}

#[test]
fn close_before_realization_is_harmless() {
    let (mut window, handle) = headless_gl_window();

    window.close().unwrap();

    assert!(handle.is_closed());
    assert_eq!(handle.contexts_created(), 0);
    assert!(!handle.is_context_destroyed());
}

#[test]
fn close_twice_is_a_noop() {
    let (mut window, handle) = headless_gl_window();

    window.set_visible(true).unwrap();
    window.close().unwrap();

    assert!(handle.is_closed());
    assert!(handle.is_context_destroyed());
    assert!(handle.is_drawable_destroyed());

    window.close().unwrap();
}

#[test]
fn close_releases_a_current_context() {
    let (mut window, handle) = headless_gl_window();

    window.set_visible(true).unwrap();
    window.context().unwrap().make_current().unwrap();
    assert!(handle.is_context_current());

    window.close().unwrap();

    assert!(!handle.is_context_current());
    assert_eq!(handle.release_count(), 1);
    assert!(handle.is_context_destroyed());
}

#[test]
fn reshape_is_deferred_until_display() {
    let (mut window, handle) = headless_gl_window();

    let tape = Arc::new(Mutex::new(Vec::new()));
    window.add_gl_event_listener(Recorder { tape: tape.clone() });
    window.set_visible(true).unwrap();

    assert!(!window.is_reshape_pending());
    handle.resize(Vector2::new(800, 600));
    window.pump_events().unwrap();
    assert!(window.is_reshape_pending());

    window.display().unwrap();

    assert!(!window.is_reshape_pending());
    assert_eq!(handle.viewport(), Some(Vector2::new(800, 600)));
    assert_eq!(
        *tape.lock().unwrap(),
        vec![Note::Init, Note::Reshape(800, 600), Note::Display]
    );

    // The next cycle must not replay the reshape.
    window.display().unwrap();
    assert_eq!(
        *tape.lock().unwrap(),
        vec![
            Note::Init,
            Note::Reshape(800, 600),
            Note::Display,
            Note::Display
        ]
    );
}

#[test]
fn display_before_realization_fails() {
    let (mut window, _) = headless_gl_window();
    assert!(window.display().is_err());
}

#[test]
fn auto_swap_mode_controls_the_swap() {
    let (mut window, handle) = headless_gl_window();
    window.set_visible(true).unwrap();

    assert!(window.auto_swap_buffer_mode());
    window.display().unwrap();
    assert_eq!(handle.swap_count(), 1);

    window.set_auto_swap_buffer_mode(false);
    window.display().unwrap();
    assert_eq!(handle.swap_count(), 1);

    window.swap_buffers().unwrap();
    assert_eq!(handle.swap_count(), 2);
}

struct BindProbe {
    handle: HeadlessHandle,
    observed: Arc<Mutex<Vec<bool>>>,
}

impl MouseListener for BindProbe {
    fn on_pressed(&mut self, _: MouseButton) -> Result<()> {
        self.observed
            .lock()
            .unwrap()
            .push(self.handle.is_context_current());
        Ok(())
    }
}

#[test]
fn pumping_with_context_current_binds_around_callbacks() {
    let (mut window, handle) = headless_gl_window();
    window.set_visible(true).unwrap();

    assert_eq!(window.dispatch_mode(), DispatchMode::ContextCurrent);

    let observed = Arc::new(Mutex::new(Vec::new()));
    window.add_mouse_listener(BindProbe {
        handle: handle.clone(),
        observed: observed.clone(),
    });

    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    window.pump_events().unwrap();

    assert_eq!(*observed.lock().unwrap(), vec![true]);
    assert!(!handle.is_context_current());
    assert_eq!(handle.bind_count(), 1);
    assert_eq!(handle.release_count(), 1);
}

#[test]
fn pumping_without_context_never_binds() {
    let (mut window, handle) = headless_gl_window();
    window.set_visible(true).unwrap();
    window.set_dispatch_mode(DispatchMode::NoContext);

    let observed = Arc::new(Mutex::new(Vec::new()));
    window.add_mouse_listener(BindProbe {
        handle: handle.clone(),
        observed: observed.clone(),
    });

    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    window.pump_events().unwrap();

    assert_eq!(*observed.lock().unwrap(), vec![false]);
    assert_eq!(handle.bind_count(), 0);
}

struct Exploder;

impl MouseListener for Exploder {
    fn on_pressed(&mut self, _: MouseButton) -> Result<()> {
        Err(failure::err_msg("boom"))
    }
}

#[test]
fn failing_callbacks_restore_swap_mode_and_release() {
    let (mut window, handle) = headless_gl_window();
    window.set_visible(true).unwrap();
    window.add_mouse_listener(Exploder);

    assert!(window.auto_swap_buffer_mode());

    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    assert!(window.pump_events().is_err());

    assert!(window.auto_swap_buffer_mode());
    assert!(!handle.is_context_current());
    // A pump never swaps, not even with the auto mode on.
    assert_eq!(handle.swap_count(), 0);
}

#[test]
fn surface_locking_round_trip() {
    let (mut window, _) = headless_gl_window();

    assert!(Drawable::lock_surface(&window).is_err());

    window.set_visible(true).unwrap();
    Drawable::lock_surface(&window).unwrap();
    assert!(Drawable::is_surface_locked(&window));
    assert!(Drawable::lock_surface(&window).is_err());

    Drawable::unlock_surface(&window);
    assert!(!Drawable::is_surface_locked(&window));
}

#[test]
fn gl_listener_registry() {
    let (mut window, _) = headless_gl_window();

    let tape = Arc::new(Mutex::new(Vec::new()));
    let h1 = window.add_gl_event_listener(Recorder { tape: tape.clone() });
    let h2 = window.add_gl_event_listener(Recorder { tape: tape.clone() });

    assert_eq!(window.gl_event_listeners(), vec![h1, h2]);

    window.remove_gl_event_listener(h1);
    assert_eq!(window.gl_event_listeners(), vec![h2]);
}

#[test]
fn late_listeners_are_initialized_on_the_next_cycle() {
    let (mut window, _) = headless_gl_window();
    window.set_visible(true).unwrap();
    window.display().unwrap();

    let tape = Arc::new(Mutex::new(Vec::new()));
    window.add_gl_event_listener(Recorder { tape: tape.clone() });
    window.display().unwrap();

    assert_eq!(*tape.lock().unwrap(), vec![Note::Init, Note::Display]);
}

#[test]
#[should_panic(expected = "must not be called")]
fn raw_dispatch_is_a_misuse() {
    use sash::window::backends::Visitor;

    let (mut window, _) = headless_gl_window();
    let mut sink = Vec::new();
    Visitor::poll_events(&mut window, &mut sink);
}

#[test]
#[should_panic(expected = "must not be called")]
fn native_lifecycle_is_a_misuse() {
    use sash::window::backends::Visitor;

    let (mut window, _) = headless_gl_window();
    let _ = Visitor::create_native(&mut window);
}
