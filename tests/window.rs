use std::sync::{Arc, Mutex};

use sash::prelude::*;
use sash::window::backends::headless::{HeadlessHandle, HeadlessVisitor};

fn headless_window() -> (Window, HeadlessHandle) {
    let _ = env_logger::try_init();

    let visitor = HeadlessVisitor::new();
    let handle = visitor.handle();
    (Window::from_backend(Box::new(visitor)), handle)
}

#[derive(Default)]
struct EventCounter {
    resizes: usize,
    moves: usize,
    closes: usize,
    presses: usize,
    keys: usize,
}

type SharedCounter = Arc<Mutex<EventCounter>>;

struct WindowProbe(SharedCounter);

impl WindowListener for WindowProbe {
    fn on_resized(&mut self, _: Vector2<u32>) -> Result<()> {
        self.0.lock().unwrap().resizes += 1;
        Ok(())
    }

    fn on_moved(&mut self, _: Vector2<i32>) -> Result<()> {
        self.0.lock().unwrap().moves += 1;
        Ok(())
    }

    fn on_closed(&mut self) -> Result<()> {
        self.0.lock().unwrap().closes += 1;
        Ok(())
    }
}

struct MouseProbe(SharedCounter);

impl MouseListener for MouseProbe {
    fn on_pressed(&mut self, _: MouseButton) -> Result<()> {
        self.0.lock().unwrap().presses += 1;
        Ok(())
    }
}

struct KeyProbe(SharedCounter);

impl KeyListener for KeyProbe {
    fn on_pressed(&mut self, _: Key) -> Result<()> {
        self.0.lock().unwrap().keys += 1;
        Ok(())
    }
}

#[test]
fn geometry_forwards_to_the_backend() {
    let (window, handle) = headless_window();

    assert_eq!(window.dimensions(), Vector2::new(640, 320));
    window.resize(Vector2::new(800, 600));
    assert_eq!(window.dimensions(), Vector2::new(800, 600));

    window.set_position(Vector2::new(32, 64));
    assert_eq!(window.position(), Vector2::new(32, 64));

    assert!(!window.is_fullscreen());
    assert!(window.set_fullscreen(true));
    assert!(window.is_fullscreen());

    window.set_title("sash");
    assert_eq!(handle.title(), "sash");

    assert_eq!(window.display_dimensions(), Vector2::new(1920, 1080));
    assert_eq!(window.device_pixel_ratio(), 1.0);

    assert!(!window.is_visible());
    window.set_visible(true);
    assert!(window.is_visible());
}

#[test]
fn events_reach_the_matching_listeners() {
    let (window, handle) = headless_window();
    let counter: SharedCounter = Arc::new(Mutex::new(EventCounter::default()));

    window.add_window_listener(WindowProbe(counter.clone()));
    window.add_mouse_listener(MouseProbe(counter.clone()));
    window.add_key_listener(KeyProbe(counter.clone()));

    handle.resize(Vector2::new(100, 100));
    handle.move_to(Vector2::new(10, 20));
    handle.push_event(Event::Window(WindowEvent::Closed));
    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    handle.push_event(Event::InputDevice(InputEvent::KeyboardPressed {
        key: Key::Space,
    }));

    window.pump_events(EventMask::ALL).unwrap();

    let counter = counter.lock().unwrap();
    assert_eq!(counter.resizes, 1);
    assert_eq!(counter.moves, 1);
    assert_eq!(counter.closes, 1);
    assert_eq!(counter.presses, 1);
    assert_eq!(counter.keys, 1);
}

#[test]
fn masked_out_events_are_discarded() {
    let (window, handle) = headless_window();
    let counter: SharedCounter = Arc::new(Mutex::new(EventCounter::default()));

    window.add_window_listener(WindowProbe(counter.clone()));
    window.add_mouse_listener(MouseProbe(counter.clone()));

    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    handle.push_event(Event::Window(WindowEvent::Closed));
    window.pump_events(EventMask::KEYBOARD).unwrap();

    assert_eq!(counter.lock().unwrap().presses, 0);
    assert_eq!(counter.lock().unwrap().closes, 0);

    handle.push_event(Event::InputDevice(InputEvent::MousePressed {
        button: MouseButton::Left,
    }));
    handle.push_event(Event::Window(WindowEvent::Closed));
    window.pump_events(EventMask::MOUSE | EventMask::WINDOW).unwrap();

    assert_eq!(counter.lock().unwrap().presses, 1);
    assert_eq!(counter.lock().unwrap().closes, 1);
}

#[test]
fn listener_registries_add_remove_list() {
    let (window, _) = headless_window();
    let counter: SharedCounter = Arc::new(Mutex::new(EventCounter::default()));

    let m1 = window.add_mouse_listener(MouseProbe(counter.clone()));
    let m2 = window.add_mouse_listener(MouseProbe(counter.clone()));
    let k1 = window.add_key_listener(KeyProbe(counter.clone()));
    let w1 = window.add_window_listener(WindowProbe(counter.clone()));

    assert_eq!(window.mouse_listeners(), vec![m1, m2]);
    assert_eq!(window.key_listeners(), vec![k1]);
    assert_eq!(window.window_listeners(), vec![w1]);

    window.remove_mouse_listener(m1);
    assert_eq!(window.mouse_listeners(), vec![m2]);

    window.remove_key_listener(k1);
    assert!(window.key_listeners().is_empty());
}

#[test]
fn pumping_a_closed_window_fails() {
    let (window, handle) = headless_window();

    window.close();
    assert!(window.is_closed());
    assert!(handle.is_closed());

    assert!(window.pump_events(EventMask::ALL).is_err());

    // A second close stays quiet.
    window.close();
    assert!(window.is_closed());
}
