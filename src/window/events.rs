use std::ops::{BitOr, BitOrAssign};

/// The status events of the window itself.
#[derive(Debug, Clone, Copy)]
pub enum WindowEvent {
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The size of window has changed.
    Resized(u32, u32),
    /// The position of window has changed.
    Moved(i32, i32),
}

/// Input device event, supports mouse and keyboard only.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The cursor has moved on the window.
    /// The parameter are the (x, y) coords in pixels relative to the
    /// bottom-left corner of the window.
    MouseMoved { position: (f32, f32) },
    /// Pressed event on mouse has been received.
    MousePressed { button: MouseButton },
    /// Released event from mouse has been received.
    MouseReleased { button: MouseButton },
    /// A mouse wheel movement or touchpad scroll occurred.
    MouseWheel { delta: (f32, f32) },

    /// Pressed event on keyboard has been received.
    KeyboardPressed { key: Key },
    /// Released event from keyboard has been received.
    KeyboardReleased { key: Key },
    /// Received a unicode character.
    ReceivedCharacter { character: char },
}

/// The enumerations of all events that come from the window or from
/// various kinds of user input.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    Window(WindowEvent),
    InputDevice(InputEvent),
}

impl Event {
    /// Returns the mask bit this event is filtered by while pumping.
    pub fn mask(&self) -> EventMask {
        match *self {
            Event::Window(_) => EventMask::WINDOW,
            Event::InputDevice(v) => match v {
                InputEvent::MouseMoved { .. }
                | InputEvent::MousePressed { .. }
                | InputEvent::MouseReleased { .. }
                | InputEvent::MouseWheel { .. } => EventMask::MOUSE,
                _ => EventMask::KEYBOARD,
            },
        }
    }
}

/// Selects which event categories a message pump delivers to listeners.
/// Events outside the mask are still drained from the backend, but are
/// discarded without notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventMask(u32);

impl EventMask {
    pub const WINDOW: EventMask = EventMask(1);
    pub const MOUSE: EventMask = EventMask(1 << 1);
    pub const KEYBOARD: EventMask = EventMask(1 << 2);
    pub const ALL: EventMask = EventMask(0b111);

    /// Returns true if every category of `other` is enabled in `self`.
    #[inline]
    pub fn contains(self, other: EventMask) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns true if `event` passes this mask.
    #[inline]
    pub fn accepts(self, event: &Event) -> bool {
        self.contains(event.mask())
    }
}

impl BitOr for EventMask {
    type Output = EventMask;

    fn bitor(self, rhs: EventMask) -> EventMask {
        EventMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for EventMask {
    fn bitor_assign(&mut self, rhs: EventMask) {
        self.0 |= rhs.0;
    }
}

/// The button of a mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

/// The virtual keycode of a physical key. Notes that it don't necessarily
/// represent what's actually printed on the key cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// The '1' key over the letters.
    Key1,
    /// The '2' key over the letters.
    Key2,
    /// The '3' key over the letters.
    Key3,
    /// The '4' key over the letters.
    Key4,
    /// The '5' key over the letters.
    Key5,
    /// The '6' key over the letters.
    Key6,
    /// The '7' key over the letters.
    Key7,
    /// The '8' key over the letters.
    Key8,
    /// The '9' key over the letters.
    Key9,
    /// The '0' key over the 'O' and 'P' keys.
    Key0,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    Escape,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Insert,
    Home,
    Delete,
    End,
    PageDown,
    PageUp,

    Left,
    Up,
    Right,
    Down,

    /// The Backspace key, right over Enter.
    Back,
    /// The Enter key.
    Return,
    /// The space bar.
    Space,
    Tab,

    LAlt,
    LControl,
    LShift,
    RAlt,
    RControl,
    RShift,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mask_filtering() {
        let resized = Event::Window(WindowEvent::Resized(1, 1));
        let pressed = Event::InputDevice(InputEvent::MousePressed {
            button: MouseButton::Left,
        });
        let key = Event::InputDevice(InputEvent::KeyboardPressed { key: Key::A });

        assert!(EventMask::ALL.accepts(&resized));
        assert!(EventMask::WINDOW.accepts(&resized));
        assert!(!EventMask::WINDOW.accepts(&pressed));
        assert!((EventMask::MOUSE | EventMask::KEYBOARD).accepts(&key));
        assert!(!EventMask::MOUSE.accepts(&key));
    }
}
