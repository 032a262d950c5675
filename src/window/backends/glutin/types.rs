use glutin;

use crate::math::prelude::Vector2;

use super::super::super::events::{Event, InputEvent, Key, MouseButton, WindowEvent};

pub fn from_event(source: glutin::Event, dimensions: Vector2<u32>) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event, dimensions),
        _ => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent, dimensions: Vector2<u32>) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => {
            if v {
                Some(Event::Window(WindowEvent::GainFocus))
            } else {
                Some(Event::Window(WindowEvent::LostFocus))
            }
        }

        glutin::WindowEvent::Resized(glutin::dpi::LogicalSize { width, height }) => Some(
            Event::Window(WindowEvent::Resized(width as u32, height as u32)),
        ),

        glutin::WindowEvent::Moved(glutin::dpi::LogicalPosition { x, y }) => {
            Some(Event::Window(WindowEvent::Moved(x as i32, y as i32)))
        }

        glutin::WindowEvent::CursorMoved { position, .. } => {
            Some(Event::InputDevice(InputEvent::MouseMoved {
                position: (
                    position.x as f32,
                    dimensions.y as f32 - position.y as f32,
                ),
            }))
        }

        glutin::WindowEvent::MouseWheel { delta, .. } => match delta {
            glutin::MouseScrollDelta::LineDelta(x, y) => {
                Some(Event::InputDevice(InputEvent::MouseWheel {
                    delta: (x as f32, y as f32),
                }))
            }
            glutin::MouseScrollDelta::PixelDelta(pos) => {
                Some(Event::InputDevice(InputEvent::MouseWheel {
                    delta: (pos.x as f32, pos.y as f32),
                }))
            }
        },

        glutin::WindowEvent::MouseInput {
            state: glutin::ElementState::Pressed,
            button,
            ..
        } => Some(Event::InputDevice(InputEvent::MousePressed {
            button: from_mouse_button(button),
        })),

        glutin::WindowEvent::MouseInput {
            state: glutin::ElementState::Released,
            button,
            ..
        } => Some(Event::InputDevice(InputEvent::MouseReleased {
            button: from_mouse_button(button),
        })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Pressed,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardPressed { key })),

        glutin::WindowEvent::KeyboardInput {
            input:
                glutin::KeyboardInput {
                    state: glutin::ElementState::Released,
                    virtual_keycode: Some(key),
                    ..
                },
            ..
        } => from_virtual_key_code(key)
            .map(|key| Event::InputDevice(InputEvent::KeyboardReleased { key })),

        glutin::WindowEvent::ReceivedCharacter(character) => {
            Some(Event::InputDevice(InputEvent::ReceivedCharacter {
                character,
            }))
        }

        _ => None,
    }
}

fn from_mouse_button(button: glutin::MouseButton) -> MouseButton {
    match button {
        glutin::MouseButton::Left => MouseButton::Left,
        glutin::MouseButton::Right => MouseButton::Right,
        glutin::MouseButton::Middle => MouseButton::Middle,
        glutin::MouseButton::Other(v) => MouseButton::Other(v),
    }
}

fn from_virtual_key_code(key: glutin::VirtualKeyCode) -> Option<Key> {
    let v = match key {
        glutin::VirtualKeyCode::Key1 => Key::Key1,
        glutin::VirtualKeyCode::Key2 => Key::Key2,
        glutin::VirtualKeyCode::Key3 => Key::Key3,
        glutin::VirtualKeyCode::Key4 => Key::Key4,
        glutin::VirtualKeyCode::Key5 => Key::Key5,
        glutin::VirtualKeyCode::Key6 => Key::Key6,
        glutin::VirtualKeyCode::Key7 => Key::Key7,
        glutin::VirtualKeyCode::Key8 => Key::Key8,
        glutin::VirtualKeyCode::Key9 => Key::Key9,
        glutin::VirtualKeyCode::Key0 => Key::Key0,
        glutin::VirtualKeyCode::A => Key::A,
        glutin::VirtualKeyCode::B => Key::B,
        glutin::VirtualKeyCode::C => Key::C,
        glutin::VirtualKeyCode::D => Key::D,
        glutin::VirtualKeyCode::E => Key::E,
        glutin::VirtualKeyCode::F => Key::F,
        glutin::VirtualKeyCode::G => Key::G,
        glutin::VirtualKeyCode::H => Key::H,
        glutin::VirtualKeyCode::I => Key::I,
        glutin::VirtualKeyCode::J => Key::J,
        glutin::VirtualKeyCode::K => Key::K,
        glutin::VirtualKeyCode::L => Key::L,
        glutin::VirtualKeyCode::M => Key::M,
        glutin::VirtualKeyCode::N => Key::N,
        glutin::VirtualKeyCode::O => Key::O,
        glutin::VirtualKeyCode::P => Key::P,
        glutin::VirtualKeyCode::Q => Key::Q,
        glutin::VirtualKeyCode::R => Key::R,
        glutin::VirtualKeyCode::S => Key::S,
        glutin::VirtualKeyCode::T => Key::T,
        glutin::VirtualKeyCode::U => Key::U,
        glutin::VirtualKeyCode::V => Key::V,
        glutin::VirtualKeyCode::W => Key::W,
        glutin::VirtualKeyCode::X => Key::X,
        glutin::VirtualKeyCode::Y => Key::Y,
        glutin::VirtualKeyCode::Z => Key::Z,
        glutin::VirtualKeyCode::Escape => Key::Escape,
        glutin::VirtualKeyCode::F1 => Key::F1,
        glutin::VirtualKeyCode::F2 => Key::F2,
        glutin::VirtualKeyCode::F3 => Key::F3,
        glutin::VirtualKeyCode::F4 => Key::F4,
        glutin::VirtualKeyCode::F5 => Key::F5,
        glutin::VirtualKeyCode::F6 => Key::F6,
        glutin::VirtualKeyCode::F7 => Key::F7,
        glutin::VirtualKeyCode::F8 => Key::F8,
        glutin::VirtualKeyCode::F9 => Key::F9,
        glutin::VirtualKeyCode::F10 => Key::F10,
        glutin::VirtualKeyCode::F11 => Key::F11,
        glutin::VirtualKeyCode::F12 => Key::F12,
        glutin::VirtualKeyCode::Insert => Key::Insert,
        glutin::VirtualKeyCode::Home => Key::Home,
        glutin::VirtualKeyCode::Delete => Key::Delete,
        glutin::VirtualKeyCode::End => Key::End,
        glutin::VirtualKeyCode::PageDown => Key::PageDown,
        glutin::VirtualKeyCode::PageUp => Key::PageUp,
        glutin::VirtualKeyCode::Left => Key::Left,
        glutin::VirtualKeyCode::Up => Key::Up,
        glutin::VirtualKeyCode::Right => Key::Right,
        glutin::VirtualKeyCode::Down => Key::Down,
        glutin::VirtualKeyCode::Back => Key::Back,
        glutin::VirtualKeyCode::Return => Key::Return,
        glutin::VirtualKeyCode::Space => Key::Space,
        glutin::VirtualKeyCode::Tab => Key::Tab,
        glutin::VirtualKeyCode::LAlt => Key::LAlt,
        glutin::VirtualKeyCode::LControl => Key::LControl,
        glutin::VirtualKeyCode::LShift => Key::LShift,
        glutin::VirtualKeyCode::RAlt => Key::RAlt,
        glutin::VirtualKeyCode::RControl => Key::RControl,
        glutin::VirtualKeyCode::RShift => Key::RShift,
        _ => return None,
    };

    Some(v)
}
