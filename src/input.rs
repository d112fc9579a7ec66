//! Pointer tracking for spawn-on-drag.
//!
//! [`Pointer`] folds raw window events into the little state the spawn
//! collaborator needs: is the primary button held, and where is the cursor
//! in window pixels. Cursor-leave releases the drag, matching the reference
//! behavior where dragging off the canvas stops spawning.

use glam::DVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Primary-button pointer state.
#[derive(Debug, Default)]
pub struct Pointer {
    position: DVec2,
    held: bool,
}

impl Pointer {
    /// Create an idle pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor position in physical window pixels.
    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Whether the primary button is currently held.
    #[inline]
    pub fn held(&self) -> bool {
        self.held
    }

    /// Fold a window event into the pointer state.
    ///
    /// Returns `true` when the event is a spawn trigger: a primary-button
    /// press, or a cursor move while the button is held. The caller still
    /// owns rate limiting.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.held = true;
                    true
                }
                ElementState::Released => {
                    self.held = false;
                    false
                }
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.position = DVec2::new(position.x, position.y);
                self.held
            }
            WindowEvent::CursorLeft { .. } => {
                self.held = false;
                false
            }
            _ => false,
        }
    }
}
