//! Keyboard input handling.

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui};

impl EventLoop {
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal)
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent, terminal: &mut Tui) -> Result<bool> {
        let notice_open = self.consumer.view_model().has_notice();

        match self.input.handle_key(key, notice_open) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                self.render(terminal)?;
                Ok(true)
            }
            KeyAction::DismissNotice => {
                if self.consumer.dismiss_notice().requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            KeyAction::Activate => {
                self.activate_control();
                Ok(false)
            }
            KeyAction::None => Ok(false),
        }
    }

    /// Dispatch the current control's action. Activations while a
    /// transaction is loading are ignored.
    fn activate_control(&mut self) {
        let view_model = self.consumer.view_model();
        if view_model.loading {
            tracing::debug!("Activation ignored while loading");
            return;
        }

        let control = view_model.control();
        let Some(action) = control.action() else {
            return;
        };

        tracing::info!("Activating {:?}", action);
        if self.controller.dispatch(action).is_none() {
            self.consumer
                .message_log_mut()
                .push_text("A transaction is already in flight");
        }
    }
}
