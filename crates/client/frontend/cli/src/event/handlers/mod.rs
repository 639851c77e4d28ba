//! Event handler implementations for EventLoop.
//!
//! Handlers are `impl EventLoop` blocks split by responsibility:
//! - `input`: Keyboard input and control activation
//! - `rendering`: Terminal rendering

mod input;
mod rendering;
