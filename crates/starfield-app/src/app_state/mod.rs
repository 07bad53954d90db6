//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, input, the starfield and the renderer.

mod controls;
mod core;
mod event_handler;
mod frame;
mod init;

pub use core::StarfieldApp;
