//! Terminal shell for the calculator.
//!
//! Presentation only: every widget reads from [`CalculatorApp`], which in
//! turn drives the core state machine through the action surface.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{ButtonAction, Keypad, KeypadButton, KeypadWidget};
pub use ui::render;
