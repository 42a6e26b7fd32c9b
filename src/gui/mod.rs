//! Screen-Space GUI
//!
//! Screens that render at fixed window positions, drawn through the
//! [`MenuRenderer`](crate::renderer::MenuRenderer) the host passes in.
//!
//! # Available Screens
//!
//! - [`MainMenuScreen`] - Title with Play Game / High Scores / Quit buttons
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::MainMenuScreen;
//!
//! // Create once, after the renderer exists (labels are measured with its font)
//! let mut menu = MainMenuScreen::new(&config, |text| renderer.measure_text(text));
//!
//! // Handle input
//! if let Some(action) = menu.update(input.pointer) { /* ... */ }
//!
//! // Render
//! menu.draw(&mut renderer)?;
//! ```

pub mod main_menu;

pub use main_menu::MainMenuScreen;
