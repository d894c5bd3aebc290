//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one destination.
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut impl AppLike) {
//!     // - Read from the cloned state snapshot
//!     // - Write form fields back through app.state()
//!     // - Call app actions for everything else
//! }
//! ```
//!
//! Screens never hold the state lock while laying out widgets; the snapshot
//! is cloned once per frame in [`crate::ui::render`].

pub mod admin;
pub mod dashboard;
pub mod game;
pub mod learn;
pub mod profile;
pub mod quiz_editor;
pub mod session;
pub mod test;
pub mod user_management;
