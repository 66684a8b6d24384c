//! # Etxe UI
//!
//! Chrome components for the Etxe application shell: a slide-in drawer,
//! header and footer bars, a dimming overlay, a flex box primitive and an
//! inline SVG icon set, together with the design tokens they are styled with.
//!
//! ```ignore
//! use etxe_ui::*;
//! use zoon::*;
//!
//! fn chrome() -> impl Element {
//!     Column::new()
//!         .item(header(header_item(Text::new("User"))))
//!         .item(footer(footer_item("V1.0.0 alpha")))
//! }
//! ```
//!
//! Components never own interaction state. The drawer exposes pointer and
//! mount hooks and takes its translation as a signal, so the application
//! decides how gestures map to motion.

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

pub use zoon;
