//! Actor+Relay primitives
//!
//! - **[`Relay`]** - typed event channel from UI handlers to an Actor
//! - **[`Actor`]** - state owned by a sequential processing task
//! - **[`Atom`]** - Actor+Relay wrapper for element-local UI state
//!
//! State is read through signals. Relays are named `{source}_{event}_relay`.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
