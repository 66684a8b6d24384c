// Design tokens for the shell chrome

pub mod animation;
pub mod color;
pub mod layout;
pub mod spacing;
pub mod typography;

pub use animation::*;
pub use color::*;
pub use layout::*;
pub use spacing::*;
pub use typography::*;
