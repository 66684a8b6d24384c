// Shell chrome components

pub mod drawer;
pub mod flex_box;
pub mod footer;
pub mod header;
pub mod icon;
pub mod overlay;

pub use drawer::*;
pub use flex_box::*;
pub use footer::*;
pub use header::*;
pub use icon::{IconBuilder, IconColor, IconName, IconSize, icon, icon_name_from_str, icon_str};
pub use overlay::*;
