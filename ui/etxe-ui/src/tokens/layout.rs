// Layout Token System
// Bar sizes and stacking order of the shell layers

/// Header bar height in px
pub const HEADER_HEIGHT: u32 = 52;
/// Footer bar height in px
pub const FOOTER_HEIGHT: u32 = 36;
/// Action handler button edge in px
pub const ACTION_HANDLER_SIZE: u32 = 24;

/// Library default: the drawer sits behind content until the application raises it.
pub const Z_DRAWER_DEFAULT: i32 = -1;
pub const Z_OVERLAY: i32 = 0;
pub const Z_CONTENT: i32 = 1;
