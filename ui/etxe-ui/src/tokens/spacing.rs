// Spacing Token System

pub const SPACING_0: u32 = 0;
pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;

/// Navigation cell padding
pub const SPACING_10: u32 = 10;

pub const SPACING_12: u32 = 12;

/// Action handler inset from the drawer corner
pub const SPACING_16: u32 = 16;

pub const SPACING_24: u32 = 24;

/// Top gap that keeps navigation clear of the action handler
pub const SPACING_56: u32 = 56;
