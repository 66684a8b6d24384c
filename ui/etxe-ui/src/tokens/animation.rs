// Animation Token System
// CSS transitions for hover feedback; drawer motion is spring driven by the application

use zoon::*;

pub const DURATION_FAST: u32 = 150;

/// Frame interval for application-driven animation loops (~60 fps).
pub const FRAME_INTERVAL_MS: u32 = 16;

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_FAST),
        Transition::property("color").duration(DURATION_FAST),
    ])
}
