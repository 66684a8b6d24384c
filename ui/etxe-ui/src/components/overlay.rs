// Overlay Component
// Full-size dimming layer; never intercepts pointer input

use crate::tokens::*;
use zoon::*;

pub fn overlay(background: impl Signal<Item = String> + Unpin + 'static) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(move |raw_el| {
            raw_el
                .style("position", "absolute")
                .style("top", "0")
                .style("left", "0")
                .style("pointer-events", "none")
                .style("z-index", &Z_OVERLAY.to_string())
                .style_signal("background-color", background)
        })
}
