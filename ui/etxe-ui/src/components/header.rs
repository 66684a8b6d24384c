// Header Component
// Fixed-height bar at the top of the content column

use crate::tokens::*;
use zoon::*;

pub fn header(item: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::exact(HEADER_HEIGHT))
        .s(Background::new().color(SLATE_700))
        .update_raw_el(|raw_el| {
            raw_el
                .style("flex-shrink", "0")
                .style("align-items", "flex-end")
                .style("justify-content", "center")
        })
        .item(item)
}

pub fn header_item(content: impl Element) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_16))
        .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::Medium).color(WHITE))
        .child(content)
}
