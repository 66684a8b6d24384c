// Footer Component

use crate::tokens::*;
use zoon::*;

pub fn footer(item: impl Element) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Height::exact(FOOTER_HEIGHT))
        .s(Borders::new().top(Border::new().width(1).color(MIST_200)))
        .update_raw_el(|raw_el| {
            raw_el
                .style("flex-shrink", "0")
                .style("align-items", "flex-end")
                .style("justify-content", "center")
        })
        .item(item)
}

pub fn footer_item(label: impl Into<String>) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_16))
        .s(Font::new().size(FONT_SIZE_14).color(SLATE_700))
        .child(Text::new(label.into()))
}
