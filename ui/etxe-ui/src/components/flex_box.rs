// FlexBox Component
// Style primitive: a flex column configured through a builder, no behavior

use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlexAlign {
    Start,
    Center,
    End,
    Stretch,
}

impl FlexAlign {
    fn css(self) -> &'static str {
        match self {
            FlexAlign::Start => "flex-start",
            FlexAlign::Center => "center",
            FlexAlign::End => "flex-end",
            FlexAlign::Stretch => "stretch",
        }
    }
}

pub struct FlexBoxBuilder {
    align_items: FlexAlign,
    justify_content: FlexAlign,
    grow: bool,
    pointer_events: Option<bool>,
    background: Option<String>,
    items: Vec<RawElOrText>,
}

impl FlexBoxBuilder {
    pub fn new() -> Self {
        Self {
            align_items: FlexAlign::Stretch,
            justify_content: FlexAlign::Start,
            grow: false,
            pointer_events: None,
            background: None,
            items: Vec::new(),
        }
    }

    pub fn align_items(mut self, align: FlexAlign) -> Self {
        self.align_items = align;
        self
    }

    pub fn justify_content(mut self, justify: FlexAlign) -> Self {
        self.justify_content = justify;
        self
    }

    /// `flex: 1 1 auto`
    pub fn grow(mut self, grow: bool) -> Self {
        self.grow = grow;
        self
    }

    /// `None` leaves `pointer-events` inherited.
    pub fn pointer_events(mut self, enabled: bool) -> Self {
        self.pointer_events = Some(enabled);
        self
    }

    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let mut raw_el = RawHtmlEl::new("div")
            .style("display", "flex")
            .style("flex-direction", "column")
            .style("align-items", self.align_items.css())
            .style("justify-content", self.justify_content.css());

        if self.grow {
            raw_el = raw_el.style("flex", "1 1 auto");
        }
        if let Some(enabled) = self.pointer_events {
            raw_el = raw_el.style("pointer-events", if enabled { "auto" } else { "none" });
        }
        if let Some(color) = &self.background {
            raw_el = raw_el.style("background-color", color.as_str());
        }

        raw_el.children(self.items)
    }
}

pub fn flex_box() -> FlexBoxBuilder {
    FlexBoxBuilder::new()
}
