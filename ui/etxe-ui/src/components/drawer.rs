// Drawer Component
// Absolutely positioned side panel. The caller supplies the horizontal
// translation as a signal and receives raw pointer input through hooks.

use crate::tokens::*;
use std::pin::Pin;
use zoon::*;
use zoon::{PointerEvent, RawPointerEvent};

type PositionHandler = Box<dyn FnMut(f64)>;

pub struct DrawerBuilder {
    width: u32,
    z_index: i32,
    translate_x: Option<Pin<Box<dyn Signal<Item = f64>>>>,
    on_press: Option<PositionHandler>,
    on_drag: Option<PositionHandler>,
    on_release: Option<Box<dyn FnMut()>>,
    on_cancel: Option<Box<dyn FnMut()>>,
    on_mount: Option<Box<dyn FnOnce(web_sys::HtmlElement)>>,
    on_unmount: Option<Box<dyn FnOnce()>>,
    items: Vec<RawElOrText>,
}

impl DrawerBuilder {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            z_index: Z_DRAWER_DEFAULT,
            translate_x: None,
            on_press: None,
            on_drag: None,
            on_release: None,
            on_cancel: None,
            on_mount: None,
            on_unmount: None,
            items: Vec::new(),
        }
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Horizontal translation in px, applied as `translateX`.
    pub fn translate_x_signal(mut self, translate_x: impl Signal<Item = f64> + 'static) -> Self {
        self.translate_x = Some(translate_x.boxed_local());
        self
    }

    /// Primary-button press on the panel, with the pointer's client x.
    pub fn on_press(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// Pointer movement anywhere in the window while the drawer is mounted.
    pub fn on_drag(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_drag = Some(Box::new(handler));
        self
    }

    /// Pointer release anywhere in the window while the drawer is mounted.
    pub fn on_release(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_release = Some(Box::new(handler));
        self
    }

    /// The browser cancelled the pointer (`pointercancel`), e.g. a touch
    /// taken over by the OS.
    pub fn on_cancel(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    /// Runs once the panel node is in the document.
    pub fn on_mount(mut self, handler: impl FnOnce(web_sys::HtmlElement) + 'static) -> Self {
        self.on_mount = Some(Box::new(handler));
        self
    }

    /// Runs when the panel node leaves the document.
    pub fn on_unmount(mut self, handler: impl FnOnce() + 'static) -> Self {
        self.on_unmount = Some(Box::new(handler));
        self
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn build(self) -> impl Element {
        let Self {
            width,
            z_index,
            translate_x,
            on_press,
            on_drag,
            on_release,
            on_cancel,
            on_mount,
            on_unmount,
            items,
        } = self;

        let mut panel = Column::new()
            .s(Width::exact(width))
            .s(Height::fill())
            .s(Background::new().color(WHITE))
            .update_raw_el(move |raw_el| {
                let mut raw_el = raw_el
                    .style("position", "absolute")
                    .style("top", "0")
                    .style("left", "0")
                    .style("pointer-events", "all")
                    .style("touch-action", "none")
                    .style("user-select", "none")
                    .style("z-index", &z_index.to_string());

                raw_el = match translate_x {
                    Some(translate_x) => raw_el.style_signal(
                        "transform",
                        translate_x.map(|x| format!("translateX({x}px)")),
                    ),
                    None => raw_el.style("transform", "none"),
                };

                if let Some(mut on_drag) = on_drag {
                    raw_el = raw_el.global_event_handler(move |event: events::PointerMove| {
                        on_drag(f64::from(event.x()))
                    });
                }
                if let Some(mut on_release) = on_release {
                    raw_el = raw_el
                        .global_event_handler(move |_: events::PointerUp| on_release());
                }
                if let Some(mut on_cancel) = on_cancel {
                    raw_el = raw_el
                        .global_event_handler(move |_: events::PointerCancel| on_cancel());
                }
                if let Some(on_mount) = on_mount {
                    raw_el = raw_el.after_insert(on_mount);
                }
                if let Some(on_unmount) = on_unmount {
                    raw_el = raw_el.after_remove(move |_| on_unmount());
                }
                raw_el
            })
            .items(items);

        if let Some(mut on_press) = on_press {
            panel = panel.on_pointer_down_event(move |event: PointerEvent| {
                let RawPointerEvent::PointerDown(raw_event) = &event.raw_event else {
                    return;
                };
                if raw_event.button() != events::MouseButton::Left {
                    return;
                }
                on_press(f64::from(event.x()));
            });
        }

        panel
    }
}

pub fn drawer(width: u32) -> DrawerBuilder {
    DrawerBuilder::new(width)
}

/// Vertical list of navigation rows inside the drawer.
pub fn drawer_items(items: impl IntoIterator<Item = RawElOrText>) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().top(SPACING_56))
        .items(items)
}

pub fn drawer_item(content: impl Element) -> impl Element {
    El::new().s(Width::fill()).child(content)
}
