//! Drawer toggle buttons
//!
//! Both buttons share the tint colour and the slide-out offset of the
//! drawer, and both go through the toggle rule (ignored right after a drag).

use crate::drawer::DrawerController;
use crate::drawer::state::DrawerPhase;
use etxe_ui::*;
use zoon::*;

/// Menu icon button pinned to the top-right corner of the drawer.
pub fn action_handler(drawer: &DrawerController) -> impl Element + use<> {
    let menu_icon = drawer.phase_signal().map(|phase| {
        let name = match phase {
            DrawerPhase::Open => IconName::MenuOpen,
            DrawerPhase::Closed => IconName::Menu,
        };
        icon(name).aria_label("Toggle navigation").build()
    });
    let styled = drawer.clone();

    Button::new()
        .s(Width::exact(ACTION_HANDLER_SIZE))
        .s(Height::exact(ACTION_HANDLER_SIZE))
        .update_raw_el(move |raw_el| {
            toggle_styles(raw_el, &styled)
                .style("position", "absolute")
                .style("top", &format!("{SPACING_16}px"))
                .style("right", &format!("{SPACING_16}px"))
        })
        .label(El::new().child_signal(menu_icon))
        .on_press(toggle_handler(drawer))
}

/// Text button in the page body with the same toggle behaviour.
pub fn body_toggle_button(drawer: &DrawerController) -> impl Element + use<> {
    let styled = drawer.clone();

    Button::new()
        .s(Padding::new().x(SPACING_8).y(SPACING_4))
        .s(Font::new().size(FONT_SIZE_14))
        .update_raw_el(move |raw_el| toggle_styles(raw_el, &styled))
        .label("click me")
        .on_press(toggle_handler(drawer))
}

fn toggle_handler(drawer: &DrawerController) -> impl FnMut() + use<> {
    let drawer = drawer.clone();
    move || drawer.toggle_pressed()
}

fn toggle_styles<R: RawEl>(raw_el: R, drawer: &DrawerController) -> R {
    raw_el
        .style("background", "transparent")
        .style("border", "0")
        .style("outline", "none")
        .style("pointer-events", "auto")
        .style_signal("color", drawer.tint_signal())
        .style_signal(
            "transform",
            drawer
                .handle_offset_signal()
                .map(|offset| format!("translateX({offset}%)")),
        )
}
