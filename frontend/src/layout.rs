//! Page composition: drawer and overlay stacked over the content column

use crate::action_handler::{action_handler, body_toggle_button};
use crate::app::ShellApp;
use crate::drawer::DrawerController;
use crate::drawer::outside_press::OutsidePressListener;
use crate::navigation::{NavigationSelection, navigation_items};
use etxe_ui::*;
use zoon::*;

pub fn main_layout(app: &ShellApp) -> impl Element + use<> {
    Column::new()
        .s(Width::fill())
        .s(Height::screen())
        .s(Background::new().color(WHITE))
        .s(font_shell())
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "relative")
                .style("overflow", "hidden")
                .style("pointer-events", "none")
        })
        .item(drawer_panel(&app.drawer, &app.navigation))
        .item(overlay(app.drawer.overlay_signal()))
        .item(content(app))
}

fn drawer_panel(drawer: &DrawerController, navigation: &NavigationSelection) -> impl Element + use<> {
    // Lives from insertion to removal of the drawer node
    let outside_press_listener: Mutable<Option<OutsidePressListener>> = Mutable::new(None);

    etxe_ui::drawer(drawer.width().round() as u32)
        .z_index(drawer.z_index())
        .translate_x_signal(drawer.translate_x_signal())
        .on_press({
            let drawer = drawer.clone();
            move |x| drawer.pointer_pressed(x)
        })
        .on_drag({
            let drawer = drawer.clone();
            move |x| drawer.pointer_moved(x)
        })
        .on_release({
            let drawer = drawer.clone();
            move || drawer.pointer_released()
        })
        .on_cancel({
            let drawer = drawer.clone();
            move || drawer.pointer_cancelled()
        })
        .on_mount({
            let drawer = drawer.clone();
            let outside_press_listener = outside_press_listener.clone();
            move |element| {
                let listener =
                    OutsidePressListener::subscribe(element, move || drawer.outside_pressed());
                outside_press_listener.set(listener);
            }
        })
        .on_unmount(move || outside_press_listener.set(None))
        .item(action_handler(drawer))
        .item(navigation_items(navigation))
        .build()
}

fn content(app: &ShellApp) -> impl Element + use<> {
    flex_box()
        .grow(true)
        .item(header(header_item(Text::with_signal(
            app.navigation.selected_signal(),
        ))))
        .item(body(app))
        .item(footer(footer_item(app.config.chrome.footer_label.clone())))
        .build()
}

fn body(app: &ShellApp) -> impl Element + use<> {
    flex_box()
        .grow(true)
        .align_items(FlexAlign::Center)
        .justify_content(FlexAlign::Center)
        .pointer_events(true)
        .background(app.config.colors.body_background.clone())
        .item(body_toggle_button(&app.drawer))
        .build()
}
