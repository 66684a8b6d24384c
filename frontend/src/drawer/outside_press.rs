//! Document-level press listener for dismissing the drawer
//!
//! Subscribed when the drawer node is inserted, unsubscribed on drop. The
//! drawer node is captured at subscription, so the handler never looks it
//! up after unmount.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use zoon::*;

const PRIMARY_BUTTON: i16 = 0;

pub struct OutsidePressListener {
    document: web_sys::Document,
    on_pointer_down: Closure<dyn FnMut(web_sys::PointerEvent)>,
}

impl OutsidePressListener {
    pub fn subscribe(
        drawer: web_sys::HtmlElement,
        mut on_press: impl FnMut() + 'static,
    ) -> Option<Self> {
        let document = drawer.owner_document()?;

        let on_pointer_down = Closure::wrap(Box::new(move |event: web_sys::PointerEvent| {
            if event.button() != PRIMARY_BUTTON {
                return;
            }
            let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            else {
                return;
            };
            if drawer.contains(Some(&target)) {
                return;
            }
            on_press();
        }) as Box<dyn FnMut(web_sys::PointerEvent)>);

        if let Err(error) = document
            .add_event_listener_with_callback("pointerdown", on_pointer_down.as_ref().unchecked_ref())
        {
            zoon::eprintln!("Failed to subscribe drawer outside-press listener: {:?}", error);
            return None;
        }
        zoon::println!("Drawer outside-press listener subscribed");

        Some(Self {
            document,
            on_pointer_down,
        })
    }
}

impl Drop for OutsidePressListener {
    fn drop(&mut self) {
        if let Err(error) = self.document.remove_event_listener_with_callback(
            "pointerdown",
            self.on_pointer_down.as_ref().unchecked_ref(),
        ) {
            zoon::eprintln!("Failed to unsubscribe drawer outside-press listener: {:?}", error);
            return;
        }
        zoon::println!("Drawer outside-press listener unsubscribed");
    }
}
