//! Drawer navigation list
//!
//! Selecting an entry only changes the label shown in the header; entries
//! carry a route but nothing navigates.

use crate::dataflow::{Actor, Atom, Relay, relay};
use etxe_ui::*;
use futures::StreamExt;
use shared::{ChromeSection, NavigationEntry};
use std::sync::Arc;
use zoon::*;

/// Selected entry name over a fixed entry list.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    entries: Arc<Vec<NavigationEntry>>,
    selected: String,
}

impl Selection {
    /// Starts on `initial` when it names an entry, otherwise on the first one.
    pub fn new(entries: Vec<NavigationEntry>, initial: &str) -> Self {
        let selected = entries
            .iter()
            .find(|entry| entry.name == initial)
            .or_else(|| entries.first())
            .map(|entry| entry.name.clone())
            .unwrap_or_default();
        Self {
            entries: Arc::new(entries),
            selected,
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Returns whether the label changed. Unknown names are ignored.
    pub fn select(&mut self, name: &str) -> bool {
        if self.selected == name || !self.entries.iter().any(|entry| entry.name == name) {
            return false;
        }
        self.selected = name.to_string();
        true
    }
}

#[derive(Clone, Debug)]
pub struct NavigationSelection {
    selection: Actor<Selection>,
    entry_selected_relay: Relay<String>,
    entries: Arc<Vec<NavigationEntry>>,
}

impl NavigationSelection {
    pub fn new(entries: Vec<NavigationEntry>, chrome: &ChromeSection) -> Self {
        let initial = Selection::new(entries, &chrome.initial_selection);
        let entries = initial.entries.clone();
        let (entry_selected_relay, mut entry_selected_stream) = relay::<String>();

        let selection = Actor::new(initial, async move |state| {
            while let Some(name) = entry_selected_stream.next().await {
                if state.lock_mut().select(&name) {
                    zoon::println!("Navigation selected '{}'", name);
                }
            }
        });

        Self {
            selection,
            entry_selected_relay,
            entries,
        }
    }

    pub fn select(&self, name: &str) {
        self.entry_selected_relay.send(name.to_string());
    }

    pub fn entries(&self) -> Arc<Vec<NavigationEntry>> {
        self.entries.clone()
    }

    pub fn selected_signal(&self) -> impl Signal<Item = String> + use<> {
        self.selection
            .signal()
            .map(|selection| selection.selected().to_string())
            .dedupe_cloned()
    }

    pub fn is_selected_signal(&self, name: String) -> impl Signal<Item = bool> + use<> {
        self.selection
            .signal()
            .map(move |selection| selection.selected() == name)
            .dedupe()
    }
}

/// One cell per entry, stacked for the drawer.
pub fn navigation_items(navigation: &NavigationSelection) -> impl Element + use<> {
    let cells = navigation
        .entries()
        .iter()
        .map(|entry| drawer_item(navigation_cell(navigation, entry)).unify())
        .collect::<Vec<_>>();
    drawer_items(cells)
}

fn navigation_cell(navigation: &NavigationSelection, entry: &NavigationEntry) -> impl Element + use<> {
    let hovered = Atom::new(false);
    let name = entry.name.clone();
    let highlight = cell_highlight_background();
    let selected_text = cell_selected_text();

    let background = map_ref! {
        let selected = navigation.is_selected_signal(name.clone()),
        let hovered = hovered.signal() =>
        if *selected || *hovered { highlight.clone() } else { TRANSPARENT.to_string() }
    }
    .boxed_local();
    let text_color = navigation
        .is_selected_signal(name.clone())
        .map(move |selected| if selected { selected_text.clone() } else { SLATE_900.to_string() });

    Row::new()
        .s(Width::fill())
        .s(Padding::new().y(SPACING_10).left(SPACING_10))
        .s(Gap::new().x(SPACING_16))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Font::new().size(FONT_SIZE_16))
        .s(transition_colors())
        .update_raw_el(move |raw_el| {
            raw_el
                .style_signal("background-color", background)
                .style_signal("color", text_color)
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .on_click({
            let navigation = navigation.clone();
            let name = name.clone();
            move || navigation.select(&name)
        })
        .item(icon_str(&entry.icon).size(IconSize::Large).build())
        .item(Text::new(&entry.name))
}
