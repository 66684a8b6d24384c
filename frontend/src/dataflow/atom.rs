//! Local UI state Atom
//!
//! Atom wraps an Actor+Relay pair for state that belongs to a single
//! element, like the hover flag of a navigation cell.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    value_changed_relay: Relay<T>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new(initial: T) -> Self {
        let (value_changed_relay, mut value_changed_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(value) = value_changed_stream.next().await {
                state.set_neq(value);
            }
        });

        Self {
            actor,
            value_changed_relay,
        }
    }

    /// Signals only fire when `value` differs from the current one.
    pub fn set_neq(&self, value: T) {
        self.value_changed_relay.send(value);
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }
}
