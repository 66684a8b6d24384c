//! Event streaming Relay
//!
//! A Relay carries UI events (pointer presses, toggle clicks, navigation
//! selections) into the Actor that owns the affected state.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Typed sender half of an Actor's event channel.
///
/// Relays are named after the event source: `pointer_pressed_relay`,
/// `toggle_pressed_relay`, `entry_selected_relay`.
///
/// In debug builds a relay may only be sent from one code location. Wrap
/// the send in a method when several UI elements emit the same event.
///
/// ```rust,ignore
/// let (toggle_pressed_relay, mut toggle_pressed_stream) = relay::<()>();
/// toggle_pressed_relay.send(());
/// assert_eq!(toggle_pressed_stream.next().await, Some(()));
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// A relay was sent from a second code location.
#[cfg(debug_assertions)]
#[derive(Debug, Clone)]
struct MultipleEmitters {
    previous: &'static std::panic::Location<'static>,
    current: &'static std::panic::Location<'static>,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), MultipleEmitters> {
        let caller = std::panic::Location::caller();
        let previous = *self.emit_location.get_or_init(|| caller);
        if previous == caller {
            Ok(())
        } else {
            Err(MultipleEmitters {
                previous,
                current: caller,
            })
        }
    }

    /// Send an event. Events sent after the receiver is dropped are discarded.
    ///
    /// Panics in debug builds when called from a second code location.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(MultipleEmitters { previous, current }) = self.check_single_source() {
            panic!("Relay sent from {current} but already bound to {previous}");
        }
        let _ = self.sender.unbounded_send(value);
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// A disconnected relay; every event is discarded.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}
