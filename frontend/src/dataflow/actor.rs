//! Single-value Actor
//!
//! An Actor owns a `Mutable<T>` and the task that mutates it. Events reach
//! the task through Relays and are processed one at a time; everything else
//! observes the state through signals.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state owned by a processing task.
///
/// ```rust,ignore
/// let (toggle_pressed_relay, mut toggle_pressed_stream) = relay::<()>();
///
/// let open = Actor::new(true, async move |state| {
///     while let Some(()) = toggle_pressed_stream.next().await {
///         state.update(|open| !open);
///     }
/// });
///
/// El::new().child_signal(open.signal().map(|open| Text::new(open.to_string())));
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    // Dropping the last clone stops the processing task
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start the processor with the initial state. The processor usually
    /// loops over `select!` on its event streams.
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

}
