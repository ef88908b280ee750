//! Single-value Actor: owns a `Mutable` and the task that mutates it.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container mutated only by its processing task.
///
/// The processor receives the state handle and usually loops over one of the
/// `drive_*` functions from `shared::cycle` or a `select!` over relay
/// streams. Dropping the Actor drops the task handle, which cancels the loop
/// mid-sleep; that is how animated sections release their timers on
/// teardown.
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(super) state: Mutable<T>,
    _task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            _task_handle: task_handle,
        }
    }

    /// The only way to read Actor state.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Derives a signal through a reference, avoiding a clone of the whole
    /// state on every emission.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn processor_is_the_single_mutation_point() {
        let (step_advanced_relay, mut step_advanced_stream) = relay();

        let step = Actor::new(0usize, async move |state| {
            while let Some(index) = step_advanced_stream.next().await {
                state.set_neq(index);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        step_advanced_relay.send(2);
        step_advanced_relay.send(3);

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let current = step.signal().to_stream().next().await.unwrap();
        assert_eq!(current, 3);
    }
}
