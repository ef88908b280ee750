//! Atom: Actor+Relay wrapped into a plain value setter for local UI state
//! like the selected tool tab or a hovered feature card.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    SetNeq(T),
}

#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    actor: Actor<T>,
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::SetNeq(new_value) => state.set_neq(new_value),
                }
            }
        });

        Self { actor, setter }
    }

    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.setter.send(AtomUpdate::SetNeq(value));
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Immediate read for event handlers where signal-based access is
    /// impractical. Use sparingly.
    pub fn get_cloned(&self) -> T {
        self.actor.state.lock_ref().clone()
    }
}

impl Atom<bool> {
    pub fn toggle(&self) {
        self.setter.send(AtomUpdate::SetNeq(!self.get_cloned()));
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
