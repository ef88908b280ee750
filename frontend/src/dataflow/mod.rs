//! Actor+Relay primitives for reactive state management.
//!
//! All mutable state on the page lives behind one of these wrappers:
//!
//! - **[`Relay`]** — type-safe event streaming over unbounded channels
//! - **[`Actor`]** — single-value state container mutated only by its
//!   processing task
//! - **[`Atom`]** — convenience wrapper for local UI state (selected tab,
//!   hover flags)
//!
//! Relays follow the `{source}_{event}_relay` naming pattern and state is
//! read exclusively through signals, never through ad-hoc getters.

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
