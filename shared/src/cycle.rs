//! Timer-driven animation cycles.
//!
//! Every animated landing section is built from the same three primitives:
//!
//! - [`StepCycle`] — an ordered, non-empty list of named steps with per-step
//!   display durations, advanced one index at a time with wraparound.
//! - [`Rotation`] — a secondary index cycling through a fixed candidate list
//!   (the acquirer carousel) while one designated step is active.
//! - the `drive_*` loops — runtime-agnostic async drivers that own the only
//!   mutation point for their index. The caller supplies the sleep future
//!   (Zoon `Timer::sleep` in the app, a hand-fed permit channel in tests), so
//!   the timing behaviour is testable without a browser or a real clock.
//!
//! The drivers never return on their own; cancellation happens by dropping
//! the task that polls them, which is how component teardown releases the
//! timers.

use std::fmt;
use std::future::Future;

use futures::stream::FusedStream;
use futures::{FutureExt, StreamExt, pin_mut, select};
use serde::{Deserialize, Serialize};

/// One display step: what the section shows and for how long.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    pub detail: String,
    pub duration_ms: u32,
}

impl Step {
    pub fn new(label: impl Into<String>, detail: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
            duration_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCycleError {
    Empty,
}

impl fmt::Display for StepCycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepCycleError::Empty => write!(f, "a step cycle needs at least one step"),
        }
    }
}

impl std::error::Error for StepCycleError {}

/// Ordered, non-empty list of [`Step`]s advanced with wraparound.
///
/// The current index always stays within `0..len()`; the only way to move it
/// is [`StepCycle::next_index`], so the invariant holds by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepCycle {
    steps: Vec<Step>,
}

impl StepCycle {
    /// Builds a cycle from a first step and the remaining tail, which makes
    /// emptiness unrepresentable for statically known step lists.
    pub fn new(first: Step, rest: Vec<Step>) -> Self {
        let mut steps = Vec::with_capacity(1 + rest.len());
        steps.push(first);
        steps.extend(rest);
        Self { steps }
    }

    /// Fallible variant for step lists assembled at runtime.
    pub fn try_new(steps: Vec<Step>) -> Result<Self, StepCycleError> {
        if steps.is_empty() {
            return Err(StepCycleError::Empty);
        }
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        // Unreachable by construction, kept for the len/is_empty convention.
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> &Step {
        &self.steps[index]
    }

    /// Advances by one, wrapping to 0 after the final index.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.steps.len()
    }

    /// Index reached after `elapsed_ms` of simulated time, starting at index 0.
    ///
    /// The step advances exactly when the accumulated durations reach the
    /// elapsed time, so e.g. durations `[6000, 8000, 6000, 5000]` put the
    /// cycle back at index 0 at `t = 25_000`.
    pub fn index_after(&self, elapsed_ms: u64) -> usize {
        let mut index = 0;
        let mut boundary = u64::from(self.steps[index].duration_ms);
        while boundary <= elapsed_ms {
            index = self.next_index(index);
            boundary += u64::from(self.steps[index].duration_ms);
        }
        index
    }
}

/// Sub-rotator index over a fixed candidate list, wrapping at the end.
///
/// A zero-length candidate list is treated as a single-entry list so the
/// index stays pinned at 0 instead of dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation {
    len: usize,
    index: usize,
}

impl Rotation {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// `n` advances at once.
    pub fn ticks(&mut self, n: usize) {
        self.index = (self.index + n) % self.len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// Drives a [`StepCycle`] forever: sleep for the current step's duration,
/// advance, report the new index. The index advance is the only mutation
/// point; dropping the polling task cancels the pending sleep.
pub async fn drive_cycle<S, SF, A>(cycle: &StepCycle, mut sleep: S, mut on_advance: A)
where
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
    A: FnMut(usize),
{
    let mut index = 0;
    loop {
        sleep(cycle.step(index).duration_ms).await;
        index = cycle.next_index(index);
        on_advance(index);
    }
}

/// Drives a [`Rotation`] while the owning sequencer sits on `trigger`.
///
/// `steps` is the stream of sequencer indices (a signal stream, so the
/// current index arrives first). While the current index equals `trigger`
/// the rotation advances every `interval_ms`; the moment it differs, the
/// pending tick is dropped and no further rotation happens until the
/// trigger step comes back. On re-activation the rotation restarts from 0 —
/// the original carried the old position over, but that looked incidental,
/// so the deterministic restart was chosen instead.
pub async fn drive_rotation<St, S, SF, A>(
    candidates: usize,
    trigger: usize,
    interval_ms: u32,
    mut steps: St,
    mut sleep: S,
    mut on_rotate: A,
) where
    St: FusedStream<Item = usize> + Unpin,
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
    A: FnMut(usize),
{
    let mut rotation = Rotation::new(candidates);
    loop {
        loop {
            match steps.next().await {
                Some(index) if index == trigger => break,
                Some(_) => {}
                None => return,
            }
        }
        rotation.reset();
        on_rotate(rotation.index());
        'active: loop {
            let tick = sleep(interval_ms).fuse();
            pin_mut!(tick);
            select! {
                _ = tick => {
                    rotation.advance();
                    on_rotate(rotation.index());
                }
                step = steps.next() => match step {
                    Some(index) if index == trigger => {}
                    Some(_) => break 'active,
                    None => return,
                },
            }
        }
    }
}

/// Staggered reveal: each step change resets a counter to 0 and then counts
/// up once per delay in `delays_for(step)`. Used by the recurring-payments
/// section where plans and subscriptions pop in one after another within a
/// step. A step change mid-delay abandons the pending reveal.
pub async fn drive_stagger<St, D, S, SF, A>(
    mut steps: St,
    mut delays_for: D,
    mut sleep: S,
    mut on_reveal: A,
) where
    St: FusedStream<Item = usize> + Unpin,
    D: FnMut(usize) -> Vec<u32>,
    S: FnMut(u32) -> SF,
    SF: Future<Output = ()>,
    A: FnMut(usize),
{
    let Some(mut current) = steps.next().await else {
        return;
    };
    'step: loop {
        on_reveal(0);
        let mut pending = delays_for(current).into_iter();
        let mut revealed = 0;
        loop {
            match pending.next() {
                Some(delay) => {
                    let tick = sleep(delay).fuse();
                    pin_mut!(tick);
                    select! {
                        _ = tick => {
                            revealed += 1;
                            on_reveal(revealed);
                        }
                        step = steps.next() => match step {
                            Some(next) => {
                                current = next;
                                continue 'step;
                            }
                            None => return,
                        },
                    }
                }
                None => match steps.next().await {
                    Some(next) => {
                        current = next;
                        continue 'step;
                    }
                    None => return,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc::{self, UnboundedReceiver};
    use futures::executor::LocalPool;
    use futures::future::{AbortHandle, Abortable};
    use futures::task::LocalSpawnExt;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn cycle_ms(durations: &[u32]) -> StepCycle {
        let mut steps = durations
            .iter()
            .enumerate()
            .map(|(i, ms)| Step::new(format!("step {i}"), "", *ms));
        let first = steps.next().unwrap();
        StepCycle::new(first, steps.collect())
    }

    /// Sleep that completes only when the test feeds a permit, giving fully
    /// deterministic scheduling without a clock.
    fn permit_sleep(
        rx: Rc<RefCell<UnboundedReceiver<()>>>,
    ) -> impl FnMut(u32) -> std::pin::Pin<Box<dyn Future<Output = ()>>> {
        move |_ms| {
            let rx = rx.clone();
            Box::pin(async move {
                rx.borrow_mut().next().await;
            })
        }
    }

    #[test]
    fn empty_step_list_is_rejected() {
        assert_eq!(StepCycle::try_new(vec![]), Err(StepCycleError::Empty));
    }

    #[test]
    fn n_advances_return_to_the_start() {
        let cycle = cycle_ms(&[3000, 4000, 3000, 2000]);
        let mut index = 0;
        for _ in 0..cycle.len() {
            index = cycle.next_index(index);
            assert!(index < cycle.len());
        }
        assert_eq!(index, 0);
    }

    #[test]
    fn index_after_walks_step_boundaries() {
        let cycle = cycle_ms(&[6000, 8000, 6000, 5000]);
        assert_eq!(cycle.index_after(0), 0);
        assert_eq!(cycle.index_after(5999), 0);
        assert_eq!(cycle.index_after(6000), 1);
        assert_eq!(cycle.index_after(13999), 1);
        assert_eq!(cycle.index_after(14000), 2);
        assert_eq!(cycle.index_after(19999), 2);
        assert_eq!(cycle.index_after(20000), 3);
        assert_eq!(cycle.index_after(24999), 3);
        assert_eq!(cycle.index_after(25000), 0);
    }

    #[test]
    fn rotation_wraps_modulo_len() {
        // 2600 ms of a 500 ms interval fits 5 ticks: 0 -> 5 of 7.
        let mut rotation = Rotation::new(7);
        rotation.ticks(5);
        assert_eq!(rotation.index(), 5);
        rotation.ticks(2);
        assert_eq!(rotation.index(), 0);

        let mut one_at_a_time = Rotation::new(7);
        for _ in 0..7 {
            one_at_a_time.advance();
        }
        assert_eq!(one_at_a_time.index(), 0);

        let mut wrapped = Rotation::new(7);
        wrapped.ticks(16);
        assert_eq!(wrapped.index(), 2);
    }

    #[test]
    fn cycle_driver_advances_and_stops_after_teardown() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (permit_tx, permit_rx) = mpsc::unbounded();
        let permit_rx = Rc::new(RefCell::new(permit_rx));
        let advances = Rc::new(RefCell::new(Vec::new()));
        let (abort_handle, abort_registration) = AbortHandle::new_pair();

        let driver = {
            let advances = advances.clone();
            let sleep = permit_sleep(permit_rx);
            let cycle = cycle_ms(&[3000, 4000, 3000, 2000]);
            async move {
                drive_cycle(&cycle, sleep, move |index| {
                    advances.borrow_mut().push(index);
                })
                .await;
            }
        };
        spawner
            .spawn_local(Abortable::new(driver, abort_registration).map(|_| ()))
            .unwrap();
        pool.run_until_stalled();

        for _ in 0..4 {
            permit_tx.unbounded_send(()).unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(*advances.borrow(), vec![1, 2, 3, 0]);

        // Teardown with a timer pending: no further mutation may happen.
        abort_handle.abort();
        permit_tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(advances.borrow().len(), 4);
    }

    #[test]
    fn rotation_driver_only_rotates_while_trigger_is_active() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (step_tx, step_rx) = mpsc::unbounded();
        let (permit_tx, permit_rx) = mpsc::unbounded();
        let permit_rx = Rc::new(RefCell::new(permit_rx));
        let rotations = Rc::new(RefCell::new(Vec::new()));

        let driver = {
            let rotations = rotations.clone();
            let sleep = permit_sleep(permit_rx);
            async move {
                drive_rotation(7, 1, 500, step_rx.fuse(), sleep, move |index| {
                    rotations.borrow_mut().push(index);
                })
                .await;
            }
        };
        spawner.spawn_local(driver).unwrap();

        // Not on the trigger step yet: nothing rotates.
        step_tx.unbounded_send(0).unwrap();
        pool.run_until_stalled();
        assert!(rotations.borrow().is_empty());

        // Trigger step active for five ticks (2600 ms at 500 ms).
        step_tx.unbounded_send(1).unwrap();
        pool.run_until_stalled();
        for _ in 0..5 {
            permit_tx.unbounded_send(()).unwrap();
        }
        pool.run_until_stalled();
        assert_eq!(*rotations.borrow(), vec![0, 1, 2, 3, 4, 5]);

        // Step moves away: the interval is released, queued permits rot.
        step_tx.unbounded_send(2).unwrap();
        pool.run_until_stalled();
        let frozen = rotations.borrow().clone();
        pool.run_until_stalled();
        assert_eq!(*rotations.borrow(), frozen);

        // Re-activation restarts from 0.
        step_tx.unbounded_send(1).unwrap();
        pool.run_until_stalled();
        assert_eq!(rotations.borrow().last(), Some(&0));
        assert!(rotations.borrow().iter().all(|&index| index < 7));
    }

    #[test]
    fn stagger_driver_counts_up_and_resets_on_step_change() {
        let mut pool = LocalPool::new();
        let spawner = pool.spawner();

        let (step_tx, step_rx) = mpsc::unbounded();
        let (permit_tx, permit_rx) = mpsc::unbounded();
        let permit_rx = Rc::new(RefCell::new(permit_rx));
        let reveals = Rc::new(RefCell::new(Vec::new()));

        let driver = {
            let reveals = reveals.clone();
            let sleep = permit_sleep(permit_rx);
            let delays_for = |step: usize| match step {
                0 => vec![1000, 1000],
                1 => vec![1000, 1500],
                _ => vec![],
            };
            async move {
                drive_stagger(step_rx.fuse(), delays_for, sleep, move |count| {
                    reveals.borrow_mut().push(count);
                })
                .await;
            }
        };
        spawner.spawn_local(driver).unwrap();

        step_tx.unbounded_send(0).unwrap();
        pool.run_until_stalled();
        permit_tx.unbounded_send(()).unwrap();
        permit_tx.unbounded_send(()).unwrap();
        pool.run_until_stalled();
        assert_eq!(*reveals.borrow(), vec![0, 1, 2]);

        // Step change mid-delay resets the counter and abandons the reveal.
        step_tx.unbounded_send(1).unwrap();
        pool.run_until_stalled();
        step_tx.unbounded_send(2).unwrap();
        pool.run_until_stalled();
        assert_eq!(*reveals.borrow(), vec![0, 1, 2, 0, 0]);
    }
}
