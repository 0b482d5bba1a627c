//! Virtual-clock collaborators for driving reveals in tests. Targets are
//! plain indices.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use super::config::ScrollTrigger;
use super::engine::{Animator, Callback, Timers, Viewport, Visibility};
use super::visual::{Tween, VisualState};

struct Task {
    id: u64,
    due: u32,
    run: Callback,
}

#[derive(Default)]
struct ClockState {
    now: u32,
    next_id: u64,
    tasks: Vec<Task>,
}

#[derive(Clone, Default)]
pub struct Clock(Rc<RefCell<ClockState>>);

impl Clock {
    pub fn now(&self) -> u32 {
        self.0.borrow().now
    }

    pub fn schedule(&self, delay_ms: u32, run: Callback) -> u64 {
        let mut state = self.0.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now + delay_ms;
        state.tasks.push(Task { id, due, run });
        id
    }

    pub fn cancel(&self, id: u64) -> bool {
        let mut state = self.0.borrow_mut();
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        state.tasks.len() != before
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().tasks.len()
    }

    /// Runs every task due up to `target` in due order, then parks the clock there.
    pub fn advance_to(&self, target: u32) {
        loop {
            let task = {
                let mut state = self.0.borrow_mut();
                let next = state
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.due <= target)
                    .min_by_key(|(_, task)| (task.due, task.id))
                    .map(|(index, _)| index);
                match next {
                    Some(index) => {
                        let task = state.tasks.remove(index);
                        state.now = task.due;
                        task
                    }
                    None => {
                        state.now = state.now.max(target);
                        break;
                    }
                }
            };
            (task.run)();
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeTimers {
    clock: Clock,
    cleared: Rc<RefCell<Vec<u64>>>,
}

impl FakeTimers {
    pub fn new(clock: &Clock) -> Self {
        FakeTimers {
            clock: clock.clone(),
            cleared: Rc::default(),
        }
    }

    pub fn cleared(&self) -> usize {
        self.cleared.borrow().len()
    }
}

impl Timers for FakeTimers {
    type Timer = u64;

    fn schedule(&self, delay_ms: u32, callback: Callback) -> u64 {
        self.clock.schedule(delay_ms, callback)
    }

    fn clear(&self, timer: u64) {
        self.clock.cancel(timer);
        self.cleared.borrow_mut().push(timer);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Set { target: usize, state: VisualState, at: u32 },
    Start { target: usize, at: u32 },
    Complete { target: usize, at: u32 },
    Kill { target: usize, at: u32 },
}

#[derive(Default)]
struct AnimatorState {
    ops: Vec<Op>,
    detached: HashSet<usize>,
    stalled: HashSet<usize>,
    stall_all: bool,
    // Completions keep arriving after `kill`, like an engine that ignores it.
    leaky: bool,
    extra_latency: HashMap<usize, u32>,
    running: HashMap<usize, u64>,
}

#[derive(Clone)]
pub struct FakeAnimator {
    clock: Clock,
    state: Rc<RefCell<AnimatorState>>,
}

impl FakeAnimator {
    pub fn new(clock: &Clock) -> Self {
        FakeAnimator {
            clock: clock.clone(),
            state: Rc::default(),
        }
    }

    pub fn stall_all(&self) {
        self.state.borrow_mut().stall_all = true;
    }

    pub fn stall(&self, target: usize) {
        self.state.borrow_mut().stalled.insert(target);
    }

    pub fn delay_completion(&self, target: usize, extra_ms: u32) {
        self.state.borrow_mut().extra_latency.insert(target, extra_ms);
    }

    pub fn leak_completions(&self) {
        self.state.borrow_mut().leaky = true;
    }

    pub fn detach(&self, target: usize) {
        self.state.borrow_mut().detached.insert(target);
    }

    pub fn ops(&self) -> Vec<Op> {
        self.state.borrow().ops.clone()
    }

    pub fn starts(&self, target: usize) -> Vec<u32> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Start { target: t, at } if t == target => Some(at),
                _ => None,
            })
            .collect()
    }

    pub fn sets(&self, target: usize, state: VisualState) -> usize {
        self.ops()
            .iter()
            .filter(|op| matches!(op, Op::Set { target: t, state: s, .. } if *t == target && *s == state))
            .count()
    }

    /// Times `target` was brought to its visible end state, by either path.
    pub fn final_mutations(&self, target: usize) -> usize {
        self.ops()
            .iter()
            .filter(|op| match op {
                Op::Complete { target: t, .. } => *t == target,
                Op::Set { target: t, state, .. } => *t == target && *state == VisualState::VISIBLE,
                _ => false,
            })
            .count()
    }

    pub fn last_state(&self, target: usize) -> Option<VisualState> {
        self.ops().iter().rev().find_map(|op| match op {
            Op::Set { target: t, state, .. } if *t == target => Some(*state),
            Op::Complete { target: t, .. } if *t == target => Some(VisualState::VISIBLE),
            _ => None,
        })
    }

    fn record(&self, op: Op) {
        self.state.borrow_mut().ops.push(op);
    }
}

impl Animator for FakeAnimator {
    type Target = usize;

    fn is_attached(&self, target: &usize) -> bool {
        !self.state.borrow().detached.contains(target)
    }

    fn set(&self, target: &usize, state: &VisualState) {
        let at = self.clock.now();
        self.record(Op::Set {
            target: *target,
            state: *state,
            at,
        });
    }

    fn tween(&self, target: &usize, _to: &VisualState, tween: Tween, on_complete: Callback) {
        let target = *target;
        let now = self.clock.now();
        self.record(Op::Start {
            target,
            at: now + tween.delay_ms,
        });

        let (stalled, extra) = {
            let state = self.state.borrow();
            (
                state.stall_all || state.stalled.contains(&target),
                state.extra_latency.get(&target).copied().unwrap_or(0),
            )
        };
        if stalled {
            return;
        }

        let clock = self.clock.clone();
        let state = self.state.clone();
        let id = self.clock.schedule(
            tween.ends_at() + extra,
            Box::new(move || {
                {
                    let mut state = state.borrow_mut();
                    state.running.remove(&target);
                    state.ops.push(Op::Complete {
                        target,
                        at: clock.now(),
                    });
                }
                on_complete();
            }),
        );
        self.state.borrow_mut().running.insert(target, id);
    }

    fn kill(&self, target: &usize) {
        let at = self.clock.now();
        let running = {
            let mut state = self.state.borrow_mut();
            if state.leaky {
                None
            } else {
                state.running.remove(target)
            }
        };
        if let Some(id) = running {
            self.clock.cancel(id);
        }
        self.record(Op::Kill {
            target: *target,
            at,
        });
    }
}

struct Observation {
    target: usize,
    trigger: ScrollTrigger,
    on_change: Option<Box<dyn FnMut(Visibility)>>,
}

#[derive(Default)]
struct ViewportState {
    next_id: u64,
    unavailable: bool,
    observations: HashMap<u64, Observation>,
}

#[derive(Clone, Default)]
pub struct FakeViewport(Rc<RefCell<ViewportState>>);

impl FakeViewport {
    pub fn make_unavailable(&self) {
        self.0.borrow_mut().unavailable = true;
    }

    pub fn active(&self) -> usize {
        self.0.borrow().observations.len()
    }

    pub fn observed(&self) -> Vec<(usize, ScrollTrigger)> {
        self.0
            .borrow()
            .observations
            .values()
            .map(|observation| (observation.target, observation.trigger))
            .collect()
    }

    /// Delivers `visibility` to every live observation.
    pub fn emit(&self, visibility: Visibility) {
        let ids: Vec<u64> = self.0.borrow().observations.keys().copied().collect();
        for id in ids {
            let callback = self
                .0
                .borrow_mut()
                .observations
                .get_mut(&id)
                .and_then(|observation| observation.on_change.take());
            if let Some(mut callback) = callback {
                callback(visibility);
                if let Some(observation) = self.0.borrow_mut().observations.get_mut(&id) {
                    observation.on_change = Some(callback);
                }
            }
        }
    }
}

impl Viewport<usize> for FakeViewport {
    type Registration = u64;

    fn observe(
        &self,
        target: &usize,
        trigger: ScrollTrigger,
        on_change: Box<dyn FnMut(Visibility)>,
    ) -> Option<u64> {
        let mut state = self.0.borrow_mut();
        if state.unavailable {
            return None;
        }
        state.next_id += 1;
        let id = state.next_id;
        state.observations.insert(
            id,
            Observation {
                target: *target,
                trigger,
                on_change: Some(on_change),
            },
        );
        Some(id)
    }

    fn unobserve(&self, registration: u64) {
        self.0.borrow_mut().observations.remove(&registration);
    }
}
