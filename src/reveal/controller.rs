use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace, warn};

use super::config::{RevealConfig, RevealError, ScrollTrigger, Timing, Trigger};
use super::engine::{Animator, Timers, Viewport, Visibility};
use super::visual::{Easing, Tween, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleStatus {
    Pending,
    Animating,
    SettledByAnimation,
    SettledByFallback,
}

impl SettleStatus {
    pub fn is_settled(self) -> bool {
        matches!(
            self,
            SettleStatus::SettledByAnimation | SettleStatus::SettledByFallback
        )
    }
}

/// What finished a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettlePath {
    Animation,
    Fallback,
    /// Nothing to animate.
    Empty,
}

/// Ordered targets sharing one trigger. Without an explicit trigger element
/// the first target is observed.
#[derive(Debug, Clone)]
pub struct RevealGroup<T> {
    targets: Vec<T>,
    trigger: Option<T>,
}

impl<T> RevealGroup<T> {
    pub fn new(targets: Vec<T>) -> Self {
        RevealGroup {
            targets,
            trigger: None,
        }
    }

    pub fn triggered_by(mut self, trigger: T) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Armed,
    Animating,
    Settled,
    Cancelled,
}

struct GroupState<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    animator: Rc<A>,
    timers: Rc<T>,
    viewport: Rc<V>,
    targets: Vec<A::Target>,
    statuses: Vec<SettleStatus>,
    hidden: VisualState,
    easing: Easing,
    timing: Timing,
    reverse_on_exit: bool,
    phase: Phase,
    // Bumped on every activation, reverse and cancel; callbacks carrying an
    // older value are stale.
    epoch: u64,
    settled_by: Option<SettlePath>,
    start_timer: Option<T::Timer>,
    fallback: Option<T::Timer>,
    registration: Option<V::Registration>,
    listener: Option<Rc<dyn Fn(SettlePath)>>,
    on_reversed: Option<Rc<dyn Fn()>>,
}

struct Group<A, T, V>(Rc<RefCell<GroupState<A, T, V>>>)
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static;

impl<A, T, V> Group<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    fn upgrade(weak: &Weak<RefCell<GroupState<A, T, V>>>) -> Option<Self> {
        weak.upgrade().map(Group)
    }

    fn start_after(&self, delay_ms: u32) {
        if delay_ms == 0 {
            self.activate();
            return;
        }
        let weak = Rc::downgrade(&self.0);
        let timers = self.0.borrow().timers.clone();
        let timer = timers.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(group) = Group::upgrade(&weak) {
                    let fired = group.0.borrow_mut().start_timer.take();
                    drop(fired);
                    group.activate();
                }
            }),
        );
        self.0.borrow_mut().start_timer = Some(timer);
    }

    fn observe(&self, observed: &A::Target, trigger: ScrollTrigger) {
        let weak = Rc::downgrade(&self.0);
        let viewport = self.0.borrow().viewport.clone();
        let registration = viewport.observe(
            observed,
            trigger,
            Box::new(move |visibility| {
                if let Some(group) = Group::upgrade(&weak) {
                    group.on_visibility(visibility);
                }
            }),
        );
        match registration {
            Some(registration) => self.0.borrow_mut().registration = Some(registration),
            None => {
                warn!("Viewport observer unavailable, revealing immediately");
                self.activate();
            }
        }
    }

    fn on_visibility(&self, visibility: Visibility) {
        match visibility {
            Visibility::Entered => {
                self.activate();
            }
            Visibility::Exited => {
                let reversible = {
                    let state = self.0.borrow();
                    state.reverse_on_exit && state.phase == Phase::Settled
                };
                if reversible {
                    let _ = self.reverse();
                }
            }
        }
    }

    fn activate(&self) -> bool {
        let (animator, timers, start_timer, jobs, epoch, timing, easing, total) = {
            let mut guard = self.0.borrow_mut();
            let state = &mut *guard;
            if state.phase != Phase::Armed {
                trace!("Ignoring activation in phase {:?}", state.phase);
                return false;
            }
            state.epoch += 1;
            state.phase = Phase::Animating;

            let mut jobs = Vec::with_capacity(state.targets.len());
            for (index, (target, status)) in state.targets.iter().zip(state.statuses.iter_mut()).enumerate() {
                if state.animator.is_attached(target) {
                    *status = SettleStatus::Animating;
                    jobs.push((index, target.clone()));
                } else {
                    trace!("Target {} detached before activation, skipping", index);
                    *status = SettleStatus::SettledByFallback;
                }
            }
            (
                state.animator.clone(),
                state.timers.clone(),
                state.start_timer.take(),
                jobs,
                state.epoch,
                state.timing,
                state.easing,
                state.targets.len(),
            )
        };

        if let Some(timer) = start_timer {
            timers.clear(timer);
        }

        if jobs.is_empty() {
            self.finish(if total == 0 {
                SettlePath::Empty
            } else {
                SettlePath::Fallback
            });
            return true;
        }

        debug!(
            "Activating reveal of {} targets, fallback in {}ms",
            jobs.len(),
            timing.fallback_deadline_ms
        );

        let weak = Rc::downgrade(&self.0);
        let fallback = timers.schedule(
            timing.fallback_deadline_ms,
            Box::new(move || {
                if let Some(group) = Group::upgrade(&weak) {
                    group.on_fallback(epoch);
                }
            }),
        );
        self.0.borrow_mut().fallback = Some(fallback);

        for (index, target) in jobs {
            if self.0.borrow().epoch != epoch {
                break;
            }
            let tween = Tween {
                delay_ms: timing.stagger_ms.saturating_mul(index as u32),
                duration_ms: timing.duration_ms,
                easing,
            };
            let weak = Rc::downgrade(&self.0);
            animator.tween(
                &target,
                &VisualState::VISIBLE,
                tween,
                Box::new(move || {
                    if let Some(group) = Group::upgrade(&weak) {
                        group.on_animation_complete(epoch, index);
                    }
                }),
            );
        }
        true
    }

    fn on_animation_complete(&self, epoch: u64, index: usize) {
        let done = {
            let mut state = self.0.borrow_mut();
            if state.epoch != epoch || state.statuses.get(index) != Some(&SettleStatus::Animating) {
                trace!("Ignoring stale animation callback for target {}", index);
                return;
            }
            state.statuses[index] = SettleStatus::SettledByAnimation;
            state.statuses.iter().all(|status| status.is_settled())
        };
        if done {
            self.finish(SettlePath::Animation);
        }
    }

    fn on_fallback(&self, epoch: u64) {
        let (animator, forced, fired) = {
            let mut guard = self.0.borrow_mut();
            let state = &mut *guard;
            if state.epoch != epoch || state.phase != Phase::Animating {
                return;
            }
            let mut forced = Vec::new();
            for (status, target) in state.statuses.iter_mut().zip(state.targets.iter()) {
                if !status.is_settled() {
                    *status = SettleStatus::SettledByFallback;
                    forced.push(target.clone());
                }
            }
            (state.animator.clone(), forced, state.fallback.take())
        };
        drop(fired);

        warn!("Reveal fallback forced {} targets visible", forced.len());
        for target in &forced {
            if animator.is_attached(target) {
                animator.kill(target);
                animator.set(target, &VisualState::VISIBLE);
            }
        }
        self.finish(SettlePath::Fallback);
    }

    fn finish(&self, path: SettlePath) {
        let (timers, fallback, listener) = {
            let mut state = self.0.borrow_mut();
            state.phase = Phase::Settled;
            state.settled_by = Some(path);
            (state.timers.clone(), state.fallback.take(), state.listener.clone())
        };
        if let Some(timer) = fallback {
            timers.clear(timer);
        }
        debug!("Reveal group settled by {:?}", path);
        if let Some(listener) = listener {
            listener(path);
        }
    }

    fn reverse(&self) -> Result<bool, RevealError> {
        let (animator, targets, hidden, on_reversed) = {
            let mut state = self.0.borrow_mut();
            if !state.reverse_on_exit {
                return Err(RevealError::ReverseDisabled);
            }
            if state.phase != Phase::Settled {
                return Ok(false);
            }
            state.phase = Phase::Armed;
            state.epoch += 1;
            state.settled_by = None;
            state.statuses.iter_mut().for_each(|status| *status = SettleStatus::Pending);
            (
                state.animator.clone(),
                state.targets.clone(),
                state.hidden,
                state.on_reversed.clone(),
            )
        };
        for target in &targets {
            if animator.is_attached(target) {
                animator.kill(target);
                animator.set(target, &hidden);
            }
        }
        debug!("Reveal group reversed, waiting for re-entry");
        if let Some(on_reversed) = on_reversed {
            on_reversed();
        }
        Ok(true)
    }

    fn cancel(&self) {
        let (animator, timers, viewport, start_timer, fallback, registration, in_flight) = {
            let mut guard = self.0.borrow_mut();
            let state = &mut *guard;
            if state.phase == Phase::Cancelled {
                return;
            }
            state.phase = Phase::Cancelled;
            state.epoch += 1;
            let in_flight: Vec<A::Target> = state
                .statuses
                .iter()
                .zip(state.targets.iter())
                .filter(|(status, _)| **status == SettleStatus::Animating)
                .map(|(_, target)| target.clone())
                .collect();
            (
                state.animator.clone(),
                state.timers.clone(),
                state.viewport.clone(),
                state.start_timer.take(),
                state.fallback.take(),
                state.registration.take(),
                in_flight,
            )
        };

        if let Some(timer) = start_timer {
            timers.clear(timer);
        }
        if let Some(timer) = fallback {
            timers.clear(timer);
        }
        if let Some(registration) = registration {
            viewport.unobserve(registration);
        }
        for target in &in_flight {
            if animator.is_attached(target) {
                animator.kill(target);
            }
        }
        debug!("Reveal group cancelled");
    }
}

/// Arms reveal groups against one set of collaborators.
pub struct RevealController<A, T, V> {
    animator: Rc<A>,
    timers: Rc<T>,
    viewport: Rc<V>,
}

impl<A, T, V> Clone for RevealController<A, T, V> {
    fn clone(&self) -> Self {
        RevealController {
            animator: self.animator.clone(),
            timers: self.timers.clone(),
            viewport: self.viewport.clone(),
        }
    }
}

impl<A, T, V> RevealController<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    pub fn new(animator: A, timers: T, viewport: V) -> Self {
        RevealController {
            animator: Rc::new(animator),
            timers: Rc::new(timers),
            viewport: Rc::new(viewport),
        }
    }

    /// Hides every target and sets up its trigger. Configuration is checked
    /// before anything is touched.
    pub fn arm(
        &self,
        group: RevealGroup<A::Target>,
        config: &RevealConfig,
    ) -> Result<RevealHandle<A, T, V>, RevealError> {
        let timing = config.validate(group.len())?;
        let RevealGroup { targets, trigger } = group;

        for target in &targets {
            if self.animator.is_attached(target) {
                self.animator.set(target, &config.hidden);
            }
        }

        let observed = trigger.or_else(|| targets.first().cloned());
        debug!("Armed reveal of {} targets ({:?})", targets.len(), config.trigger);

        let group = Group(Rc::new(RefCell::new(GroupState {
            animator: self.animator.clone(),
            timers: self.timers.clone(),
            viewport: self.viewport.clone(),
            statuses: vec![SettleStatus::Pending; targets.len()],
            targets,
            hidden: config.hidden,
            easing: config.easing,
            timing,
            reverse_on_exit: config.reverse_on_exit,
            phase: Phase::Armed,
            epoch: 0,
            settled_by: None,
            start_timer: None,
            fallback: None,
            registration: None,
            listener: None,
            on_reversed: None,
        })));

        match (config.trigger, observed) {
            (Trigger::Immediate, _) => group.start_after(timing.start_delay_ms),
            (Trigger::OnScroll(scroll), Some(observed)) => group.observe(&observed, scroll),
            (Trigger::OnScroll(_), None) => {
                group.activate();
            }
        }

        Ok(RevealHandle { group })
    }
}

/// Owned handle to an armed group. Dropping it cancels the group.
pub struct RevealHandle<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    group: Group<A, T, V>,
}

impl<A, T, V> RevealHandle<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    /// Starts the transition. Returns `false` if the group was not waiting
    /// for activation.
    pub fn activate(&self) -> bool {
        self.group.activate()
    }

    /// Hides the group again so it can be re-activated. Only valid for groups
    /// armed with `reverse_on_exit`; a no-op unless the group has settled.
    pub fn reverse(&self) -> Result<bool, RevealError> {
        self.group.reverse()
    }

    pub fn cancel(&self) {
        self.group.cancel();
    }

    pub fn status(&self, index: usize) -> Option<SettleStatus> {
        self.group.0.borrow().statuses.get(index).copied()
    }

    pub fn statuses(&self) -> Vec<SettleStatus> {
        self.group.0.borrow().statuses.clone()
    }

    pub fn is_settled(&self) -> bool {
        self.group.0.borrow().phase == Phase::Settled
    }

    pub fn is_cancelled(&self) -> bool {
        self.group.0.borrow().phase == Phase::Cancelled
    }

    /// Called on every settle. Fires right away if the group already settled.
    pub fn on_settled(&self, listener: impl Fn(SettlePath) + 'static) {
        let listener: Rc<dyn Fn(SettlePath)> = Rc::new(listener);
        let already = {
            let mut state = self.group.0.borrow_mut();
            state.listener = Some(listener.clone());
            state.settled_by.filter(|_| state.phase == Phase::Settled)
        };
        if let Some(path) = already {
            listener(path);
        }
    }

    /// Called each time the group is hidden again for re-entry.
    pub fn on_reversed(&self, listener: impl Fn() + 'static) {
        self.group.0.borrow_mut().on_reversed = Some(Rc::new(listener));
    }
}

impl<A, T, V> Drop for RevealHandle<A, T, V>
where
    A: Animator + 'static,
    T: Timers + 'static,
    V: Viewport<A::Target> + 'static,
{
    fn drop(&mut self) {
        self.group.cancel();
    }
}
