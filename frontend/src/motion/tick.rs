use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::Callback;

use super::counter::{CounterState, CounterStep};

/// Source of render ticks. Dropping the returned handle must cancel the
/// pending callback.
pub trait FrameScheduler {
    type Handle;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// `requestAnimationFrame` on the current window.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

struct Driver<S: FrameScheduler> {
    state: CounterState,
    scheduler: S,
    pending: Option<S::Handle>,
    publish: Callback<u64>,
}

/// Runs a [`CounterState`] on a frame scheduler until it completes or is
/// cancelled. Dropping the animation cancels it.
pub struct CounterAnimation<S: FrameScheduler + 'static> {
    driver: Rc<RefCell<Driver<S>>>,
}

impl<S: FrameScheduler + 'static> CounterAnimation<S> {
    /// Publishes the initial value right away and, unless the counter is
    /// already complete, schedules the first tick.
    pub fn start(state: CounterState, scheduler: S, publish: Callback<u64>) -> Self {
        let complete = state.is_complete();
        publish.emit(state.value());

        let driver = Rc::new(RefCell::new(Driver {
            state,
            scheduler,
            pending: None,
            publish,
        }));
        if !complete {
            schedule(&driver);
        }
        Self { driver }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.driver.borrow_mut().pending.take() {
            drop(handle);
            log::debug!("counter animation cancelled before completion");
        }
    }
}

impl<S: FrameScheduler + 'static> Drop for CounterAnimation<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule<S: FrameScheduler + 'static>(driver: &Rc<RefCell<Driver<S>>>) {
    let weak: Weak<RefCell<Driver<S>>> = Rc::downgrade(driver);
    let handle = driver.borrow().scheduler.request(Box::new(move |timestamp| {
        if let Some(driver) = weak.upgrade() {
            on_frame(&driver, timestamp);
        }
    }));
    driver.borrow_mut().pending = Some(handle);
}

fn on_frame<S: FrameScheduler + 'static>(driver: &Rc<RefCell<Driver<S>>>, timestamp: f64) {
    let (step, publish) = {
        let mut inner = driver.borrow_mut();
        // A frame that fires after cancel() has no handle to consume.
        if inner.pending.take().is_none() {
            return;
        }
        (inner.state.tick(timestamp), inner.publish.clone())
    };

    publish.emit(step.value());
    match step {
        CounterStep::Continue(_) => schedule(driver),
        CounterStep::Done(value) => log::debug!("counter reached {value}"),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::FrameScheduler;

    struct Slot {
        callback: Option<Box<dyn FnOnce(f64)>>,
        cancelled: Rc<Cell<bool>>,
    }

    /// Manually pumped scheduler for tests.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<RefCell<Vec<Slot>>>,
        requested: Rc<Cell<usize>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualFrames {
        pub fn requested(&self) -> usize {
            self.requested.get()
        }

        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|slot| !slot.cancelled.get())
                .count()
        }

        /// Fires every live callback queued so far. Returns how many ran.
        pub fn fire(&self, timestamp: f64) -> usize {
            let due: Vec<Slot> = self.queue.borrow_mut().drain(..).collect();
            let mut ran = 0;
            for slot in due {
                if slot.cancelled.get() {
                    continue;
                }
                if let Some(callback) = slot.callback {
                    callback(timestamp);
                    ran += 1;
                }
            }
            ran
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.requested.set(self.requested.get() + 1);
            self.queue.borrow_mut().push(Slot {
                callback: Some(callback),
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use yew::Callback;

    use super::testing::ManualFrames;
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<u64>>>, Callback<u64>) {
        let published = Rc::new(RefCell::new(Vec::new()));
        let sink = published.clone();
        (published, Callback::from(move |value| sink.borrow_mut().push(value)))
    }

    #[test]
    fn counts_up_and_stops_scheduling_at_target() {
        let frames = ManualFrames::default();
        let (published, publish) = recorder();
        let _animation = CounterAnimation::start(
            CounterState::new(200, 2.0).unwrap(),
            frames.clone(),
            publish,
        );

        assert_eq!(*published.borrow(), vec![0]);
        frames.fire(100.0);
        frames.fire(1100.0);
        assert_eq!(published.borrow().last(), Some(&100));
        frames.fire(2100.0);
        assert_eq!(published.borrow().last(), Some(&200));

        assert_eq!(frames.pending(), 0);
        assert_eq!(frames.fire(3000.0), 0);
        assert_eq!(*published.borrow(), vec![0, 0, 100, 200]);
    }

    #[test]
    fn zero_target_publishes_once_without_ticks() {
        let frames = ManualFrames::default();
        let (published, publish) = recorder();
        let _animation =
            CounterAnimation::start(CounterState::new(0, 2.0).unwrap(), frames.clone(), publish);

        assert_eq!(*published.borrow(), vec![0]);
        assert_eq!(frames.requested(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn cancelling_mid_animation_silences_further_updates() {
        let frames = ManualFrames::default();
        let (published, publish) = recorder();
        let animation = CounterAnimation::start(
            CounterState::new(300, 2.0).unwrap(),
            frames.clone(),
            publish,
        );
        frames.fire(0.0);
        frames.fire(1000.0);
        assert_eq!(published.borrow().last(), Some(&150));

        animation.cancel();
        let seen = published.borrow().len();
        assert_eq!(frames.fire(1500.0), 0);
        assert_eq!(frames.fire(2500.0), 0);
        assert_eq!(published.borrow().len(), seen);
    }

    #[test]
    fn dropping_the_animation_cancels_it() {
        let frames = ManualFrames::default();
        let (published, publish) = recorder();
        {
            let _animation = CounterAnimation::start(
                CounterState::new(50, 1.0).unwrap(),
                frames.clone(),
                publish,
            );
            frames.fire(0.0);
            frames.fire(500.0);
        }
        let seen = published.borrow().len();
        assert_eq!(frames.pending(), 0);
        frames.fire(900.0);
        assert_eq!(published.borrow().len(), seen);
        assert_eq!(published.borrow().last(), Some(&25));
    }

    #[test]
    fn independent_counters_finish_in_their_own_time() {
        let frames = ManualFrames::default();
        let (fast_values, fast_publish) = recorder();
        let (slow_values, slow_publish) = recorder();
        let _fast = CounterAnimation::start(
            CounterState::new(10, 0.5).unwrap(),
            frames.clone(),
            fast_publish,
        );
        let _slow = CounterAnimation::start(
            CounterState::new(10, 2.0).unwrap(),
            frames.clone(),
            slow_publish,
        );

        frames.fire(0.0);
        frames.fire(600.0);
        // Only the slow counter still has a frame queued.
        assert_eq!(frames.pending(), 1);
        assert_eq!(fast_values.borrow().last(), Some(&10));
        assert_eq!(slow_values.borrow().last(), Some(&3));
    }
}
