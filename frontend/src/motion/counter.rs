use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CounterError {
    #[error("counter target must not be negative (got {0})")]
    NegativeTarget(i64),
    #[error("counter duration must be a positive number of seconds (got {0})")]
    InvalidDuration(f64),
}

/// Result of advancing a counter by one render tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterStep {
    /// Publish the value and schedule another tick.
    Continue(u64),
    /// Publish the value; the animation is over.
    Done(u64),
}

impl CounterStep {
    pub fn value(self) -> u64 {
        match self {
            CounterStep::Continue(value) | CounterStep::Done(value) => value,
        }
    }
}

/// One count-up animation from 0 to `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    target: u64,
    duration_ms: f64,
    start: Option<f64>,
    current: u64,
    complete: bool,
}

impl CounterState {
    pub fn new(target: i64, duration_secs: f64) -> Result<Self, CounterError> {
        if target < 0 {
            return Err(CounterError::NegativeTarget(target));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(CounterError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            target: target as u64,
            duration_ms: duration_secs * 1000.0,
            start: None,
            current: 0,
            // Counting to zero has nothing to animate.
            complete: target == 0,
        })
    }

    pub fn value(&self) -> u64 {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance to the host timestamp `now_ms`. The first tick only records
    /// the start time.
    pub fn tick(&mut self, now_ms: f64) -> CounterStep {
        if self.complete {
            return CounterStep::Done(self.current);
        }

        let start = *self.start.get_or_insert(now_ms);
        let progress = ((now_ms - start) / self.duration_ms).max(0.0);

        if progress < 1.0 {
            let value = (self.target as f64 * progress).floor() as u64;
            // A host clock that steps backwards must not make the display
            // count down.
            self.current = self.current.max(value.min(self.target));
            CounterStep::Continue(self.current)
        } else {
            self.current = self.target;
            self.complete = true;
            CounterStep::Done(self.target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut CounterState, frame_ms: f64) -> Vec<u64> {
        let mut published = Vec::new();
        let mut now = 16.0;
        loop {
            let step = state.tick(now);
            published.push(step.value());
            if let CounterStep::Done(_) = step {
                return published;
            }
            now += frame_ms;
            assert!(published.len() < 10_000, "counter did not terminate");
        }
    }

    #[test]
    fn half_way_shows_half_the_target() {
        let mut state = CounterState::new(200, 2.0).unwrap();
        assert_eq!(state.tick(5000.0), CounterStep::Continue(0));
        assert_eq!(state.tick(6000.0), CounterStep::Continue(100));
        assert_eq!(state.tick(7000.0), CounterStep::Done(200));
        assert!(state.is_complete());
        assert_eq!(state.tick(9000.0), CounterStep::Done(200));
    }

    #[test]
    fn overshooting_the_duration_snaps_to_target() {
        let mut state = CounterState::new(37, 0.5).unwrap();
        state.tick(0.0);
        assert_eq!(state.tick(480.0), CounterStep::Continue(35));
        assert_eq!(state.tick(1234.5), CounterStep::Done(37));
        assert_eq!(state.value(), 37);
    }

    #[test]
    fn published_sequence_is_non_decreasing_and_ends_on_target() {
        for (target, seconds, frame) in [
            (10, 2.0, 16.7),
            (200, 2.0, 16.7),
            (300, 2.0, 33.3),
            (50, 0.1, 16.7),
            (1, 3.0, 7.0),
            (1_000_003, 1.3, 16.0),
        ] {
            let mut state = CounterState::new(target, seconds).unwrap();
            let published = run_to_completion(&mut state, frame);
            assert!(published.windows(2).all(|w| w[0] <= w[1]), "{published:?}");
            assert_eq!(*published.last().unwrap(), target as u64);
            let frames_bound = (seconds * 1000.0 / frame).ceil() as usize + 2;
            assert!(published.len() <= frames_bound);
        }
    }

    #[test]
    fn clock_going_backwards_does_not_count_down() {
        let mut state = CounterState::new(100, 1.0).unwrap();
        state.tick(1000.0);
        assert_eq!(state.tick(1500.0), CounterStep::Continue(50));
        assert_eq!(state.tick(1200.0), CounterStep::Continue(50));
        assert_eq!(state.tick(900.0), CounterStep::Continue(50));
    }

    #[test]
    fn zero_target_is_complete_immediately() {
        let mut state = CounterState::new(0, 2.0).unwrap();
        assert!(state.is_complete());
        assert_eq!(state.value(), 0);
        assert_eq!(state.tick(10.0), CounterStep::Done(0));
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(CounterState::new(-1, 2.0), Err(CounterError::NegativeTarget(-1)));
        assert_eq!(CounterState::new(5, 0.0), Err(CounterError::InvalidDuration(0.0)));
        assert_eq!(CounterState::new(5, -2.0), Err(CounterError::InvalidDuration(-2.0)));
        assert!(matches!(
            CounterState::new(5, f64::NAN),
            Err(CounterError::InvalidDuration(_))
        ));
        assert!(CounterState::new(5, f64::INFINITY).is_err());
    }
}
