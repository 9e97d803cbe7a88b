/*
 * Frame Clock Module
 *
 * Fixed-timestep accumulator that decouples the physics cadence from the
 * display refresh. Each display frame feeds the elapsed wall time into the
 * accumulator and runs as many whole physics steps as fit. Instants are
 * injected by the caller, so stepping is deterministic in tests.
 */

use std::time::{Duration, Instant};

// Upper bound on steps drained per frame so a long stall cannot snowball
const MAX_STEPS_PER_TICK: usize = 8;

pub struct FrameClock {
    step: Duration,
    accumulator: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(steps_per_second: f32, now: Instant) -> Self {
        Self {
            step: Duration::from_secs_f32(1.0 / steps_per_second),
            accumulator: Duration::ZERO,
            last_tick: now,
        }
    }

    // Number of physics steps to run for the frame ending at `now`
    pub fn tick(&mut self, now: Instant) -> usize {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.accumulator += elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < MAX_STEPS_PER_TICK {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_TICK {
            // drop the backlog after a stall instead of replaying it
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    pub fn step_duration(&self) -> Duration {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_frame_intervals_yield_one_step_each() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start);
        let step = clock.step_duration();
        for i in 1..=10 {
            assert_eq!(clock.tick(start + step * i), 1);
        }
    }

    #[test]
    fn short_frames_accumulate_into_whole_steps() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start);
        let half = clock.step_duration() / 2;
        assert_eq!(clock.tick(start + half), 0);
        assert_eq!(clock.tick(start + half * 2), 1);
    }

    #[test]
    fn long_frames_run_multiple_steps() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start);
        let step = clock.step_duration();
        assert_eq!(clock.tick(start + step * 3), 3);
    }

    #[test]
    fn stalls_are_capped_and_backlog_dropped() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start);
        let step = clock.step_duration();
        assert_eq!(clock.tick(start + step * 100), 8);
        // backlog was discarded, the next frame is a normal one
        assert_eq!(clock.tick(start + step * 101), 1);
    }

    #[test]
    fn non_monotonic_instants_do_not_panic() {
        let start = Instant::now();
        let mut clock = FrameClock::new(60.0, start + Duration::from_secs(1));
        assert_eq!(clock.tick(start), 0);
    }
}
