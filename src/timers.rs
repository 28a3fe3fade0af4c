//! Virtual clock for the page's timeouts and intervals.
//!
//! The host never runs wall-clock timers here; [`Timers::advance`] moves time forward and
//! reports which tasks came due, in the order they would have fired.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Work scheduled on the clock.
pub enum TimerTask {
    /// Auto-advance the hero slider.
    AdvanceSlide,
    /// Begin fading the loader.
    HideLoader,
    /// Remove the loader.
    RemoveLoader,
}

#[derive(Debug, Clone)]
struct Timer {
    due: u64,
    every: Option<u64>,
    task: TimerTask,
    seq: u64,
}

#[derive(Debug, Default, Clone)]
/// Pending timeouts and intervals.
pub struct Timers {
    now: u64,
    seq: u64,
    pending: Vec<Timer>,
}

impl Timers {
    #[must_use]
    /// Milliseconds elapsed since the page started.
    pub fn now(&self) -> u64 {
        self.now
    }

    fn push(&mut self, delay: u64, every: Option<u64>, task: TimerTask) {
        self.seq += 1;
        self.pending.push(Timer {
            due: self.now + delay,
            every,
            task,
            seq: self.seq,
        });
    }

    /// Runs `task` once after `delay` milliseconds.
    pub fn after(&mut self, delay: u64, task: TimerTask) {
        self.push(delay, None, task);
    }

    /// Runs `task` every `interval` milliseconds, forever.
    ///
    /// A zero interval is ignored.
    pub fn every(&mut self, interval: u64, task: TimerTask) {
        if interval > 0 {
            self.push(interval, Some(interval), task);
        }
    }

    #[must_use]
    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn next_due(&self, until: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by_key(|(_, timer)| (timer.due, timer.seq))
            .map(|(position, _)| position)
    }

    /// Moves the clock forward and returns every task that fired, in firing order.
    pub fn advance(&mut self, ms: u64) -> Vec<TimerTask> {
        let until = self.now + ms;
        let mut fired = Vec::new();

        while let Some(position) = self.next_due(until) {
            let timer = self.pending.swap_remove(position);
            self.now = timer.due;
            fired.push(timer.task);
            if let Some(every) = timer.every {
                self.push(every, Some(every), timer.task);
            }
        }

        self.now = until;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals_repeat_and_timeouts_fire_once() {
        let mut timers = Timers::default();
        timers.every(5000, TimerTask::AdvanceSlide);
        timers.after(350, TimerTask::HideLoader);
        timers.after(900, TimerTask::RemoveLoader);

        assert_eq!(
            timers.advance(1000),
            vec![TimerTask::HideLoader, TimerTask::RemoveLoader]
        );
        assert!(timers.advance(3999).is_empty());
        assert_eq!(timers.advance(1), vec![TimerTask::AdvanceSlide]);
        assert_eq!(
            timers.advance(10_000),
            vec![TimerTask::AdvanceSlide, TimerTask::AdvanceSlide]
        );
        assert_eq!(timers.pending(), 1);
        assert_eq!(timers.now(), 15_000);
    }

    #[test]
    fn zero_interval_is_ignored() {
        let mut timers = Timers::default();
        timers.every(0, TimerTask::AdvanceSlide);
        assert_eq!(timers.pending(), 0);
    }
}
