//! Restartable elapsed-time counter.
//!
//! The timer does not own a clock. `start` registers a repeating
//! [`TaskKind::TimerTick`] with the [`Scheduler`]; whoever drains the scheduler
//! calls [`Timer::on_tick`] for each firing. Every increment is pushed to the
//! display callback as `m:ss`.

use std::fmt;

use crate::scheduler::{Scheduler, TaskId, TaskKind};
use crate::types::{format_elapsed, TIMER_PERIOD_MS};

/// Receives the formatted elapsed time.
pub type DisplayFn = Box<dyn FnMut(&str) + Send>;

pub struct Timer {
    elapsed_seconds: u32,
    period_ms: u32,
    /// Live repeating task while running.
    task: Option<TaskId>,
    display: DisplayFn,
}

impl Timer {
    pub fn new(display: impl FnMut(&str) + Send + 'static) -> Self {
        Self {
            elapsed_seconds: 0,
            period_ms: TIMER_PERIOD_MS,
            task: None,
            display: Box::new(display),
        }
    }

    /// Override the tick period (one "second" per `period_ms`).
    pub fn with_period_ms(mut self, period_ms: u32) -> Self {
        self.period_ms = period_ms.max(1);
        self
    }

    /// Begin counting. Calling start on a running timer is a no-op.
    pub fn start(&mut self, scheduler: &mut Scheduler) {
        if self.task.is_some() {
            return;
        }
        self.task = Some(scheduler.schedule_repeating(self.period_ms, TaskKind::TimerTick));
    }

    /// Halt counting and cancel the repeating task. Idempotent.
    pub fn stop(&mut self, scheduler: &mut Scheduler) {
        if let Some(id) = self.task.take() {
            scheduler.cancel(id);
        }
    }

    /// Stop, zero the counter and show `0:00`.
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.stop(scheduler);
        self.elapsed_seconds = 0;
        (self.display)(&format_elapsed(0));
    }

    /// Handle a fired tick. Ticks from a task this timer no longer owns are ignored.
    pub fn on_tick(&mut self, id: TaskId) -> bool {
        if self.task != Some(id) {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        (self.display)(&format_elapsed(self.elapsed_seconds));
        true
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    pub fn text(&self) -> String {
        format_elapsed(self.elapsed_seconds)
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("elapsed_seconds", &self.elapsed_seconds)
            .field("period_ms", &self.period_ms)
            .field("task", &self.task)
            .finish_non_exhaustive()
    }
}
