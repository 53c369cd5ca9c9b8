//! Cancelable deferred tasks on a virtual millisecond clock.
//!
//! The game never reads the wall clock. The runner feeds elapsed time into
//! [`Scheduler::advance`], then drains due tasks one by one with
//! [`Scheduler::pop_due`]. Handling a task may schedule or cancel others,
//! and tasks fire in due order even when one `advance` spans several of them.

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// What a task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// One-second tick of the elapsed-time counter (repeating).
    TimerTick,
    /// Flip a mismatched pair back face down (one-shot).
    MismatchRollback { first: usize, second: usize },
    /// Show the congratulation notice after a win (one-shot).
    Congratulations,
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: TaskId,
    kind: TaskKind,
    due_ms: u64,
    /// `Some` for repeating tasks.
    period_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    horizon_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `kind` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u32, kind: TaskKind) -> TaskId {
        self.push(delay_ms as u64, None, kind)
    }

    /// Run `kind` every `period_ms` (at least 1ms), first firing one period from now.
    pub fn schedule_repeating(&mut self, period_ms: u32, kind: TaskKind) -> TaskId {
        let period = (period_ms as u64).max(1);
        self.push(period, Some(period), kind)
    }

    fn push(&mut self, delay_ms: u64, period_ms: Option<u64>, kind: TaskKind) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            kind,
            due_ms: self.now_ms + delay_ms,
            period_ms,
        });
        id
    }

    /// Remove a task. Returns false if it already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Let `elapsed_ms` more time pass. Due tasks are collected with [`Self::pop_due`].
    pub fn advance(&mut self, elapsed_ms: u32) {
        self.horizon_ms = self.horizon_ms.max(self.now_ms) + elapsed_ms as u64;
    }

    /// Fire the earliest task due within the advanced window.
    ///
    /// The clock moves to the task's due time, so tasks scheduled by the
    /// handler are relative to the moment it fired. Returns `None` (and moves
    /// the clock to the end of the window) once nothing else is due.
    pub fn pop_due(&mut self) -> Option<(TaskId, TaskKind)> {
        let pos = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_ms <= self.horizon_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.id.0))
            .map(|(i, _)| i);

        let Some(pos) = pos else {
            self.now_ms = self.now_ms.max(self.horizon_ms);
            return None;
        };

        let task = &mut self.tasks[pos];
        self.now_ms = task.due_ms;
        let fired = (task.id, task.kind);
        let period_ms = task.period_ms;
        match period_ms {
            Some(period) => task.due_ms += period,
            None => {
                self.tasks.swap_remove(pos);
            }
        }
        Some(fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(s: &mut Scheduler) -> Vec<(TaskId, TaskKind)> {
        std::iter::from_fn(|| s.pop_due()).collect()
    }

    #[test]
    fn one_shot_fires_once_after_delay() {
        let mut s = Scheduler::new();
        let id = s.schedule_once(1000, TaskKind::Congratulations);

        s.advance(999);
        assert!(drain(&mut s).is_empty());
        assert!(s.is_scheduled(id));

        s.advance(1);
        assert_eq!(drain(&mut s), vec![(id, TaskKind::Congratulations)]);
        assert!(!s.is_scheduled(id));
        assert_eq!(s.now_ms(), 1000);

        s.advance(5000);
        assert!(drain(&mut s).is_empty());
    }

    #[test]
    fn repeating_fires_every_period_within_one_advance() {
        let mut s = Scheduler::new();
        let id = s.schedule_repeating(1000, TaskKind::TimerTick);

        s.advance(3500);
        let fired = drain(&mut s);
        assert_eq!(fired.len(), 3);
        assert!(fired.iter().all(|&(f, _)| f == id));
        assert_eq!(s.now_ms(), 3500);
        assert!(s.is_scheduled(id));
    }

    #[test]
    fn tasks_fire_in_due_order() {
        let mut s = Scheduler::new();
        let tick = s.schedule_repeating(1000, TaskKind::TimerTick);
        let rollback = s.schedule_once(
            1500,
            TaskKind::MismatchRollback {
                first: 0,
                second: 1,
            },
        );

        s.advance(2000);
        let order: Vec<TaskId> = drain(&mut s).into_iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![tick, rollback, tick]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut s = Scheduler::new();
        let id = s.schedule_once(1000, TaskKind::Congratulations);
        assert!(s.cancel(id));
        assert!(!s.cancel(id));

        s.advance(2000);
        assert!(drain(&mut s).is_empty());
    }

    #[test]
    fn cancel_during_drain_stops_later_firings() {
        let mut s = Scheduler::new();
        let id = s.schedule_repeating(100, TaskKind::TimerTick);

        s.advance(1000);
        assert_eq!(s.pop_due(), Some((id, TaskKind::TimerTick)));
        s.cancel(id);
        assert_eq!(s.pop_due(), None);
        assert_eq!(s.pending(), 0);
    }

    #[test]
    fn tasks_scheduled_while_draining_are_relative_to_fire_time() {
        let mut s = Scheduler::new();
        s.schedule_once(100, TaskKind::TimerTick);

        s.advance(1000);
        assert!(s.pop_due().is_some());
        assert_eq!(s.now_ms(), 100);

        // Due at 600, still inside the advanced window.
        let later = s.schedule_once(500, TaskKind::Congratulations);
        assert_eq!(s.pop_due(), Some((later, TaskKind::Congratulations)));
        assert_eq!(s.now_ms(), 600);
    }

    #[test]
    fn cancel_all_clears_everything() {
        let mut s = Scheduler::new();
        s.schedule_repeating(1000, TaskKind::TimerTick);
        s.schedule_once(10, TaskKind::Congratulations);
        s.cancel_all();
        assert_eq!(s.pending(), 0);

        s.advance(5000);
        assert!(drain(&mut s).is_empty());
    }
}
