use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Unknown task id: {0}")]
    UnknownTask(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(usize);

struct PeriodicTask {
    name: &'static str,
    period: Duration,
    next_due: Duration,
    paused: bool,
}

/// Owns named periodic tasks and decides which are due as virtual time
/// advances. The caller supplies elapsed time explicitly, so the UI loop
/// feeds it wall-clock deltas and tests feed it a virtual clock.
pub struct Scheduler {
    tasks: Vec<PeriodicTask>,
    elapsed: Duration,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    /// Register a task; its first firing is one full period from now.
    pub fn register(&mut self, name: &'static str, period: Duration) -> TaskId {
        let id = TaskId(self.tasks.len());
        self.tasks.push(PeriodicTask {
            name,
            period,
            next_due: self.elapsed + period,
            paused: false,
        });
        id
    }

    /// Advance virtual time and return due task ids in firing order. A delta
    /// spanning several periods of one task yields one id per missed tick.
    pub fn advance(&mut self, delta: Duration) -> Vec<TaskId> {
        self.elapsed += delta;

        let mut due: Vec<(Duration, TaskId)> = Vec::new();
        for (index, task) in self.tasks.iter_mut().enumerate() {
            if task.paused || task.period.is_zero() {
                continue;
            }
            while task.next_due <= self.elapsed {
                due.push((task.next_due, TaskId(index)));
                task.next_due += task.period;
            }
        }

        // Stable sort keeps registration order for simultaneous firings.
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn pause(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let task = self.task_mut(id)?;
        task.paused = true;
        Ok(())
    }

    /// Resume a paused task; missed ticks are not replayed.
    pub fn resume(&mut self, id: TaskId) -> Result<(), SchedulerError> {
        let elapsed = self.elapsed;
        let task = self.task_mut(id)?;
        if task.paused {
            task.paused = false;
            task.next_due = elapsed + task.period;
        }
        Ok(())
    }

    pub fn task_name(&self, id: TaskId) -> Option<&'static str> {
        self.tasks.get(id.0).map(|task| task.name)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Teardown: drop every task. Elapsed time is retained.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    fn task_mut(&mut self, id: TaskId) -> Result<&mut PeriodicTask, SchedulerError> {
        self.tasks
            .get_mut(id.0)
            .ok_or(SchedulerError::UnknownTask(id.0))
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_on_period() {
        let mut scheduler = Scheduler::new();
        let task = scheduler.register("traffic", Duration::from_secs(2));

        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_secs(1)), vec![task]);
        assert!(scheduler.advance(Duration::from_millis(1999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![task]);
    }

    #[test]
    fn test_large_delta_queues_missed_ticks() {
        let mut scheduler = Scheduler::new();
        let task = scheduler.register("logs", Duration::from_secs(1));

        let fired = scheduler.advance(Duration::from_secs(5));
        assert_eq!(fired, vec![task; 5]);
    }

    #[test]
    fn test_interleaved_tasks_fire_in_time_order() {
        let mut scheduler = Scheduler::new();
        let fast = scheduler.register("logs", Duration::from_secs(1));
        let slow = scheduler.register("flows", Duration::from_secs(2));

        let fired = scheduler.advance(Duration::from_secs(4));
        assert_eq!(fired, vec![fast, fast, slow, fast, fast, slow]);
    }

    #[test]
    fn test_paused_task_does_not_fire() {
        let mut scheduler = Scheduler::new();
        let task = scheduler.register("metrics", Duration::from_secs(1));

        scheduler.pause(task).unwrap();
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());

        scheduler.resume(task).unwrap();
        assert!(scheduler.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(1)), vec![task]);
    }

    #[test]
    fn test_clear_drops_all_tasks() {
        let mut scheduler = Scheduler::new();
        scheduler.register("traffic", Duration::from_secs(1));
        scheduler.register("logs", Duration::from_secs(1));
        assert_eq!(scheduler.task_count(), 2);

        scheduler.clear();
        assert_eq!(scheduler.task_count(), 0);
        assert!(scheduler.advance(Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_task_names() {
        let mut scheduler = Scheduler::new();
        let task = scheduler.register("traffic", Duration::from_secs(2));
        assert_eq!(scheduler.task_name(task), Some("traffic"));
    }
}
