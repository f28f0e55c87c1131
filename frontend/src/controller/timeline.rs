//! Virtual-clock task queue backing every timer on the page.
//!
//! Tasks are plain values; the owner pops them with [`Timeline::pop_due`] and
//! decides what they mean. Nothing here knows about the browser, so the same
//! queue is pumped by animation frames on the page and by `advance` calls in
//! tests.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TaskId,
    due_at: u64,
    order: u64,
    every: Option<u64>,
    task: T,
}

#[derive(Debug, Clone)]
pub struct Timeline<T> {
    now_ms: u64,
    next_id: u64,
    next_order: u64,
    queue: Vec<Scheduled<T>>,
}

impl<T: Clone> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            next_order: 0,
            queue: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.queue.iter().any(|s| s.id == id)
    }

    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TaskId {
        self.push(delay_ms, None, task)
    }

    /// First run after `period_ms`, then every `period_ms` until cancelled.
    pub fn schedule_every(&mut self, period_ms: u64, task: T) -> TaskId {
        // A zero period would spin forever inside a single pop_due loop.
        let period = period_ms.max(1);
        self.push(period, Some(period), task)
    }

    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|s| s.id != id);
        before != self.queue.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cleared = self.queue.len();
        self.queue.clear();
        cleared
    }

    /// Removes and returns the earliest task due at or before `until_ms`,
    /// moving the clock to its due time. Repeating tasks are re-armed before
    /// being returned. Ties run in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TaskId, T)> {
        let idx = self
            .queue
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_at <= until_ms)
            .min_by_key(|(_, s)| (s.due_at, s.order))
            .map(|(idx, _)| idx)?;

        let scheduled = self.queue.remove(idx);
        if scheduled.due_at > self.now_ms {
            self.now_ms = scheduled.due_at;
        }

        if let Some(period) = scheduled.every {
            let order = self.take_order();
            self.queue.push(Scheduled {
                id: scheduled.id,
                due_at: scheduled.due_at + period,
                order,
                every: Some(period),
                task: scheduled.task.clone(),
            });
        }

        Some((scheduled.id, scheduled.task))
    }

    /// Moves the clock forward without running anything. Callers drain
    /// `pop_due(target)` first.
    pub fn settle_at(&mut self, target_ms: u64) {
        if target_ms > self.now_ms {
            self.now_ms = target_ms;
        }
    }

    fn push(&mut self, delay_ms: u64, every: Option<u64>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let order = self.take_order();
        self.queue.push(Scheduled {
            id,
            due_at: self.now_ms.saturating_add(delay_ms),
            order,
            every,
            task,
        });
        id
    }

    fn take_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timeline: &mut Timeline<&'static str>, until: u64) -> Vec<(u64, &'static str)> {
        let mut ran = Vec::new();
        while let Some((_, task)) = timeline.pop_due(until) {
            ran.push((timeline.now_ms(), task));
        }
        timeline.settle_at(until);
        ran
    }

    #[test]
    fn runs_in_due_order_then_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.schedule_once(20, "late");
        timeline.schedule_once(10, "first");
        timeline.schedule_once(10, "second");

        assert_eq!(drain(&mut timeline, 25), vec![(10, "first"), (10, "second"), (20, "late")]);
        assert_eq!(timeline.now_ms(), 25);
        assert_eq!(timeline.pending(), 0);
    }

    #[test]
    fn repeating_task_rearms_until_cancelled() {
        let mut timeline = Timeline::new();
        let id = timeline.schedule_every(100, "tick");

        assert_eq!(drain(&mut timeline, 350).len(), 3);
        assert!(timeline.is_pending(id));
        assert!(timeline.cancel(id));
        assert!(drain(&mut timeline, 1000).is_empty());
    }

    #[test]
    fn nothing_runs_before_due() {
        let mut timeline = Timeline::new();
        timeline.schedule_once(50, "x");
        assert!(drain(&mut timeline, 49).is_empty());
        assert_eq!(drain(&mut timeline, 50), vec![(50, "x")]);
    }

    #[test]
    fn delays_are_relative_to_current_clock() {
        let mut timeline = Timeline::new();
        drain(&mut timeline, 1000);
        timeline.schedule_once(5, "x");
        assert_eq!(drain(&mut timeline, 1005), vec![(1005, "x")]);
    }

    #[test]
    fn cancel_all_empties_queue() {
        let mut timeline = Timeline::new();
        timeline.schedule_once(1, "a");
        timeline.schedule_every(1, "b");
        assert_eq!(timeline.cancel_all(), 2);
        assert!(drain(&mut timeline, 100).is_empty());
    }
}
