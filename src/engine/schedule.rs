use std::time::{Duration, Instant};

/// The timed transitions the engine can have pending. At most one task per
/// purpose exists at a time; scheduling a purpose again replaces its
/// deadline, so a stale timer can never outlive the round it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPurpose {
    /// Auto-advance to a new lyric once a solved round's celebration is over.
    Celebration,
    /// Hide the transient loss taunt.
    ClearLossFeedback,
}

/// Cancelable deadlines keyed by purpose, polled by the engine loop.
#[derive(Debug, Default)]
pub struct TaskQueue {
    pending: Vec<(TaskPurpose, Instant)>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, purpose: TaskPurpose, delay: Duration) {
        self.schedule_at(purpose, Instant::now() + delay);
    }

    pub fn schedule_at(&mut self, purpose: TaskPurpose, deadline: Instant) {
        self.cancel(purpose);
        self.pending.push((purpose, deadline));
    }

    pub fn cancel(&mut self, purpose: TaskPurpose) {
        self.pending.retain(|(p, _)| *p != purpose);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Earliest pending deadline; drives the engine's receive timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, at)| *at).min()
    }

    /// Remove and return every purpose whose deadline has passed, earliest
    /// first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TaskPurpose> {
        let mut due: Vec<(TaskPurpose, Instant)> = Vec::new();
        self.pending.retain(|entry| {
            if entry.1 <= now {
                due.push(*entry);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(_, at)| *at);
        due.into_iter().map(|(purpose, _)| purpose).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduling_replaces_the_same_purpose() {
        let mut tasks = TaskQueue::new();
        let base = Instant::now();
        tasks.schedule_at(TaskPurpose::Celebration, base + Duration::from_secs(1));
        tasks.schedule_at(TaskPurpose::Celebration, base + Duration::from_secs(5));
        assert_eq!(tasks.next_deadline(), Some(base + Duration::from_secs(5)));
        // The replaced deadline must not fire.
        assert!(tasks.take_due(base + Duration::from_secs(2)).is_empty());
    }

    #[test]
    fn take_due_returns_only_ripe_purposes_earliest_first() {
        let mut tasks = TaskQueue::new();
        let base = Instant::now();
        tasks.schedule_at(TaskPurpose::Celebration, base + Duration::from_secs(3));
        tasks.schedule_at(TaskPurpose::ClearLossFeedback, base + Duration::from_secs(1));

        assert_eq!(
            tasks.take_due(base + Duration::from_secs(2)),
            vec![TaskPurpose::ClearLossFeedback]
        );
        assert_eq!(tasks.next_deadline(), Some(base + Duration::from_secs(3)));
        assert_eq!(
            tasks.take_due(base + Duration::from_secs(4)),
            vec![TaskPurpose::Celebration]
        );
        assert_eq!(tasks.next_deadline(), None);
    }

    #[test]
    fn both_ripe_come_back_in_deadline_order() {
        let mut tasks = TaskQueue::new();
        let base = Instant::now();
        tasks.schedule_at(TaskPurpose::Celebration, base + Duration::from_secs(2));
        tasks.schedule_at(TaskPurpose::ClearLossFeedback, base + Duration::from_secs(1));
        assert_eq!(
            tasks.take_due(base + Duration::from_secs(3)),
            vec![TaskPurpose::ClearLossFeedback, TaskPurpose::Celebration]
        );
    }

    #[test]
    fn cancel_all_empties_the_queue() {
        let mut tasks = TaskQueue::new();
        tasks.schedule(TaskPurpose::Celebration, Duration::from_secs(1));
        tasks.schedule(TaskPurpose::ClearLossFeedback, Duration::from_secs(1));
        tasks.cancel_all();
        assert_eq!(tasks.next_deadline(), None);
    }

    #[test]
    fn purposes_cancel_independently() {
        let mut tasks = TaskQueue::new();
        let base = Instant::now();
        tasks.schedule_at(TaskPurpose::Celebration, base + Duration::from_secs(2));
        tasks.schedule_at(TaskPurpose::ClearLossFeedback, base + Duration::from_secs(1));
        tasks.cancel(TaskPurpose::ClearLossFeedback);
        assert_eq!(tasks.next_deadline(), Some(base + Duration::from_secs(2)));
    }
}
