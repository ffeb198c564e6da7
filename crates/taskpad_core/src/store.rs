use crate::error::AppError;
use crate::model::{Filter, Task, TaskStatus};

/// In-memory ordered collection of tasks plus the active filter.
///
/// The store lives for one session: tasks are appended by `add_task`, never
/// deleted or reordered, and mutated only by `complete_task`.
#[derive(Debug, Default, Clone)]
pub struct TaskListStore {
    tasks: Vec<Task>,
    filter: Filter,
}

impl TaskListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new pending task and returns it.
    ///
    /// Only the exactly-empty title is rejected; whitespace-only titles are
    /// accepted.
    pub fn add_task(&mut self, title: &str) -> Result<Task, AppError> {
        if title.is_empty() {
            return Err(AppError::empty_title());
        }

        let task = Task {
            id: self.tasks.len() as u64 + 1,
            title: title.to_string(),
            status: TaskStatus::Pending,
        };
        self.tasks.push(task.clone());

        Ok(task)
    }

    /// Marks the matching pending task completed.
    ///
    /// Unknown ids and already-completed tasks are silent no-ops; completion
    /// is one-directional and idempotent.
    pub fn complete_task(&mut self, id: u64) {
        for task in &mut self.tasks {
            if task.id == id {
                if task.status == TaskStatus::Pending {
                    task.status = TaskStatus::Completed;
                }
                break;
            }
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived view: the tasks matching the active filter, in insertion
    /// order. Recomputed on every call; nothing is cached.
    pub fn visible_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task.status))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskListStore;
    use crate::model::{Filter, TaskStatus};

    fn seeded_store() -> TaskListStore {
        let mut store = TaskListStore::new();
        store.add_task("Task 1").unwrap();
        store.add_task("Task 2").unwrap();
        store
    }

    #[test]
    fn add_task_appends_pending_task() {
        let mut store = TaskListStore::new();

        let task = store.add_task("demo").unwrap();

        assert_eq!(task.id, 1);
        assert_eq!(task.title, "demo");
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0], task);
    }

    #[test]
    fn add_task_assigns_sequential_ids() {
        let store = seeded_store();

        assert_eq!(store.tasks()[0].id, 1);
        assert_eq!(store.tasks()[1].id, 2);
    }

    #[test]
    fn add_task_rejects_empty_title() {
        let mut store = seeded_store();

        let err = store.add_task("").unwrap_err();

        assert_eq!(err.code(), "validation");
        assert_eq!(err.message(), "empty task title");
        assert_eq!(store.tasks().len(), 2);
    }

    #[test]
    fn add_task_accepts_whitespace_only_title() {
        let mut store = TaskListStore::new();

        let task = store.add_task("   ").unwrap();

        assert_eq!(task.title, "   ");
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn add_task_extends_seeded_collection() {
        let mut store = seeded_store();

        let task = store.add_task("Buy milk").unwrap();

        assert_eq!(store.tasks().len(), 3);
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn complete_task_marks_matching_task() {
        let mut store = seeded_store();

        store.complete_task(2);

        assert_eq!(store.tasks()[0].status, TaskStatus::Pending);
        assert_eq!(store.tasks()[1].status, TaskStatus::Completed);
    }

    #[test]
    fn complete_task_is_idempotent() {
        let mut store = seeded_store();

        store.complete_task(1);
        let once = store.tasks().to_vec();
        store.complete_task(1);

        assert_eq!(store.tasks(), once.as_slice());
    }

    #[test]
    fn complete_task_ignores_unknown_id() {
        let mut store = seeded_store();
        let before = store.tasks().to_vec();

        store.complete_task(99);

        assert_eq!(store.tasks(), before.as_slice());
    }

    #[test]
    fn visible_tasks_defaults_to_full_collection() {
        let store = seeded_store();

        assert_eq!(store.filter(), Filter::All);
        assert_eq!(store.visible_tasks(), store.tasks().to_vec());
    }

    #[test]
    fn visible_tasks_honors_status_filters() {
        let mut store = seeded_store();
        store.complete_task(2);

        store.set_filter(Filter::Completed);
        let completed = store.visible_tasks();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);
        assert_eq!(completed[0].title, "Task 2");
        assert_eq!(completed[0].status, TaskStatus::Completed);

        store.set_filter(Filter::Pending);
        let pending = store.visible_tasks();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, 1);
    }

    #[test]
    fn visible_tasks_preserves_insertion_order() {
        let mut store = TaskListStore::new();
        store.add_task("a").unwrap();
        store.add_task("b").unwrap();
        store.add_task("c").unwrap();
        store.complete_task(1);
        store.complete_task(3);

        store.set_filter(Filter::Completed);
        let ids: Vec<u64> = store.visible_tasks().iter().map(|task| task.id).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn resetting_filter_to_all_restores_full_collection() {
        let mut store = seeded_store();
        store.complete_task(1);

        store.set_filter(Filter::Pending);
        assert_eq!(store.visible_tasks().len(), 1);

        store.set_filter(Filter::All);
        assert_eq!(store.visible_tasks(), store.tasks().to_vec());
    }
}
