//! Task Board
//!
//! Owns the task list behind the calendar page: add, edit, delete and
//! the status/date filtered views used by the month grid and the day panel.

pub mod calendar;

pub use calendar::{month_grid, CalendarCell, CalendarError, CalendarMonth, StatusFilter};

use chrono::NaiveDate;

use crate::records::{Collection, OrganizerResult, Task, TaskDraft};

/// Tasks for the calendar page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    tasks: Collection<Task>,
}

impl TaskBoard {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Collection::new(tasks),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.items()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.tasks.revision()
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Validate and append a new task, returning its id
    pub fn add(&mut self, draft: &TaskDraft) -> OrganizerResult<u32> {
        let task = draft.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected new task");
            e
        })?;
        let id = self.tasks.insert(task)?;
        tracing::debug!(id, "Added task");
        Ok(id)
    }

    /// Overwrite the task with `id`; `Ok(false)` if no such task
    pub fn edit(&mut self, id: u32, draft: &TaskDraft) -> OrganizerResult<bool> {
        let updated = draft.validate().map_err(|e| {
            tracing::warn!(id, error = %e, "Rejected task edit");
            e
        })?;
        let replaced = self.tasks.replace(id, |task| *task = updated);
        if replaced {
            tracing::debug!(id, "Edited task");
        }
        Ok(replaced)
    }

    /// Remove the task with `id`; absent ids are a no-op
    pub fn delete(&mut self, id: u32) -> Option<Task> {
        let removed = self.tasks.remove(id);
        if removed.is_some() {
            tracing::debug!(id, "Deleted task");
        }
        removed
    }

    /// Tasks on `date` that pass `filter`, in insertion order
    pub fn tasks_on(&self, date: NaiveDate, filter: StatusFilter) -> Vec<&Task> {
        self.tasks
            .items()
            .iter()
            .filter(|t| t.date == date && filter.matches(t))
            .collect()
    }

    /// Month grid for `month` with tasks filtered by `filter`
    pub fn calendar(&self, month: CalendarMonth, filter: StatusFilter) -> Vec<CalendarCell> {
        month.cells(self.tasks.items(), filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{OrganizerError, TaskStatus, ValidationError};

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    fn board() -> TaskBoard {
        TaskBoard::new(vec![
            Task { id: 1, title: "Pay Rent".into(), date: date(3), status: TaskStatus::Pending },
            Task { id: 2, title: "Call Electrician".into(), date: date(7), status: TaskStatus::Completed },
            Task { id: 3, title: "Buy Groceries".into(), date: date(7), status: TaskStatus::Pending },
        ])
    }

    fn draft(title: &str, date: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            date: date.to_string(),
            status: TaskStatus::Pending,
        }
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut board = board();
        let id = board.add(&draft("Doctor Appointment", "2025-07-15")).unwrap();

        assert_eq!(id, 4);
        assert_eq!(board.len(), 4);
        assert_eq!(board.get(4).unwrap().title, "Doctor Appointment");
    }

    #[test]
    fn test_add_to_empty_board() {
        let mut board = TaskBoard::default();
        assert_eq!(board.add(&draft("First", "2025-07-01")).unwrap(), 1);
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let mut board = board();
        let before = board.clone();

        let err = board.add(&draft("", "2025-07-15")).unwrap_err();
        assert_eq!(err, OrganizerError::Validation(ValidationError::MissingField("Title")));
        assert_eq!(board, before);
    }

    #[test]
    fn test_edit_existing() {
        let mut board = board();
        let mut edit = draft("Pay Rent (late)", "2025-07-04");
        edit.status = TaskStatus::Completed;

        assert!(board.edit(1, &edit).unwrap());
        let task = board.get(1).unwrap();
        assert_eq!(task.title, "Pay Rent (late)");
        assert_eq!(task.date, date(4));
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn test_edit_missing_is_noop() {
        let mut board = board();
        let before = board.clone();

        assert!(!board.edit(42, &draft("Ghost", "2025-07-01")).unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn test_delete_task() {
        let mut board = board();

        assert_eq!(board.delete(2).map(|t| t.title), Some("Call Electrician".to_string()));
        assert_eq!(board.len(), 2);
        assert!(board.get(2).is_none());
        assert_eq!(board.tasks_on(date(7), StatusFilter::All).len(), 1);

        let revision = board.revision();
        assert!(board.delete(2).is_none());
        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn test_add_after_deleting_top_id_reuses_it() {
        let mut board = board();
        board.delete(3);

        assert_eq!(board.add(&draft("Dentist", "2025-07-20")).unwrap(), 3);
        assert_eq!(board.add(&draft("Gym", "2025-07-21")).unwrap(), 4);
    }

    #[test]
    fn test_add_at_max_id_fails() {
        let mut board = TaskBoard::new(vec![Task {
            id: u32::MAX,
            title: "Last".into(),
            date: date(1),
            status: TaskStatus::Pending,
        }]);
        let before = board.clone();

        assert_eq!(
            board.add(&draft("Overflow", "2025-07-02")),
            Err(OrganizerError::IdSpaceExhausted)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_tasks_on_filters() {
        let board = board();

        assert_eq!(board.tasks_on(date(7), StatusFilter::All).len(), 2);
        let completed = board.tasks_on(date(7), StatusFilter::Completed);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, 2);
        assert!(board.tasks_on(date(8), StatusFilter::All).is_empty());
    }

    #[test]
    fn test_calendar_uses_board_tasks() {
        let board = board();
        let month = CalendarMonth::new(2025, 6).unwrap();
        let cells = board.calendar(month, StatusFilter::Pending);

        let total: usize = cells.iter().map(|c| c.tasks().len()).sum();
        assert_eq!(total, 2);
    }
}
