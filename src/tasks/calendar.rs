//! Month calendar derivation
//!
//! Lays a month out as a Sunday-first grid: leading placeholders for the
//! weekdays before the 1st, then one cell per day.

use chrono::{Datelike, Months, NaiveDate};
use thiserror::Error;

use crate::records::{Task, TaskStatus};

/// Errors from calendar derivation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// Zero-based month outside 0..=11
    #[error("Invalid month index {0}, expected 0-11")]
    InvalidMonth(u32),

    /// Year outside the range chrono can represent
    #[error("Year {0} is out of range")]
    InvalidYear(i32),
}

/// Which task statuses a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub fn all() -> &'static [StatusFilter] {
        &[StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => task.status == TaskStatus::Pending,
            StatusFilter::Completed => task.status == TaskStatus::Completed,
        }
    }
}

/// One cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month
    Placeholder,
    /// A calendar day and the tasks scheduled on it
    Day { date: NaiveDate, tasks: Vec<Task> },
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Placeholder => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        match self {
            CalendarCell::Placeholder => &[],
            CalendarCell::Day { tasks, .. } => tasks,
        }
    }
}

/// A displayed month, with a zero-based month index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        let first =
            NaiveDate::from_ymd_opt(year, month0 + 1, 1).ok_or(CalendarError::InvalidYear(year))?;
        Ok(Self { first })
    }

    /// Month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month0(&self) -> u32 {
        self.first.month0()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map_or(31, |last| last.day())
    }

    /// "July 2025"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn previous(&self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    pub fn next(&self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(*self, |first| Self { first })
    }

    /// Placeholders for the weekdays before the 1st, then every day in order
    pub fn cells(&self, tasks: &[Task], filter: StatusFilter) -> Vec<CalendarCell> {
        let first = self.first;
        let leading = first.weekday().num_days_from_sunday() as usize;

        let mut cells = Vec::with_capacity(leading + self.days_in_month() as usize);
        cells.extend(std::iter::repeat(CalendarCell::Placeholder).take(leading));
        cells.extend(first.iter_days().take(self.days_in_month() as usize).map(|date| {
            CalendarCell::Day {
                date,
                tasks: tasks
                    .iter()
                    .filter(|t| t.date == date && filter.matches(t))
                    .cloned()
                    .collect(),
            }
        }));
        cells
    }
}

/// Grid for a year and zero-based month
pub fn month_grid(
    year: i32,
    month0: u32,
    tasks: &[Task],
    filter: StatusFilter,
) -> Result<Vec<CalendarCell>, CalendarError> {
    Ok(CalendarMonth::new(year, month0)?.cells(tasks, filter))
}
