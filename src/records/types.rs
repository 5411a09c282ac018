//! Core record types
//!
//! - `Task`: a dated to-do with a completion status
//! - `Bill`: a payable amount with a due date
//! - `GroceryItem`: a shopping-list entry owned by a category
//! - `TaskSnapshot` and `CategoryCount`: the summary page's own dataset

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::collection::Record;

/// Completion state of a task
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn all() -> &'static [TaskStatus] {
        &[TaskStatus::Pending, TaskStatus::Completed]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(TaskStatus::Pending),
            "Completed" => Ok(TaskStatus::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

/// A dated task on the calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub status: TaskStatus,
}

impl Record for Task {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// A recurring payment with a due date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bill {
    pub id: u32,
    pub name: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

impl Record for Bill {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// An entry on the shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryItem {
    pub id: u32,
    pub name: String,
    /// Free-form amount, e.g. "2 Liters" or "500g"
    pub quantity: String,
    pub buyer: String,
    pub price: Decimal,
    /// How much of the item has been bought, 0-100
    pub purchased: u8,
}

impl Record for GroceryItem {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }
}

/// Undated task as kept by the summary page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub id: u32,
    pub title: String,
    pub status: TaskStatus,
}

/// Number of items in one grocery category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!("Pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!("Completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("Done".parse::<TaskStatus>().is_err());
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn test_bill_deserialization() {
        let json = r#"{"id": 1, "name": "Electricity", "amount": 1200, "due_date": "2025-07-25"}"#;
        let bill: Bill = serde_json::from_str(json).unwrap();

        assert_eq!(bill.amount, Decimal::from(1200));
        assert_eq!(bill.due_date, NaiveDate::from_ymd_opt(2025, 7, 25).unwrap());
    }
}
