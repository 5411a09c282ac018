//! Sample Data
//!
//! Each page starts from its own embedded JSON dataset. The bills page and
//! the summary page carry separate copies of the bill list; nothing keeps
//! them in sync.

use std::collections::BTreeMap;
use thiserror::Error;

use crate::bills::BillTracker;
use crate::grocery::GroceryLedger;
use crate::records::{Bill, GroceryItem, Task};
use crate::summary::SummaryData;
use crate::tasks::TaskBoard;

const TASKS_JSON: &str = include_str!("data/tasks.json");
const BILLS_JSON: &str = include_str!("data/bills.json");
const GROCERY_JSON: &str = include_str!("data/grocery.json");
const SUMMARY_JSON: &str = include_str!("data/summary.json");

/// An embedded dataset failed to parse
#[derive(Error, Debug)]
#[error("Failed to parse {dataset} seed data: {source}")]
pub struct SeedError {
    pub dataset: &'static str,
    #[source]
    pub source: serde_json::Error,
}

/// Result type alias for seed loading
pub type SeedResult<T> = Result<T, SeedError>;

fn parse<T: serde::de::DeserializeOwned>(dataset: &'static str, json: &str) -> SeedResult<T> {
    let value = serde_json::from_str(json).map_err(|source| SeedError { dataset, source })?;
    tracing::info!(dataset, "Loaded seed data");
    Ok(value)
}

pub fn task_board() -> SeedResult<TaskBoard> {
    parse::<Vec<Task>>("tasks", TASKS_JSON).map(TaskBoard::new)
}

pub fn bill_tracker() -> SeedResult<BillTracker> {
    parse::<Vec<Bill>>("bills", BILLS_JSON).map(BillTracker::new)
}

pub fn grocery_ledger() -> SeedResult<GroceryLedger> {
    parse::<BTreeMap<String, Vec<GroceryItem>>>("grocery", GROCERY_JSON).map(GroceryLedger::new)
}

pub fn summary_data() -> SeedResult<SummaryData> {
    parse("summary", SUMMARY_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::TaskStatus;
    use crate::summary::StatusCounts;
    use rust_decimal::Decimal;

    #[test]
    fn test_task_seed() {
        let board = task_board().unwrap();
        assert_eq!(board.len(), 5);
        assert_eq!(board.get(2).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn test_bill_seed() {
        let tracker = bill_tracker().unwrap();
        assert_eq!(tracker.len(), 3);
        assert_eq!(tracker.get(3).unwrap().amount, Decimal::from(999));
    }

    #[test]
    fn test_grocery_seed() {
        let ledger = grocery_ledger().unwrap();
        assert_eq!(
            ledger.categories().collect::<Vec<_>>(),
            vec!["Dairy", "Grains", "Vegetables"]
        );
        assert_eq!(ledger.total_items(), 6);
        assert_eq!(ledger.next_id(), Ok(7));
        assert_eq!(ledger.items("Grains")[0].purchased, 100);
    }

    #[test]
    fn test_summary_seed_is_independent() {
        let summary = summary_data().unwrap();
        let mut tracker = bill_tracker().unwrap();

        assert_eq!(summary.total_bills(), Decimal::from(2499));
        assert_eq!(summary.task_counts(), StatusCounts { pending: 2, completed: 2 });
        assert_eq!(summary.grocery_stats.len(), 6);

        tracker.delete(1);
        assert_eq!(summary.bills.len(), 3);
    }

    #[test]
    fn test_seed_error_display() {
        let err = parse::<Vec<Task>>("tasks", "not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse tasks seed data"));
    }
}
