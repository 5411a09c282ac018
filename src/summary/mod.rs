//! Summary View
//!
//! Read-only roll-up shown on the summary page. The page keeps its own
//! dataset (`SummaryData`), seeded independently of the bills and grocery
//! pages; the reductions also work on the live page collections.

pub mod aggregate;
pub mod chart;

pub use aggregate::{format_amount, total_amount, StatusCounts};
pub use chart::{bill_series, category_series, pie_slices, PieSlice, SeriesPoint};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::{Bill, CategoryCount, TaskSnapshot};

/// The summary page's own bills, tasks and grocery stats
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    pub bills: Vec<Bill>,
    pub tasks: Vec<TaskSnapshot>,
    pub grocery_stats: Vec<CategoryCount>,
}

impl SummaryData {
    pub fn total_bills(&self) -> Decimal {
        total_amount(&self.bills)
    }

    pub fn task_counts(&self) -> StatusCounts {
        StatusCounts::from_statuses(self.tasks.iter().map(|t| t.status))
    }

    pub fn bill_slices(&self) -> Vec<PieSlice> {
        pie_slices(&bill_series(&self.bills))
    }

    pub fn grocery_slices(&self) -> Vec<PieSlice> {
        pie_slices(&category_series(&self.grocery_stats))
    }
}
