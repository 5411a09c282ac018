//! Summary reductions
//!
//! Side-effect-free folds over bills, tasks and grocery stats.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::{Bill, TaskStatus};

/// Sum of every bill amount
pub fn total_amount<'a>(bills: impl IntoIterator<Item = &'a Bill>) -> Decimal {
    bills.into_iter().map(|bill| bill.amount).sum()
}

/// Task counts grouped by status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn from_statuses(statuses: impl IntoIterator<Item = TaskStatus>) -> Self {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                match status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    pub fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.completed
    }
}

/// Format an amount with thousands separators, e.g. `৳2,499` or `৳1,234.5`
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if normalized.is_sign_negative() && !normalized.is_zero() { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{}{}{}.{}", sign, symbol, grouped, fraction),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bill(id: u32, amount: i64) -> Bill {
        Bill {
            id,
            name: format!("bill {}", id),
            amount: Decimal::from(amount),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
        }
    }

    #[test]
    fn test_total_amount() {
        let bills = vec![bill(1, 1200), bill(2, 300), bill(3, 999)];
        assert_eq!(total_amount(&bills), Decimal::from(2499));
        assert_eq!(total_amount(&Vec::<Bill>::new()), Decimal::ZERO);
    }

    #[test]
    fn test_status_counts() {
        let counts = StatusCounts::from_statuses([
            TaskStatus::Pending,
            TaskStatus::Completed,
            TaskStatus::Pending,
            TaskStatus::Completed,
        ]);

        assert_eq!(counts, StatusCounts { pending: 2, completed: 2 });
        assert_eq!(counts.get(TaskStatus::Pending), 2);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from(2499), "৳"), "৳2,499");
        assert_eq!(format_amount(Decimal::from(300), "৳"), "৳300");
        assert_eq!(format_amount(Decimal::from(1_234_567), "$"), "$1,234,567");
        assert_eq!(format_amount("1234.50".parse().unwrap(), "৳"), "৳1,234.5");
        assert_eq!(format_amount(Decimal::from(-1500), "৳"), "-৳1,500");
        assert_eq!(format_amount(Decimal::ZERO, "৳"), "৳0");
    }
}
