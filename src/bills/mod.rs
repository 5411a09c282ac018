//! Bill Tracker
//!
//! Owns the bill list behind the bills page and derives the live countdown
//! board from it. The tracker itself holds no timer; the page ticks it.

pub mod countdown;

pub use countdown::{due_instant, is_due_soon, Clock, Countdown, CountdownBoard, FixedClock, SystemClock};

use chrono::{DateTime, Utc};

use crate::records::{Bill, BillDraft, Collection, OrganizerResult};

/// Bills for the bills page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillTracker {
    bills: Collection<Bill>,
}

impl BillTracker {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: Collection::new(bills),
        }
    }

    /// Bills in insertion order
    pub fn bills(&self) -> &[Bill] {
        self.bills.items()
    }

    pub fn len(&self) -> usize {
        self.bills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bills.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.bills.revision()
    }

    pub fn get(&self, id: u32) -> Option<&Bill> {
        self.bills.get(id)
    }

    /// Bills ordered by due date, earliest first
    pub fn timeline(&self) -> Vec<&Bill> {
        let mut ordered: Vec<&Bill> = self.bills.items().iter().collect();
        ordered.sort_by_key(|bill| bill.due_date);
        ordered
    }

    /// Validate and append a new bill, returning its id
    pub fn add(&mut self, draft: &BillDraft) -> OrganizerResult<u32> {
        let bill = draft.validate().map_err(|e| {
            tracing::warn!(error = %e, "Rejected new bill");
            e
        })?;
        let id = self.bills.insert(bill)?;
        tracing::debug!(id, "Added bill");
        Ok(id)
    }

    /// Overwrite the bill with `id`; `Ok(false)` if no such bill
    pub fn edit(&mut self, id: u32, draft: &BillDraft) -> OrganizerResult<bool> {
        let updated = draft.validate().map_err(|e| {
            tracing::warn!(id, error = %e, "Rejected bill edit");
            e
        })?;
        let replaced = self.bills.replace(id, |bill| *bill = updated);
        if replaced {
            tracing::debug!(id, "Edited bill");
        }
        Ok(replaced)
    }

    /// Remove the bill with `id`; absent ids are a no-op
    pub fn delete(&mut self, id: u32) -> Option<Bill> {
        let removed = self.bills.remove(id);
        if removed.is_some() {
            tracing::debug!(id, "Deleted bill");
        }
        removed
    }

    /// Countdown board for every bill as of `now`
    pub fn tick(&self, now: DateTime<Utc>, due_soon_days: i64) -> CountdownBoard {
        CountdownBoard::compute(
            self.bills.items().iter().map(|bill| (bill.id, bill.due_date)),
            now,
            due_soon_days,
        )
    }

    /// Countdown board using `clock` for the current instant
    pub fn tick_with(&self, clock: &impl Clock, due_soon_days: i64) -> CountdownBoard {
        self.tick(clock.now(), due_soon_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{OrganizerError, ValidationError};
    use chrono::{NaiveDate, TimeZone};
    use rust_decimal::Decimal;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, day).unwrap()
    }

    fn tracker() -> BillTracker {
        BillTracker::new(vec![
            Bill { id: 1, name: "Electricity".into(), amount: Decimal::from(1200), due_date: date(25) },
            Bill { id: 2, name: "Water".into(), amount: Decimal::from(300), due_date: date(22) },
            Bill { id: 3, name: "Internet".into(), amount: Decimal::from(999), due_date: date(30) },
        ])
    }

    fn draft(name: &str, amount: &str, due: &str) -> BillDraft {
        BillDraft {
            name: name.to_string(),
            amount: amount.to_string(),
            due_date: due.to_string(),
        }
    }

    #[test]
    fn test_timeline_sorted_by_due_date() {
        let tracker = tracker();
        let ids: Vec<u32> = tracker.timeline().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        // storage order untouched
        assert_eq!(tracker.bills()[0].id, 1);
    }

    #[test]
    fn test_add_bill() {
        let mut tracker = tracker();
        let id = tracker.add(&draft("Gas", "450.50", "2025-07-28")).unwrap();

        assert_eq!(id, 4);
        assert_eq!(tracker.len(), 4);
        assert_eq!(tracker.get(4).unwrap().amount, "450.50".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut tracker = tracker();
        let before = tracker.clone();

        let err = tracker.add(&draft(" ", "10", "2025-07-28")).unwrap_err();
        assert_eq!(err, OrganizerError::Validation(ValidationError::MissingField("Name")));
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_edit_bill() {
        let mut tracker = tracker();
        assert!(tracker.edit(2, &draft("Water", "320", "2025-07-23")).unwrap());

        let bill = tracker.get(2).unwrap();
        assert_eq!(bill.amount, Decimal::from(320));
        assert_eq!(bill.due_date, date(23));
        assert!(!tracker.edit(9, &draft("Nope", "1", "2025-07-23")).unwrap());
    }

    #[test]
    fn test_delete_bill() {
        let mut tracker = tracker();

        assert_eq!(tracker.delete(2).map(|b| b.name), Some("Water".to_string()));
        assert_eq!(tracker.len(), 2);
        assert!(tracker.get(1).is_some());
        assert!(tracker.get(3).is_some());

        let before = tracker.clone();
        assert!(tracker.delete(2).is_none());
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_tick_due_soon() {
        let tracker = tracker();

        let early = Utc.with_ymd_and_hms(2025, 7, 10, 0, 0, 0).unwrap();
        assert!(!tracker.tick(early, 2).is_due_soon());

        let close = Utc.with_ymd_and_hms(2025, 7, 20, 12, 0, 0).unwrap();
        let board = tracker.tick_with(&FixedClock(close), 2);
        assert!(board.is_due_soon());
        assert_eq!(board.get(2).map(|c| c.days), Some(1));
    }

    #[test]
    fn test_tick_all_overdue() {
        let tracker = tracker();
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        let board = tracker.tick(after, 2);

        assert_eq!(board.len(), 3);
        assert!(tracker.bills().iter().all(|b| board.get(b.id).is_none()));
        assert!(!board.is_due_soon());
    }
}
