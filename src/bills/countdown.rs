//! Due-date countdown
//!
//! Breaks the time left until a due instant into whole days, hours, minutes
//! and seconds, and derives the "due soon" banner flag from a set of them.

use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, for tests and previews
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Time remaining until a due instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Countdown {
    /// `None` once `target` is at or before `now`
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Option<Self> {
        let millis = (target - now).num_milliseconds();
        if millis <= 0 {
            return None;
        }
        Some(Self::from_seconds(millis / 1000))
    }

    fn from_seconds(total: i64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total % SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u8,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + i64::from(self.hours) * SECONDS_PER_HOUR
            + i64::from(self.minutes) * SECONDS_PER_MINUTE
            + i64::from(self.seconds)
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Instant a bill falls due: midnight UTC at the start of its due date
pub fn due_instant(due_date: NaiveDate) -> DateTime<Utc> {
    due_date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Countdowns for every tracked bill at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownBoard {
    remaining: BTreeMap<u32, Option<Countdown>>,
    due_soon: bool,
}

impl CountdownBoard {
    /// Compute countdowns for `(id, due date)` pairs as of `now`
    pub fn compute(
        due_dates: impl IntoIterator<Item = (u32, NaiveDate)>,
        now: DateTime<Utc>,
        due_soon_days: i64,
    ) -> Self {
        let remaining: BTreeMap<u32, Option<Countdown>> = due_dates
            .into_iter()
            .map(|(id, due)| (id, Countdown::between(due_instant(due), now)))
            .collect();
        let due_soon = is_due_soon(remaining.values().copied(), due_soon_days);
        Self { remaining, due_soon }
    }

    /// Remaining time for bill `id`; `None` when overdue or untracked
    pub fn get(&self, id: u32) -> Option<Countdown> {
        self.remaining.get(&id).copied().flatten()
    }

    pub fn is_tracked(&self, id: u32) -> bool {
        self.remaining.contains_key(&id)
    }

    /// At least one bill is still pending and within the threshold
    pub fn is_due_soon(&self) -> bool {
        self.due_soon
    }

    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// True iff any still-running countdown has fewer than `threshold_days` days left
pub fn is_due_soon(countdowns: impl IntoIterator<Item = Option<Countdown>>, threshold_days: i64) -> bool {
    countdowns
        .into_iter()
        .flatten()
        .any(|c| c.days < threshold_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_decomposition() {
        let now = at(2025, 7, 20, 10, 30, 15);
        let target = at(2025, 7, 22, 0, 0, 0);
        let countdown = Countdown::between(target, now).unwrap();

        assert_eq!(
            countdown,
            Countdown { days: 1, hours: 13, minutes: 29, seconds: 45 }
        );
        assert_eq!(countdown.to_string(), "1d 13h 29m 45s");
    }

    #[test]
    fn test_past_or_equal_is_none() {
        let now = at(2025, 7, 22, 0, 0, 0);
        assert_eq!(Countdown::between(now, now), None);
        assert_eq!(Countdown::between(now - Duration::seconds(1), now), None);
    }

    #[test]
    fn test_sub_second_floors_to_zero() {
        let now = at(2025, 7, 22, 0, 0, 0);
        let target = now + Duration::milliseconds(999);
        assert_eq!(
            Countdown::between(target, now),
            Some(Countdown { days: 0, hours: 0, minutes: 0, seconds: 0 })
        );
    }

    #[test]
    fn test_fields_within_modulus_and_reconstruct() {
        let now = at(2025, 1, 1, 0, 0, 0);
        let deltas_ms: [i64; 8] = [
            1_000,
            59_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_500,
            1_000_000_007,
            31_536_000_000,
        ];

        for ms in deltas_ms {
            let target = now + Duration::milliseconds(ms);
            let c = Countdown::between(target, now).unwrap();

            assert!(c.hours < 24, "hours {} for {}ms", c.hours, ms);
            assert!(c.minutes < 60, "minutes {} for {}ms", c.minutes, ms);
            assert!(c.seconds < 60, "seconds {} for {}ms", c.seconds, ms);
            assert_eq!(c.total_seconds(), ms / 1000);
        }
    }

    #[test]
    fn test_due_instant_is_utc_midnight() {
        let due = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
        assert_eq!(due_instant(due), at(2025, 7, 25, 0, 0, 0));
    }

    #[test]
    fn test_due_soon_threshold() {
        let soon = Some(Countdown { days: 1, hours: 23, minutes: 0, seconds: 0 });
        let later = Some(Countdown { days: 2, hours: 0, minutes: 0, seconds: 0 });

        assert!(is_due_soon([later, soon], 2));
        assert!(!is_due_soon([later], 2));
        // overdue bills do not raise the banner
        assert!(!is_due_soon([None, later], 2));
        assert!(!is_due_soon(std::iter::empty(), 2));
    }

    #[test]
    fn test_board_compute() {
        let now = at(2025, 7, 21, 12, 0, 0);
        let board = CountdownBoard::compute(
            [
                (1, NaiveDate::from_ymd_opt(2025, 7, 25).unwrap()),
                (2, NaiveDate::from_ymd_opt(2025, 7, 22).unwrap()),
                (3, NaiveDate::from_ymd_opt(2025, 7, 20).unwrap()),
            ],
            now,
            2,
        );

        assert_eq!(board.len(), 3);
        assert_eq!(board.get(1).map(|c| c.days), Some(3));
        assert_eq!(board.get(2), Some(Countdown { days: 0, hours: 12, minutes: 0, seconds: 0 }));
        assert_eq!(board.get(3), None);
        assert!(board.is_tracked(3));
        assert!(board.is_due_soon());
    }

    #[test]
    fn test_fixed_clock() {
        let instant = at(2025, 7, 1, 8, 0, 0);
        assert_eq!(FixedClock(instant).now(), instant);
    }
}
