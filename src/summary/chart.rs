//! Chart series
//!
//! Turns bills and category counts into labelled series and lays a series
//! out as pie slices. Angles are radians, clockwise from 12 o'clock.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use crate::records::{Bill, CategoryCount};

/// One labelled value in a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Geometry for one pie wedge
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the whole, 0.0-1.0
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Bill name → amount
pub fn bill_series<'a>(bills: impl IntoIterator<Item = &'a Bill>) -> Vec<SeriesPoint> {
    bills
        .into_iter()
        .map(|bill| SeriesPoint {
            label: bill.name.clone(),
            value: bill.amount.to_f64().unwrap_or(0.0),
        })
        .collect()
}

/// Category → item count
pub fn category_series<'a>(counts: impl IntoIterator<Item = &'a CategoryCount>) -> Vec<SeriesPoint> {
    counts
        .into_iter()
        .map(|c| SeriesPoint {
            label: c.category.clone(),
            value: c.count as f64,
        })
        .collect()
}

/// Lay out `series` as consecutive wedges starting at 12 o'clock.
///
/// Non-positive values get an empty wedge. An all-zero series yields
/// zero-width slices.
pub fn pie_slices(series: &[SeriesPoint]) -> Vec<PieSlice> {
    let total: f64 = series.iter().map(|p| p.value.max(0.0)).sum();
    let mut angle = -FRAC_PI_2;

    series
        .iter()
        .map(|point| {
            let fraction = if total > 0.0 {
                point.value.max(0.0) / total
            } else {
                0.0
            };
            let start_angle = angle;
            angle += fraction * TAU;
            PieSlice {
                label: point.label.clone(),
                value: point.value,
                fraction,
                start_angle,
                end_angle: angle,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn point(label: &str, value: f64) -> SeriesPoint {
        SeriesPoint {
            label: label.to_string(),
            value,
        }
    }

    #[test]
    fn test_bill_series() {
        let bills = vec![Bill {
            id: 1,
            name: "Electricity".to_string(),
            amount: "1200.75".parse::<Decimal>().unwrap(),
            due_date: NaiveDate::from_ymd_opt(2025, 7, 25).unwrap(),
        }];
        assert_eq!(bill_series(&bills), vec![point("Electricity", 1200.75)]);
    }

    #[test]
    fn test_category_series() {
        let counts = vec![
            CategoryCount { category: "Fruits".to_string(), count: 5 },
            CategoryCount { category: "Meat".to_string(), count: 2 },
        ];
        assert_eq!(
            category_series(&counts),
            vec![point("Fruits", 5.0), point("Meat", 2.0)]
        );
    }

    #[test]
    fn test_pie_slices_cover_circle() {
        let slices = pie_slices(&[point("a", 1.0), point("b", 1.0), point("c", 2.0)]);

        assert_eq!(slices.len(), 3);
        assert!((slices[0].fraction - 0.25).abs() < 1e-9);
        assert!((slices[2].fraction - 0.5).abs() < 1e-9);
        assert!((slices[0].start_angle + FRAC_PI_2).abs() < 1e-9);
        assert!((slices[1].start_angle - slices[0].end_angle).abs() < 1e-9);

        let sweep = slices[2].end_angle - slices[0].start_angle;
        assert!((sweep - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_pie_slices_zero_total() {
        let slices = pie_slices(&[point("a", 0.0), point("b", 0.0)]);
        assert!(slices.iter().all(|s| s.fraction == 0.0));
        assert!(slices.iter().all(|s| s.start_angle == s.end_angle));
    }
}
