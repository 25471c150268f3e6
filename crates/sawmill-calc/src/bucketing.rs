//! 日期分桶與區間篩選

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use sawmill_core::{BagEntry, LogRecord, ProductionRecord, ReportWindow};

/// 帶日期的記錄
pub trait Dated {
    fn record_date(&self) -> Option<NaiveDate>;
}

impl Dated for ProductionRecord {
    fn record_date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Dated for LogRecord {
    fn record_date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Dated for BagEntry {
    fn record_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

/// 單日合計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub quantity: u64,
    pub volume: Decimal,
}

impl DailyTotals {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            quantity: 0,
            volume: Decimal::ZERO,
        }
    }
}

/// 篩選落在報表區間內的記錄（無日期的記錄不計入）
pub fn within_window<T: Dated + Clone>(items: &[T], window: &ReportWindow) -> Vec<T> {
    items
        .iter()
        .filter(|item| window.contains_opt(item.record_date()))
        .cloned()
        .collect()
}

/// 篩選截至某日（含）的記錄，用於庫存餘額
pub fn up_to<T: Dated + Clone>(items: &[T], end: NaiveDate, include_undated: bool) -> Vec<T> {
    items
        .iter()
        .filter(|item| match item.record_date() {
            Some(date) => date <= end,
            None => include_undated,
        })
        .cloned()
        .collect()
}

/// 依日期分桶加總，區間內每天一桶（無記錄的日子為 0）
pub fn group_by_day(records: &[ProductionRecord], window: &ReportWindow) -> Vec<DailyTotals> {
    let mut buckets: BTreeMap<NaiveDate, DailyTotals> = window
        .iter_days()
        .map(|date| (date, DailyTotals::empty(date)))
        .collect();

    for record in records {
        let Some(date) = record.date else { continue };
        if let Some(bucket) = buckets.get_mut(&date) {
            bucket.quantity += u64::from(record.quantity);
            bucket.volume += record.volume;
        }
    }

    buckets.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawmill_core::PlankDimension;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn record(day: Option<u32>, quantity: u32) -> ProductionRecord {
        let dimension = PlankDimension::new(Decimal::from(50), Decimal::from(100), Decimal::from(4));
        let record = ProductionRecord::new(dimension, quantity);
        match day {
            Some(d) => record.with_date(date(d)),
            None => record,
        }
    }

    #[test]
    fn test_within_window() {
        let records = vec![record(Some(1), 1), record(Some(3), 2), record(None, 4), record(Some(5), 8)];
        let window = ReportWindow::new(date(2), date(5)).unwrap();

        let selected = within_window(&records, &window);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected.iter().map(|r| r.quantity).sum::<u32>(), 10);
    }

    #[test]
    fn test_up_to() {
        let records = vec![record(Some(1), 1), record(Some(3), 2), record(None, 4)];

        assert_eq!(up_to(&records, date(2), true).len(), 2);
        assert_eq!(up_to(&records, date(2), false).len(), 1);
        assert_eq!(up_to(&records, date(3), false).len(), 2);
    }

    #[test]
    fn test_group_by_day() {
        let records = vec![
            record(Some(1), 10),
            record(Some(1), 5),
            record(Some(3), 2),
            record(Some(9), 7),
            record(None, 3),
        ];
        let window = ReportWindow::new(date(1), date(3)).unwrap();

        let days = group_by_day(&records, &window);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, date(1));
        assert_eq!(days[0].quantity, 15);
        assert_eq!(days[0].volume, Decimal::new(3, 1));
        assert_eq!(days[1].quantity, 0);
        assert_eq!(days[1].volume, Decimal::ZERO);
        assert_eq!(days[2].quantity, 2);
    }
}
