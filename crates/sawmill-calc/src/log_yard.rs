//! 原木場：進貨/鋸切材積與庫存

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use sawmill_core::{AvailabilityBalance, LogKey, LogRecord, Ramp, StockItem, VolumeTable};

use crate::availability::compute_availability;

/// 已查表的原木記錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasuredLog {
    pub key: LogKey,
    pub quantity: u64,
    pub ramp: Option<Ramp>,

    /// 單根材積；查無資料時為 None
    pub unit_volume: Option<Decimal>,
}

impl MeasuredLog {
    pub fn measure(table: &VolumeTable, record: &LogRecord) -> Self {
        Self {
            key: record.key,
            quantity: u64::from(record.quantity),
            ramp: record.ramp,
            unit_volume: table.lookup_key(&record.key),
        }
    }

    pub fn is_lookup_miss(&self) -> bool {
        self.unit_volume.is_none()
    }
}

impl StockItem for MeasuredLog {
    type Key = LogKey;

    fn stock_key(&self) -> LogKey {
        self.key
    }

    fn quantity(&self) -> u64 {
        self.quantity
    }

    /// 查無資料的長徑不計材積
    fn volume(&self) -> Decimal {
        self.unit_volume
            .map(|v| v * Decimal::from(self.quantity))
            .unwrap_or(Decimal::ZERO)
    }
}

/// 原木合計
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogTotals {
    pub quantity: u64,
    pub volume: Decimal,

    /// 查表失敗的長徑（依序、不重複）
    pub lookup_misses: Vec<LogKey>,
}

/// 各鋸台鋸切合計
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampTotals {
    /// None 表示未指定鋸台
    pub ramp: Option<Ramp>,
    pub quantity: u64,
    pub volume: Decimal,
}

fn measure_all(table: &VolumeTable, logs: &[LogRecord]) -> Vec<MeasuredLog> {
    logs.iter().map(|log| MeasuredLog::measure(table, log)).collect()
}

/// 加總原木根數與材積
pub fn log_totals(table: &VolumeTable, logs: &[LogRecord]) -> LogTotals {
    let mut totals = LogTotals::default();
    for log in measure_all(table, logs) {
        totals.quantity += log.quantity;
        totals.volume += log.volume();
        if log.is_lookup_miss() && !totals.lookup_misses.contains(&log.key) {
            tracing::warn!("材積表查無資料: {}", log.key);
            totals.lookup_misses.push(log.key);
        }
    }
    totals
}

/// 原木場庫存 = 進貨 − 鋸切（依長徑，負值截斷為 0）
pub fn yard_balance(
    table: &VolumeTable,
    intake: &[LogRecord],
    cut: &[LogRecord],
) -> Vec<AvailabilityBalance<LogKey>> {
    compute_availability(&measure_all(table, intake), &measure_all(table, cut))
}

/// 依鋸台加總鋸切量
pub fn cut_by_ramp(table: &VolumeTable, cut: &[LogRecord]) -> Vec<RampTotals> {
    let mut grouped: BTreeMap<Option<Ramp>, (u64, Decimal)> = BTreeMap::new();
    for log in measure_all(table, cut) {
        let entry = grouped.entry(log.ramp).or_insert((0, Decimal::ZERO));
        entry.0 += log.quantity;
        entry.1 += log.volume();
    }

    grouped
        .into_iter()
        .map(|(ramp, (quantity, volume))| RampTotals {
            ramp,
            quantity,
            volume,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn log(length: &str, diameter: &str, quantity: u32) -> LogRecord {
        LogRecord::new(dec(length), dec(diameter), quantity)
    }

    #[test]
    fn test_log_totals_with_lookup_miss() {
        let table = VolumeTable::standard();
        let logs = vec![
            log("3.0", "30", 2),
            log("2.1", "12", 1),
            log("7.5", "30", 4),
            log("7.5", "30", 1),
        ];

        let totals = log_totals(&table, &logs);

        assert_eq!(totals.quantity, 8);
        // 2 × 0.212 + 0.024，未知長徑不計
        assert_eq!(totals.volume, dec("0.448"));
        assert_eq!(totals.lookup_misses, vec![LogKey::new(dec("7.5"), dec("30"))]);
    }

    #[test]
    fn test_yard_balance() {
        let table = VolumeTable::standard();
        let intake = vec![log("3.0", "30", 10), log("4.2", "33", 3)];
        let cut = vec![log("3.0", "30", 4), log("4.2", "33", 5), log("3.3", "20", 1)];

        let balances = yard_balance(&table, &intake, &cut);

        assert_eq!(balances.len(), 2);
        let small = &balances[0];
        assert_eq!(small.dimension, LogKey::new(dec("3.0"), dec("30")));
        assert_eq!(small.available_quantity, 6);
        assert_eq!(small.available_volume, dec("1.272"));
        let big = &balances[1];
        assert_eq!(big.available_quantity, 0);
        assert_eq!(big.available_volume, Decimal::ZERO);
    }

    #[test]
    fn test_cut_by_ramp() {
        let table = VolumeTable::standard();
        let cut = vec![
            log("3.0", "30", 2).with_ramp(Ramp::new(2).unwrap()),
            log("3.0", "30", 1).with_ramp(Ramp::new(1).unwrap()),
            log("3.0", "30", 1).with_ramp(Ramp::new(2).unwrap()),
            log("3.0", "30", 1),
        ];

        let totals = cut_by_ramp(&table, &cut);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].ramp, None);
        assert_eq!(totals[1].ramp, Some(Ramp::new(1).unwrap()));
        assert_eq!(totals[2].ramp, Some(Ramp::new(2).unwrap()));
        assert_eq!(totals[2].quantity, 3);
        assert_eq!(totals[2].volume, dec("0.636"));
    }
}
