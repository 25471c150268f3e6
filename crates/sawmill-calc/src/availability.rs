//! 可用庫存計算
//!
//! 可用量 = 產出 − 耗用，依庫存鍵值分組，負值截斷為 0。
//! 僅輸出至少有一筆產出的鍵值；只出現在耗用端的鍵值由 [`audit_consumption`] 回報。

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use sawmill_core::{AvailabilityBalance, StockItem};

/// 單一鍵值的數量/材積合計
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    quantity: u64,
    volume: Decimal,
}

impl Totals {
    fn add<T: StockItem>(&mut self, item: &T) {
        self.quantity += item.quantity();
        self.volume += item.volume();
    }
}

fn totals_by_key<T: StockItem>(items: &[T]) -> BTreeMap<T::Key, Totals> {
    let mut grouped: BTreeMap<T::Key, Totals> = BTreeMap::new();
    for item in items {
        grouped.entry(item.stock_key()).or_default().add(item);
    }
    grouped
}

/// 計算可用庫存餘額
///
/// 結果依鍵值排序，與輸入順序無關；重複輸入不去重。
pub fn compute_availability<T: StockItem>(
    produced: &[T],
    consumed: &[T],
) -> Vec<AvailabilityBalance<T::Key>> {
    let produced_totals = totals_by_key(produced);
    let consumed_totals = totals_by_key(consumed);

    produced_totals
        .into_iter()
        .map(|(key, made)| {
            let used = consumed_totals.get(&key).copied().unwrap_or_default();
            AvailabilityBalance::new(key, made.quantity, used.quantity, made.volume, used.volume)
        })
        .collect()
}

/// 篩選仍可領用的餘額（可用片數 > 0）
pub fn drawable<K: Clone>(balances: &[AvailabilityBalance<K>]) -> Vec<AvailabilityBalance<K>> {
    balances.iter().filter(|b| b.is_drawable()).cloned().collect()
}

/// 耗用異常
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StockAnomaly<K> {
    /// 耗用超過產出（餘額已截斷為 0）
    OverConsumed {
        key: K,
        produced_quantity: u64,
        consumed_quantity: u64,
        excess_volume: Decimal,
    },
    /// 有耗用但從未產出（不列入餘額）
    ConsumedWithoutProduction {
        key: K,
        consumed_quantity: u64,
        consumed_volume: Decimal,
    },
}

impl<K: fmt::Display> fmt::Display for StockAnomaly<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockAnomaly::OverConsumed {
                key,
                produced_quantity,
                consumed_quantity,
                ..
            } => write!(
                f,
                "{}: 耗用 {} 片超過產出 {} 片",
                key, consumed_quantity, produced_quantity
            ),
            StockAnomaly::ConsumedWithoutProduction {
                key,
                consumed_quantity,
                ..
            } => write!(f, "{}: 耗用 {} 片但無產出記錄", key, consumed_quantity),
        }
    }
}

/// 檢查耗用異常（僅回報，不影響餘額計算）
pub fn audit_consumption<T: StockItem>(produced: &[T], consumed: &[T]) -> Vec<StockAnomaly<T::Key>> {
    let produced_totals = totals_by_key(produced);
    let consumed_totals = totals_by_key(consumed);

    let mut anomalies = Vec::new();
    for (key, used) in consumed_totals {
        let Some(made) = produced_totals.get(&key) else {
            anomalies.push(StockAnomaly::ConsumedWithoutProduction {
                key,
                consumed_quantity: used.quantity,
                consumed_volume: used.volume,
            });
            continue;
        };

        let balance =
            AvailabilityBalance::new(key, made.quantity, used.quantity, made.volume, used.volume);
        if balance.is_over_consumed() {
            anomalies.push(StockAnomaly::OverConsumed {
                key: balance.dimension,
                produced_quantity: balance.produced_quantity,
                consumed_quantity: balance.consumed_quantity,
                excess_volume: (balance.consumed_volume - balance.produced_volume).max(Decimal::ZERO),
            });
        }
    }
    anomalies
}

#[cfg(test)]
mod tests {
    use super::*;
    use sawmill_core::{PlankDimension, ProductionRecord};

    fn dim(w: i64, h: i64, l_dm: i64) -> PlankDimension {
        PlankDimension::new(Decimal::from(w), Decimal::from(h), Decimal::new(l_dm, 1))
    }

    fn record(dimension: PlankDimension, quantity: u32, volume: Decimal) -> ProductionRecord {
        ProductionRecord::new(dimension, quantity).with_volume(volume)
    }

    #[test]
    fn test_availability_simple() {
        let a = dim(50, 100, 40);
        let produced = vec![
            record(a, 10, Decimal::new(20, 2)),
            record(a, 5, Decimal::new(10, 2)),
        ];
        let consumed = vec![record(a, 6, Decimal::new(12, 2))];

        let balances = compute_availability(&produced, &consumed);

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].dimension, a);
        assert_eq!(balances[0].produced_quantity, 15);
        assert_eq!(balances[0].consumed_quantity, 6);
        assert_eq!(balances[0].available_quantity, 9);
        assert_eq!(balances[0].available_volume, Decimal::new(18, 2));
    }

    #[test]
    fn test_over_consumption_clamps_to_zero() {
        let a = dim(38, 38, 30);
        let produced = vec![record(a, 10, Decimal::ONE)];
        let consumed = vec![record(a, 12, Decimal::new(12, 1))];

        let balances = compute_availability(&produced, &consumed);

        assert_eq!(balances[0].available_quantity, 0);
        assert_eq!(balances[0].available_volume, Decimal::ZERO);
        assert!(drawable(&balances).is_empty());
    }

    #[test]
    fn test_consumption_only_keys_are_not_emitted() {
        let a = dim(50, 50, 40);
        let b = dim(25, 100, 30);
        let produced = vec![record(a, 4, Decimal::new(4, 2))];
        let consumed = vec![record(b, 3, Decimal::new(2, 2))];

        let balances = compute_availability(&produced, &consumed);

        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].dimension, a);
        assert_eq!(balances[0].available_quantity, 4);
    }

    #[test]
    fn test_output_sorted_by_dimension() {
        let small = dim(25, 50, 30);
        let large = dim(50, 100, 60);
        let produced = vec![
            record(large, 1, Decimal::ONE),
            record(small, 1, Decimal::ONE),
        ];

        let balances = compute_availability(&produced, &[]);

        assert_eq!(balances[0].dimension, small);
        assert_eq!(balances[1].dimension, large);
    }

    #[test]
    fn test_drawable_filters_empty() {
        let a = dim(50, 50, 40);
        let b = dim(50, 50, 50);
        let produced = vec![record(a, 2, Decimal::ONE), record(b, 2, Decimal::ONE)];
        let consumed = vec![record(a, 2, Decimal::ONE)];

        let balances = compute_availability(&produced, &consumed);
        let open = drawable(&balances);

        assert_eq!(balances.len(), 2);
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].dimension, b);
    }

    #[test]
    fn test_audit_consumption() {
        let a = dim(38, 38, 30);
        let b = dim(50, 50, 40);
        let c = dim(25, 100, 30);
        let produced = vec![record(a, 10, Decimal::ONE), record(c, 5, Decimal::ONE)];
        let consumed = vec![
            record(a, 12, Decimal::new(12, 1)),
            record(b, 3, Decimal::new(3, 1)),
            record(c, 5, Decimal::ONE),
        ];

        let anomalies = audit_consumption(&produced, &consumed);

        assert_eq!(anomalies.len(), 2);
        assert_eq!(
            anomalies[0],
            StockAnomaly::OverConsumed {
                key: a,
                produced_quantity: 10,
                consumed_quantity: 12,
                excess_volume: Decimal::new(2, 1),
            }
        );
        assert_eq!(
            anomalies[1],
            StockAnomaly::ConsumedWithoutProduction {
                key: b,
                consumed_quantity: 3,
                consumed_volume: Decimal::new(3, 1),
            }
        );
        assert!(anomalies[1].to_string().contains("無產出記錄"));
    }
}
