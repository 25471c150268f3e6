//! 可用庫存餘額模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dimension::PlankDimension;

/// 可計入庫存的記錄（依鍵值分組加總）
pub trait StockItem {
    /// 庫存鍵值（板材規格或原木長徑）
    type Key: Ord + Clone;

    fn stock_key(&self) -> Self::Key;

    fn quantity(&self) -> u64;

    fn volume(&self) -> Decimal;
}

/// 可用庫存餘額（推導值，不儲存）
///
/// `available = max(0, produced - consumed)`；超量耗用被吸收為 0。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityBalance<K = PlankDimension> {
    /// 庫存鍵值
    pub dimension: K,

    /// 產出片數
    pub produced_quantity: u64,

    /// 耗用片數
    pub consumed_quantity: u64,

    /// 可用片數
    pub available_quantity: u64,

    /// 產出材積
    pub produced_volume: Decimal,

    /// 耗用材積
    pub consumed_volume: Decimal,

    /// 可用材積
    pub available_volume: Decimal,
}

impl<K> AvailabilityBalance<K> {
    /// 由產出與耗用合計建立餘額（歸零截斷）
    pub fn new(
        dimension: K,
        produced_quantity: u64,
        consumed_quantity: u64,
        produced_volume: Decimal,
        consumed_volume: Decimal,
    ) -> Self {
        Self {
            dimension,
            produced_quantity,
            consumed_quantity,
            available_quantity: produced_quantity.saturating_sub(consumed_quantity),
            produced_volume,
            consumed_volume,
            available_volume: (produced_volume - consumed_volume).max(Decimal::ZERO),
        }
    }

    /// 檢查是否仍可領用
    pub fn is_drawable(&self) -> bool {
        self.available_quantity > 0
    }

    /// 檢查耗用是否超過產出
    pub fn is_over_consumed(&self) -> bool {
        self.consumed_quantity > self.produced_quantity || self.consumed_volume > self.produced_volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_available() {
        let balance = AvailabilityBalance::new("A", 10, 4, Decimal::from(5), Decimal::from(2));
        assert_eq!(balance.available_quantity, 6);
        assert_eq!(balance.available_volume, Decimal::from(3));
        assert!(balance.is_drawable());
        assert!(!balance.is_over_consumed());
    }

    #[test]
    fn test_balance_clamps_at_zero() {
        let balance = AvailabilityBalance::new("A", 10, 12, Decimal::ONE, Decimal::new(12, 1));
        assert_eq!(balance.available_quantity, 0);
        assert_eq!(balance.available_volume, Decimal::ZERO);
        assert!(!balance.is_drawable());
        assert!(balance.is_over_consumed());
    }
}
