//! 板材規格與材積公式

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 計算板材材積（m³）
///
/// `寬(mm)/1000 × 高(mm)/1000 × 長(m) × 數量`
///
/// 無錯誤路徑：欄位缺漏由呼叫端先排除。
pub fn plank_volume(width_mm: Decimal, height_mm: Decimal, length_m: Decimal, quantity: u32) -> Decimal {
    (width_mm / Decimal::ONE_THOUSAND)
        * (height_mm / Decimal::ONE_THOUSAND)
        * length_m
        * Decimal::from(quantity)
}

/// 板材規格（寬 × 高 × 長），作為庫存鍵值
///
/// 以數值精確比較：`38` 與 `38.0` 視為同一規格，不做容差。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlankDimension {
    /// 寬度（mm）
    pub width_mm: Decimal,

    /// 高度（mm）
    pub height_mm: Decimal,

    /// 長度（m）
    pub length_m: Decimal,
}

impl PlankDimension {
    /// 創建新的板材規格
    pub fn new(width_mm: Decimal, height_mm: Decimal, length_m: Decimal) -> Self {
        Self {
            width_mm: width_mm.normalize(),
            height_mm: height_mm.normalize(),
            length_m: length_m.normalize(),
        }
    }

    /// 計算 N 片此規格板材的材積
    pub fn volume(&self, quantity: u32) -> Decimal {
        plank_volume(self.width_mm, self.height_mm, self.length_m, quantity)
    }

    /// 檢查是否為長料（長度 ≥ 門檻）
    pub fn is_long(&self, threshold_m: Decimal) -> bool {
        self.length_m >= threshold_m
    }
}

impl fmt::Display for PlankDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width_mm, self.height_mm, self.length_m)
    }
}
