//! 良率計算（僅單日報表）

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sawmill_core::ProductionRecord;

/// 良率：成品材積佔鋸切原木材積的百分比
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryFigures {
    /// 鋸切原木材積（分母）
    pub input_volume: Decimal,

    /// 長料材積
    pub longs_volume: Decimal,

    /// 短料材積
    pub shorts_volume: Decimal,

    /// 成品總材積
    pub total_volume: Decimal,

    pub longs_recovery: Decimal,
    pub shorts_recovery: Decimal,
    pub total_recovery: Decimal,
}

impl RecoveryFigures {
    /// 以指定函式轉換三個百分比（用於顯示四捨五入）
    pub fn map_percentages(self, f: impl Fn(Decimal) -> Decimal) -> Self {
        Self {
            longs_recovery: f(self.longs_recovery),
            shorts_recovery: f(self.shorts_recovery),
            total_recovery: f(self.total_recovery),
            ..self
        }
    }
}

/// 計算良率
///
/// 長度 ≥ `long_threshold_m` 為長料，其餘為短料。原木材積為 0 時所有百分比為 0。
pub fn compute_recovery(
    finished: &[ProductionRecord],
    cut_log_volume: Decimal,
    long_threshold_m: Decimal,
) -> RecoveryFigures {
    let (longs_volume, shorts_volume) = finished.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(longs, shorts), record| {
            if record.is_long(long_threshold_m) {
                (longs + record.volume, shorts)
            } else {
                (longs, shorts + record.volume)
            }
        },
    );
    let total_volume = longs_volume + shorts_volume;

    RecoveryFigures {
        input_volume: cut_log_volume,
        longs_volume,
        shorts_volume,
        total_volume,
        longs_recovery: percent_of(longs_volume, cut_log_volume),
        shorts_recovery: percent_of(shorts_volume, cut_log_volume),
        total_recovery: percent_of(total_volume, cut_log_volume),
    }
}

/// `part / whole × 100`，分母 ≤ 0 時為 0
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    part / whole * Decimal::ONE_HUNDRED
}
