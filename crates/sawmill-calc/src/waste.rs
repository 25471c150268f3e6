//! 加工損耗計算
//!
//! 取料 → 指接 → 刨光，材積只減不增。下游材積大於上游時（例如各站登錄時間差）
//! 損耗記為 0，不產生負損耗。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 損耗發生的加工站
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WasteStage {
    /// 取料 → 指接
    Joining,
    /// 指接 → 刨光
    Planing,
}

/// 單站損耗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteFigure {
    pub stage: WasteStage,

    /// 上游材積
    pub upstream_volume: Decimal,

    /// 下游材積
    pub downstream_volume: Decimal,

    /// 損耗 = max(0, 上游 − 下游)
    pub waste: Decimal,
}

impl WasteFigure {
    pub fn new(stage: WasteStage, upstream_volume: Decimal, downstream_volume: Decimal) -> Self {
        Self {
            stage,
            upstream_volume,
            downstream_volume,
            waste: clamped_loss(upstream_volume, downstream_volume),
        }
    }
}

/// 損耗合計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteSummary {
    pub taken_volume: Decimal,
    pub joined_volume: Decimal,
    pub planed_volume: Decimal,
    pub joining_waste: Decimal,
    pub planing_waste: Decimal,
    pub total_waste: Decimal,
}

impl WasteSummary {
    /// 各站損耗明細
    pub fn figures(&self) -> [WasteFigure; 2] {
        [
            WasteFigure::new(WasteStage::Joining, self.taken_volume, self.joined_volume),
            WasteFigure::new(WasteStage::Planing, self.joined_volume, self.planed_volume),
        ]
    }
}

/// 計算各站損耗
pub fn compute_waste(taken_volume: Decimal, joined_volume: Decimal, planed_volume: Decimal) -> WasteSummary {
    let joining_waste = clamped_loss(taken_volume, joined_volume);
    let planing_waste = clamped_loss(joined_volume, planed_volume);

    WasteSummary {
        taken_volume,
        joined_volume,
        planed_volume,
        joining_waste,
        planing_waste,
        total_waste: joining_waste + planing_waste,
    }
}

fn clamped_loss(upstream: Decimal, downstream: Decimal) -> Decimal {
    (upstream - downstream).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[rstest]
    #[case("10.0", "9.0", "7.5", "1.0", "1.5", "2.5")]
    #[case("5.0", "6.0", "6.0", "0", "0", "0")]
    #[case("5.0", "6.0", "4.0", "0", "2.0", "2.0")]
    #[case("0", "0", "0", "0", "0", "0")]
    fn test_compute_waste(
        #[case] taken: &str,
        #[case] joined: &str,
        #[case] planed: &str,
        #[case] joining: &str,
        #[case] planing: &str,
        #[case] total: &str,
    ) {
        let summary = compute_waste(dec(taken), dec(joined), dec(planed));
        assert_eq!(summary.joining_waste, dec(joining));
        assert_eq!(summary.planing_waste, dec(planing));
        assert_eq!(summary.total_waste, dec(total));
    }

    #[test]
    fn test_waste_figures() {
        let summary = compute_waste(dec("10.0"), dec("9.0"), dec("7.5"));
        let [joining, planing] = summary.figures();

        assert_eq!(joining.stage, WasteStage::Joining);
        assert_eq!(joining.upstream_volume, dec("10.0"));
        assert_eq!(joining.downstream_volume, dec("9.0"));
        assert_eq!(joining.waste, dec("1.0"));
        assert_eq!(planing.stage, WasteStage::Planing);
        assert_eq!(planing.waste, dec("1.5"));
    }
}
