//! 最近材積長徑搜尋

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sawmill_core::{Result, SawmillError, VolumeTable};

use crate::recovery::percent_of;

/// 搜尋結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionMatch {
    pub length_m: Decimal,
    pub diameter_cm: Decimal,
    pub volume: Decimal,

    /// |材積 − 目標|
    pub difference: Decimal,

    /// 差異百分比（相對目標）
    pub percent_difference: Decimal,
}

/// 找出材積最接近目標值的前 `limit` 組長徑
///
/// 走訪整個材積表（長度外層、直徑內層），依絕對差遞增穩定排序；
/// 差值相同時保留走訪順序。
pub fn nearest_dimensions(
    table: &VolumeTable,
    target_volume: Decimal,
    limit: usize,
) -> Result<Vec<DimensionMatch>> {
    if target_volume <= Decimal::ZERO {
        return Err(SawmillError::InvalidTargetVolume(target_volume));
    }

    let mut matches: Vec<DimensionMatch> = table
        .entries()
        .map(|entry| {
            let difference = (entry.volume - target_volume).abs();
            DimensionMatch {
                length_m: entry.length_m,
                diameter_cm: entry.diameter_cm,
                volume: entry.volume,
                difference,
                percent_difference: percent_of(difference, target_volume),
            }
        })
        .collect();

    // sort_by 為穩定排序
    matches.sort_by(|a, b| a.difference.cmp(&b.difference));
    matches.truncate(limit);

    tracing::debug!(
        "最近材積搜尋: 目標 {} m³，回傳 {} 筆",
        target_volume,
        matches.len()
    );

    Ok(matches)
}
