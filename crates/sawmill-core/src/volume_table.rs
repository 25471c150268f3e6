//! 原木材積表
//!
//! 固定的（長度 × 直徑）→ 單根材積對照表，所有原木材積的唯一依據。
//! 表外的長徑組合不做內插或外推，查詢結果為 `None`。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::logs::LogKey;
use crate::volume_data::{DIAMETERS_CM, LENGTHS_DM, VOLUMES_L};
use crate::{Result, SawmillError};

/// 材積表中的一筆資料
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogVolumeEntry {
    /// 長度（m）
    pub length_m: Decimal,

    /// 直徑（cm）
    pub diameter_cm: Decimal,

    /// 單根材積（m³）
    pub volume: Decimal,
}

/// 材積表資源檔格式（`null` 表示無資料）
#[derive(Debug, Deserialize)]
struct VolumeTableResource {
    lengths: Vec<Decimal>,
    diameters: Vec<Decimal>,
    volumes: Vec<Vec<Option<Decimal>>>,
}

/// 原木材積表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeTable {
    /// 支援的長度（遞增）
    lengths: Vec<Decimal>,

    /// 支援的直徑（遞增）
    diameters: Vec<Decimal>,

    /// `volumes[長度索引][直徑索引]`
    volumes: Vec<Vec<Option<Decimal>>>,
}

impl VolumeTable {
    /// 內建標準材積表
    ///
    /// 長度 2.1 m 至 6.6 m（每 0.3 m），直徑 12 cm 至 60 cm，材積精度 0.001 m³。
    pub fn standard() -> Self {
        Self {
            lengths: LENGTHS_DM.iter().map(|&dm| Decimal::new(dm, 1)).collect(),
            diameters: DIAMETERS_CM.iter().map(|&cm| Decimal::from(cm)).collect(),
            volumes: VOLUMES_L
                .iter()
                .map(|row| row.iter().map(|&l| Some(Decimal::new(l, 3))).collect())
                .collect(),
        }
    }

    /// 由軸與材積矩陣建立材積表（會驗證形狀與順序）
    pub fn new(
        lengths: Vec<Decimal>,
        diameters: Vec<Decimal>,
        volumes: Vec<Vec<Option<Decimal>>>,
    ) -> Result<Self> {
        check_axis("lengths", &lengths)?;
        check_axis("diameters", &diameters)?;

        if volumes.len() != lengths.len() {
            return Err(SawmillError::InvalidVolumeTable(format!(
                "材積列數 {} 與長度數 {} 不符",
                volumes.len(),
                lengths.len()
            )));
        }

        for (row, length) in volumes.iter().zip(&lengths) {
            if row.len() != diameters.len() {
                return Err(SawmillError::InvalidVolumeTable(format!(
                    "長度 {} 的材積欄數 {} 與直徑數 {} 不符",
                    length,
                    row.len(),
                    diameters.len()
                )));
            }
            if let Some(volume) = row.iter().flatten().find(|v| v.is_sign_negative()) {
                return Err(SawmillError::InvalidVolumeTable(format!(
                    "長度 {} 含負材積 {}",
                    length, volume
                )));
            }
        }

        Ok(Self {
            lengths,
            diameters,
            volumes,
        })
    }

    /// 由 JSON 資源檔載入材積表
    ///
    /// 格式：`{"lengths": [...], "diameters": [...], "volumes": [[...], ...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let resource: VolumeTableResource = serde_json::from_str(json)?;
        Self::new(resource.lengths, resource.diameters, resource.volumes)
    }

    /// 查詢單根原木材積
    pub fn lookup(&self, length_m: Decimal, diameter_cm: Decimal) -> Option<Decimal> {
        let li = self.lengths.binary_search(&length_m).ok()?;
        let di = self.diameters.binary_search(&diameter_cm).ok()?;
        self.volumes[li][di]
    }

    /// 以長徑鍵值查詢
    pub fn lookup_key(&self, key: &LogKey) -> Option<Decimal> {
        self.lookup(key.length_m, key.diameter_cm)
    }

    /// 所有支援的長度（遞增）
    pub fn lengths(&self) -> &[Decimal] {
        &self.lengths
    }

    /// 所有支援的直徑（遞增）
    pub fn diameters(&self) -> &[Decimal] {
        &self.diameters
    }

    /// 逐筆列出有資料的項目（長度為外層、直徑為內層）
    pub fn entries(&self) -> impl Iterator<Item = LogVolumeEntry> + '_ {
        self.lengths
            .iter()
            .zip(&self.volumes)
            .flat_map(move |(&length_m, row)| {
                self.diameters
                    .iter()
                    .zip(row)
                    .filter_map(move |(&diameter_cm, volume)| {
                        volume.map(|volume| LogVolumeEntry {
                            length_m,
                            diameter_cm,
                            volume,
                        })
                    })
            })
    }
}

impl Default for VolumeTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn check_axis(name: &str, axis: &[Decimal]) -> Result<()> {
    if axis.is_empty() {
        return Err(SawmillError::InvalidVolumeTable(format!("{} 不可為空", name)));
    }
    if axis.iter().any(|v| *v <= Decimal::ZERO) {
        return Err(SawmillError::InvalidVolumeTable(format!("{} 必須為正數", name)));
    }
    if axis.windows(2).any(|w| w[0] >= w[1]) {
        return Err(SawmillError::InvalidVolumeTable(format!("{} 必須嚴格遞增", name)));
    }
    Ok(())
}
