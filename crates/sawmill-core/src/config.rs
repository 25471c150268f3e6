//! 核算配置模型

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{Result, SawmillError};

/// 產量/損耗核算參數
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountingConfig {
    /// 長料門檻（m），長度 ≥ 此值計為長料
    pub long_plank_threshold_m: Decimal,

    /// 最近材積搜尋回傳筆數
    pub nearest_match_limit: usize,

    /// 報表百分比顯示小數位數（None 表示不四捨五入）
    pub percent_decimal_places: Option<u32>,

    /// 庫存餘額是否計入無日期的記錄
    pub include_undated_in_stock: bool,
}

impl Default for AccountingConfig {
    fn default() -> Self {
        Self {
            long_plank_threshold_m: Decimal::from(6),
            nearest_match_limit: 10,
            percent_decimal_places: None,
            include_undated_in_stock: true,
        }
    }
}

impl AccountingConfig {
    /// 創建預設配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 由 JSON 載入配置（缺漏欄位使用預設值）
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置長料門檻
    pub fn with_long_plank_threshold(mut self, threshold_m: Decimal) -> Self {
        self.long_plank_threshold_m = threshold_m;
        self
    }

    /// 建構器模式：設置最近材積搜尋筆數
    pub fn with_nearest_match_limit(mut self, limit: usize) -> Self {
        self.nearest_match_limit = limit;
        self
    }

    /// 建構器模式：設置百分比小數位數
    pub fn with_percent_decimal_places(mut self, places: u32) -> Self {
        self.percent_decimal_places = Some(places);
        self
    }

    /// 建構器模式：設置是否計入無日期記錄
    pub fn with_include_undated_in_stock(mut self, include: bool) -> Self {
        self.include_undated_in_stock = include;
        self
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.long_plank_threshold_m <= Decimal::ZERO {
            return Err(SawmillError::InvalidConfig(format!(
                "長料門檻必須大於 0: {}",
                self.long_plank_threshold_m
            )));
        }
        if self.nearest_match_limit == 0 {
            return Err(SawmillError::InvalidConfig(
                "最近材積搜尋筆數必須大於 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 依配置四捨五入百分比
    pub fn round_percent(&self, percent: Decimal) -> Decimal {
        match self.percent_decimal_places {
            Some(places) => {
                percent.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
            }
            None => percent,
        }
    }
}
