//! 原木進貨與鋸切記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::cell::{cell, count};
use crate::record::{positive, RowDefect};
use crate::{Result, SawmillError};

/// 鋸台編號（1-3）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Ramp(u8);

impl Ramp {
    pub const ALL: [Ramp; 3] = [Ramp(1), Ramp(2), Ramp(3)];

    /// 創建鋸台編號
    pub fn new(number: u8) -> Result<Self> {
        if (1..=3).contains(&number) {
            Ok(Self(number))
        } else {
            Err(SawmillError::InvalidRamp(number))
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Ramp {
    type Error = SawmillError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl From<Ramp> for u8 {
    fn from(ramp: Ramp) -> u8 {
        ramp.0
    }
}

impl fmt::Display for Ramp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ramp {}", self.0)
    }
}

/// 原木長徑鍵值（材積表查詢鍵）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogKey {
    /// 長度（m）
    pub length_m: Decimal,

    /// 直徑（cm）
    pub diameter_cm: Decimal,
}

impl LogKey {
    pub fn new(length_m: Decimal, diameter_cm: Decimal) -> Self {
        Self {
            length_m: length_m.normalize(),
            diameter_cm: diameter_cm.normalize(),
        }
    }
}

impl fmt::Display for LogKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m / {} cm", self.length_m, self.diameter_cm)
    }
}

/// 外部資料來源提供的原始原木資料列
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogRow {
    #[serde(default, deserialize_with = "cell")]
    pub length: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub diameter: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "cell")]
    pub ramp: Option<u8>,
}

/// 原木記錄（進貨或鋸切）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 長徑
    pub key: LogKey,

    /// 根數
    pub quantity: u32,

    /// 日期
    pub date: Option<NaiveDate>,

    /// 鋸台（僅鋸切記錄）
    pub ramp: Option<Ramp>,
}

impl LogRecord {
    /// 創建新的原木記錄
    pub fn new(length_m: Decimal, diameter_cm: Decimal, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            key: LogKey::new(length_m, diameter_cm),
            quantity,
            date: None,
            ramp: None,
        }
    }

    /// 建構器模式：設置日期
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// 建構器模式：設置鋸台
    pub fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = Some(ramp);
        self
    }

    /// 由原始資料列建立記錄；缺少片數時視為 1 根
    pub fn from_row(row: &LogRow) -> std::result::Result<Self, RowDefect> {
        let length = positive(row.length, "length")?;
        let diameter = positive(row.diameter, "diameter")?;
        let quantity = count(row.quantity, "quantity")?.unwrap_or(1);
        let ramp = match row.ramp {
            Some(n) => Some(Ramp::new(n).map_err(|_| RowDefect::InvalidRamp(n))?),
            None => None,
        };

        Ok(Self {
            id: Uuid::new_v4(),
            key: LogKey::new(length, diameter),
            quantity,
            date: row.date,
            ramp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_range() {
        assert_eq!(Ramp::new(1).unwrap().number(), 1);
        assert_eq!(Ramp::new(3).unwrap().number(), 3);
        assert!(matches!(Ramp::new(0), Err(SawmillError::InvalidRamp(0))));
        assert!(matches!(Ramp::new(4), Err(SawmillError::InvalidRamp(4))));
    }

    #[test]
    fn test_ramp_deserialize_validates() {
        let ramp: Ramp = serde_json::from_str("2").unwrap();
        assert_eq!(ramp.number(), 2);
        assert!(serde_json::from_str::<Ramp>("7").is_err());
    }

    #[test]
    fn test_log_from_row() {
        let row = LogRow {
            length: Some(Decimal::new(40, 1)),
            diameter: Some(Decimal::from(30)),
            quantity: None,
            date: NaiveDate::from_ymd_opt(2025, 6, 2),
            ramp: Some(2),
        };
        let record = LogRecord::from_row(&row).unwrap();
        assert_eq!(record.quantity, 1);
        assert_eq!(record.ramp, Some(Ramp::new(2).unwrap()));
        assert_eq!(record.key, LogKey::new(Decimal::from(4), Decimal::from(30)));
    }

    #[test]
    fn test_log_from_row_defects() {
        let bad_ramp = LogRow {
            length: Some(Decimal::from(4)),
            diameter: Some(Decimal::from(30)),
            ramp: Some(5),
            ..Default::default()
        };
        assert_eq!(LogRecord::from_row(&bad_ramp).unwrap_err(), RowDefect::InvalidRamp(5));

        let no_diameter = LogRow {
            length: Some(Decimal::from(4)),
            ..Default::default()
        };
        assert_eq!(
            LogRecord::from_row(&no_diameter).unwrap_err(),
            RowDefect::MissingField("diameter")
        );

        let negative: LogRow =
            serde_json::from_str(r#"{"length": "4.0", "diameter": "", "quantity": -2}"#).unwrap();
        assert_eq!(negative.diameter, None);
        let negative = LogRow {
            diameter: Some(Decimal::from(30)),
            ..negative
        };
        assert_eq!(
            LogRecord::from_row(&negative).unwrap_err(),
            RowDefect::NonPositive("quantity")
        );
    }
}
