//! 報表日期區間

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, SawmillError};

/// 報表日期區間（含首尾）
///
/// 反序列化時同樣經過 [`ReportWindow::new`] 驗證。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds")]
pub struct ReportWindow {
    /// 起始日
    pub start: NaiveDate,

    /// 結束日
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct WindowBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<WindowBounds> for ReportWindow {
    type Error = SawmillError;

    fn try_from(bounds: WindowBounds) -> Result<Self> {
        Self::new(bounds.start, bounds.end)
    }
}

impl ReportWindow {
    /// 創建報表區間
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(SawmillError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// 創建單日區間
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// 是否為單日報表（良率僅在單日報表計算）
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// 檢查日期是否落在區間內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 檢查記錄日期是否落在區間內（無日期不計入）
    pub fn contains_opt(&self, date: Option<NaiveDate>) -> bool {
        date.is_some_and(|d| self.contains(d))
    }

    /// 逐日列出區間內的日期
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
