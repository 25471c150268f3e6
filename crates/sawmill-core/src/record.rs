//! 板材生產記錄模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::balance::StockItem;
use crate::cell::{cell, count};
use crate::dimension::PlankDimension;

/// 板材加工階段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlankStage {
    /// 鋸切產出（濕料庫存）
    Produced,
    /// 自濕料庫存取出
    Taken,
    /// 指接
    Joined,
    /// 刨光（成品）
    Planed,
    /// 裝車出貨
    Loaded,
}

impl fmt::Display for PlankStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlankStage::Produced => "produced",
            PlankStage::Taken => "taken",
            PlankStage::Joined => "joined",
            PlankStage::Planed => "planed",
            PlankStage::Loaded => "loaded",
        };
        f.write_str(name)
    }
}

/// 原始資料列缺陷（無法計算的資料列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowDefect {
    /// 缺少必要欄位
    MissingField(&'static str),
    /// 欄位必須為正數
    NonPositive(&'static str),
    /// 計數欄位必須為整數
    NotWholeNumber(&'static str),
    /// 鋸台編號超出範圍
    InvalidRamp(u8),
}

impl fmt::Display for RowDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowDefect::MissingField(field) => write!(f, "缺少欄位 {}", field),
            RowDefect::NonPositive(field) => write!(f, "欄位 {} 必須大於 0", field),
            RowDefect::NotWholeNumber(field) => write!(f, "欄位 {} 必須為整數", field),
            RowDefect::InvalidRamp(ramp) => write!(f, "無效的鋸台編號 {}", ramp),
        }
    }
}

/// 外部資料來源提供的原始板材資料列
///
/// 欄位皆可缺漏；空白或無法解析的欄位視為缺漏，該資料列「尚不可計算」。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlankRow {
    #[serde(default, deserialize_with = "cell")]
    pub width: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub height: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub length: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub quantity: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub volume: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "cell")]
    pub operator: Option<String>,
}

/// 板材生產/耗用記錄（只新增，不修改）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// 記錄ID
    pub id: Uuid,

    /// 板材規格
    pub dimension: PlankDimension,

    /// 片數（≥ 1）
    pub quantity: u32,

    /// 材積（m³）
    pub volume: Decimal,

    /// 日期
    pub date: Option<NaiveDate>,

    /// 操作人員
    pub operator: Option<String>,
}

impl ProductionRecord {
    /// 創建新的記錄，材積依公式計算
    pub fn new(dimension: PlankDimension, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            dimension,
            quantity,
            volume: dimension.volume(quantity),
            date: None,
            operator: None,
        }
    }

    /// 建構器模式：覆寫記錄材積
    pub fn with_volume(mut self, volume: Decimal) -> Self {
        self.volume = volume;
        self
    }

    /// 建構器模式：設置日期
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// 建構器模式：設置操作人員
    pub fn with_operator(mut self, operator: String) -> Self {
        self.operator = Some(operator);
        self
    }

    /// 由原始資料列建立記錄
    ///
    /// 缺少寬/高/長/片數、數值非正或片數非整數時回傳缺陷；缺少材積時以公式補上。
    pub fn from_row(row: &PlankRow) -> Result<Self, RowDefect> {
        let width = positive(row.width, "width")?;
        let height = positive(row.height, "height")?;
        let length = positive(row.length, "length")?;
        let quantity = count(row.quantity, "quantity")?.ok_or(RowDefect::MissingField("quantity"))?;

        let mut record = Self::new(PlankDimension::new(width, height, length), quantity);
        if let Some(volume) = row.volume {
            record.volume = volume;
        }
        record.date = row.date;
        record.operator = row.operator.clone();
        Ok(record)
    }

    /// 檢查是否為長料
    pub fn is_long(&self, threshold_m: Decimal) -> bool {
        self.dimension.is_long(threshold_m)
    }
}

impl StockItem for ProductionRecord {
    type Key = PlankDimension;

    fn stock_key(&self) -> PlankDimension {
        self.dimension
    }

    fn quantity(&self) -> u64 {
        u64::from(self.quantity)
    }

    fn volume(&self) -> Decimal {
        self.volume
    }
}

pub(crate) fn positive(value: Option<Decimal>, field: &'static str) -> Result<Decimal, RowDefect> {
    match value {
        None => Err(RowDefect::MissingField(field)),
        Some(v) if v <= Decimal::ZERO => Err(RowDefect::NonPositive(field)),
        Some(v) => Ok(v),
    }
}
