//! 刨花袋分類帳模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::cell::{cell, count};
use crate::record::RowDefect;
use crate::SawmillError;

/// 刨花袋異動類型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BagEntryKind {
    /// 裝袋入庫
    Filled,
    /// 售出
    Sold,
}

impl FromStr for BagEntryKind {
    type Err = SawmillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("filled") {
            Ok(BagEntryKind::Filled)
        } else if s.eq_ignore_ascii_case("sold") {
            Ok(BagEntryKind::Sold)
        } else {
            Err(SawmillError::UnknownBagKind(s.to_string()))
        }
    }
}

/// 外部資料來源提供的原始刨花袋資料列
///
/// 沒有 ID 的資料列於建立記錄時產生新 ID。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BagRow {
    #[serde(default, deserialize_with = "cell")]
    pub id: Option<Uuid>,
    #[serde(default, deserialize_with = "cell")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "cell")]
    pub kind: Option<BagEntryKind>,
    #[serde(default, deserialize_with = "cell")]
    pub bags: Option<Decimal>,
    #[serde(default, deserialize_with = "cell")]
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "cell")]
    pub unit_price: Option<Decimal>,
}

impl From<BagEntry> for BagRow {
    fn from(entry: BagEntry) -> Self {
        Self {
            id: Some(entry.id),
            date: Some(entry.date),
            kind: Some(entry.kind),
            bags: Some(Decimal::from(entry.bags)),
            customer: entry.customer,
            unit_price: entry.unit_price,
        }
    }
}

/// 刨花袋異動記錄
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BagEntry {
    /// 記錄ID
    pub id: Uuid,

    /// 日期
    pub date: NaiveDate,

    /// 異動類型
    pub kind: BagEntryKind,

    /// 袋數
    pub bags: u32,

    /// 客戶（售出時）
    pub customer: Option<String>,

    /// 單價（售出時）
    pub unit_price: Option<Decimal>,
}

impl BagEntry {
    /// 裝袋記錄
    pub fn filled(date: NaiveDate, bags: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind: BagEntryKind::Filled,
            bags,
            customer: None,
            unit_price: None,
        }
    }

    /// 售出記錄
    pub fn sold(date: NaiveDate, bags: u32, customer: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            kind: BagEntryKind::Sold,
            bags,
            customer: Some(customer),
            unit_price: None,
        }
    }

    /// 建構器模式：設置單價
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// 金額（袋數 × 單價），無單價時為 None
    pub fn amount(&self) -> Option<Decimal> {
        self.unit_price.map(|price| price * Decimal::from(self.bags))
    }

    /// 由原始資料列建立記錄；日期、類型與袋數為必要欄位
    pub fn from_row(row: &BagRow) -> Result<Self, RowDefect> {
        let date = row.date.ok_or(RowDefect::MissingField("date"))?;
        let kind = row.kind.ok_or(RowDefect::MissingField("kind"))?;
        let bags = count(row.bags, "bags")?.ok_or(RowDefect::MissingField("bags"))?;

        Ok(Self {
            id: row.id.unwrap_or_else(Uuid::new_v4),
            date,
            kind,
            bags,
            customer: row.customer.clone(),
            unit_price: row.unit_price,
        })
    }

    pub fn is_sale_to(&self, customer: &str) -> bool {
        self.kind == BagEntryKind::Sold && self.customer.as_deref() == Some(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_amount() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let sale = BagEntry::sold(date, 12, "Drvo d.o.o.".to_string())
            .with_unit_price(Decimal::new(250, 2));

        assert_eq!(sale.amount(), Some(Decimal::from(30)));
        assert!(sale.is_sale_to("Drvo d.o.o."));
        assert!(!sale.is_sale_to("Other"));

        let filled = BagEntry::filled(date, 40);
        assert_eq!(filled.amount(), None);
        assert!(!filled.is_sale_to("Drvo d.o.o."));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("filled".parse::<BagEntryKind>().unwrap(), BagEntryKind::Filled);
        assert_eq!("Sold".parse::<BagEntryKind>().unwrap(), BagEntryKind::Sold);
        assert!(matches!(
            "returned".parse::<BagEntryKind>(),
            Err(SawmillError::UnknownBagKind(_))
        ));
    }

    #[test]
    fn test_from_row_generates_id() {
        let row: BagRow = serde_json::from_str(
            r#"{"date": "2025-06-02", "kind": "sold", "bags": 12, "customer": "Pellet", "unit_price": "2.50"}"#,
        )
        .unwrap();

        let entry = BagEntry::from_row(&row).unwrap();

        assert_eq!(entry.bags, 12);
        assert!(entry.is_sale_to("Pellet"));
        assert_eq!(entry.amount(), Some(Decimal::from(30)));
        assert_ne!(entry.id, Uuid::nil());
    }

    #[test]
    fn test_from_row_defects() {
        let no_bags: BagRow =
            serde_json::from_str(r#"{"date": "2025-06-02", "kind": "filled", "bags": ""}"#).unwrap();
        assert_eq!(BagEntry::from_row(&no_bags).unwrap_err(), RowDefect::MissingField("bags"));

        let unknown_kind: BagRow =
            serde_json::from_str(r#"{"date": "2025-06-02", "kind": "lost", "bags": 3}"#).unwrap();
        assert_eq!(BagEntry::from_row(&unknown_kind).unwrap_err(), RowDefect::MissingField("kind"));

        let partial: BagRow =
            serde_json::from_str(r#"{"date": "2025-06-02", "kind": "filled", "bags": 1.5}"#).unwrap();
        assert_eq!(BagEntry::from_row(&partial).unwrap_err(), RowDefect::NotWholeNumber("bags"));
    }

    #[test]
    fn test_row_from_entry_keeps_id() {
        let entry = BagEntry::filled(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), 40);
        let id = entry.id;

        let parsed = BagEntry::from_row(&BagRow::from(entry)).unwrap();

        assert_eq!(parsed.id, id);
        assert_eq!(parsed.bags, 40);
    }
}
