//! 外部資料列欄位的寬鬆解析
//!
//! 空白、null 或無法解析的欄位一律視為缺漏（`None`），由各記錄的 `from_row` 判定是否可計算。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

use crate::record::RowDefect;

/// `deserialize_with` 用：任意 JSON 值轉為 `Option<T>`，不會讓整批資料解析失敗
pub(crate) fn cell<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => parse_text(&text),
        Value::Number(number) => parse_text(&number.to_string()),
        _ => None,
    })
}

fn parse_text<T: FromStr>(text: &str) -> Option<T> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        trimmed.parse().ok()
    }
}

/// 片數/根數/袋數欄位：必須為正整數
pub(crate) fn count(value: Option<Decimal>, field: &'static str) -> Result<Option<u32>, RowDefect> {
    match value {
        None => Ok(None),
        Some(v) if v <= Decimal::ZERO => Err(RowDefect::NonPositive(field)),
        Some(v) if !v.fract().is_zero() => Err(RowDefect::NotWholeNumber(field)),
        Some(v) => v.to_u32().map(Some).ok_or(RowDefect::NotWholeNumber(field)),
    }
}
