//! 刨花袋分類帳：庫存與客戶請款

use rust_decimal::Decimal;
use serde::Serialize;

use sawmill_core::{BagEntry, BagEntryKind, ReportWindow};

/// 刨花袋庫存
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BagBalance {
    pub filled: u64,
    pub sold: u64,

    /// max(0, 裝袋 − 售出)
    pub in_stock: u64,
}

/// 計算刨花袋庫存
pub fn bag_balance(entries: &[BagEntry]) -> BagBalance {
    let (filled, sold) = entries.iter().fold((0u64, 0u64), |(filled, sold), entry| match entry.kind {
        BagEntryKind::Filled => (filled + u64::from(entry.bags), sold),
        BagEntryKind::Sold => (filled, sold + u64::from(entry.bags)),
    });

    BagBalance {
        filled,
        sold,
        in_stock: filled.saturating_sub(sold),
    }
}

/// 請款明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceLine {
    pub date: chrono::NaiveDate,
    pub bags: u32,
    pub unit_price: Option<Decimal>,
    pub amount: Option<Decimal>,
}

/// 客戶請款單
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invoice {
    pub customer: String,
    pub window: ReportWindow,
    pub lines: Vec<InvoiceLine>,
    pub total_bags: u64,

    /// 有單價明細的金額合計
    pub total_amount: Decimal,

    /// 缺單價的明細數
    pub unpriced_lines: usize,
}

impl Invoice {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// 產生客戶在區間內的請款單（依日期排序）
pub fn invoice(customer: &str, entries: &[BagEntry], window: &ReportWindow) -> Invoice {
    let mut sales: Vec<&BagEntry> = entries
        .iter()
        .filter(|e| e.is_sale_to(customer) && window.contains(e.date))
        .collect();
    sales.sort_by_key(|e| e.date);

    let lines: Vec<InvoiceLine> = sales
        .into_iter()
        .map(|e| InvoiceLine {
            date: e.date,
            bags: e.bags,
            unit_price: e.unit_price,
            amount: e.amount(),
        })
        .collect();

    let unpriced_lines = lines.iter().filter(|l| l.amount.is_none()).count();
    if unpriced_lines > 0 {
        tracing::warn!("客戶 {} 有 {} 筆售出缺單價", customer, unpriced_lines);
    }

    Invoice {
        customer: customer.to_string(),
        window: *window,
        total_bags: lines.iter().map(|l| u64::from(l.bags)).sum(),
        total_amount: lines.iter().filter_map(|l| l.amount).sum(),
        unpriced_lines,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    fn sale(d: u32, bags: u32, customer: &str, price: Option<&str>) -> BagEntry {
        let entry = BagEntry::sold(date(d), bags, customer.to_string());
        match price {
            Some(p) => entry.with_unit_price(p.parse().unwrap()),
            None => entry,
        }
    }

    #[test]
    fn test_bag_balance() {
        let entries = vec![
            BagEntry::filled(date(1), 40),
            BagEntry::filled(date(2), 20),
            sale(2, 25, "Pellet", Some("2.50")),
        ];

        let balance = bag_balance(&entries);

        assert_eq!(balance.filled, 60);
        assert_eq!(balance.sold, 25);
        assert_eq!(balance.in_stock, 35);
    }

    #[test]
    fn test_bag_balance_clamps() {
        let entries = vec![BagEntry::filled(date(1), 5), sale(1, 8, "Pellet", None)];
        assert_eq!(bag_balance(&entries).in_stock, 0);
    }

    #[test]
    fn test_invoice() {
        let entries = vec![
            sale(4, 10, "Pellet", Some("2.50")),
            sale(2, 20, "Pellet", Some("2.00")),
            sale(3, 5, "Farm", Some("3.00")),
            sale(5, 4, "Pellet", None),
            sale(9, 100, "Pellet", Some("2.00")),
            BagEntry::filled(date(3), 50),
        ];
        let window = ReportWindow::new(date(1), date(7)).unwrap();

        let invoice = invoice("Pellet", &entries, &window);

        assert_eq!(invoice.lines.len(), 3);
        assert_eq!(invoice.lines[0].date, date(2));
        assert_eq!(invoice.total_bags, 34);
        assert_eq!(invoice.total_amount, Decimal::from(65));
        assert_eq!(invoice.unpriced_lines, 1);
    }

    #[test]
    fn test_invoice_unknown_customer_is_empty() {
        let entries = vec![sale(2, 20, "Pellet", Some("2.00"))];
        let window = ReportWindow::single_day(date(2));

        let invoice = invoice("Nobody", &entries, &window);

        assert!(invoice.is_empty());
        assert_eq!(invoice.total_amount, Decimal::ZERO);
    }
}
