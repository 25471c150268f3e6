//! 單日生產報表範例
//!
//! 以 JSON 形式的外部記錄計算一天的損耗、良率與庫存

use chrono::NaiveDate;
use sawmill::{AccountingConfig, ProductionStreams, ReportCalculator, ReportWindow, VolumeTable};
use tracing_subscriber::{fmt, EnvFilter};

const STREAMS: &str = r#"{
    "logs_intake": [
        {"length": "4.2", "diameter": "33", "quantity": 20, "date": "2025-06-01"},
        {"length": "3.0", "diameter": "30", "quantity": 12, "date": "2025-06-02"}
    ],
    "logs_cut": [
        {"length": "4.2", "diameter": "33", "quantity": 8, "date": "2025-06-02", "ramp": 1},
        {"length": "3.0", "diameter": "30", "quantity": 6, "date": "2025-06-02", "ramp": 2}
    ],
    "produced": [
        {"width": "50", "height": "100", "length": "4.2", "quantity": 60, "date": "2025-06-02", "operator": "ivan"},
        {"width": "25", "height": "100", "length": "3.0", "quantity": 80, "date": "2025-06-02"},
        {"width": "25", "height": "100", "length": "3.0", "date": "2025-06-02"},
        {"width": "", "height": "100", "length": "3.0", "quantity": 12, "date": "2025-06-02"}
    ],
    "taken": [
        {"width": "50", "height": "100", "length": "4.2", "quantity": 40, "date": "2025-06-02"}
    ],
    "joined": [
        {"width": "50", "height": "100", "length": "6.0", "quantity": 26, "volume": "0.76", "date": "2025-06-02"}
    ],
    "planed": [
        {"width": "45", "height": "95", "length": "6.0", "quantity": 26, "date": "2025-06-02"}
    ],
    "bags": [
        {"date": "2025-06-02", "kind": "filled", "bags": 30},
        {"id": "5f0c6f5e-3c1a-4a57-9c43-1b1f3f6f1a02", "date": "2025-06-02", "kind": "sold", "bags": 12, "customer": "Pellet", "unit_price": "2.50"},
        {"date": "2025-06-02", "kind": "sold", "bags": "", "customer": "Pellet"}
    ]
}"#;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    let streams: ProductionStreams = serde_json::from_str(STREAMS)?;
    let config = AccountingConfig::new().with_percent_decimal_places(2);
    let calculator = ReportCalculator::new(VolumeTable::standard(), config)?;

    let day = NaiveDate::from_ymd_opt(2025, 6, 2).ok_or_else(|| anyhow::anyhow!("無效日期"))?;
    let report = calculator.calculate(ReportWindow::single_day(day), &streams);

    println!("=== 生產報表 {} ===\n", day);
    for totals in &report.stage_totals {
        println!(
            "  {:<9} {:>3} 筆  {:>5} 片  {:>10} m³",
            totals.stage.to_string(),
            totals.records,
            totals.quantity,
            totals.volume.round_dp(4)
        );
    }

    println!("\n損耗:");
    for figure in report.waste.figures() {
        println!("  {:?}: {} m³", figure.stage, figure.waste.round_dp(4));
    }
    println!("  合計: {} m³", report.waste.total_waste.round_dp(4));

    if let Some(recovery) = report.recovery {
        println!("\n良率（鋸切原木 {} m³）:", recovery.input_volume);
        println!("  長料: {}%", recovery.longs_recovery);
        println!("  短料: {}%", recovery.shorts_recovery);
        println!("  合計: {}%", recovery.total_recovery);
    }

    println!("\n濕料庫存:");
    for balance in &report.wet_stock {
        println!(
            "  {}: {} 片 / {} m³",
            balance.dimension,
            balance.available_quantity,
            balance.available_volume.round_dp(4)
        );
    }

    println!("\n原木場:");
    for balance in &report.log_yard {
        println!("  {}: {} 根", balance.dimension, balance.available_quantity);
    }

    println!("\n刨花袋庫存: {} 袋", report.bags.in_stock);

    if !report.warnings.is_empty() {
        println!("\n警告:");
        for warning in &report.warnings {
            println!("  [{:?}] {}: {}", warning.severity, warning.source, warning.message);
        }
    }

    Ok(())
}
