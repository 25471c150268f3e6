//! 最近材積長徑搜尋範例

use rust_decimal::Decimal;
use sawmill::{nearest_dimensions, VolumeTable};

fn main() -> anyhow::Result<()> {
    let target: Decimal = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "0.35".to_string())
        .parse()?;

    let table = VolumeTable::standard();
    let matches = nearest_dimensions(&table, target, 10)?;

    println!("目標材積 {} m³ 的最近長徑:\n", target);
    for (rank, m) in matches.iter().enumerate() {
        println!(
            "  {:>2}. {} m × {} cm = {} m³  (差 {}, {}%)",
            rank + 1,
            m.length_m,
            m.diameter_cm,
            m.volume,
            m.difference,
            m.percent_difference.round_dp(2)
        );
    }

    Ok(())
}
