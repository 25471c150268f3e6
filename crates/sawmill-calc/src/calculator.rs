//! 生產報表主計算器

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

use sawmill_core::{
    AccountingConfig, AvailabilityBalance, BagEntry, BagRow, LogKey, LogRecord, LogRow, PlankRow,
    PlankStage, ProductionRecord, ReportWindow, RowDefect, StockItem, VolumeTable,
};

use crate::availability::{audit_consumption, compute_availability, drawable};
use crate::bucketing::{group_by_day, up_to, within_window, DailyTotals};
use crate::log_yard::{cut_by_ramp, log_totals, yard_balance, LogTotals, MeasuredLog, RampTotals};
use crate::nearest::{nearest_dimensions, DimensionMatch};
use crate::recovery::{compute_recovery, RecoveryFigures};
use crate::shavings::{bag_balance, BagBalance};
use crate::waste::{compute_waste, WasteSummary};
use crate::ReportWarning;

/// 外部資料來源取回的原始記錄
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionStreams {
    pub logs_intake: Vec<LogRow>,
    pub logs_cut: Vec<LogRow>,
    pub produced: Vec<PlankRow>,
    pub taken: Vec<PlankRow>,
    pub joined: Vec<PlankRow>,
    pub planed: Vec<PlankRow>,
    pub loaded: Vec<PlankRow>,
    pub bags: Vec<BagRow>,
}

/// 單一階段在報表區間內的合計
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageTotals {
    pub stage: PlankStage,
    pub records: usize,
    pub quantity: u64,
    pub volume: Decimal,
}

impl StageTotals {
    fn sum(stage: PlankStage, records: &[ProductionRecord]) -> Self {
        Self {
            stage,
            records: records.len(),
            quantity: records.iter().map(StockItem::quantity).sum(),
            volume: records.iter().map(|r| r.volume).sum(),
        }
    }
}

/// 生產報表
#[derive(Debug, Clone, Serialize)]
pub struct ProductionReport {
    pub window: ReportWindow,

    /// 各階段區間合計（依加工順序）
    pub stage_totals: Vec<StageTotals>,

    /// 每日鋸切產出
    pub daily_output: Vec<DailyTotals>,

    pub logs_received: LogTotals,
    pub logs_cut: LogTotals,
    pub cut_by_ramp: Vec<RampTotals>,

    pub waste: WasteSummary,

    /// 良率（僅單日報表）
    pub recovery: Option<RecoveryFigures>,

    /// 濕料庫存（產出 − 取料），僅列可領用者
    pub wet_stock: Vec<AvailabilityBalance>,

    /// 成品庫存（刨光 − 裝車），僅列可領用者
    pub finished_stock: Vec<AvailabilityBalance>,

    /// 原木場庫存（進貨 − 鋸切），僅列有庫存者
    pub log_yard: Vec<AvailabilityBalance<LogKey>>,

    pub bags: BagBalance,

    pub warnings: Vec<ReportWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl ProductionReport {
    /// 取得指定階段合計
    pub fn stage(&self, stage: PlankStage) -> Option<&StageTotals> {
        self.stage_totals.iter().find(|t| t.stage == stage)
    }
}

/// 已解析的板材記錄
struct PlankStreams {
    produced: Vec<ProductionRecord>,
    taken: Vec<ProductionRecord>,
    joined: Vec<ProductionRecord>,
    planed: Vec<ProductionRecord>,
    loaded: Vec<ProductionRecord>,
}

/// 報表計算器
pub struct ReportCalculator {
    /// 原木材積表
    table: VolumeTable,

    /// 核算配置
    config: AccountingConfig,
}

impl ReportCalculator {
    /// 創建新的報表計算器（會驗證配置）
    pub fn new(table: VolumeTable, config: AccountingConfig) -> sawmill_core::Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    /// 主報表計算入口
    ///
    /// 不因單筆壞資料中止：無法計算的資料列略過並記錄警告。
    pub fn calculate(&self, window: ReportWindow, streams: &ProductionStreams) -> ProductionReport {
        tracing::info!(
            "開始報表計算：{} 至 {}，板材記錄 {} 筆，原木記錄 {} 筆",
            window.start,
            window.end,
            streams.produced.len()
                + streams.taken.len()
                + streams.joined.len()
                + streams.planed.len()
                + streams.loaded.len(),
            streams.logs_intake.len() + streams.logs_cut.len()
        );

        let start_time = std::time::Instant::now();
        let mut warnings = Vec::new();

        // Step 1: 解析原始資料列
        tracing::debug!("Step 1: 解析資料列");
        let planks = PlankStreams {
            produced: parse_planks(PlankStage::Produced, &streams.produced, &mut warnings),
            taken: parse_planks(PlankStage::Taken, &streams.taken, &mut warnings),
            joined: parse_planks(PlankStage::Joined, &streams.joined, &mut warnings),
            planed: parse_planks(PlankStage::Planed, &streams.planed, &mut warnings),
            loaded: parse_planks(PlankStage::Loaded, &streams.loaded, &mut warnings),
        };
        let logs_intake = parse_logs("logs_intake", &streams.logs_intake, &mut warnings);
        let logs_cut = parse_logs("logs_cut", &streams.logs_cut, &mut warnings);
        let bag_entries = parse_rows("shavings", &streams.bags, BagEntry::from_row, &mut warnings);

        // Step 2: 區間合計
        tracing::debug!("Step 2: 區間合計");
        let produced = within_window(&planks.produced, &window);
        let taken = within_window(&planks.taken, &window);
        let joined = within_window(&planks.joined, &window);
        let planed = within_window(&planks.planed, &window);
        let loaded = within_window(&planks.loaded, &window);
        let stage_totals = vec![
            StageTotals::sum(PlankStage::Produced, &produced),
            StageTotals::sum(PlankStage::Taken, &taken),
            StageTotals::sum(PlankStage::Joined, &joined),
            StageTotals::sum(PlankStage::Planed, &planed),
            StageTotals::sum(PlankStage::Loaded, &loaded),
        ];
        let daily_output = group_by_day(&produced, &window);

        let cut_in_window = within_window(&logs_cut, &window);
        let logs_received = log_totals(&self.table, &within_window(&logs_intake, &window));
        let logs_cut_totals = log_totals(&self.table, &cut_in_window);
        let ramps = cut_by_ramp(&self.table, &cut_in_window);
        let misses: BTreeSet<&LogKey> = logs_received
            .lookup_misses
            .iter()
            .chain(&logs_cut_totals.lookup_misses)
            .collect();
        for key in misses {
            warnings.push(ReportWarning::warning(
                "volume_table".to_string(),
                format!("材積表查無 {}，材積以 0 計", key),
            ));
        }

        // Step 3: 損耗
        tracing::debug!("Step 3: 損耗計算");
        let waste = compute_waste(
            stage_totals[1].volume,
            stage_totals[2].volume,
            stage_totals[3].volume,
        );

        // Step 4: 良率（僅單日）
        let recovery = if window.is_single_day() {
            tracing::debug!("Step 4: 良率計算");
            let figures = compute_recovery(
                &produced,
                logs_cut_totals.volume,
                self.config.long_plank_threshold_m,
            );
            if logs_cut_totals.volume.is_zero() {
                warnings.push(ReportWarning::info(
                    "recovery".to_string(),
                    "當日無鋸切原木材積，良率以 0% 計".to_string(),
                ));
            }
            Some(figures.map_percentages(|p| self.config.round_percent(p)))
        } else {
            None
        };

        // Step 5: 庫存餘額（截至區間結束日）
        tracing::debug!("Step 5: 庫存餘額");
        let include_undated = self.config.include_undated_in_stock;
        let stock = |records: &[ProductionRecord]| up_to(records, window.end, include_undated);

        let (wet_produced, wet_taken) = (stock(&planks.produced), stock(&planks.taken));
        let (fin_planed, fin_loaded) = (stock(&planks.planed), stock(&planks.loaded));
        let wet_stock = drawable(&compute_availability(&wet_produced, &wet_taken));
        let finished_stock = drawable(&compute_availability(&fin_planed, &fin_loaded));
        push_anomalies("wet_stock", audit_consumption(&wet_produced, &wet_taken), &mut warnings);
        push_anomalies(
            "finished_stock",
            audit_consumption(&fin_planed, &fin_loaded),
            &mut warnings,
        );

        let yard_intake = up_to(&logs_intake, window.end, include_undated);
        let yard_cut = up_to(&logs_cut, window.end, include_undated);
        let log_yard = drawable(&yard_balance(&self.table, &yard_intake, &yard_cut));
        let measured = |logs: &[LogRecord]| -> Vec<MeasuredLog> {
            logs.iter().map(|l| MeasuredLog::measure(&self.table, l)).collect()
        };
        push_anomalies(
            "log_yard",
            audit_consumption(&measured(&yard_intake), &measured(&yard_cut)),
            &mut warnings,
        );

        // Step 6: 刨花袋
        let bags = bag_balance(&up_to(&bag_entries, window.end, include_undated));
        if bags.sold > bags.filled {
            warnings.push(ReportWarning::warning(
                "shavings".to_string(),
                format!("售出 {} 袋超過裝袋 {} 袋", bags.sold, bags.filled),
            ));
        }

        let report = ProductionReport {
            window,
            stage_totals,
            daily_output,
            logs_received,
            logs_cut: logs_cut_totals,
            cut_by_ramp: ramps,
            waste,
            recovery,
            wet_stock,
            finished_stock,
            log_yard,
            bags,
            warnings,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        };

        tracing::info!("報表計算完成，耗時 {:?}", start_time.elapsed());
        tracing::info!("警告數量: {}", report.warnings.len());

        report
    }

    /// 依配置筆數搜尋最近材積長徑
    pub fn nearest(&self, target_volume: Decimal) -> sawmill_core::Result<Vec<DimensionMatch>> {
        nearest_dimensions(&self.table, target_volume, self.config.nearest_match_limit)
    }

    /// 獲取材積表引用
    pub fn table(&self) -> &VolumeTable {
        &self.table
    }

    /// 獲取配置引用
    pub fn config(&self) -> &AccountingConfig {
        &self.config
    }
}

fn parse_planks(
    stage: PlankStage,
    rows: &[PlankRow],
    warnings: &mut Vec<ReportWarning>,
) -> Vec<ProductionRecord> {
    parse_rows(&stage.to_string(), rows, ProductionRecord::from_row, warnings)
}

fn parse_logs(source: &str, rows: &[LogRow], warnings: &mut Vec<ReportWarning>) -> Vec<LogRecord> {
    parse_rows(source, rows, LogRecord::from_row, warnings)
}

fn parse_rows<R, T>(
    source: &str,
    rows: &[R],
    parse: impl Fn(&R) -> Result<T, RowDefect>,
    warnings: &mut Vec<ReportWarning>,
) -> Vec<T> {
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match parse(row) {
            Ok(record) => records.push(record),
            Err(defect) => {
                tracing::warn!("{} 第 {} 筆資料無法計算: {}", source, index + 1, defect);
                warnings.push(ReportWarning::warning(
                    source.to_string(),
                    format!("第 {} 筆資料略過: {}", index + 1, defect),
                ));
            }
        }
    }
    records
}

fn push_anomalies<A: Display>(source: &str, anomalies: Vec<A>, warnings: &mut Vec<ReportWarning>) {
    for anomaly in anomalies {
        tracing::warn!("{} 耗用異常: {}", source, anomaly);
        warnings.push(ReportWarning::warning(source.to_string(), anomaly.to_string()));
    }
}
