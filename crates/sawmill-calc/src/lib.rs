//! # Sawmill Calculation Engine
//!
//! 庫存餘額、損耗、良率與報表計算引擎

pub mod availability;
pub mod bucketing;
pub mod calculator;
pub mod log_yard;
pub mod nearest;
pub mod recovery;
pub mod shavings;
pub mod waste;

// Re-export 主要類型
pub use availability::{audit_consumption, compute_availability, drawable, StockAnomaly};
pub use calculator::{ProductionReport, ProductionStreams, ReportCalculator, StageTotals};
pub use nearest::{nearest_dimensions, DimensionMatch};
pub use recovery::{compute_recovery, RecoveryFigures};
pub use waste::{compute_waste, WasteFigure, WasteStage, WasteSummary};

use serde::Serialize;

/// 報表警告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportWarning {
    /// 來源（階段或帳簿名稱）
    pub source: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl ReportWarning {
    pub fn new(source: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            source,
            message,
            severity,
        }
    }

    pub fn info(source: String, message: String) -> Self {
        Self::new(source, message, WarningSeverity::Info)
    }

    pub fn warning(source: String, message: String) -> Self {
        Self::new(source, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WarningSeverity {
    Info,
    Warning,
}
