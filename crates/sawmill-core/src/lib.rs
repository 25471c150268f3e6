//! # Sawmill Core
//!
//! 核心資料模型：材積表、板材規格、生產記錄、報表區間與配置

pub mod bags;
pub mod balance;
pub mod config;
pub mod dimension;
pub mod logs;
pub mod record;
pub mod volume_table;
pub mod window;

mod cell;
mod volume_data;

// Re-export 主要類型
pub use bags::{BagEntry, BagEntryKind, BagRow};
pub use balance::{AvailabilityBalance, StockItem};
pub use config::AccountingConfig;
pub use dimension::{plank_volume, PlankDimension};
pub use logs::{LogKey, LogRecord, LogRow, Ramp};
pub use record::{PlankRow, PlankStage, ProductionRecord, RowDefect};
pub use volume_table::{LogVolumeEntry, VolumeTable};
pub use window::ReportWindow;

/// 鋸木廠核算錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum SawmillError {
    #[error("無效的材積表: {0}")]
    InvalidVolumeTable(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("無效的刨花袋異動類型: {0}")]
    UnknownBagKind(String),

    #[error("無效的鋸台編號: {0}（僅支援 1-3）")]
    InvalidRamp(u8),

    #[error("無效的報表區間: {start} 晚於 {end}")]
    InvalidWindow {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    #[error("目標材積必須大於 0: {0}")]
    InvalidTargetVolume(rust_decimal::Decimal),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SawmillError>;
