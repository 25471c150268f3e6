//! # Sawmill
//!
//! 鋸木廠生產核算：材積表、板材材積、庫存餘額、損耗與良率

pub use sawmill_calc as calc;
pub use sawmill_core as model;

pub use sawmill_calc::{
    audit_consumption, compute_availability, compute_recovery, compute_waste, drawable,
    nearest_dimensions, ProductionReport, ProductionStreams, ReportCalculator, ReportWarning,
};
pub use sawmill_core::{
    plank_volume, AccountingConfig, AvailabilityBalance, PlankDimension, ProductionRecord,
    ReportWindow, Result, SawmillError, VolumeTable,
};
