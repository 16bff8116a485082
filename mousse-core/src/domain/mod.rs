//! Catalogue records and the rules that shape them for display.

pub mod cell;
pub mod company;
pub mod display;
pub mod foam;
pub mod ordering;
pub mod recycling;

pub use cell::CellValue;
pub use company::{Company, CompanyQuery, CompanySearch, HomeCountry};
pub use foam::{
    CompositionItem, FoamType, FoamTypeDetail, FoamTypeSheet, FoamTypeSummary,
    Hazard, HazardGroups, HazardPhase, HazardRecord, PhysicalProperty, Standard,
};
pub use recycling::{
    CompanyRecyclingOption, RecyclingMetrics, RecyclingOptionDetail,
    RecyclingOptionSummary, WithDisplays,
};
