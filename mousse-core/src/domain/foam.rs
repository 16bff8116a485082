use serde::Serialize;
use sqlx::FromRow;

use super::cell::CellValue;
use super::display::density_display;
use super::ordering::{by_rank_then, composition_rank, standard_rank};

/// Catalogue entry as listed on the index page.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct FoamTypeSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub family: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct FoamType {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub family: Option<String>,
    pub visual_aspect: Option<String>,
    pub density_kg_m3: Option<CellValue>,
    pub reuse_routes: Option<String>,
    pub image_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CompositionItem {
    pub category: Option<String>,
    pub component: Option<String>,
    pub typical: Option<CellValue>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PhysicalProperty {
    pub property: String,
    pub value: Option<CellValue>,
    pub unit: Option<String>,
    pub standard: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Standard {
    pub domain: Option<String>,
    pub standard_ref: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
}

/// Hazard row as stored, phase included.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct HazardRecord {
    pub phase: String,
    pub hazard: String,
    pub mitigation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hazard {
    pub hazard: String,
    pub mitigation: Option<String>,
}

/// Lifecycle phases the technical sheet reports on. Manufacturing hazards
/// and any other phase are not part of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardPhase {
    Use,
    Recycling,
}

impl HazardPhase {
    const ALL: [HazardPhase; 2] = [HazardPhase::Use, HazardPhase::Recycling];

    pub fn as_str(self) -> &'static str {
        match self {
            HazardPhase::Use => "use",
            HazardPhase::Recycling => "recycling",
        }
    }

    /// Exact, case-sensitive match on the stored phase.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|phase| phase.as_str() == raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HazardGroups {
    #[serde(rename = "use")]
    pub in_use: Vec<Hazard>,
    pub recycling: Vec<Hazard>,
}

impl HazardGroups {
    /// Splits hazards by phase, keeping the incoming order within each group.
    pub fn partition(records: impl IntoIterator<Item = HazardRecord>) -> Self {
        let mut groups = HazardGroups::default();
        for record in records {
            let target = match HazardPhase::parse(&record.phase) {
                Some(HazardPhase::Use) => &mut groups.in_use,
                Some(HazardPhase::Recycling) => &mut groups.recycling,
                None => continue,
            };
            target.push(Hazard {
                hazard: record.hazard,
                mitigation: record.mitigation,
            });
        }
        groups
    }
}

/// Raw rows behind a technical sheet, each list in insertion order.
#[derive(Debug, Clone)]
pub struct FoamTypeSheet {
    pub foam: FoamType,
    pub composition_items: Vec<CompositionItem>,
    pub physical_properties: Vec<PhysicalProperty>,
    pub hazards: Vec<HazardRecord>,
    pub standards: Vec<Standard>,
}

/// Technical sheet served for a single foam type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoamTypeDetail {
    #[serde(flatten)]
    pub foam: FoamType,
    pub composition_items: Vec<CompositionItem>,
    pub physical_properties: Vec<PhysicalProperty>,
    pub hazards: HazardGroups,
    pub standards: Vec<Standard>,
    pub density_display: Option<String>,
}

impl FoamTypeDetail {
    pub fn assemble(sheet: FoamTypeSheet) -> Self {
        let FoamTypeSheet {
            foam,
            mut composition_items,
            physical_properties,
            hazards,
            mut standards,
        } = sheet;

        sort_composition(&mut composition_items);
        sort_standards(&mut standards);
        let density_display = density_display(foam.density_kg_m3.as_ref());

        Self {
            foam,
            composition_items,
            physical_properties,
            hazards: HazardGroups::partition(hazards),
            standards,
            density_display,
        }
    }
}

/// Category precedence first, then component name. Stable, so equal keys
/// keep insertion order.
pub fn sort_composition(items: &mut [CompositionItem]) {
    items.sort_by(|a, b| {
        by_rank_then(
            (composition_rank(a.category.as_deref()), a.component.as_deref()),
            (composition_rank(b.category.as_deref()), b.component.as_deref()),
        )
    });
}

/// Domain precedence first, then standard reference.
pub fn sort_standards(standards: &mut [Standard]) {
    standards.sort_by(|a, b| {
        by_rank_then(
            (standard_rank(a.domain.as_deref()), a.standard_ref.as_deref()),
            (standard_rank(b.domain.as_deref()), b.standard_ref.as_deref()),
        )
    });
}
