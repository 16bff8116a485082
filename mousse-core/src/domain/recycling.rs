use serde::Serialize;
use sqlx::FromRow;

use super::cell::CellValue;
use super::display::{co2_display, cost_display};

/// Recycling option as listed for one foam type, joined with its foam and
/// optional process method.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RecyclingOptionSummary {
    pub id: i64,
    pub foam_type_id: i64,
    pub process_method_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub cost_eur_per_kg: Option<CellValue>,
    pub co2_saved_kg_per_kg_foam: Option<CellValue>,
    pub benefit: Option<String>,
    pub notes: Option<String>,

    pub foam_code: String,
    pub foam_name: String,
    pub foam_density_kg_m3: Option<CellValue>,

    pub process_method_name: Option<String>,
    pub process_method_code: Option<String>,
}

/// Every stored column of a recycling option plus the joined foam and
/// process method fields.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RecyclingOptionDetail {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub option: RecyclingOptionSummary,
    pub prerequisites: Option<String>,
    pub precautions: Option<String>,
    pub calculation: Option<String>,
}

/// Recycling option handled by a company, with the foam it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CompanyRecyclingOption {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub cost_eur_per_kg: Option<CellValue>,
    pub co2_saved_kg_per_kg_foam: Option<CellValue>,
    pub benefit: Option<String>,
    pub foam_code: String,
    pub foam_name: String,
}

/// Records carrying the cost and CO₂ metrics of a recycling option.
pub trait RecyclingMetrics {
    fn cost_eur_per_kg(&self) -> Option<&CellValue>;
    fn co2_saved_kg_per_kg_foam(&self) -> Option<&CellValue>;
}

impl RecyclingMetrics for RecyclingOptionSummary {
    fn cost_eur_per_kg(&self) -> Option<&CellValue> {
        self.cost_eur_per_kg.as_ref()
    }

    fn co2_saved_kg_per_kg_foam(&self) -> Option<&CellValue> {
        self.co2_saved_kg_per_kg_foam.as_ref()
    }
}

impl RecyclingMetrics for RecyclingOptionDetail {
    fn cost_eur_per_kg(&self) -> Option<&CellValue> {
        self.option.cost_eur_per_kg()
    }

    fn co2_saved_kg_per_kg_foam(&self) -> Option<&CellValue> {
        self.option.co2_saved_kg_per_kg_foam()
    }
}

impl RecyclingMetrics for CompanyRecyclingOption {
    fn cost_eur_per_kg(&self) -> Option<&CellValue> {
        self.cost_eur_per_kg.as_ref()
    }

    fn co2_saved_kg_per_kg_foam(&self) -> Option<&CellValue> {
        self.co2_saved_kg_per_kg_foam.as_ref()
    }
}

/// A record served alongside its derived cost and CO₂ display strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithDisplays<T> {
    #[serde(flatten)]
    pub record: T,
    pub cost_display: Option<String>,
    pub co2_display: Option<String>,
}

impl<T: RecyclingMetrics> From<T> for WithDisplays<T> {
    fn from(record: T) -> Self {
        let cost_display = cost_display(record.cost_eur_per_kg());
        let co2_display = co2_display(record.co2_saved_kg_per_kg_foam());
        Self {
            record,
            cost_display,
            co2_display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> RecyclingOptionSummary {
        RecyclingOptionSummary {
            id: 7,
            foam_type_id: 1,
            process_method_id: None,
            name: "Broyage et agglomération".into(),
            description: None,
            cost_eur_per_kg: Some(CellValue::from(1.5)),
            co2_saved_kg_per_kg_foam: None,
            benefit: None,
            notes: None,
            foam_code: "PU-FLEX".into(),
            foam_name: "Polyuréthane souple".into(),
            foam_density_kg_m3: None,
            process_method_name: None,
            process_method_code: None,
        }
    }

    #[test]
    fn displays_are_derived_from_metrics() {
        let shaped = WithDisplays::from(summary());
        assert_eq!(shaped.cost_display.as_deref(), Some("1.50 €/kg"));
        assert_eq!(shaped.co2_display, None);
    }

    #[test]
    fn serialized_record_is_flat() {
        let detail = RecyclingOptionDetail {
            option: summary(),
            prerequisites: Some("Tri préalable".into()),
            precautions: None,
            calculation: None,
        };
        let json = serde_json::to_value(WithDisplays::from(detail)).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["foam_code"], "PU-FLEX");
        assert_eq!(json["prerequisites"], "Tri préalable");
        assert_eq!(json["cost_eur_per_kg"], 1.5);
        assert_eq!(json["cost_display"], "1.50 €/kg");
        assert!(json["co2_display"].is_null());
        assert!(json["process_method_name"].is_null());
        assert!(json.get("option").is_none());
        assert!(json.get("record").is_none());
    }
}
