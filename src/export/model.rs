// src/export/model.rs

use crate::models::record::InspectionRecord;
use serde::Serialize;

/// Flat row model for export.
///
/// The serde names double as the spreadsheet header, so CSV and JSON carry
/// exactly the documented column names.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "WaterLevel")]
    pub water_level: String,
    #[serde(rename = "LampCount")]
    pub lamp_count: i64,
    #[serde(rename = "ExtinguisherCount")]
    pub extinguisher_count: i64,
    #[serde(rename = "Inspector")]
    pub inspector: String,
}

impl From<&InspectionRecord> for RecordExport {
    fn from(rec: &InspectionRecord) -> Self {
        Self {
            id: rec.id,
            timestamp: rec.timestamp.clone(),
            temperature: rec.temperature,
            humidity: rec.humidity,
            water_level: rec.water_level.clone(),
            lamp_count: rec.lamp_count,
            extinguisher_count: rec.extinguisher_count,
            inspector: rec.inspector.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX, in fixed column order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "ID",
        "Timestamp",
        "Temperature",
        "Humidity",
        "WaterLevel",
        "LampCount",
        "ExtinguisherCount",
        "Inspector",
    ]
}

/// Convert one row into display strings, same column order as the header.
pub(crate) fn record_to_row(r: &RecordExport) -> Vec<String> {
    vec![
        r.id.to_string(),
        r.timestamp.clone(),
        r.temperature.to_string(),
        r.humidity.to_string(),
        r.water_level.clone(),
        r.lamp_count.to_string(),
        r.extinguisher_count.to_string(),
        r.inspector.clone(),
    ]
}
