use chrono::Local;
use serde::Serialize;

/// One persisted inspection row.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionRecord {
    pub id: i64,                 // ⇔ inspections.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub timestamp: String,       // ⇔ inspections.timestamp (TEXT "YYYY-MM-DD HH:MM:SS")
    pub temperature: f64,        // ⇔ inspections.temperature (REAL)
    pub humidity: f64,           // ⇔ inspections.humidity (REAL)
    pub water_level: String,     // ⇔ inspections.water_level (TEXT)
    pub lamp_count: i64,         // ⇔ inspections.lamp_count (INTEGER)
    pub extinguisher_count: i64, // ⇔ inspections.extinguisher_count (INTEGER)
    pub inspector: String,       // ⇔ inspections.inspector (TEXT)
}

/// A fully validated measurement set, ready for insertion.
/// `id` and `timestamp` are assigned by the store, never by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecord {
    pub temperature: f64,
    pub humidity: f64,
    pub water_level: String,
    pub lamp_count: i64,
    pub extinguisher_count: i64,
    pub inspector: String,
}

/// The six raw text fields as the user entered them, in form order.
#[derive(Debug, Clone, Default)]
pub struct RawFields {
    pub temperature: String,
    pub humidity: String,
    pub water_level: String,
    pub lamp_count: String,
    pub extinguisher_count: String,
    pub inspector: String,
}

/// Insertion timestamp, local wall clock.
pub fn now_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
