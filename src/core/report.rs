//! Read-only projections over the record store.
//!
//! Every view re-queries the store on demand; nothing is cached, the table
//! is the single source of truth.

use crate::db::queries::load_all;
use crate::errors::AppResult;
use crate::export::model::RecordExport;
use crate::models::record::InspectionRecord;
use rusqlite::Connection;

/// Chart input: three parallel sequences of equal length, one triple per
/// record, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub timestamps: Vec<String>,
    pub temperatures: Vec<f64>,
    pub humidities: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Human-readable listing: one labeled block per record, in id order.
pub fn listing(conn: &Connection) -> AppResult<Vec<String>> {
    let records = load_all(conn)?;
    Ok(records.iter().map(listing_block).collect())
}

fn listing_block(rec: &InspectionRecord) -> String {
    format!(
        "ID: {}\n  Timestamp: {}\n  Temperature: {}\n  Humidity: {}\n  Water level: {}\n  Lamps: {}\n  Extinguishers: {}\n  Inspector: {}",
        rec.id,
        rec.timestamp,
        rec.temperature,
        rec.humidity,
        rec.water_level,
        rec.lamp_count,
        rec.extinguisher_count,
        rec.inspector,
    )
}

/// Time-ordered (timestamp, temperature, humidity) series for charting.
///
/// `None` when the store is empty, so the caller reports "nothing to chart"
/// instead of handing an empty dataset to a plotting tool.
pub fn series(conn: &Connection) -> AppResult<Option<Series>> {
    let records = load_all(conn)?;
    if records.is_empty() {
        return Ok(None);
    }

    let mut out = Series {
        timestamps: Vec::with_capacity(records.len()),
        temperatures: Vec::with_capacity(records.len()),
        humidities: Vec::with_capacity(records.len()),
    };

    for rec in &records {
        out.timestamps.push(rec.timestamp.clone());
        out.temperatures.push(rec.temperature);
        out.humidities.push(rec.humidity);
    }

    Ok(Some(out))
}

/// Flat export rows, one per record in id order.
///
/// `None` when the store is empty, so the caller reports "nothing to export"
/// instead of writing an empty file.
pub fn export_rows(conn: &Connection) -> AppResult<Option<Vec<RecordExport>>> {
    let records = load_all(conn)?;
    if records.is_empty() {
        return Ok(None);
    }

    Ok(Some(records.iter().map(RecordExport::from).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::ensure_schema;
    use crate::db::queries::insert_record;
    use crate::models::record::NewRecord;
    use rusqlite::Connection;

    fn seeded(temps: &[f64]) -> Connection {
        let conn = Connection::open_in_memory().expect("open in-memory db");
        ensure_schema(&conn).expect("schema");
        for (i, t) in temps.iter().enumerate() {
            let rec = NewRecord {
                temperature: *t,
                humidity: 50.0 + i as f64,
                water_level: "1.0".to_string(),
                lamp_count: 10,
                extinguisher_count: 2,
                inspector: format!("Inspector {i}"),
            };
            insert_record(&conn, &rec).expect("insert");
        }
        conn
    }

    #[test]
    fn series_preserves_insertion_order() {
        let conn = seeded(&[20.5, 21.0, 19.8]);
        let s = series(&conn).unwrap().expect("series present");

        assert_eq!(s.len(), 3);
        assert_eq!(s.temperatures, vec![20.5, 21.0, 19.8]);
        assert_eq!(s.humidities, vec![50.0, 51.0, 52.0]);

        // parallel sequences, chronologically non-decreasing
        assert_eq!(s.timestamps.len(), s.temperatures.len());
        assert!(s.timestamps.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn series_on_empty_store_signals_no_data() {
        let conn = seeded(&[]);
        assert!(series(&conn).unwrap().is_none());
    }

    #[test]
    fn listing_has_one_block_per_record_with_labels() {
        let conn = seeded(&[20.5, 21.0]);
        let blocks = listing(&conn).unwrap();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("ID: 1\n"));
        assert!(blocks[0].contains("Temperature: 20.5"));
        assert!(blocks[1].starts_with("ID: 2\n"));
        assert!(blocks[1].contains("Inspector: Inspector 1"));
    }

    #[test]
    fn export_rows_follow_id_order_and_signal_empty() {
        let conn = seeded(&[20.5, 21.0]);
        let rows = export_rows(&conn).unwrap().expect("rows present");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].id, 2);

        let empty = seeded(&[]);
        assert!(export_rows(&empty).unwrap().is_none());
    }
}
