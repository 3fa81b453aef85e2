use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{column_id, column_text, map_row_error};
use crate::db::DatabaseError;
use crate::models::{utc_timestamp, NewVitals, VitalsRecord};

/// Append one vitals reading.
///
/// The client timestamp is kept verbatim; without one the current UTC time
/// is recorded. Values are not range- or format-checked.
pub fn append_vitals(conn: &Connection, new: &NewVitals) -> Result<VitalsRecord, DatabaseError> {
    let record = VitalsRecord {
        id: Uuid::new_v4(),
        blood_pressure: new.blood_pressure.clone(),
        blood_sugar: new.blood_sugar.clone(),
        pulse: new.pulse.clone(),
        timestamp: Some(new.timestamp.clone().unwrap_or_else(utc_timestamp)),
        notes: new.notes.clone(),
    };

    conn.execute(
        "INSERT INTO vitals (id, blood_pressure, blood_sugar, pulse, timestamp, notes)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id.to_string(),
            record.blood_pressure,
            record.blood_sugar,
            record.pulse,
            record.timestamp,
            record.notes,
        ],
    )?;
    Ok(record)
}

/// All vitals readings, oldest first.
pub fn list_vitals(conn: &Connection) -> Result<Vec<VitalsRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, blood_pressure, blood_sugar, pulse, timestamp, notes
         FROM vitals
         ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map([], row_to_vitals)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| map_row_error("vitals", e))
}

fn row_to_vitals(row: &rusqlite::Row) -> Result<VitalsRecord, rusqlite::Error> {
    Ok(VitalsRecord {
        id: column_id(row, 0)?,
        blood_pressure: column_text(row, 1)?,
        blood_sugar: column_text(row, 2)?,
        pulse: column_text(row, 3)?,
        timestamp: column_text(row, 4)?,
        notes: column_text(row, 5)?,
    })
}
