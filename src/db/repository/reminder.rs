use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{column_id, column_text, map_row_error};
use crate::db::DatabaseError;
use crate::models::{NewReminder, ReminderRecord};

/// Append one reminder. Title and time are validated by the caller.
pub fn append_reminder(
    conn: &Connection,
    new: &NewReminder,
) -> Result<ReminderRecord, DatabaseError> {
    let record = ReminderRecord {
        id: Uuid::new_v4(),
        title: new.title.clone(),
        time: new.time.clone(),
        notes: new.notes.clone(),
    };

    conn.execute(
        "INSERT INTO reminders (id, title, time, notes) VALUES (?1, ?2, ?3, ?4)",
        params![record.id.to_string(), record.title, record.time, record.notes],
    )?;
    Ok(record)
}

/// All reminders, oldest first.
pub fn list_reminders(conn: &Connection) -> Result<Vec<ReminderRecord>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, title, time, notes FROM reminders ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], row_to_reminder)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| map_row_error("reminders", e))
}

fn row_to_reminder(row: &rusqlite::Row) -> Result<ReminderRecord, rusqlite::Error> {
    Ok(ReminderRecord {
        id: column_id(row, 0)?,
        title: column_text(row, 1)?.unwrap_or_default(),
        time: column_text(row, 2)?.unwrap_or_default(),
        notes: column_text(row, 3)?,
    })
}
