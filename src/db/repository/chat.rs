use rusqlite::{params, Connection};
use uuid::Uuid;

use super::{column_id, column_text, map_row_error};
use crate::db::DatabaseError;
use crate::models::{utc_timestamp, ChatRecord};

/// Append one chat exchange, stamped with the current UTC time.
///
/// Returns the id of the new row.
pub fn append_chat(
    conn: &Connection,
    user: &str,
    message: &str,
    reply: &str,
) -> Result<Uuid, DatabaseError> {
    let id = Uuid::new_v4();
    conn.execute(
        "INSERT INTO chats (id, user, message, bot, timestamp) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![id.to_string(), user, message, reply, utc_timestamp()],
    )?;
    Ok(id)
}

/// All chat exchanges, oldest first.
pub fn list_chats(conn: &Connection) -> Result<Vec<ChatRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user, message, bot, timestamp FROM chats ORDER BY rowid ASC",
    )?;
    let rows = stmt.query_map([], row_to_chat)?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| map_row_error("chats", e))
}

fn row_to_chat(row: &rusqlite::Row) -> Result<ChatRecord, rusqlite::Error> {
    Ok(ChatRecord {
        id: column_id(row, 0)?,
        user: column_text(row, 1)?.unwrap_or_default(),
        message: column_text(row, 2)?.unwrap_or_default(),
        reply: column_text(row, 3)?.unwrap_or_default(),
        timestamp: column_text(row, 4)?.unwrap_or_default(),
    })
}
