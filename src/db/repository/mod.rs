//! Repository layer, one sub-module per record kind.
//!
//! Every kind supports append and list only. Lists return rows in
//! insertion order (`ORDER BY rowid`).

mod chat;
mod reminder;
mod vitals;

use rusqlite::types::ValueRef;
use rusqlite::Row;
use uuid::Uuid;

use super::DatabaseError;

pub use chat::*;
pub use reminder::*;
pub use vitals::*;

/// Read a nullable column as text.
///
/// Rows written by the earlier service may hold INTEGER or REAL values in
/// text columns (numeric JSON was stored as-is), so those are rendered back
/// to their text form instead of failing the whole listing.
pub(crate) fn column_text(row: &Row, idx: usize) -> rusqlite::Result<Option<String>> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}

/// Parse a stored id column into a UUID.
pub(crate) fn column_id(row: &Row, idx: usize) -> rusqlite::Result<Uuid> {
    let id_str: String = row.get(idx)?;
    Uuid::parse_str(&id_str).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Map a row-conversion failure on an id column to `DatabaseError::InvalidId`.
pub(crate) fn map_row_error(table: &'static str, err: rusqlite::Error) -> DatabaseError {
    match err {
        rusqlite::Error::FromSqlConversionFailure(_, _, source) => DatabaseError::InvalidId {
            table,
            value: source.to_string(),
        },
        other => DatabaseError::Sqlite(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn column_text_renders_numeric_values() {
        let conn = open_memory_database().unwrap();
        let values: (Option<String>, Option<String>, Option<String>) = conn
            .query_row("SELECT 72, 5.5, NULL", [], |row| {
                Ok((column_text(row, 0)?, column_text(row, 1)?, column_text(row, 2)?))
            })
            .unwrap();
        assert_eq!(values.0.as_deref(), Some("72"));
        assert_eq!(values.1.as_deref(), Some("5.5"));
        assert_eq!(values.2, None);
    }

    #[test]
    fn column_id_rejects_non_uuid() {
        let conn = open_memory_database().unwrap();
        let result = conn.query_row("SELECT 'not-a-uuid'", [], |row| column_id(row, 0));
        let err = map_row_error("chats", result.unwrap_err());
        assert!(matches!(err, DatabaseError::InvalidId { table: "chats", .. }));
    }
}
