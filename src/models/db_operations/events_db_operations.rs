use crate::models::Event;
use rusqlite::{params, Connection, Error as RusqliteError};

pub fn create_event(
    conn: &Connection,
    title: &str,
    description: &str,
    date: &str,
) -> Result<(), RusqliteError> {
    conn.execute(
        "INSERT INTO events (title, description, date) VALUES (?1, ?2, ?3)",
        params![title, description, date],
    )?;
    Ok(())
}

pub fn read_all_events(conn: &Connection) -> Result<Vec<Event>, RusqliteError> {
    let mut stmt = conn.prepare("SELECT id, title, description, date FROM events ORDER BY id")?;
    let event_iter = stmt.query_map([], |row| {
        Ok(Event {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            date: row.get(3)?,
        })
    })?;

    let events = event_iter.filter_map(|e| e.ok()).collect();
    Ok(events)
}

pub fn delete_event(conn: &Connection, event_id: i32) -> Result<usize, RusqliteError> {
    conn.execute("DELETE FROM events WHERE id = ?1", [event_id])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::db_setup;

    fn test_conn() -> Connection {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
        db_setup::setup_database(&mut conn).unwrap();
        conn
    }

    #[test]
    fn created_event_keeps_literal_fields() {
        let conn = test_conn();
        create_event(&conn, "T", "D", "2024-01-01").unwrap();

        let events = read_all_events(&conn).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "T");
        assert_eq!(events[0].description, "D");
        assert_eq!(events[0].date, "2024-01-01");
    }

    #[test]
    fn delete_removes_exactly_that_event() {
        let conn = test_conn();
        create_event(&conn, "first", "d", "2024-01-01").unwrap();
        create_event(&conn, "second", "d", "2024-02-01").unwrap();
        let events = read_all_events(&conn).unwrap();

        assert_eq!(delete_event(&conn, events[0].id).unwrap(), 1);
        let remaining = read_all_events(&conn).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "second");
        assert_eq!(delete_event(&conn, events[0].id).unwrap(), 0);
    }
}
