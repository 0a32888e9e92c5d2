use crate::models::User;
use bcrypt::{hash, verify, BcryptError};
use chrono::Utc;
use rusqlite::{params, Connection, Error as RusqliteError};

fn bcrypt_to_rusqlite_error(e: BcryptError) -> RusqliteError {
    RusqliteError::ToSqlConversionFailure(Box::new(e))
}

pub fn create_user(
    conn: &Connection,
    username: &str,
    password: &str,
    is_admin: bool,
) -> Result<(), RusqliteError> {
    let hashed_password = hash(password, bcrypt::DEFAULT_COST).map_err(bcrypt_to_rusqlite_error)?;
    conn.execute(
        "INSERT INTO users (username, password_hash, is_admin) VALUES (?1, ?2, ?3)",
        params![username, hashed_password, is_admin],
    )?;
    Ok(())
}

pub fn read_all_users(conn: &Connection) -> Result<Vec<User>, RusqliteError> {
    let mut stmt = conn
        .prepare("SELECT id, username, is_admin, last_login_time FROM users ORDER BY id")?;
    let user_iter = stmt.query_map([], |row| {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            is_admin: row.get(2)?,
            last_login_time: row.get(3)?,
        })
    })?;

    let users = user_iter.filter_map(|u| u.ok()).collect();
    Ok(users)
}

pub fn read_user_by_id(conn: &Connection, user_id: i32) -> Option<User> {
    conn.query_row(
        "SELECT id, username, is_admin, last_login_time FROM users WHERE id = ?1",
        [user_id],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                is_admin: row.get(2)?,
                last_login_time: row.get(3)?,
            })
        },
    )
    .ok()
}

pub fn read_user_by_username(conn: &Connection, username: &str) -> Option<User> {
    conn.query_row(
        "SELECT id, username, is_admin, last_login_time FROM users WHERE username = ?1",
        [username],
        |row| {
            Ok(User {
                id: row.get(0)?,
                username: row.get(1)?,
                is_admin: row.get(2)?,
                last_login_time: row.get(3)?,
            })
        },
    )
    .ok()
}

/// Overwrites both the username and the password of an existing account.
/// Returns the number of affected rows; 0 means no such user.
pub fn update_user(
    conn: &Connection,
    user_id: i32,
    username: &str,
    password: &str,
) -> Result<usize, RusqliteError> {
    let hashed_password = hash(password, bcrypt::DEFAULT_COST).map_err(bcrypt_to_rusqlite_error)?;
    conn.execute(
        "UPDATE users SET username = ?1, password_hash = ?2 WHERE id = ?3",
        params![username, hashed_password, user_id],
    )
}

pub fn delete_user(conn: &Connection, user_id: i32) -> Result<usize, RusqliteError> {
    conn.execute("DELETE FROM users WHERE id = ?1", [user_id])
}

/// Checks a username/password pair against the stored bcrypt hash. Yields
/// the user row on a match and never exposes the hash itself.
pub fn verify_credentials(conn: &Connection, username: &str, password: &str) -> Option<User> {
    let stored_hash: String = conn
        .query_row(
            "SELECT password_hash FROM users WHERE username = ?1",
            [username],
            |row| row.get(0),
        )
        .ok()?;

    if verify(password, &stored_hash).unwrap_or(false) {
        read_user_by_username(conn, username)
    } else {
        None
    }
}

pub fn update_last_login_time(conn: &Connection, username: &str) -> Result<(), RusqliteError> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "UPDATE users SET last_login_time = ?1 WHERE username = ?2",
        params![now, username],
    )?;
    Ok(())
}
