use bcrypt::{hash, BcryptError, DEFAULT_COST};
use rusqlite::{params, Connection, Result as RusqliteResult, Transaction};
use thiserror::Error;

/// The reserved account created at first initialization.
pub const SEED_ADMIN_USERNAME: &str = "admin";
const SEED_ADMIN_PASSWORD: &str = "admin";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

fn bcrypt_to_rusqlite_error(e: BcryptError) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(e))
}

/// Creates the application schema and seeds the admin account. Safe to run
/// any number of times: tables use IF NOT EXISTS and the seed insert is
/// ignored once a user with the reserved name exists.
pub fn setup_database(conn: &mut Connection) -> Result<(), SetupError> {
    let tx = conn.transaction()?;

    println!("- Creating 'users' table...");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            is_admin INTEGER NOT NULL DEFAULT 0,
            last_login_time TEXT
        )",
        [],
    )?;

    println!("- Creating 'posts' table...");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            content TEXT NOT NULL,
            image TEXT,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        )",
        [],
    )?;

    println!("- Creating 'events' table...");
    tx.execute(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            date TEXT NOT NULL
        )",
        [],
    )?;

    seed_admin(&tx)?;

    tx.commit()?;
    Ok(())
}

fn seed_admin(tx: &Transaction) -> RusqliteResult<()> {
    println!("- Seeding '{}' account...", SEED_ADMIN_USERNAME);
    let hashed_password =
        hash(SEED_ADMIN_PASSWORD, DEFAULT_COST).map_err(bcrypt_to_rusqlite_error)?;
    tx.execute(
        "INSERT OR IGNORE INTO users (username, password_hash, is_admin) VALUES (?1, ?2, 1)",
        params![SEED_ADMIN_USERNAME, hashed_password],
    )?;
    Ok(())
}
