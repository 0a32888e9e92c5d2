use crate::config::Config;
use crate::helper::sanitization_helpers;
use crate::models::db_operations::{
    events_db_operations, posts_db_operations, users_db_operations,
};
use crate::models::User;
use crate::DbPool;
use actix_web::web;
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminHelperError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No matching record found")]
    NotFound,
}

fn get_conn(
    pool: &web::Data<DbPool>,
) -> Result<r2d2::PooledConnection<r2d2_sqlite::SqliteConnectionManager>, AdminHelperError> {
    pool.get().map_err(AdminHelperError::Pool)
}

pub fn create_new_user(
    pool: &web::Data<DbPool>,
    username: &str,
    password: &str,
) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    let clean_username = sanitization_helpers::strip_all_html(username);
    users_db_operations::create_user(&conn, &clean_username, password, false)?;
    Ok(())
}

pub fn fetch_all_users(pool: &web::Data<DbPool>) -> Result<Vec<User>, AdminHelperError> {
    let conn = get_conn(pool)?;
    Ok(users_db_operations::read_all_users(&conn)?)
}

pub fn update_user_account(
    pool: &web::Data<DbPool>,
    user_id: i32,
    username: &str,
    password: &str,
) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    let clean_username = sanitization_helpers::strip_all_html(username);
    match users_db_operations::update_user(&conn, user_id, &clean_username, password)? {
        0 => Err(AdminHelperError::NotFound),
        _ => Ok(()),
    }
}

pub fn delete_user_account(pool: &web::Data<DbPool>, user_id: i32) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    match users_db_operations::delete_user(&conn, user_id)? {
        0 => Err(AdminHelperError::NotFound),
        _ => Ok(()),
    }
}

pub fn remove_post(pool: &web::Data<DbPool>, post_id: i32) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    match posts_db_operations::delete_post(&conn, post_id)? {
        0 => Err(AdminHelperError::NotFound),
        _ => Ok(()),
    }
}

pub fn add_event(
    pool: &web::Data<DbPool>,
    title: &str,
    description: &str,
    date: &str,
) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    events_db_operations::create_event(
        &conn,
        &sanitization_helpers::strip_all_html(title),
        &sanitization_helpers::strip_all_html(description),
        &sanitization_helpers::strip_all_html(date),
    )?;
    Ok(())
}

pub fn remove_event(pool: &web::Data<DbPool>, event_id: i32) -> Result<(), AdminHelperError> {
    let conn = get_conn(pool)?;
    match events_db_operations::delete_event(&conn, event_id)? {
        0 => Err(AdminHelperError::NotFound),
        _ => Ok(()),
    }
}

/// Overwrites the single site-wide background image in place. No history is
/// kept; the previous file is gone after this returns.
pub fn save_background_image(config: &Config, image: &[u8]) -> Result<(), AdminHelperError> {
    fs::create_dir_all(&config.background_path)?;
    fs::write(config.background_file(), image)?;
    Ok(())
}
