use crate::models::db_operations::users_db_operations;
use crate::models::User;
use crate::DbPool;
use actix_web::web;

/// Checks the supplied pair against the stored bcrypt hash. Returns the user
/// row on a match; the caller never sees which half of the pair was wrong.
pub fn verify_user_credentials(
    pool: &web::Data<DbPool>,
    username: &str,
    password: &str,
) -> Option<User> {
    let conn = pool.get().ok()?;
    users_db_operations::verify_credentials(&conn, username, password)
}

pub fn record_login(pool: &web::Data<DbPool>, username: &str) {
    if let Ok(conn) = pool.get() {
        users_db_operations::update_last_login_time(&conn, username).ok();
    }
}

pub fn fetch_user_by_id(pool: &web::Data<DbPool>, user_id: i32) -> Option<User> {
    let conn = pool.get().ok()?;
    users_db_operations::read_user_by_id(&conn, user_id)
}
