use crate::models::db_operations::{events_db_operations, posts_db_operations};
use crate::models::{Event, PostWithAuthor};
use crate::DbPool;
use actix_web::web;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedHelperError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("R2D2 Pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub fn fetch_all_posts(pool: &web::Data<DbPool>) -> Result<Vec<PostWithAuthor>, FeedHelperError> {
    let conn = pool.get()?;
    Ok(posts_db_operations::read_all_posts(&conn)?)
}

pub fn fetch_all_events(pool: &web::Data<DbPool>) -> Result<Vec<Event>, FeedHelperError> {
    let conn = pool.get()?;
    Ok(events_db_operations::read_all_events(&conn)?)
}
