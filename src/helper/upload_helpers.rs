use crate::config::Config;
use crate::models::db_operations::posts_db_operations;
use crate::DbPool;
use actix_multipart::Multipart;
use actix_web::web;
use futures_util::StreamExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed placeholder text for posts created through the upload form.
pub const UPLOAD_POST_CONTENT: &str = "Uploaded an image";

/// Streams the request's `file` part into the upload directory and creates
/// a post owned by the caller. The file keeps the client-supplied name
/// (final path component only), so a repeated name silently overwrites.
/// Returns the stored file name, or None when no file was supplied, in
/// which case no post is created either.
pub async fn save_post_upload(
    config: web::Data<Config>,
    pool: web::Data<DbPool>,
    user_id: i32,
    mut payload: Multipart,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let mut saved_name: Option<String> = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .get_name()
            .unwrap_or_default()
            .to_string();

        if field_name != "file" || saved_name.is_some() {
            // At most one file per request; drain anything else.
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let supplied = field
            .content_disposition()
            .get_filename()
            .unwrap_or_default()
            .to_string();
        let file_name = match Path::new(&supplied).file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => {
                // An empty file input still arrives as a part, just without
                // a usable name. Treat it as "no file supplied".
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
                continue;
            }
        };

        let upload_dir = PathBuf::from(&config.upload_path);
        web::block({
            let dir = upload_dir.clone();
            move || fs::create_dir_all(&dir)
        })
        .await??;

        let final_path = upload_dir.join(&file_name);
        let mut f = web::block({
            let final_path = final_path.clone();
            move || fs::File::create(final_path)
        })
        .await??;

        while let Some(chunk) = field.next().await {
            let data = chunk?;
            f = web::block(move || f.write_all(&data).map(|_| f)).await??;
        }

        saved_name = Some(file_name);
    }

    if let Some(name) = &saved_name {
        let conn = pool.get()?;
        posts_db_operations::create_post(&conn, user_id, UPLOAD_POST_CONTENT, Some(name))?;
    }

    Ok(saved_name)
}
