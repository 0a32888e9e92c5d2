use crate::config::Config;
use crate::helper::upload_helpers;
use crate::middleware::AuthenticatedUser;
use crate::routes::{set_notification, take_notification};
use actix_multipart::Multipart;
use actix_session::Session;
use actix_web::{web, Error, HttpResponse, Responder};
use tera::{Context, Tera};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(show_profile))
        .route("/profile", web::post().to(handle_upload));
}

async fn show_profile(
    auth_user: AuthenticatedUser,
    session: Session,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut ctx = Context::new();
    ctx.insert("user", &auth_user);
    if let Some(notification) = take_notification(&session) {
        ctx.insert("notification", &notification);
    }

    match tera.render("profile.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Error rendering profile page.")
        }
    }
}

async fn handle_upload(
    auth_user: AuthenticatedUser,
    session: Session,
    config: web::Data<Config>,
    pool: web::Data<crate::DbPool>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    match upload_helpers::save_post_upload(config, pool, auth_user.id, payload).await {
        Ok(Some(_)) => {
            set_notification(&session, "File uploaded and post created successfully!", "success");
        }
        // No file part in the request: nothing is created, nothing reported.
        Ok(None) => {}
        Err(e) => {
            log::error!("Failed to store upload for user {}: {}", auth_user.id, e);
            set_notification(&session, "Failed to store the uploaded file.", "error");
        }
    }
    Ok(HttpResponse::Found().append_header(("location", "/profile")).finish())
}
