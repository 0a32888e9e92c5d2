use crate::config::Config;
use crate::helper::{admin_helpers, auth_helpers, feed_helpers, form_helpers};
use crate::middleware::AuthenticatedUser;
use crate::models::AdminAction;
use crate::routes::{set_notification, take_notification};
use actix_multipart::Multipart;
use actix_session::Session;
use actix_web::{web, Error, HttpResponse, Responder};
use tera::{Context, Tera};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin", web::get().to(show_dashboard))
        .route("/admin", web::post().to(handle_action));
}

async fn show_dashboard(
    auth_user: AuthenticatedUser,
    session: Session,
    tera: web::Data<Tera>,
    pool: web::Data<crate::DbPool>,
) -> impl Responder {
    if !auth_user.is_admin {
        return HttpResponse::Found().append_header(("location", "/")).finish();
    }

    // The session may outlive the account. If the authenticated admin no
    // longer exists, purge the session and force a fresh login.
    if auth_helpers::fetch_user_by_id(&pool, auth_user.id).is_none() {
        session.purge();
        return HttpResponse::Found().append_header(("location", "/login")).finish();
    }

    let mut ctx = Context::new();
    ctx.insert("user", &auth_user);
    if let Some(notification) = take_notification(&session) {
        ctx.insert("notification", &notification);
    }

    match admin_helpers::fetch_all_users(&pool) {
        Ok(users) => ctx.insert("users", &users),
        Err(e) => {
            log::error!("Failed to fetch users for admin dashboard: {}", e);
            ctx.insert("users", &Vec::<String>::new());
        }
    }
    match feed_helpers::fetch_all_posts(&pool) {
        Ok(posts) => ctx.insert("posts", &posts),
        Err(e) => {
            log::error!("Failed to fetch posts for admin dashboard: {}", e);
            ctx.insert("posts", &Vec::<String>::new());
        }
    }
    match feed_helpers::fetch_all_events(&pool) {
        Ok(events) => ctx.insert("events", &events),
        Err(e) => {
            log::error!("Failed to fetch events for admin dashboard: {}", e);
            ctx.insert("events", &Vec::<String>::new());
        }
    }

    match tera.render("admin.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Error rendering admin dashboard.")
        }
    }
}

async fn handle_action(
    auth_user: AuthenticatedUser,
    session: Session,
    pool: web::Data<crate::DbPool>,
    config: web::Data<Config>,
    payload: Multipart,
) -> Result<HttpResponse, Error> {
    if !auth_user.is_admin {
        return Ok(HttpResponse::Found().append_header(("location", "/")).finish());
    }

    let form = form_helpers::collect_admin_form(payload).await?;
    let action = match AdminAction::from_form(&form.fields, form.background_image) {
        Ok(action) => action,
        Err(e) => {
            set_notification(&session, &e.to_string(), "error");
            return Ok(HttpResponse::Found().append_header(("location", "/admin")).finish());
        }
    };

    match action {
        AdminAction::CreateUser { username, password } => {
            match admin_helpers::create_new_user(&pool, &username, &password) {
                Ok(_) => set_notification(&session, "User created successfully!", "success"),
                Err(e) => {
                    log::error!("Failed to create user '{}': {}", username, e);
                    set_notification(&session, "Could not create user. The username may already be taken.", "error");
                }
            }
        }
        AdminAction::EditUser { user_id, username, password } => {
            match admin_helpers::update_user_account(&pool, user_id, &username, &password) {
                Ok(_) => set_notification(&session, "User updated successfully!", "success"),
                Err(admin_helpers::AdminHelperError::NotFound) => {
                    set_notification(&session, "User not found.", "error")
                }
                Err(e) => {
                    log::error!("Failed to update user_id {}: {}", user_id, e);
                    set_notification(&session, "Failed to update user. The username may already be taken.", "error");
                }
            }
        }
        AdminAction::DeleteUser { user_id } => {
            match admin_helpers::delete_user_account(&pool, user_id) {
                Ok(_) => set_notification(&session, "User deleted successfully!", "success"),
                Err(admin_helpers::AdminHelperError::NotFound) => {
                    set_notification(&session, "User not found.", "error")
                }
                Err(e) => {
                    log::error!("Failed to delete user_id {}: {}", user_id, e);
                    set_notification(&session, "Failed to delete user.", "error");
                }
            }
        }
        AdminAction::DeletePost { post_id } => {
            match admin_helpers::remove_post(&pool, post_id) {
                Ok(_) => set_notification(&session, "Post deleted successfully!", "success"),
                Err(admin_helpers::AdminHelperError::NotFound) => {
                    set_notification(&session, "Post not found.", "error")
                }
                Err(e) => {
                    log::error!("Failed to delete post {}: {}", post_id, e);
                    set_notification(&session, "Failed to delete post.", "error");
                }
            }
        }
        AdminAction::UploadBackground { image } => {
            match admin_helpers::save_background_image(&config, &image) {
                Ok(_) => set_notification(&session, "Background image updated successfully!", "success"),
                Err(e) => {
                    log::error!("Failed to write background image: {}", e);
                    set_notification(&session, "Failed to store the background image.", "error");
                }
            }
        }
        AdminAction::AddEvent { title, description, date } => {
            match admin_helpers::add_event(&pool, &title, &description, &date) {
                Ok(_) => set_notification(&session, "Event added successfully!", "success"),
                Err(e) => {
                    log::error!("Failed to add event '{}': {}", title, e);
                    set_notification(&session, "Failed to add event.", "error");
                }
            }
        }
        AdminAction::DeleteEvent { event_id } => {
            match admin_helpers::remove_event(&pool, event_id) {
                Ok(_) => set_notification(&session, "Event deleted successfully!", "success"),
                Err(admin_helpers::AdminHelperError::NotFound) => {
                    set_notification(&session, "Event not found.", "error")
                }
                Err(e) => {
                    log::error!("Failed to delete event {}: {}", event_id, e);
                    set_notification(&session, "Failed to delete event.", "error");
                }
            }
        }
    }

    Ok(HttpResponse::Found().append_header(("location", "/admin")).finish())
}
