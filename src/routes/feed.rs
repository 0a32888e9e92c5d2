use crate::helper::feed_helpers;
use crate::middleware::AuthenticatedUser;
use crate::models::{Event, PostWithAuthor};
use crate::routes::take_notification;
use actix_session::Session;
use actix_web::{web, HttpResponse, Responder};
use tera::{Context, Tera};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(show_home))
        .route("/posts", web::get().to(show_posts));
}

fn insert_posts(ctx: &mut Context, pool: &web::Data<crate::DbPool>) {
    match feed_helpers::fetch_all_posts(pool) {
        Ok(posts) => ctx.insert("posts", &posts),
        Err(e) => {
            log::error!("Failed to fetch posts for feed: {}", e);
            ctx.insert("posts", &Vec::<PostWithAuthor>::new());
        }
    }
}

async fn show_home(
    auth_user: AuthenticatedUser,
    session: Session,
    tera: web::Data<Tera>,
    pool: web::Data<crate::DbPool>,
) -> impl Responder {
    let mut ctx = Context::new();
    ctx.insert("user", &auth_user);
    if let Some(notification) = take_notification(&session) {
        ctx.insert("notification", &notification);
    }

    insert_posts(&mut ctx, &pool);
    match feed_helpers::fetch_all_events(&pool) {
        Ok(events) => ctx.insert("events", &events),
        Err(e) => {
            log::error!("Failed to fetch events for feed: {}", e);
            ctx.insert("events", &Vec::<Event>::new());
        }
    }

    match tera.render("home.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Error rendering home page.")
        }
    }
}

async fn show_posts(
    auth_user: AuthenticatedUser,
    tera: web::Data<Tera>,
    pool: web::Data<crate::DbPool>,
) -> impl Responder {
    let mut ctx = Context::new();
    ctx.insert("user", &auth_user);
    insert_posts(&mut ctx, &pool);

    match tera.render("posts.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Error rendering posts page.")
        }
    }
}
