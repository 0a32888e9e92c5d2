use crate::helper::auth_helpers;
use crate::middleware::AuthenticatedUser;
use actix_session::Session;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use tera::{Context, Tera};

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/login", web::get().to(show_login_form))
        .route("/login", web::post().to(handle_login))
        .route("/logout", web::get().to(handle_logout));
}

async fn show_login_form(session: Session, tera: web::Data<Tera>) -> impl Responder {
    if session.get::<i32>("user_id").unwrap_or(None).is_some() {
        return HttpResponse::Found().append_header(("location", "/")).finish();
    }

    let mut ctx = Context::new();
    if let Some(error) = session.get::<String>("error").unwrap_or(None) {
        ctx.insert("error", &error);
        session.remove("error");
    }

    match tera.render("login.html", &ctx) {
        Ok(rendered) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(rendered),
        Err(err) => {
            log::error!("Template rendering error: {}", err);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

async fn handle_login(
    session: Session,
    pool: web::Data<crate::DbPool>,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let login_data = form.into_inner();

    match auth_helpers::verify_user_credentials(&pool, &login_data.username, &login_data.password) {
        Some(user) => {
            session.insert("user_id", user.id).unwrap();
            session.insert("username", user.username.clone()).unwrap();
            session.insert("is_admin", user.is_admin).unwrap();
            session.remove("error");
            auth_helpers::record_login(&pool, &user.username);
            HttpResponse::Found().append_header(("location", "/")).finish()
        }
        None => {
            // Deliberately generic: never reveals which half of the pair
            // was wrong.
            session.insert("error", "Invalid login credentials").unwrap();
            HttpResponse::Found().append_header(("location", "/login")).finish()
        }
    }
}

async fn handle_logout(_auth_user: AuthenticatedUser, session: Session) -> impl Responder {
    session.clear();
    HttpResponse::Found().append_header(("location", "/login")).finish()
}
