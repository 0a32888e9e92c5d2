use actix_session::SessionExt;
use actix_web::{dev, http::StatusCode, FromRequest, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use std::future::{ready, Ready};

/// Rejection produced when a protected route is hit without a session.
/// Rendered as a 302 to the login form rather than a bare 401.
#[derive(Debug)]
pub struct LoginRequired;

impl fmt::Display for LoginRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication required")
    }
}

impl ResponseError for LoginRequired {
    fn status_code(&self) -> StatusCode {
        StatusCode::FOUND
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Found()
            .append_header(("location", "/login"))
            .finish()
    }
}

/// The current actor, resolved from the signed session cookie.
#[derive(Serialize)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        let session = req.get_session();
        if let (Ok(Some(id)), Ok(Some(username)), Ok(Some(is_admin))) = (
            session.get::<i32>("user_id"),
            session.get::<String>("username"),
            session.get::<bool>("is_admin"),
        ) {
            ready(Ok(AuthenticatedUser { id, username, is_admin }))
        } else {
            ready(Err(LoginRequired.into()))
        }
    }
}
