use crate::models::Notification;
use actix_session::Session;

pub mod admin;
pub mod auth;
pub mod feed;
pub mod profile;

pub(crate) fn set_notification(session: &Session, message: &str, r#type: &str) {
    session
        .insert(
            "notification",
            &Notification { message: message.to_string(), r#type: r#type.to_string() },
        )
        .unwrap();
}

/// Pops the one-shot flash message, if any; it is gone after this call.
pub(crate) fn take_notification(session: &Session) -> Option<Notification> {
    if let Ok(Some(notification)) = session.get::<Notification>("notification") {
        session.remove("notification");
        Some(notification)
    } else {
        None
    }
}
