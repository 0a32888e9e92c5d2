pub mod admin_helpers;
pub mod auth_helpers;
pub mod feed_helpers;
pub mod form_helpers;
pub mod sanitization_helpers;
pub mod upload_helpers;
