use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered account. The stored bcrypt hash never leaves the database
/// layer, so this struct deliberately has no password field.
#[derive(Debug, Serialize, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
    pub last_login_time: Option<String>,
}

/// A post joined with its author's username for feed rendering.
#[derive(Debug, Serialize)]
pub struct PostWithAuthor {
    pub id: i32,
    pub user_id: i32,
    pub content: String,
    pub image: Option<String>,
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// One-shot flash message stored in the session and removed on first render.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Notification {
    pub message: String,
    pub r#type: String, // 'success' or 'error'
}

#[derive(Debug, Error, PartialEq)]
pub enum AdminActionError {
    #[error("Unknown admin action '{0}'.")]
    UnknownAction(String),
    #[error("Missing required field '{0}'.")]
    MissingField(&'static str),
    #[error("Field '{0}' is not a valid id.")]
    InvalidId(&'static str),
    #[error("No background image was supplied.")]
    MissingImage,
}

/// The closed set of dashboard commands. The form's `action` discriminator
/// plus its payload fields resolve to exactly one variant; anything else is
/// an error the caller reports instead of silently dropping the request.
#[derive(Debug)]
pub enum AdminAction {
    CreateUser { username: String, password: String },
    EditUser { user_id: i32, username: String, password: String },
    DeleteUser { user_id: i32 },
    DeletePost { post_id: i32 },
    UploadBackground { image: Vec<u8> },
    AddEvent { title: String, description: String, date: String },
    DeleteEvent { event_id: i32 },
}

impl AdminAction {
    pub fn from_form(
        fields: &HashMap<String, String>,
        background_image: Option<Vec<u8>>,
    ) -> Result<Self, AdminActionError> {
        fn text(
            fields: &HashMap<String, String>,
            name: &'static str,
        ) -> Result<String, AdminActionError> {
            match fields.get(name).map(|s| s.trim()) {
                Some(value) if !value.is_empty() => Ok(value.to_string()),
                _ => Err(AdminActionError::MissingField(name)),
            }
        }

        fn id(
            fields: &HashMap<String, String>,
            name: &'static str,
        ) -> Result<i32, AdminActionError> {
            let raw = text(fields, name)?;
            raw.parse::<i32>().map_err(|_| AdminActionError::InvalidId(name))
        }

        let action = text(fields, "action")?;
        match action.as_str() {
            "create" => Ok(AdminAction::CreateUser {
                username: text(fields, "username")?,
                password: text(fields, "password")?,
            }),
            "edit" => Ok(AdminAction::EditUser {
                user_id: id(fields, "user_id")?,
                username: text(fields, "username")?,
                password: text(fields, "password")?,
            }),
            "delete" => Ok(AdminAction::DeleteUser { user_id: id(fields, "user_id")? }),
            "delete_post" => Ok(AdminAction::DeletePost { post_id: id(fields, "post_id")? }),
            "upload_background" => match background_image {
                Some(image) if !image.is_empty() => Ok(AdminAction::UploadBackground { image }),
                _ => Err(AdminActionError::MissingImage),
            },
            "add_event" => Ok(AdminAction::AddEvent {
                title: text(fields, "title")?,
                description: text(fields, "description")?,
                date: text(fields, "date")?,
            }),
            "delete_event" => Ok(AdminAction::DeleteEvent { event_id: id(fields, "event_id")? }),
            other => Err(AdminActionError::UnknownAction(other.to_string())),
        }
    }
}

pub mod db_operations;

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn create_action_parses() {
        let fields = form(&[("action", "create"), ("username", "bob"), ("password", "pw")]);
        match AdminAction::from_form(&fields, None).unwrap() {
            AdminAction::CreateUser { username, password } => {
                assert_eq!(username, "bob");
                assert_eq!(password, "pw");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn add_event_keeps_literal_field_values() {
        let fields = form(&[
            ("action", "add_event"),
            ("title", "T"),
            ("description", "D"),
            ("date", "2024-01-01"),
        ]);
        match AdminAction::from_form(&fields, None).unwrap() {
            AdminAction::AddEvent { title, description, date } => {
                assert_eq!(title, "T");
                assert_eq!(description, "D");
                assert_eq!(date, "2024-01-01");
            }
            other => panic!("unexpected action: {:?}", other),
        }
    }

    #[test]
    fn unknown_action_is_rejected() {
        let fields = form(&[("action", "drop_tables")]);
        assert_eq!(
            AdminAction::from_form(&fields, None).unwrap_err(),
            AdminActionError::UnknownAction("drop_tables".to_string())
        );
    }

    #[test]
    fn missing_discriminator_is_rejected() {
        let fields = form(&[("username", "bob")]);
        assert_eq!(
            AdminAction::from_form(&fields, None).unwrap_err(),
            AdminActionError::MissingField("action")
        );
    }

    #[test]
    fn edit_requires_numeric_user_id() {
        let fields = form(&[
            ("action", "edit"),
            ("user_id", "bogus"),
            ("username", "bob"),
            ("password", "pw"),
        ]);
        assert_eq!(
            AdminAction::from_form(&fields, None).unwrap_err(),
            AdminActionError::InvalidId("user_id")
        );
    }

    #[test]
    fn background_upload_requires_file_bytes() {
        let fields = form(&[("action", "upload_background")]);
        assert_eq!(
            AdminAction::from_form(&fields, None).unwrap_err(),
            AdminActionError::MissingImage
        );
        assert_eq!(
            AdminAction::from_form(&fields, Some(Vec::new())).unwrap_err(),
            AdminActionError::MissingImage
        );
        assert!(AdminAction::from_form(&fields, Some(vec![0xff, 0xd8])).is_ok());
    }
}
