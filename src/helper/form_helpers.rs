use actix_multipart::Multipart;
use actix_web::web::BytesMut;
use futures_util::StreamExt;
use std::collections::HashMap;

/// The decoded admin dashboard form: text fields keyed by name, plus the
/// raw bytes of the optional background image part.
pub struct AdminForm {
    pub fields: HashMap<String, String>,
    pub background_image: Option<Vec<u8>>,
}

/// Buffers a multipart form into memory. Text parts must be valid UTF-8;
/// only the `background_image` part is treated as binary.
pub async fn collect_admin_form(mut payload: Multipart) -> Result<AdminForm, actix_web::Error> {
    let mut fields = HashMap::new();
    let mut background_image = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let field_name = field
            .content_disposition()
            .get_name()
            .unwrap_or_default()
            .to_string();

        let mut data = BytesMut::new();
        while let Some(chunk) = field.next().await {
            data.extend_from_slice(&chunk?);
        }

        if field_name == "background_image" {
            if !data.is_empty() {
                background_image = Some(data.to_vec());
            }
        } else {
            let value = String::from_utf8(data.to_vec())
                .map_err(|_| actix_web::error::ErrorBadRequest("Invalid UTF-8 in form field."))?;
            fields.insert(field_name, value);
        }
    }

    Ok(AdminForm { fields, background_image })
}
