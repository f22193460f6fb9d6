//! Speciality Endpoints
//!
//! Path and write verb come from [`Config`](crate::config::Config); backend
//! builds disagree on both.

use serde_json::Value;

use super::{ApiBody, ApiClient, Transport};
use crate::error::ApiError;
use crate::session::KeyValueStore;

/// Pull the speciality out of whatever shape the read endpoint returned
pub fn speciality_from_body(body: &ApiBody) -> Option<String> {
    fn from_value(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.trim().to_string()).filter(|s| !s.is_empty()),
            Value::Object(map) => ["speciality", "specialities", "name"]
                .iter()
                .find_map(|key| map.get(*key).and_then(from_value)),
            Value::Array(values) => values.iter().find_map(from_value),
            _ => None,
        }
    }

    match body {
        ApiBody::Empty => None,
        ApiBody::Json(value) => from_value(value),
        ApiBody::Text(text) => Some(text.trim().to_string()).filter(|s| !s.is_empty()),
    }
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// Current provider speciality, `None` when unset
    pub async fn get_speciality(&self) -> Result<Option<String>, ApiError> {
        let path = self.config().speciality_path.clone();
        let body = self.get(&path).await?;
        Ok(speciality_from_body(&body))
    }

    /// Replace the speciality; the body is a bare JSON string
    pub async fn save_speciality(&self, speciality: &str) -> Result<(), ApiError> {
        let path = self.config().speciality_path.clone();
        let method = self.config().speciality_write;
        self.send_json(method, &path, speciality.trim()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    use crate::api::testing::{client, FakeBackend};
    use crate::api::Method;

    #[test]
    fn test_extract_from_known_shapes() {
        assert_eq!(speciality_from_body(&ApiBody::Empty), None);
        assert_eq!(speciality_from_body(&ApiBody::Text(" Barbearia ".into())), Some("Barbearia".into()));
        assert_eq!(speciality_from_body(&ApiBody::Json(json!("Manicure"))), Some("Manicure".into()));
        assert_eq!(
            speciality_from_body(&ApiBody::Json(json!({ "speciality": "Podologia" }))),
            Some("Podologia".into())
        );
        assert_eq!(
            speciality_from_body(&ApiBody::Json(json!([{ "id": 1, "speciality": "" }, { "speciality": "Massagem" }]))),
            Some("Massagem".into())
        );
        assert_eq!(speciality_from_body(&ApiBody::Json(json!([]))), None);
    }

    #[test]
    fn test_save_then_read() {
        let backend = FakeBackend::default();
        let api = client(&backend);
        assert_eq!(block_on(api.get_speciality()).unwrap(), None);

        block_on(api.save_speciality("  Barbearia ")).unwrap();
        let sent = backend.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_deref(), Some("\"Barbearia\""));

        assert_eq!(block_on(api.get_speciality()).unwrap(), Some("Barbearia".into()));
        assert_eq!(backend.speciality(), Some("Barbearia".into()));
    }
}
