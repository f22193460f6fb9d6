//! Service Endpoints

use super::{encode_component, ApiClient, Method, Transport};
use crate::error::ApiError;
use crate::models::{Service, ServiceInput};
use crate::session::KeyValueStore;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        self.get("/service/services").await?.into_list()
    }

    pub async fn get_service(&self, id: &str) -> Result<Service, ApiError> {
        self.get(&format!("/service/{}", encode_component(id)))
            .await?
            .into_json()
    }

    pub async fn create_service(&self, input: &ServiceInput) -> Result<(), ApiError> {
        self.send_json(Method::Post, "/service/create-service", input).await?;
        Ok(())
    }

    pub async fn update_service(&self, id: &str, input: &ServiceInput) -> Result<(), ApiError> {
        let endpoint = format!("/service/{}", encode_component(id));
        self.send_json(Method::Put, &endpoint, input).await?;
        Ok(())
    }

    pub async fn delete_service(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/service/services?serviceId={}", encode_component(id)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use crate::api::testing::{client, FakeBackend};
    use crate::error::ApiError;
    use crate::models::ServiceInput;

    fn haircut() -> ServiceInput {
        ServiceInput {
            name: "Corte".into(),
            description: "Corte masculino".into(),
            default_duration_in_minutes: 40,
            default_price: 45.0,
        }
    }

    #[test]
    fn test_create_list_delete() {
        let backend = FakeBackend::default();
        let api = client(&backend);

        block_on(api.create_service(&haircut())).unwrap();
        let listed = block_on(api.list_services()).unwrap();
        let created: Vec<_> = listed.iter().filter(|s| s.name == "Corte").collect();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].default_duration_in_minutes, 40);

        let id = created[0].id.clone();
        block_on(api.delete_service(&id)).unwrap();
        assert_eq!(
            backend.last_request().url,
            format!("http://api.test/service/services?serviceId={}", id)
        );
        assert!(block_on(api.list_services()).unwrap().iter().all(|s| s.id != id));
    }

    #[test]
    fn test_update_and_fetch_by_id() {
        let backend = FakeBackend::default();
        backend.add_service("s1", "Barba");
        let api = client(&backend);

        let mut input = haircut();
        input.name = "Barba completa".into();
        block_on(api.update_service("s1", &input)).unwrap();
        assert_eq!(block_on(api.get_service("s1")).unwrap().name, "Barba completa");

        assert!(matches!(
            block_on(api.get_service("missing")),
            Err(ApiError::Http { status: 404, .. })
        ));
    }
}
