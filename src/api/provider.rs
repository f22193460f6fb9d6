//! Service Provider Endpoints

use super::{encode_component, ApiClient, Transport};
use crate::error::ApiError;
use crate::models::ServiceProvider;
use crate::session::KeyValueStore;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_providers(&self) -> Result<Vec<ServiceProvider>, ApiError> {
        self.get("/serviceProvider/all").await?.into_list()
    }

    pub async fn get_provider(&self, id: &str) -> Result<ServiceProvider, ApiError> {
        self.get(&format!("/serviceProvider/{}", encode_component(id)))
            .await?
            .into_json()
    }
}
