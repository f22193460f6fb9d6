//! Appointment Endpoints
//!
//! Listing joins each appointment with its service and provider. Lookups run
//! concurrently, one per distinct id, and a failed lookup only costs the label.

use std::collections::{BTreeSet, HashMap};

use futures::future::join_all;

use super::{encode_component, ApiClient, Method, Transport};
use crate::error::ApiError;
use crate::models::{Appointment, AppointmentRequest, AppointmentRow};
use crate::session::KeyValueStore;

pub fn service_fallback_label(id: &str) -> String {
    format!("Serviço #{}", id)
}

pub fn provider_fallback_label(id: &str) -> String {
    format!("Prestador #{}", id)
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get("/appointment/all").await?.into_list()
    }

    /// Appointments with display labels resolved
    pub async fn list_appointment_rows(&self) -> Result<Vec<AppointmentRow>, ApiError> {
        let appointments = self.list_appointments().await?;

        let service_ids: BTreeSet<&str> = appointments.iter().map(|a| a.service_id.as_str()).collect();
        let provider_ids: BTreeSet<&str> =
            appointments.iter().map(|a| a.service_provider_id.as_str()).collect();

        let service_lookups = join_all(service_ids.iter().map(|id| async move {
            let label = match self.get_service(id).await {
                Ok(service) => Some(service.name),
                Err(e) => {
                    log::warn!("[APPOINTMENTS] Service {} lookup failed: {}", id, e);
                    None
                }
            };
            (id.to_string(), label)
        }));
        let provider_lookups = join_all(provider_ids.iter().map(|id| async move {
            let label = match self.get_provider(id).await {
                Ok(provider) => Some(provider.display_name()),
                Err(e) => {
                    log::warn!("[APPOINTMENTS] Provider {} lookup failed: {}", id, e);
                    None
                }
            };
            (id.to_string(), label)
        }));
        let (services, providers) = futures::join!(service_lookups, provider_lookups);

        let services: HashMap<String, Option<String>> = services.into_iter().collect();
        let providers: HashMap<String, Option<String>> = providers.into_iter().collect();

        Ok(appointments
            .into_iter()
            .map(|appointment| AppointmentRow {
                service_label: services
                    .get(&appointment.service_id)
                    .cloned()
                    .flatten()
                    .unwrap_or_else(|| service_fallback_label(&appointment.service_id)),
                provider_label: providers
                    .get(&appointment.service_provider_id)
                    .cloned()
                    .flatten()
                    .unwrap_or_else(|| provider_fallback_label(&appointment.service_provider_id)),
                appointment,
            })
            .collect())
    }

    /// Book an appointment; the backend reads the payload from the query string
    pub async fn create_appointment(&self, request: &AppointmentRequest) -> Result<(), ApiError> {
        let endpoint = format!(
            "/appointment/create-appointment?serviceId={}&serviceProviderId={}&startDateTime={}",
            encode_component(&request.service_id),
            encode_component(&request.service_provider_id),
            encode_component(&request.start_date_time),
        );
        self.request(Method::Post, &endpoint, &[], None).await?;
        Ok(())
    }

    pub async fn delete_appointment(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/appointment/{}", encode_component(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    use crate::api::testing::{client, FakeBackend};
    use crate::models::AppointmentStatus;

    #[test]
    fn test_failed_lookup_degrades_to_fallback_label() {
        let backend = FakeBackend::default();
        backend.add_service("s1", "Corte");
        backend.add_service("s2", "Barba");
        backend.add_provider("p1", "joao");
        backend.add_appointment("a1", "s1", "p1", AppointmentStatus::Scheduled);
        backend.add_appointment("a2", "s2", "p1", AppointmentStatus::Confirmed);
        backend.add_appointment("a3", "s1", "p1", AppointmentStatus::Completed);
        backend.fail_path("/service/s2");
        let api = client(&backend);

        let rows = block_on(api.list_appointment_rows()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].service_label, "Corte");
        assert_eq!(rows[1].service_label, "Serviço #s2");
        assert_eq!(rows[2].service_label, "Corte");
        assert!(rows.iter().all(|r| r.provider_label == "joao"));
    }

    #[test]
    fn test_lookups_are_deduplicated() {
        let backend = FakeBackend::default();
        backend.add_service("s1", "Corte");
        backend.add_provider("p1", "joao");
        for id in ["a1", "a2", "a3"] {
            backend.add_appointment(id, "s1", "p1", AppointmentStatus::Scheduled);
        }
        let api = client(&backend);

        block_on(api.list_appointment_rows()).unwrap();
        let paths: Vec<String> = backend.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(paths.iter().filter(|u| u.ends_with("/service/s1")).count(), 1);
        assert_eq!(paths.iter().filter(|u| u.ends_with("/serviceProvider/p1")).count(), 1);
    }

    #[test]
    fn test_missing_provider_uses_fallback() {
        let backend = FakeBackend::default();
        backend.add_service("s1", "Corte");
        backend.add_appointment("a1", "s1", "ghost", AppointmentStatus::Scheduled);
        let api = client(&backend);

        let rows = block_on(api.list_appointment_rows()).unwrap();
        assert_eq!(rows[0].provider_label, "Prestador #ghost");
    }

    #[test]
    fn test_create_encodes_query_and_delete_removes() {
        let backend = FakeBackend::default();
        let api = client(&backend);
        let request = AppointmentRequest {
            service_id: "s1".into(),
            service_provider_id: "p1".into(),
            start_date_time: "2025-03-01T14:30".into(),
        };

        block_on(api.create_appointment(&request)).unwrap();
        let sent = backend.last_request();
        assert_eq!(sent.body, None);
        assert!(sent.url.ends_with("startDateTime=2025-03-01T14%3A30"));

        let listed = block_on(api.list_appointments()).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].start_date_time, "2025-03-01T14:30");

        block_on(api.delete_appointment(&listed[0].id)).unwrap();
        assert!(block_on(api.list_appointments()).unwrap().is_empty());
    }
}
