//! In-memory backend for gateway and sub-controller tests

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use serde_json::{json, Value};

use super::{ApiClient, HttpRequest, HttpResponse, Method, Transport};
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{Appointment, AppointmentStatus, Service, ServiceInput, ServiceProvider};
use crate::session::tests::{make_token, MemoryStorage};
use crate::session::SessionStore;

pub const BASE_URL: &str = "http://api.test";
pub const GOOD_PASSWORD: &str = "segredo123";

#[derive(Default)]
struct State {
    requests: Vec<HttpRequest>,
    queued: VecDeque<HttpResponse>,
    failing: HashSet<String>,
    services: Vec<Service>,
    providers: Vec<ServiceProvider>,
    appointments: Vec<Appointment>,
    speciality: Option<String>,
    next_id: u32,
}

/// Cloneable handle; clones share state
#[derive(Clone, Default)]
pub struct FakeBackend(Rc<RefCell<State>>);

pub fn client(backend: &FakeBackend) -> ApiClient<FakeBackend, MemoryStorage> {
    let config = Config {
        api_base_url: BASE_URL.to_string(),
        ..Config::default()
    };
    ApiClient::new(backend.clone(), SessionStore::new(MemoryStorage::default()), config)
}

fn ok(body: Value) -> HttpResponse {
    HttpResponse {
        status: 200,
        content_type: Some("application/json; charset=utf-8".into()),
        body: body.to_string(),
    }
}

fn text(status: u16, body: &str) -> HttpResponse {
    HttpResponse {
        status,
        content_type: Some("text/plain".into()),
        body: body.to_string(),
    }
}

fn not_found() -> HttpResponse {
    text(404, "")
}

fn query_param(query: &str, name: &str) -> Option<String> {
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| percent_decode_str(value).decode_utf8_lossy().to_string())
    })
}

impl FakeBackend {
    /// Next request gets this response regardless of route
    pub fn respond_next(&self, response: HttpResponse) {
        self.0.borrow_mut().queued.push_back(response);
    }

    /// Paths (without base URL) that answer 500
    pub fn fail_path(&self, path: &str) {
        self.0.borrow_mut().failing.insert(path.to_string());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.0.borrow().requests.clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.0.borrow().requests.last().cloned().expect("no request sent")
    }

    pub fn add_service(&self, id: &str, name: &str) {
        self.0.borrow_mut().services.push(Service {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            default_duration_in_minutes: 30,
            default_price: 50.0,
        });
    }

    pub fn add_provider(&self, id: &str, username: &str) {
        self.0.borrow_mut().providers.push(ServiceProvider {
            id: id.into(),
            username: Some(username.into()),
            email: None,
            speciality: None,
        });
    }

    pub fn add_appointment(&self, id: &str, service_id: &str, provider_id: &str, status: AppointmentStatus) {
        self.0.borrow_mut().appointments.push(Appointment {
            id: id.into(),
            service_id: service_id.into(),
            service_provider_id: provider_id.into(),
            start_date_time: "2025-03-01T14:30:00".into(),
            end_date_time: None,
            price: 50.0,
            duration_in_minutes: 30,
            status,
        });
    }

    pub fn speciality(&self) -> Option<String> {
        self.0.borrow().speciality.clone()
    }

    fn next_id(state: &mut State, prefix: &str) -> String {
        state.next_id += 1;
        format!("{}-{}", prefix, state.next_id)
    }

    fn route(state: &mut State, request: &HttpRequest) -> HttpResponse {
        let target = request.url.strip_prefix(BASE_URL).unwrap_or(&request.url);
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        if state.failing.contains(path) {
            return text(500, "indisponível");
        }
        let body: Value = request
            .body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
            .unwrap_or(Value::Null);
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

        match (request.method, segments.as_slice()) {
            (Method::Post, ["Authenticate", "login"]) => {
                if body["password"] != GOOD_PASSWORD {
                    return text(401, "");
                }
                let role = match body["email"].as_str() {
                    Some(email) if email.starts_with("admin") => "Admin",
                    Some(email) if email.starts_with("pro") => "ServiceProvider",
                    _ => "Client",
                };
                let token = make_token(json!({ "exp": 4_000_000_000u64, "jti": "fake-jti" }));
                ok(json!({ "token": token, "roles": [role], "expiration": "2096-10-02T00:00:00Z" }))
            }
            (Method::Post, ["Authenticate", "register"]) => text(200, "Usuário criado"),

            (Method::Get, ["service", "services"]) => ok(json!(state.services)),
            (Method::Get, ["service", id]) => state
                .services
                .iter()
                .find(|s| s.id == *id)
                .map(|s| ok(json!(s)))
                .unwrap_or_else(not_found),
            (Method::Post, ["service", "create-service"]) => {
                if body.is_null() {
                    return text(400, "corpo ausente");
                }
                let input = ServiceInput {
                    name: body["name"].as_str().unwrap_or_default().into(),
                    description: body["description"].as_str().unwrap_or_default().into(),
                    default_duration_in_minutes: body["defaultDurationInMinutes"].as_u64().unwrap_or(0) as u32,
                    default_price: body["defaultPrice"].as_f64().unwrap_or(0.0),
                };
                let service = Service {
                    id: Self::next_id(state, "svc"),
                    name: input.name,
                    description: input.description,
                    default_duration_in_minutes: input.default_duration_in_minutes,
                    default_price: input.default_price,
                };
                state.services.push(service.clone());
                ok(json!(service))
            }
            (Method::Put, ["service", id]) => match state.services.iter_mut().find(|s| s.id == *id) {
                Some(service) => {
                    service.name = body["name"].as_str().unwrap_or_default().into();
                    service.default_price = body["defaultPrice"].as_f64().unwrap_or(service.default_price);
                    ok(json!(service))
                }
                None => not_found(),
            },
            (Method::Delete, ["service", "services"]) => {
                let Some(id) = query_param(query, "serviceId") else {
                    return text(400, "serviceId obrigatório");
                };
                let before = state.services.len();
                state.services.retain(|s| s.id != id);
                if state.services.len() < before { text(200, "") } else { not_found() }
            }

            (Method::Get, ["serviceProvider", "all"]) => ok(json!(state.providers)),
            (Method::Get, ["serviceProvider", "specialities"]) => match &state.speciality {
                Some(s) => ok(json!(s)),
                None => text(200, ""),
            },
            (Method::Post | Method::Put, ["serviceProvider", "specialities"]) => match body {
                Value::String(s) => {
                    state.speciality = Some(s);
                    text(200, "")
                }
                _ => text(400, "especialidade inválida"),
            },
            (Method::Get, ["serviceProvider", id]) => state
                .providers
                .iter()
                .find(|p| p.id == *id)
                .map(|p| ok(json!(p)))
                .unwrap_or_else(not_found),

            (Method::Get, ["appointment", "all"]) => ok(json!(state.appointments)),
            (Method::Post, ["appointment", "create-appointment"]) => {
                let (Some(service_id), Some(provider_id), Some(start)) = (
                    query_param(query, "serviceId"),
                    query_param(query, "serviceProviderId"),
                    query_param(query, "startDateTime"),
                ) else {
                    return text(400, "parâmetros ausentes");
                };
                let id = Self::next_id(state, "apt");
                let appointment = Appointment {
                    id,
                    service_id,
                    service_provider_id: provider_id,
                    start_date_time: start,
                    end_date_time: None,
                    price: 0.0,
                    duration_in_minutes: 0,
                    status: AppointmentStatus::Scheduled,
                };
                state.appointments.push(appointment.clone());
                ok(json!(appointment))
            }
            (Method::Delete, ["appointment", id]) => {
                let before = state.appointments.len();
                state.appointments.retain(|a| a.id != *id);
                if state.appointments.len() < before { text(200, "") } else { not_found() }
            }

            _ => not_found(),
        }
    }
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.0.borrow_mut();
        state.requests.push(request.clone());
        if let Some(response) = state.queued.pop_front() {
            return Ok(response);
        }
        Ok(Self::route(&mut state, &request))
    }
}
