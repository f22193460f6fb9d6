//! Frontend Models
//!
//! Data structures matching backend payloads and the persisted profile.

use serde::{Deserialize, Deserializer, Serialize};

// ========================
// Roles + Session
// ========================

/// Roles the dashboard knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    ServiceProvider,
    Client,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Client, Role::ServiceProvider, Role::Admin];

    /// Backend role name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ServiceProvider => "ServiceProvider",
            Role::Client => "Client",
        }
    }

    pub fn parse(value: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.as_str() == value)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrador",
            Role::ServiceProvider => "Prestador",
            Role::Client => "Cliente",
        }
    }
}

/// Persisted user profile (local storage, JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
    pub username: String,
    /// Kept as the raw backend string so unknown roles survive a reload
    pub role: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub expiration: Option<String>,
    #[serde(default)]
    pub jti: Option<String>,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl SessionUser {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Localized role name, raw string for unknown roles
    pub fn role_display_name(&self) -> String {
        self.role()
            .map(|role| role.display_name().to_string())
            .unwrap_or_else(|| self.role.clone())
    }
}

// ========================
// Authentication payloads
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub expiration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub role: String,
    pub email: String,
    pub password: String,
}

/// Ids arrive as GUID strings or plain numbers depending on the backend build
fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

// ========================
// Services
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub default_duration_in_minutes: u32,
    pub default_price: f64,
}

/// Body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub default_duration_in_minutes: u32,
    pub default_price: f64,
}

impl From<&Service> for ServiceInput {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            default_duration_in_minutes: service.default_duration_in_minutes,
            default_price: service.default_price,
        }
    }
}

// ========================
// Providers
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, alias = "userName")]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub speciality: Option<String>,
}

impl ServiceProvider {
    pub fn display_name(&self) -> String {
        self.username
            .clone()
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| format!("Prestador #{}", self.id))
    }
}

// ========================
// Appointments
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::Scheduled),
            1 => Some(Self::Confirmed),
            2 => Some(Self::Cancelled),
            3 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Scheduled" => Some(Self::Scheduled),
            "Confirmed" => Some(Self::Confirmed),
            "Cancelled" | "Canceled" => Some(Self::Cancelled),
            "Completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Scheduled | Self::Confirmed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Agendado",
            Self::Confirmed => "Confirmado",
            Self::Cancelled => "Cancelado",
            Self::Completed => "Concluído",
        }
    }
}

/// Accepts both the numeric and the string wire encodings
impl<'de> Deserialize<'de> for AppointmentStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(u64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Code(code) => Self::from_code(code)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown appointment status {}", code))),
            Raw::Name(name) => Self::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown appointment status {}", name))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub service_id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub service_provider_id: String,
    pub start_date_time: String,
    #[serde(default)]
    pub end_date_time: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_in_minutes: u32,
    pub status: AppointmentStatus,
}

/// Booking payload, sent as a query string
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRequest {
    pub service_id: String,
    pub service_provider_id: String,
    pub start_date_time: String,
}

/// Appointment joined with its enrichment lookups
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentRow {
    pub appointment: Appointment,
    pub service_label: String,
    pub provider_label: String,
}

/// Display form of a backend ISO date-time ("2025-03-01T14:30:00")
pub fn format_date_time(raw: &str) -> String {
    use chrono::{DateTime, NaiveDateTime};

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y %H:%M").to_string();
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}
