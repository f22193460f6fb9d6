//! Form Validation
//!
//! Checks that run before any request is built.

use crate::error::ValidationError;
use crate::models::{AppointmentRequest, RegisterRequest, Role, Service, ServiceInput};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Raw registration form values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub role: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = required(&self.username, "nome de usuário")?;
        let email = required(&self.email, "e-mail")?;
        if !looks_like_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }
        let role = Role::parse(self.role.trim()).ok_or(ValidationError::Required("perfil"))?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(RegisterRequest {
            username,
            role: role.as_str().to_string(),
            email,
            password: self.password.clone(),
        })
    }
}

/// Raw service modal values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
    pub duration: String,
    pub price: String,
}

impl From<&Service> for ServiceForm {
    fn from(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            description: service.description.clone(),
            duration: service.default_duration_in_minutes.to_string(),
            price: format!("{:.2}", service.default_price),
        }
    }
}

impl ServiceForm {
    pub fn validate(&self) -> Result<ServiceInput, ValidationError> {
        let name = required(&self.name, "nome")?;
        let duration: u32 = self
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or(ValidationError::InvalidDuration)?;
        // Accept "45,90" as typed with a Brazilian keyboard
        let price: f64 = self
            .price
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .ok()
            .filter(|p: &f64| p.is_finite() && *p >= 0.0)
            .ok_or(ValidationError::InvalidPrice)?;
        Ok(ServiceInput {
            name,
            description: self.description.trim().to_string(),
            default_duration_in_minutes: duration,
            default_price: price,
        })
    }
}

/// Raw booking modal values; `start` comes from a datetime-local input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentForm {
    pub service_id: String,
    pub provider_id: String,
    pub start: String,
}

impl AppointmentForm {
    pub fn validate(&self) -> Result<AppointmentRequest, ValidationError> {
        let service_id = required(&self.service_id, "serviço")?;
        let provider_id = required(&self.provider_id, "prestador")?;
        let start = required(&self.start, "data e hora")?;
        let parsed = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
            .iter()
            .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(&start, fmt).ok())
            .ok_or(ValidationError::InvalidDateTime)?;
        Ok(AppointmentRequest {
            service_id,
            service_provider_id: provider_id,
            start_date_time: parsed.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })
    }
}

pub fn validate_speciality(value: &str) -> Result<String, ValidationError> {
    required(value, "especialidade")
}

pub fn validate_login(email: &str, password: &str) -> Result<(), ValidationError> {
    required(email, "e-mail")?;
    if password.is_empty() {
        return Err(ValidationError::Required("senha"));
    }
    Ok(())
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    use crate::api::testing::{client, FakeBackend};

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: "ana".into(),
            email: "ana@agenda.com".into(),
            role: "Client".into(),
            password: "segredo123".into(),
            confirm_password: "segredo123".into(),
        }
    }

    /// What the register form does on submit
    fn submit_register<T: crate::api::Transport, S: crate::session::KeyValueStore>(
        api: &crate::api::ApiClient<T, S>,
        form: &RegisterForm,
    ) -> Result<(), String> {
        let request = form.validate().map_err(|e| e.to_string())?;
        block_on(api.register(&request)).map_err(|e| e.to_string())
    }

    #[test]
    fn test_password_mismatch_never_hits_network() {
        let backend = FakeBackend::default();
        let api = client(&backend);
        let mut form = register_form();
        form.confirm_password = "outra-senha".into();

        assert_eq!(submit_register(&api, &form), Err("As senhas não coincidem.".to_string()));
        assert!(backend.requests().is_empty());

        assert_eq!(submit_register(&api, &register_form()), Ok(()));
        assert_eq!(backend.requests().len(), 1);
    }

    #[test]
    fn test_register_rules() {
        let mut form = register_form();
        form.password = "curta".into();
        form.confirm_password = "curta".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort(8)));

        let mut form = register_form();
        form.email = "sem-arroba".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let mut form = register_form();
        form.role = "Root".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("perfil")));

        let mut form = register_form();
        form.username = "   ".into();
        assert_eq!(form.validate(), Err(ValidationError::Required("nome de usuário")));

        assert_eq!(register_form().validate().unwrap().role, "Client");
    }

    #[test]
    fn test_service_form() {
        let form = ServiceForm {
            name: " Corte ".into(),
            description: "".into(),
            duration: "30".into(),
            price: "45,90".into(),
        };
        let input = form.validate().unwrap();
        assert_eq!(input.name, "Corte");
        assert_eq!(input.default_price, 45.9);

        let zero = ServiceForm { duration: "0".into(), ..form.clone() };
        assert_eq!(zero.validate(), Err(ValidationError::InvalidDuration));
        let negative = ServiceForm { price: "-1".into(), ..form.clone() };
        assert_eq!(negative.validate(), Err(ValidationError::InvalidPrice));
        let free = ServiceForm { price: "0".into(), ..form };
        assert!(free.validate().is_ok());

        let service = crate::models::Service {
            id: "s1".into(),
            name: "Barba".into(),
            description: "Navalha".into(),
            default_duration_in_minutes: 20,
            default_price: 30.0,
        };
        let prefilled = ServiceForm::from(&service);
        assert_eq!(prefilled.price, "30.00");
        assert_eq!(prefilled.validate().unwrap(), ServiceInput::from(&service));
    }

    #[test]
    fn test_appointment_form_normalizes_start() {
        let form = AppointmentForm {
            service_id: "s1".into(),
            provider_id: "p1".into(),
            start: "2025-03-01T14:30".into(),
        };
        assert_eq!(form.validate().unwrap().start_date_time, "2025-03-01T14:30:00");

        let bad = AppointmentForm { start: "amanhã".into(), ..form.clone() };
        assert_eq!(bad.validate(), Err(ValidationError::InvalidDateTime));
        let missing = AppointmentForm { provider_id: "".into(), ..form };
        assert_eq!(missing.validate(), Err(ValidationError::Required("prestador")));
    }

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("a@b.com", "x").is_ok());
        assert_eq!(validate_login(" ", "x"), Err(ValidationError::Required("e-mail")));
        assert_eq!(validate_login("a@b.com", ""), Err(ValidationError::Required("senha")));
    }
}
