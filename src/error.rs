//! Error Types

use thiserror::Error;

/// Failure of a call routed through the API gateway
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 401 from the backend; the session has already been cleared
    #[error("Sua sessão expirou. Faça login novamente.")]
    Unauthorized,
    #[error("{message}")]
    Http { status: u16, message: String },
    #[error("Falha de rede: {0}")]
    Network(String),
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an HTTP error, falling back to a generic message when the body carried none
    pub fn http(status: u16, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error {}", status));
        ApiError::Http { status, message }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Client-side form check failure; never reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Preencha o campo {0}.")]
    Required(&'static str),
    #[error("As senhas não coincidem.")]
    PasswordMismatch,
    #[error("A senha deve ter pelo menos {0} caracteres.")]
    PasswordTooShort(usize),
    #[error("Informe um e-mail válido.")]
    InvalidEmail,
    #[error("A duração deve ser maior que zero.")]
    InvalidDuration,
    #[error("O preço não pode ser negativo.")]
    InvalidPrice,
    #[error("Data e hora inválidas.")]
    InvalidDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_fallback() {
        assert_eq!(ApiError::http(500, None).to_string(), "HTTP error 500");
        assert_eq!(ApiError::http(400, Some("  ".into())).to_string(), "HTTP error 400");
        assert_eq!(ApiError::http(400, Some("Email já cadastrado".into())).to_string(), "Email já cadastrado");
    }
}
