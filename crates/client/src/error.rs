use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Toast text for a failed call whose envelope carried no message.
pub(crate) const GENERIC_ERROR: &str = "Ha ocurrido un error";
/// Toast text for a failure that carries no message of its own.
pub(crate) const UNKNOWN_ERROR: &str = "Error desconocido";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base_url: {0}")]
    BaseUrl(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Non-2xx response. `message` is the envelope message when it was
    /// non-empty; the displayed text falls back to the HTTP status line.
    #[error("{}", api_error_text(.status, .message))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("response envelope carried no data")]
    MissingData,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn api_error_text(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {status}"),
    }
}

impl ClientError {
    /// Text for the user-facing error notification.
    ///
    /// Matches [`std::fmt::Display`] except on a non-2xx response without an
    /// envelope message, where the toast shows a generic line while the
    /// returned error keeps the status-derived one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message: None, .. } => GENERIC_ERROR.to_string(),
            other => {
                let text = other.to_string();
                if text.is_empty() {
                    UNKNOWN_ERROR.to_string()
                } else {
                    text
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_with_message_displays_it() {
        let err = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: Some("Credenciales inválidas".to_string()),
        };
        assert_eq!(err.to_string(), "Credenciales inválidas");
        assert_eq!(err.user_message(), "Credenciales inválidas");
    }

    #[test]
    fn api_error_without_message_splits_fallbacks() {
        let err = ClientError::Api {
            status: StatusCode::NOT_FOUND,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
        assert_eq!(err.user_message(), GENERIC_ERROR);
    }
}
