//! API error taxonomy.
//!
//! Every failure of a backend call maps onto one of these variants.
//! All of them are terminal for the triggering operation; nothing is
//! retried automatically. Display strings are the user-facing Spanish
//! messages rendered in the notification banner.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP 401/403. The operation is aborted, no retry.
    #[error("No tienes permisos para realizar esta acción")]
    PermissionDenied { status: u16 },

    /// HTTP 404.
    #[error("Recurso no encontrado")]
    NotFound,

    /// HTTP 400. The backend-supplied `detail` is surfaced verbatim.
    #[error("{detail}")]
    Validation { detail: String },

    /// Any other non-2xx status.
    #[error("Error {status} del servidor")]
    Http { status: u16 },

    /// Fetch-level failure (connection refused, DNS, CORS, ...).
    #[error("Error al conectar con el servidor: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request exceeded the configured deadline.
    #[error("La petición ha superado el tiempo máximo de {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// 2xx response whose body didn't match the expected shape.
    #[error("Respuesta inválida del servidor: {message}")]
    Deserialization { message: String },
}

impl ApiError {
    /// Map a non-2xx status (plus an optional `{detail}` error body)
    /// onto the taxonomy.
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::PermissionDenied { status },
            404 => ApiError::NotFound,
            400 => ApiError::Validation {
                detail: detail.unwrap_or_else(|| "Error en la solicitud".to_string()),
            },
            _ => ApiError::Http { status },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_denied_covers_401_and_403() {
        assert!(matches!(
            ApiError::from_status(401, None),
            ApiError::PermissionDenied { status: 401 }
        ));
        assert!(matches!(
            ApiError::from_status(403, None),
            ApiError::PermissionDenied { status: 403 }
        ));
    }

    #[test]
    fn validation_surfaces_detail_verbatim() {
        let err = ApiError::from_status(400, Some("x".to_string()));
        assert_eq!(err.to_string(), "x");
    }

    #[test]
    fn validation_without_detail_gets_generic_message() {
        let err = ApiError::from_status(400, None);
        assert_eq!(err.to_string(), "Error en la solicitud");
    }

    #[test]
    fn other_statuses_become_generic_http_errors() {
        assert!(matches!(ApiError::from_status(404, None), ApiError::NotFound));
        let err = ApiError::from_status(503, None);
        assert_eq!(err.to_string(), "Error 503 del servidor");
    }
}
