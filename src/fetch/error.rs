use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("request timed out for {0}")]
    Timeout(String),

    #[error("archive returned server error {status} for {url}")]
    ServerError { url: String, status: StatusCode },

    #[error("archive rejected the request with {status} for {url}")]
    RequestRejected { url: String, status: StatusCode },

    #[error("malformed archive response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    /// Whether the retry loop may attempt the request again. Client errors
    /// and malformed payloads are terminal; connection failures, timeouts
    /// and 5xx responses are not.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            FetchError::Network(..) | FetchError::Timeout(..) | FetchError::ServerError { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let error = FetchError::ServerError {
            url: "http://example.invalid".to_string(),
            status: StatusCode::BAD_GATEWAY,
        };
        assert!(error.is_transient());
        assert!(FetchError::Timeout("http://example.invalid".to_string()).is_transient());
    }

    #[test]
    fn client_errors_are_terminal() {
        let rejected = FetchError::RequestRejected {
            url: "http://example.invalid".to_string(),
            status: StatusCode::BAD_REQUEST,
        };
        assert!(!rejected.is_transient());
        assert!(!FetchError::MalformedResponse("truncated".to_string()).is_transient());
    }
}
