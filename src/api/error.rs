use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid backend URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {}", .0.as_u16())]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl FetchError {
    /// Whether the transport layer should try again.
    ///
    /// Network failures, 5xx and 429 are retried. Other statuses and bodies
    /// that fail to parse are final.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => !e.is_builder() && !e.is_decode(),
            Self::Status(code) => {
                code.is_server_error() || *code == StatusCode::TOO_MANY_REQUESTS
            }
            Self::InvalidUrl { .. } | Self::Malformed(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_retryable() {
        assert!(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(FetchError::Status(StatusCode::BAD_GATEWAY).is_retryable());
        assert!(FetchError::Status(StatusCode::TOO_MANY_REQUESTS).is_retryable());
    }

    #[test]
    fn client_errors_are_final() {
        assert!(!FetchError::Status(StatusCode::NOT_FOUND).is_retryable());
        assert!(!FetchError::Status(StatusCode::UNAUTHORIZED).is_retryable());
    }

    #[test]
    fn malformed_body_is_final() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!FetchError::Malformed(err).is_retryable());
    }

    #[test]
    fn status_message_includes_code() {
        let msg = FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).to_string();
        assert!(msg.contains("500"), "got: {msg}");
    }
}
