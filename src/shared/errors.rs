use thiserror::Error;

/// Uniform failure taxonomy for upstream client operations.
///
/// Every client call and the orchestration on top of it resolves to either a
/// payload or one of these variants; nothing panics across a client boundary.
/// `Display` is the outward human-readable message, `status_code` the
/// HTTP-style status reported alongside it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Upstream answered with a non-success status. The status is mirrored
    /// back to the caller verbatim.
    #[error("Error: {message}")]
    UpstreamRejected { message: String, status: u16 },

    /// Network-level failure or timeout before a usable response arrived.
    #[error("Error: Failed to retrieve data, please try again later")]
    Unavailable,

    /// Response body could not be decoded at all.
    #[error("Error: Bad response received from remote server")]
    BadResponse,

    /// Response decoded but lacked the expected fields or types.
    #[error("Error: Failed to parse data")]
    ParseFailed,
}

impl ClientError {
    pub fn status_code(&self) -> u16 {
        match self {
            ClientError::UpstreamRejected { status, .. } => *status,
            _ => 500,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() || err.is_connect() {
            ClientError::Unavailable
        } else if err.is_body() || err.is_decode() {
            ClientError::BadResponse
        } else {
            ClientError::Unavailable
        }
    }
}

/// Result type alias for upstream client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Fatal startup configuration problems. These abort the process; they are
/// never surfaced as per-request errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable '{0}'")]
    MissingVar(&'static str),

    #[error("Invalid value for environment variable '{name}': {value}")]
    InvalidVar { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_keeps_upstream_text() {
        let err = ClientError::UpstreamRejected {
            message: "Not Found".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "Error: Not Found");
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn fixed_messages_map_to_server_error() {
        assert_eq!(
            ClientError::Unavailable.to_string(),
            "Error: Failed to retrieve data, please try again later"
        );
        assert_eq!(
            ClientError::BadResponse.to_string(),
            "Error: Bad response received from remote server"
        );
        assert_eq!(ClientError::ParseFailed.to_string(), "Error: Failed to parse data");

        assert_eq!(ClientError::Unavailable.status_code(), 500);
        assert_eq!(ClientError::BadResponse.status_code(), 500);
        assert_eq!(ClientError::ParseFailed.status_code(), 500);
    }
}
