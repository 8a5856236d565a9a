use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while delivering a [`Message`](crate::Message).
///
/// None of these are retried; retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The message could not be encoded as JSON.
    #[error("Could not serialize webhook payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The POST request never produced a response (DNS, connect, timeout, reset).
    #[error("Could not send webhook request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than `204 No Content`.
    #[error("Bad status code - {}", .status.as_u16())]
    Rejected { status: StatusCode },
}

impl Error {
    /// The HTTP status of a rejected request, if the server responded at all.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Rejected { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_contains_code() {
        let err = Error::Rejected {
            status: StatusCode::BAD_REQUEST,
        };
        assert_eq!(err.to_string(), "Bad status code - 400");
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }

    #[test]
    fn serialization_has_no_status() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("Could not serialize"));
        assert_eq!(err.status(), None);
    }
}
