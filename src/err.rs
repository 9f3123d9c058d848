use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Failure of a schedule lookup or a date computation on a [`Student`](crate::Student).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error")]
pub enum Error {
    Transport { message: String },
    Unsuccessful { status: u16, message: String },
    InvalidUrl { message: String },
    DateOutOfRange { message: String },
    Unknown { message: String },
}

impl Error {
    pub fn unknown<S: Into<String>>(msg: S) -> Error {
        Error::Unknown {
            message: msg.into(),
        }
    }

    pub fn transport<S: Into<String>>(msg: S) -> Error {
        Error::Transport {
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Error::Transport { message }
            | Error::Unsuccessful { message, .. }
            | Error::InvalidUrl { message }
            | Error::DateOutOfRange { message }
            | Error::Unknown { message } => message,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Transport { message } => write!(f, "transport error: {}", message),
            Error::Unsuccessful { status, message } => {
                write!(f, "unsuccessful response ({}): {}", status, message)
            }
            Error::InvalidUrl { message } => write!(f, "invalid url: {}", message),
            Error::DateOutOfRange { message } => write!(f, "date out of range: {}", message),
            Error::Unknown { message } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Self::InvalidUrl {
                message: err.to_string(),
            };
        }
        Self::Transport {
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Unknown {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_error_tag() {
        let err = Error::Unsuccessful {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "Unsuccessful");
        assert_eq!(json["status"], 503);
        assert_eq!(json["message"], "Service Unavailable");
    }

    #[test]
    fn anyhow_errors_become_unknown() {
        let err = Error::from(anyhow::anyhow!("boom"));
        assert_eq!(err, Error::unknown("boom"));
        assert_eq!(err.message(), "boom");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn reqwest_errors_map_by_kind() {
        let client = reqwest::blocking::Client::new();
        let builder = client.get("not a url").send().unwrap_err();
        assert!(matches!(Error::from(builder), Error::InvalidUrl { .. }));
        let refused = client.get("http://127.0.0.1:1").send().unwrap_err();
        assert!(matches!(Error::from(refused), Error::Transport { .. }));
    }

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            Error::transport("connection refused").to_string(),
            "transport error: connection refused"
        );
    }
}
