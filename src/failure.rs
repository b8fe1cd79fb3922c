use eyre::Report;
use serde_json::Value as Json;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("{0}")]
    Http(HttpFailure),

    #[error("Notion API request failure: {0}")]
    Request(#[source] Report),

    #[error("{context}. {source}")]
    Operation {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Operation {
            context: context.into(),
            source: Box::new(self),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(failure) => Some(failure.status),
            Self::Operation { source, .. } => source.status(),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct HttpFailure {
    pub status: u16,
    pub details: Option<Json>,
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notion API request failed with status code {}", self.status)?;

        if let Some(details) = &self.details {
            let details =
                serde_json::to_string_pretty(details).unwrap_or_else(|_| details.to_string());

            write!(f, ". Details: {details}")?;
        }

        Ok(())
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Transport(err) => Self::Request(Report::new(err)),
            ureq::Error::Status(status, response) => {
                let details = response
                    .into_string()
                    .ok()
                    .and_then(|body| serde_json::from_str(&body).ok());

                Self::Http(HttpFailure { status, details })
            }
        }
    }
}

// Reading or parsing a response body is a transport concern, same as the
// connection itself.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Request(Report::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unsupported_method_error_message() {
        let err = Error::UnsupportedMethod("PUT".to_string());

        assert_eq!(err.to_string(), "unsupported HTTP method: PUT");
    }

    #[test]
    fn test_http_error_message_without_details() {
        let err = Error::Http(HttpFailure {
            status: 500,
            details: None,
        });

        assert_eq!(
            err.to_string(),
            "Notion API request failed with status code 500"
        );
    }

    #[test]
    fn test_http_error_message_embeds_details() {
        let err = Error::Http(HttpFailure {
            status: 404,
            details: Some(json!({"message": "not found"})),
        });

        let message = err.to_string();

        assert!(message.contains("404"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_operation_error_message_keeps_both_context_and_cause() {
        let err = Error::Http(HttpFailure {
            status: 404,
            details: Some(json!({"message": "not found"})),
        })
        .context("Failed to retrieve database test_database_id");

        let message = err.to_string();

        assert!(message.contains("Failed to retrieve database test_database_id"));
        assert!(message.contains("not found"));
        assert_eq!(err.status(), Some(404));
    }
}
